//! Fuzzes the lateral lag compensator with arbitrary planner horizons.
//!
//! Any input, including non-finite values and wrong-length arrays, must
//! produce finite curvature with a rate inside the lateral jerk bound.
//!
//! Run with:
//!   cargo +nightly fuzz run fuzz_lag_compensator
#![no_main]
use drivecore_lateral::{CONTROL_N, CurvatureProfile, LagCompensator, MAX_LATERAL_JERK, MIN_SPEED};
use libfuzzer_sys::fuzz_target;

fn floats(data: &[u8]) -> Vec<f64> {
    data.chunks_exact(8)
        .map(|c| f64::from_le_bytes(c.try_into().unwrap_or([0u8; 8])))
        .collect()
}

fuzz_target!(|data: &[u8]| {
    if data.len() < 10 {
        return;
    }
    let (head, rest) = data.split_at(10);
    let v_ego = f64::from_le_bytes(head[0..8].try_into().unwrap_or([0u8; 8]));
    let delay = f64::from(head[8]) / 100.0;

    let Ok(compensator) = LagCompensator::new(delay) else {
        return;
    };

    // Even selectors give full-length horizons, odd ones truncated horizons
    let values = floats(rest);
    let n = if head[9] & 1 == 0 {
        CONTROL_N
    } else {
        usize::from(head[9] >> 1) % CONTROL_N
    };
    let take = |i: usize| {
        values
            .get(i * n..(i + 1) * n)
            .map_or_else(|| vec![0.0; n], <[f64]>::to_vec)
    };
    let (psis, curvatures, rates) = (take(0), take(1), take(2));

    let profile = CurvatureProfile::from_slices(&psis, &curvatures, &rates);
    let out = compensator.compensate(v_ego, &profile);

    assert!(out.curvature.is_finite());
    assert!(out.curvature_rate.is_finite());
    if v_ego.is_finite() {
        let v = v_ego.max(MIN_SPEED);
        let bound = MAX_LATERAL_JERK / (v * v);
        assert!(out.curvature_rate.abs() <= bound + 1e-9);
    }
});

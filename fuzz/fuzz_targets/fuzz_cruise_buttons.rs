//! Fuzzes the control loop with arbitrary button, pedal and speed sequences.
//!
//! The first byte picks a preset and units. Each following byte is one tick:
//! the low six bits are the button states, bit 6 marks a missing sample and
//! bit 7 presses the gas. Set speeds must stay within the cruise bounds.
//!
//! Run with:
//!   cargo +nightly fuzz run fuzz_cruise_buttons
#![no_main]
use drivecore_buttons::{ButtonKind, ButtonSample};
use drivecore_config::{VehicleParams, preset_names};
use drivecore_cruise::{SpeedUnits, V_CRUISE_DELTA, V_CRUISE_MAX};
use drivecore_engine::{ControlLoop, PlannerOutput, VehicleSnapshot};
use libfuzzer_sys::fuzz_target;

fn sample_from(byte: u8) -> ButtonSample {
    if byte & 0x40 != 0 {
        return ButtonSample::missing();
    }
    let mut sample = ButtonSample::released();
    for (bit, kind) in ButtonKind::ALL.into_iter().enumerate() {
        *sample.get_mut(kind) = Some(byte & (1 << bit) != 0);
    }
    sample
}

fuzz_target!(|data: &[u8]| {
    let Some((&selector, ticks)) = data.split_first() else {
        return;
    };
    let Ok(names) = preset_names() else {
        return;
    };
    let Some(name) = names.get(usize::from(selector) % names.len().max(1)) else {
        return;
    };
    let Ok(params) = VehicleParams::preset(name) else {
        return;
    };
    let Ok(mut control) = ControlLoop::new(params) else {
        return;
    };
    let units = if selector & 0x80 != 0 {
        SpeedUnits::Imperial
    } else {
        SpeedUnits::Metric
    };

    let plan = PlannerOutput::default();
    for (i, &byte) in ticks.iter().enumerate() {
        let v_ego = f64::from(ticks.get(i.wrapping_add(1)).copied().unwrap_or(byte)) * 0.2;
        let snapshot = VehicleSnapshot {
            buttons: sample_from(byte),
            cruise_available: byte != 0xff,
            cruise_enabled: byte & 0x20 == 0,
            gas_pressed: byte & 0x80 != 0,
            standstill: v_ego < 0.1,
            v_ego,
            v_ego_raw: v_ego,
            ..VehicleSnapshot::default()
        };
        let out = control.tick(&snapshot, &plan, units);
        if out.has_set_speed() && control.params().cruise.strategy.is_host_owned() {
            assert!(
                (V_CRUISE_DELTA..=V_CRUISE_MAX).contains(&out.set_speed_kph),
                "set speed {} out of bounds",
                out.set_speed_kph
            );
        }
        assert!(out.brake().is_some() != out.torque().is_some());
    }
});

//! Planner horizon sampling.

/// Number of horizon samples consumed by the lateral controller.
pub const CONTROL_N: usize = 17;

/// Lookahead time of each horizon sample, seconds: `10 · (i / 32)²`.
pub const T_IDXS: [f64; CONTROL_N] = [
    0.0,
    0.009_765_625,
    0.039_062_5,
    0.087_890_625,
    0.156_25,
    0.244_140_625,
    0.351_562_5,
    0.478_515_625,
    0.625,
    0.791_015_625,
    0.976_562_5,
    1.181_640_625,
    1.406_25,
    1.650_390_625,
    1.914_062_5,
    2.197_265_625,
    2.5,
];

/// Piecewise-linear interpolation of `fp` sampled at ascending `xp`.
///
/// Outside the sampled range the nearest end value is returned. Empty or
/// mismatched inputs yield 0.
pub fn interp(x: f64, xp: &[f64], fp: &[f64]) -> f64 {
    if xp.len() != fp.len() {
        return 0.0;
    }
    let (Some(&x_first), Some(&f_first)) = (xp.first(), fp.first()) else {
        return 0.0;
    };
    if x <= x_first {
        return f_first;
    }

    for (xs, fs) in xp.windows(2).zip(fp.windows(2)) {
        if let ([x0, x1], [f0, f1]) = (xs, fs)
            && x < *x1
        {
            let span = x1 - x0;
            if span <= 0.0 {
                return *f1;
            }
            return f0 + (f1 - f0) * (x - x0) / span;
        }
    }

    fp.last().copied().unwrap_or(0.0)
}

/// Planned heading error, curvature and curvature rate over the horizon.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurvatureProfile {
    /// Predicted heading error at each [`T_IDXS`] sample, rad
    pub psis: [f64; CONTROL_N],
    /// Planned curvature, 1/m
    pub curvatures: [f64; CONTROL_N],
    /// Planned curvature rate, 1/(m·s)
    pub curvature_rates: [f64; CONTROL_N],
    fallback: bool,
}

impl CurvatureProfile {
    /// All-zero profile, the straight-ahead default.
    pub const fn zeros() -> Self {
        Self {
            psis: [0.0; CONTROL_N],
            curvatures: [0.0; CONTROL_N],
            curvature_rates: [0.0; CONTROL_N],
            fallback: false,
        }
    }

    /// Build a profile from planner slices.
    ///
    /// If any slice is not exactly [`CONTROL_N`] long or holds a non-finite
    /// value, the whole profile is replaced by zeros and
    /// [`is_fallback`](Self::is_fallback) reports it.
    pub fn from_slices(psis: &[f64], curvatures: &[f64], curvature_rates: &[f64]) -> Self {
        let arrays = (
            <[f64; CONTROL_N]>::try_from(psis),
            <[f64; CONTROL_N]>::try_from(curvatures),
            <[f64; CONTROL_N]>::try_from(curvature_rates),
        );
        match arrays {
            (Ok(psis), Ok(curvatures), Ok(curvature_rates))
                if psis
                    .iter()
                    .chain(&curvatures)
                    .chain(&curvature_rates)
                    .all(|v| v.is_finite()) =>
            {
                Self {
                    psis,
                    curvatures,
                    curvature_rates,
                    fallback: false,
                }
            }
            _ => {
                tracing::debug!(
                    psis = psis.len(),
                    curvatures = curvatures.len(),
                    curvature_rates = curvature_rates.len(),
                    "malformed curvature profile replaced by zeros"
                );
                Self {
                    fallback: true,
                    ..Self::zeros()
                }
            }
        }
    }

    /// True when the planner input was malformed and zeros were substituted.
    pub fn is_fallback(&self) -> bool {
        self.fallback
    }

    /// Heading error interpolated at `t` seconds.
    pub fn psi_at(&self, t: f64) -> f64 {
        interp(t, &T_IDXS, &self.psis)
    }

    /// Curvature at the current instant.
    pub fn current_curvature(&self) -> f64 {
        self.curvatures.first().copied().unwrap_or(0.0)
    }

    /// Curvature rate at the current instant.
    pub fn current_curvature_rate(&self) -> f64 {
        self.curvature_rates.first().copied().unwrap_or(0.0)
    }
}

impl Default for CurvatureProfile {
    fn default() -> Self {
        Self::zeros()
    }
}

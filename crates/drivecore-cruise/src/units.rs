//! Driver-selected display units.

use serde::{Deserialize, Serialize};

use crate::constants::{
    MPH_TO_KPH, V_CRUISE_DELTA, V_CRUISE_DELTA_IMPERIAL, V_CRUISE_MIN, V_CRUISE_MIN_IMPERIAL,
};

/// Units the driver sees on the cluster. Set speeds are always stored in
/// km/h; the units only pick step sizes and the lower bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpeedUnits {
    /// km/h
    #[default]
    Metric,
    /// mph
    Imperial,
}

impl SpeedUnits {
    /// Select units from an `is_metric` flag.
    pub fn from_is_metric(is_metric: bool) -> Self {
        if is_metric {
            SpeedUnits::Metric
        } else {
            SpeedUnits::Imperial
        }
    }

    /// Lowest set speed, km/h.
    pub fn min_set_speed_kph(self) -> f64 {
        match self {
            SpeedUnits::Metric => V_CRUISE_MIN,
            SpeedUnits::Imperial => V_CRUISE_MIN_IMPERIAL,
        }
    }

    /// Single step of the generic strategy, km/h.
    ///
    /// The imperial step is 1.6 rather than the exact conversion so repeated
    /// steps land on tenths.
    pub fn generic_step_kph(self) -> f64 {
        match self {
            SpeedUnits::Metric => 1.0,
            SpeedUnits::Imperial => 1.6,
        }
    }

    /// Single step of the inverted-family strategy, km/h.
    pub fn unit_step_kph(self) -> f64 {
        match self {
            SpeedUnits::Metric => 1.0,
            SpeedUnits::Imperial => MPH_TO_KPH,
        }
    }

    /// Five-unit step of the inverted-family strategy, km/h.
    pub fn long_step_kph(self) -> f64 {
        match self {
            SpeedUnits::Metric => V_CRUISE_DELTA,
            SpeedUnits::Imperial => V_CRUISE_DELTA_IMPERIAL,
        }
    }
}

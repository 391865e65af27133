//! Arbitrator state.

use serde::{Deserialize, Serialize};

use crate::constants::{V_CRUISE_INITIAL, V_CRUISE_REAL_LIMIT};

/// Which source currently drives the set speed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArbitratorPhase {
    /// Cruise unavailable or no set speed chosen yet
    #[default]
    Uninitialized,
    /// Mirroring the vehicle's cruise module
    TrackingPcm,
    /// Set speed owned by this system
    TrackingHost,
}

/// Persistent set-speed state, mutated once per tick by the arbitrator.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CruiseArbitratorState {
    /// Requested cruise speed, km/h
    pub set_speed_kph: f64,
    /// Speed shown on the cluster, km/h
    pub cluster_speed_kph: f64,
    /// Set speed at the start of the current tick, km/h
    pub last_set_speed_kph: f64,
}

impl CruiseArbitratorState {
    /// Fresh state: both speeds at the uninitialized sentinel.
    pub const fn new() -> Self {
        Self {
            set_speed_kph: V_CRUISE_INITIAL,
            cluster_speed_kph: V_CRUISE_INITIAL,
            last_set_speed_kph: 0.0,
        }
    }

    /// False while the set speed holds the sentinel.
    pub fn is_initialized(&self) -> bool {
        (self.set_speed_kph - V_CRUISE_INITIAL).abs() > f64::EPSILON
    }

    /// True when the previous tick's set speed was a real value that may be
    /// restored on resume.
    pub fn has_real_last(&self) -> bool {
        self.last_set_speed_kph < V_CRUISE_REAL_LIMIT
    }

    pub(crate) fn uninitialize(&mut self) {
        self.set_speed_kph = V_CRUISE_INITIAL;
        self.cluster_speed_kph = V_CRUISE_INITIAL;
    }
}

impl Default for CruiseArbitratorState {
    fn default() -> Self {
        Self::new()
    }
}

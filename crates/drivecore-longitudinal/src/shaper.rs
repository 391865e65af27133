//! Two-mode longitudinal shaper.

use serde::{Deserialize, Serialize};

use crate::brake::{BRAKE_CHANGE, LongitudinalShaperState, brake_ramp};
use crate::torque::torque_request;

/// Default lower acceleration bound, m/s².
pub const ACCEL_MIN: f64 = -3.5;
/// Default upper acceleration bound, m/s².
pub const ACCEL_MAX: f64 = 2.0;

/// Static longitudinal limits for one vehicle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LongitudinalParams {
    /// Lowest acceleration request, m/s²
    pub accel_min: f64,
    /// Highest acceleration request, m/s²
    pub accel_max: f64,
    /// Largest brake ramp step per tick, m/s²
    #[serde(default = "default_brake_change")]
    pub brake_change: f64,
}

fn default_brake_change() -> f64 {
    BRAKE_CHANGE
}

impl Default for LongitudinalParams {
    fn default() -> Self {
        Self {
            accel_min: ACCEL_MIN,
            accel_max: ACCEL_MAX,
            brake_change: BRAKE_CHANGE,
        }
    }
}

/// Per-tick longitudinal inputs.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LongitudinalInputs {
    /// Control engaged
    pub enabled: bool,
    /// Planner acceleration request, m/s², before clipping
    pub desired_accel: f64,
    /// Unfiltered vehicle speed, m/s
    pub v_ego_raw: f64,
    /// Measured engine torque
    pub engine_torque: f64,
    /// Measured engine speed, rpm
    pub engine_rpm: f64,
}

/// Exactly one actuator command per tick.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LongitudinalCommand {
    /// Ramp-limited brake target, m/s² (non-positive)
    Brake(f64),
    /// Engine torque request
    Torque(f64),
}

impl LongitudinalCommand {
    /// Brake target when braking.
    pub fn brake_target(&self) -> Option<f64> {
        match self {
            LongitudinalCommand::Brake(b) => Some(*b),
            LongitudinalCommand::Torque(_) => None,
        }
    }

    /// Torque target when propelling.
    pub fn torque_target(&self) -> Option<f64> {
        match self {
            LongitudinalCommand::Torque(t) => Some(*t),
            LongitudinalCommand::Brake(_) => None,
        }
    }

    /// True for the braking mode.
    pub fn is_braking(&self) -> bool {
        matches!(self, LongitudinalCommand::Brake(_))
    }
}

/// Owns the brake ramp and switches between brake and torque by the sign of
/// the clipped acceleration request.
#[derive(Debug, Clone)]
pub struct LongitudinalShaper {
    params: LongitudinalParams,
    mass_kg: f64,
    state: LongitudinalShaperState,
}

impl LongitudinalShaper {
    /// Create a shaper for a vehicle of `mass_kg`.
    pub fn new(params: LongitudinalParams, mass_kg: f64) -> Self {
        Self {
            params,
            mass_kg,
            state: LongitudinalShaperState::new(),
        }
    }

    /// Ramp state.
    pub fn state(&self) -> &LongitudinalShaperState {
        &self.state
    }

    /// Clip a request to the configured bounds. Non-finite requests coast.
    pub fn clip_accel(&self, accel: f64) -> f64 {
        if accel.is_finite() {
            accel.clamp(self.params.accel_min, self.params.accel_max)
        } else {
            0.0
        }
    }

    /// Advance one tick.
    ///
    /// Disengaging drops the ramp before the command is computed. A request
    /// at or below zero yields a ramp-limited [`LongitudinalCommand::Brake`];
    /// a positive request drops the ramp and yields
    /// [`LongitudinalCommand::Torque`].
    ///
    /// # RT Safety
    ///
    /// - No heap allocations
    /// - O(1) time complexity
    pub fn update(&mut self, inputs: &LongitudinalInputs) -> LongitudinalCommand {
        if !inputs.enabled && self.state.last_brake.is_some() {
            tracing::debug!("control disengaged, brake ramp reset");
            self.state.clear();
        }

        let accel = self.clip_accel(inputs.desired_accel);
        if accel <= 0.0 {
            LongitudinalCommand::Brake(brake_ramp(accel, &mut self.state, self.params.brake_change))
        } else {
            self.state.clear();
            LongitudinalCommand::Torque(torque_request(
                accel,
                self.mass_kg,
                inputs.v_ego_raw,
                inputs.engine_torque,
                inputs.engine_rpm,
            ))
        }
    }

    /// Return to the fresh-session state.
    pub fn reset(&mut self) {
        self.state.clear();
    }
}

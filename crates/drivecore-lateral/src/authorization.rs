//! Steering authorization gate.
//!
//! The steering actuator is commanded only while a control bit is held. The
//! bit follows vehicle speed with a family-specific release band, cannot be
//! re-raised until a lockout has elapsed after it drops, and is forced low by
//! any steering fault.

use drivecore_filters::{SteerTorqueLimits, SteerTorqueState, steer_torque_filter};
use serde::{Deserialize, Serialize};

/// Default re-enable lockout, control ticks.
pub const DEFAULT_RELOCK_TICKS: u32 = 200;

fn default_relock_ticks() -> u32 {
    DEFAULT_RELOCK_TICKS
}

/// Static authorization parameters for one vehicle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AuthorizationParams {
    /// Speed above which the bit is raised, m/s
    pub min_steer_speed: f64,
    /// Band below `min_steer_speed` at which the bit drops, m/s.
    /// `None` keeps the bit latched once raised.
    #[serde(default)]
    pub release_hysteresis: Option<f64>,
    /// Ticks after a falling edge during which the bit stays low
    #[serde(default = "default_relock_ticks")]
    pub relock_ticks: u32,
}

impl Default for AuthorizationParams {
    fn default() -> Self {
        Self {
            min_steer_speed: 0.0,
            release_hysteresis: None,
            relock_ticks: DEFAULT_RELOCK_TICKS,
        }
    }
}

/// Per-tick authorization inputs.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AuthorizationInputs {
    /// Vehicle speed, m/s
    pub v_ego: f64,
    /// Lateral control requested and allowed by engagement
    pub lateral_active: bool,
    /// Temporary steering fault reported by the vehicle
    pub steer_fault_temporary: bool,
    /// Permanent steering fault reported by the vehicle
    pub steer_fault_permanent: bool,
}

/// Persistent gate state.
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthorizationState {
    /// Control bit of the previous tick
    pub control_bit_prev: bool,
    /// Tick of the last falling edge
    pub last_falling_edge: Option<u64>,
}

/// Result of one gate update.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthorizationDecision {
    /// Control bit sent to the actuator this tick
    pub control_bit: bool,
    /// A non-zero steering torque may be commanded
    pub steer_allowed: bool,
    /// Set on the tick the bit drops: first tick it may rise again
    pub locked_until: Option<u64>,
}

/// Steering authorization gate.
#[derive(Debug, Clone)]
pub struct LateralAuthorization {
    params: AuthorizationParams,
    state: AuthorizationState,
}

impl LateralAuthorization {
    /// Create a gate with the bit low and no lockout pending.
    pub fn new(params: AuthorizationParams) -> Self {
        Self {
            params,
            state: AuthorizationState::default(),
        }
    }

    /// Gate parameters.
    pub fn params(&self) -> &AuthorizationParams {
        &self.params
    }

    /// Gate state.
    pub fn state(&self) -> &AuthorizationState {
        &self.state
    }

    /// True while a falling edge lockout is in effect at `tick`.
    pub fn is_locked_out(&self, tick: u64) -> bool {
        self.state
            .last_falling_edge
            .is_some_and(|edge| tick.saturating_sub(edge) <= u64::from(self.params.relock_ticks))
    }

    /// Advance the gate for control tick `tick`.
    ///
    /// # RT Safety
    ///
    /// - No heap allocations
    /// - O(1) time complexity
    pub fn update(&mut self, inputs: &AuthorizationInputs, tick: u64) -> AuthorizationDecision {
        let prev = self.state.control_bit_prev;
        let min = self.params.min_steer_speed;

        let mut requested = prev;
        if inputs.v_ego > min {
            requested = true;
        } else if let Some(band) = self.params.release_hysteresis
            && inputs.v_ego < min - band
        {
            requested = false;
        }

        let faulted = inputs.steer_fault_temporary || inputs.steer_fault_permanent;
        let control_bit = requested && !faulted && !self.is_locked_out(tick);

        let mut locked_until = None;
        if prev && !control_bit {
            self.state.last_falling_edge = Some(tick);
            let until = tick
                .saturating_add(u64::from(self.params.relock_ticks))
                .saturating_add(1);
            locked_until = Some(until);
            tracing::debug!(tick, until, faulted, "steering control bit dropped");
        }

        let steer_allowed = inputs.lateral_active && control_bit && prev;
        self.state.control_bit_prev = control_bit;

        AuthorizationDecision {
            control_bit,
            steer_allowed,
            locked_until,
        }
    }

    /// Return to the fresh-session state.
    pub fn reset(&mut self) {
        self.state = AuthorizationState::default();
    }
}

/// Bound a steering request and apply the gate.
///
/// The request always passes the torque limiter. When the decision forbids
/// steering the output is 0 and the limiter restarts from 0.
pub fn gated_steer_torque(
    decision: &AuthorizationDecision,
    request: i32,
    motor_torque: i32,
    limits: &SteerTorqueLimits,
    state: &mut SteerTorqueState,
) -> i32 {
    let bounded = steer_torque_filter(request, motor_torque, limits, state);
    if decision.steer_allowed {
        bounded
    } else {
        state.last_applied = 0;
        0
    }
}

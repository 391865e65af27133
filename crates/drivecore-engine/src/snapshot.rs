//! Per-tick inputs to the control loop.

use drivecore_buttons::ButtonSample;
use drivecore_cruise::{CruiseInputs, EngagementInputs, SpeedUnits};
use drivecore_lateral::AuthorizationInputs;
use drivecore_longitudinal::LongitudinalInputs;

/// Vehicle state read from the bus for one tick. Speeds in m/s.
///
/// The default snapshot has every button reading missing, so the debouncer
/// holds the last known state.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct VehicleSnapshot {
    /// Cruise button readings
    pub buttons: ButtonSample,
    /// Cruise main switch on and not faulted
    pub cruise_available: bool,
    /// Cruise reports active
    pub cruise_enabled: bool,
    /// Cruise reports standstill
    pub standstill: bool,
    /// Brake pedal pressed
    pub brake_pressed: bool,
    /// Accelerator pedal pressed
    pub gas_pressed: bool,
    /// LKAS toggle button pressed
    pub lkas_button: bool,
    /// Left blinker on
    pub left_blinker: bool,
    /// Right blinker on
    pub right_blinker: bool,
    /// Filtered vehicle speed
    pub v_ego: f64,
    /// Unfiltered wheel speed
    pub v_ego_raw: f64,
    /// Set speed reported by the vehicle's cruise module
    pub pcm_set_speed: f64,
    /// Cluster speed reported by the vehicle's cruise module
    pub pcm_cluster_speed: f64,
    /// Measured engine torque
    pub engine_torque: f64,
    /// Measured engine speed, rpm
    pub engine_rpm: f64,
    /// Torque reported by the EPS motor
    pub steer_motor_torque: i32,
    /// EPS reports a temporary fault
    pub steer_fault_temporary: bool,
    /// EPS reports a permanent fault
    pub steer_fault_permanent: bool,
}

impl VehicleSnapshot {
    pub(crate) fn engagement_inputs(&self) -> EngagementInputs {
        EngagementInputs {
            cruise_available: self.cruise_available,
            cruise_enabled: self.cruise_enabled,
            brake_pressed: self.brake_pressed,
            gas_pressed: self.gas_pressed,
            lkas_button: self.lkas_button,
            v_ego: self.v_ego,
            left_blinker: self.left_blinker,
            right_blinker: self.right_blinker,
        }
    }

    pub(crate) fn cruise_inputs(&self, enabled: bool, units: SpeedUnits) -> CruiseInputs {
        CruiseInputs {
            cruise_available: self.cruise_available,
            enabled,
            standstill: self.standstill,
            gas_pressed: self.gas_pressed,
            v_ego: self.v_ego,
            pcm_set_speed: self.pcm_set_speed,
            pcm_cluster_speed: self.pcm_cluster_speed,
            units,
        }
    }

    pub(crate) fn longitudinal_inputs(&self, enabled: bool, desired_accel: f64) -> LongitudinalInputs {
        LongitudinalInputs {
            enabled,
            desired_accel,
            v_ego_raw: self.v_ego_raw,
            engine_torque: self.engine_torque,
            engine_rpm: self.engine_rpm,
        }
    }

    pub(crate) fn authorization_inputs(&self, lateral_active: bool) -> AuthorizationInputs {
        AuthorizationInputs {
            v_ego: self.v_ego,
            lateral_active,
            steer_fault_temporary: self.steer_fault_temporary,
            steer_fault_permanent: self.steer_fault_permanent,
        }
    }
}

/// Planner output for one tick.
///
/// The three horizon arrays are sampled at the fixed lookahead times; a
/// profile of the wrong length is replaced by zeros.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PlannerOutput<'a> {
    /// Requested acceleration, m/s²
    pub desired_accel: f64,
    /// Predicted heading error over the horizon
    pub psis: &'a [f64],
    /// Predicted curvature over the horizon
    pub curvatures: &'a [f64],
    /// Predicted curvature rate over the horizon
    pub curvature_rates: &'a [f64],
    /// Lateral controller output in `[-1, 1]`
    pub steer_request: f64,
}

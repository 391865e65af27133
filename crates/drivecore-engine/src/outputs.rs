//! Per-tick outputs of the control loop.

use drivecore_buttons::{ButtonEvents, ClassifiedPresses};
use drivecore_cruise::{ArbitratorPhase, EngagementStatus, V_CRUISE_INITIAL};
use drivecore_lateral::LagAdjustedCurvature;
use drivecore_longitudinal::LongitudinalCommand;

/// Everything the encoder and the UI need from one tick.
#[derive(Debug, Clone, PartialEq)]
pub struct ControlOutputs {
    /// Tick these outputs belong to
    pub tick: u64,
    /// Requested cruise speed, km/h, or the uninitialized sentinel
    pub set_speed_kph: f64,
    /// Speed shown on the cluster, km/h
    pub cluster_speed_kph: f64,
    /// Source of the set speed
    pub phase: ArbitratorPhase,
    /// Button edges seen this tick
    pub button_events: ButtonEvents,
    /// Short and long presses classified this tick
    pub presses: ClassifiedPresses,
    /// Exactly one of brake or torque
    pub longitudinal: LongitudinalCommand,
    /// Lag-adjusted curvature and curvature rate
    pub curvature: LagAdjustedCurvature,
    /// Bounded steering torque sent to the EPS
    pub steer_torque: i32,
    /// LKAS control bit sent to the EPS
    pub lkas_control_bit: bool,
    /// Engagement decision
    pub engagement: EngagementStatus,
}

impl ControlOutputs {
    /// False while the set speed holds the uninitialized sentinel.
    pub fn has_set_speed(&self) -> bool {
        (self.set_speed_kph - V_CRUISE_INITIAL).abs() > f64::EPSILON
    }

    /// Brake target, when braking.
    pub fn brake(&self) -> Option<f64> {
        self.longitudinal.brake_target()
    }

    /// Torque target, when propelling.
    pub fn torque(&self) -> Option<f64> {
        self.longitudinal.torque_target()
    }
}

//! The per-tick control loop.

use std::time::Instant;

use drivecore_buttons::{ButtonClassifier, ButtonTracker, PressContext, RepeatMode};
use drivecore_config::VehicleParams;
use drivecore_cruise::{
    CruiseArbitrator, CruiseStrategy, EngagementArbiter, EngagementStatus, SpeedUnits,
};
use drivecore_errors::{DriveCoreError, Result};
use drivecore_filters::{SteerTorqueLimits, SteerTorqueState};
use drivecore_lateral::{CurvatureProfile, LagCompensator, LateralAuthorization, gated_steer_torque};
use drivecore_longitudinal::LongitudinalShaper;
use drivecore_tracing::{
    ControlTraceEvent, SessionTraceEvent, TraceManager, TraceMetrics, trace_if_enabled,
    trace_tick_end, trace_tick_start,
};

use crate::outputs::ControlOutputs;
use crate::snapshot::{PlannerOutput, VehicleSnapshot};

/// One vehicle session: every persistent state object, allocated once.
///
/// Call [`ControlLoop::tick`] once per control cycle. Components run in a
/// fixed order: engagement, button debounce, cruise arbitration, the
/// longitudinal shaper, the lag compensator, then the lateral gate and the
/// steer torque limiter.
pub struct ControlLoop {
    params: VehicleParams,
    engagement: EngagementArbiter,
    buttons: ButtonTracker,
    classifier: ButtonClassifier,
    cruise: CruiseArbitrator,
    longitudinal: LongitudinalShaper,
    lag: LagCompensator,
    authorization: LateralAuthorization,
    steer_limits: SteerTorqueLimits,
    steer_state: SteerTorqueState,
    tracer: TraceManager,
    tick: u64,
    prev_engagement: EngagementStatus,
    prev_braking: Option<bool>,
}

impl ControlLoop {
    /// Build a session from validated vehicle constants.
    ///
    /// # Errors
    ///
    /// Returns [`DriveCoreError::Config`] when the constants break the
    /// configuration contract.
    pub fn new(params: VehicleParams) -> Result<Self> {
        Self::with_tracer(params, TraceManager::new())
    }

    /// Build a session that reports through the given trace manager.
    ///
    /// # Errors
    ///
    /// Returns [`DriveCoreError::Config`] when the constants break the
    /// configuration contract. The rejection is reported to the tracer.
    pub fn with_tracer(params: VehicleParams, tracer: TraceManager) -> Result<Self> {
        if let Err(e) = params.validate() {
            tracing::error!(vehicle = %params.name, error = %e, "vehicle configuration rejected");
            tracer.emit_session_event(SessionTraceEvent::ConfigRejected {
                reason: e.to_string(),
            });
            return Err(DriveCoreError::Config(e));
        }

        let strategy = params.cruise.strategy;
        let repeat = match strategy {
            CruiseStrategy::InvertedFamily => RepeatMode::Once,
            CruiseStrategy::Generic | CruiseStrategy::PcmNative => RepeatMode::AutoRepeat,
        };

        let control = Self {
            engagement: EngagementArbiter::new(params.engagement, !strategy.is_host_owned()),
            buttons: ButtonTracker::new(),
            classifier: ButtonClassifier::new(params.cruise.long_press_frames, repeat),
            cruise: CruiseArbitrator::new(params.cruise),
            longitudinal: LongitudinalShaper::new(params.longitudinal, params.mass_kg),
            lag: LagCompensator::new(params.steer_actuator_delay_s)?,
            authorization: LateralAuthorization::new(params.authorization),
            steer_limits: params.steer_limits,
            steer_state: SteerTorqueState::new(),
            tracer,
            tick: 0,
            prev_engagement: EngagementStatus::default(),
            prev_braking: None,
            params,
        };

        tracing::info!(
            vehicle = %control.params.name,
            strategy = ?strategy,
            "control session started"
        );
        control.tracer.emit_session_event(SessionTraceEvent::SessionStarted {
            vehicle: control.params.name.clone(),
        });
        Ok(control)
    }

    /// Vehicle constants of this session.
    pub fn params(&self) -> &VehicleParams {
        &self.params
    }

    /// Number of ticks run since the session started or was reset.
    pub fn tick_count(&self) -> u64 {
        self.tick
    }

    /// Debounced button state.
    pub fn buttons(&self) -> &ButtonTracker {
        &self.buttons
    }

    /// Cruise arbitrator.
    pub fn cruise(&self) -> &CruiseArbitrator {
        &self.cruise
    }

    /// Counters of the trace provider.
    pub fn trace_metrics(&self) -> TraceMetrics {
        self.tracer.metrics()
    }

    /// Mutable access to the trace manager, e.g. to disable tracing.
    pub fn tracer_mut(&mut self) -> &mut TraceManager {
        &mut self.tracer
    }

    /// Run one control cycle.
    ///
    /// # RT Safety
    ///
    /// - No heap allocations
    /// - Bounded execution time
    /// - Never fails; malformed planner profiles fall back to zeros
    pub fn tick(
        &mut self,
        snapshot: &VehicleSnapshot,
        planner: &PlannerOutput<'_>,
        units: SpeedUnits,
    ) -> ControlOutputs {
        let tick = self.tick;
        let started = Instant::now();
        trace_tick_start!(self.tracer, tick);

        let engagement = self.engagement.update(&snapshot.engagement_inputs());
        let enabled = engagement.longitudinal_enabled;
        let enabled_edge = enabled && !self.prev_engagement.longitudinal_enabled;

        let button_events = self.buttons.update(
            &snapshot.buttons,
            PressContext {
                standstill: snapshot.standstill,
                enabled,
            },
        );
        let presses = self.classifier.classify(&button_events, self.buttons.timers());

        let cruise_inputs = snapshot.cruise_inputs(enabled, units);
        let before = self.cruise.state().set_speed_kph;
        self.cruise.update(&cruise_inputs, &button_events, &self.buttons);
        if enabled_edge && snapshot.cruise_available {
            self.cruise.initialize(&cruise_inputs, &button_events);
        }
        let cruise_state = *self.cruise.state();
        if (cruise_state.set_speed_kph - before).abs() > f64::EPSILON {
            trace_if_enabled!(
                self.tracer,
                ControlTraceEvent::SetSpeedChanged {
                    tick,
                    from_kph: before,
                    to_kph: cruise_state.set_speed_kph,
                }
            );
        }

        let longitudinal = self
            .longitudinal
            .update(&snapshot.longitudinal_inputs(enabled, planner.desired_accel));
        let braking = longitudinal.is_braking();
        if self.prev_braking != Some(braking) {
            trace_if_enabled!(
                self.tracer,
                ControlTraceEvent::LongitudinalModeSwitch { tick, braking }
            );
            self.prev_braking = Some(braking);
        }

        let profile =
            CurvatureProfile::from_slices(planner.psis, planner.curvatures, planner.curvature_rates);
        if profile.is_fallback() {
            trace_if_enabled!(self.tracer, ControlTraceEvent::ProfileFallback { tick });
        }
        let curvature = self.lag.compensate(snapshot.v_ego, &profile);

        let decision = self
            .authorization
            .update(&snapshot.authorization_inputs(engagement.lateral_active()), tick);
        if let Some(until_tick) = decision.locked_until {
            trace_if_enabled!(
                self.tracer,
                ControlTraceEvent::LateralLockout { tick, until_tick }
            );
        }
        let request = self.steer_limits.request_from_normalized(planner.steer_request);
        let steer_torque = gated_steer_torque(
            &decision,
            request,
            snapshot.steer_motor_torque,
            &self.steer_limits,
            &mut self.steer_state,
        );

        if engagement.lateral_enabled != self.prev_engagement.lateral_enabled
            || engagement.longitudinal_enabled != self.prev_engagement.longitudinal_enabled
        {
            self.tracer.emit_session_event(SessionTraceEvent::EngagementChanged {
                lateral: engagement.lateral_enabled,
                longitudinal: engagement.longitudinal_enabled,
            });
        }
        self.prev_engagement = engagement;

        let processing_ns = u64::try_from(started.elapsed().as_nanos()).unwrap_or(u64::MAX);
        trace_tick_end!(self.tracer, tick, processing_ns);
        self.tick = self.tick.saturating_add(1);

        ControlOutputs {
            tick,
            set_speed_kph: cruise_state.set_speed_kph,
            cluster_speed_kph: cruise_state.cluster_speed_kph,
            phase: self.cruise.phase(),
            button_events,
            presses,
            longitudinal,
            curvature,
            steer_torque,
            lkas_control_bit: decision.control_bit,
            engagement,
        }
    }

    /// Return every state object to its initial value for a new session.
    pub fn reset(&mut self) {
        self.engagement.reset();
        self.buttons.reset();
        self.cruise.reset();
        self.longitudinal.reset();
        self.authorization.reset();
        self.steer_state = SteerTorqueState::new();
        self.tick = 0;
        self.prev_engagement = EngagementStatus::default();
        self.prev_braking = None;
        tracing::debug!(vehicle = %self.params.name, "control session reset");
    }
}

impl std::fmt::Debug for ControlLoop {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ControlLoop")
            .field("vehicle", &self.params.name)
            .field("tick", &self.tick)
            .field("cruise", &self.cruise.state())
            .field("longitudinal", self.longitudinal.state())
            .field("steer_state", &self.steer_state)
            .finish_non_exhaustive()
    }
}

//! Trace event definitions for control ticks and session lifecycle

use core::fmt;

/// Trace events emitted from inside a control tick
///
/// # RT-Safety
///
/// All variants are `Copy` and fixed-size; creating and emitting one never
/// allocates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ControlTraceEvent {
    /// Control tick started
    TickStart {
        /// Monotonic tick counter
        tick: u64,
    },

    /// Control tick completed
    TickEnd {
        /// Monotonic tick counter
        tick: u64,
        /// Time spent computing this tick in nanoseconds
        processing_ns: u64,
    },

    /// Cruise set speed changed
    SetSpeedChanged {
        /// Monotonic tick counter
        tick: u64,
        /// Previous set speed, km/h
        from_kph: f64,
        /// New set speed, km/h
        to_kph: f64,
    },

    /// Longitudinal command switched between brake and torque
    LongitudinalModeSwitch {
        /// Monotonic tick counter
        tick: u64,
        /// True when the new mode is braking
        braking: bool,
    },

    /// Malformed curvature profile replaced by zeros
    ProfileFallback {
        /// Monotonic tick counter
        tick: u64,
    },

    /// Steering control bit dropped and a re-enable lockout started
    LateralLockout {
        /// Monotonic tick counter
        tick: u64,
        /// First tick the bit may rise again
        until_tick: u64,
    },
}

impl ControlTraceEvent {
    /// Returns the event type as a string for logging/tracing
    #[inline]
    pub const fn event_type(&self) -> &'static str {
        match self {
            ControlTraceEvent::TickStart { .. } => "tick_start",
            ControlTraceEvent::TickEnd { .. } => "tick_end",
            ControlTraceEvent::SetSpeedChanged { .. } => "set_speed_changed",
            ControlTraceEvent::LongitudinalModeSwitch { .. } => "longitudinal_mode_switch",
            ControlTraceEvent::ProfileFallback { .. } => "profile_fallback",
            ControlTraceEvent::LateralLockout { .. } => "lateral_lockout",
        }
    }

    /// Returns the event category for filtering
    #[inline]
    pub const fn category(&self) -> ControlEventCategory {
        match self {
            ControlTraceEvent::TickStart { .. } | ControlTraceEvent::TickEnd { .. } => {
                ControlEventCategory::Timing
            }
            ControlTraceEvent::SetSpeedChanged { .. } => ControlEventCategory::Cruise,
            ControlTraceEvent::LongitudinalModeSwitch { .. } => ControlEventCategory::Actuation,
            ControlTraceEvent::ProfileFallback { .. } | ControlTraceEvent::LateralLockout { .. } => {
                ControlEventCategory::Fault
            }
        }
    }

    /// Returns the tick associated with this event
    #[inline]
    pub const fn tick(&self) -> u64 {
        match self {
            ControlTraceEvent::TickStart { tick }
            | ControlTraceEvent::TickEnd { tick, .. }
            | ControlTraceEvent::SetSpeedChanged { tick, .. }
            | ControlTraceEvent::LongitudinalModeSwitch { tick, .. }
            | ControlTraceEvent::ProfileFallback { tick }
            | ControlTraceEvent::LateralLockout { tick, .. } => *tick,
        }
    }

    /// Returns true for fault events
    #[inline]
    pub const fn is_fault(&self) -> bool {
        matches!(self.category(), ControlEventCategory::Fault)
    }
}

/// Category for control trace events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlEventCategory {
    /// Tick start/end
    Timing,
    /// Set speed changes
    Cruise,
    /// Actuator mode changes
    Actuation,
    /// Input fallbacks and lockouts
    Fault,
}

/// Session lifecycle events
///
/// These events may allocate and are not emitted from inside a tick.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionTraceEvent {
    /// Control session started
    SessionStarted {
        /// Vehicle parameter set name
        vehicle: String,
    },

    /// Lateral or longitudinal engagement changed
    EngagementChanged {
        /// Lateral control engaged
        lateral: bool,
        /// Longitudinal control engaged
        longitudinal: bool,
    },

    /// Vehicle parameters failed validation
    ConfigRejected {
        /// Validation failure
        reason: String,
    },
}

impl SessionTraceEvent {
    /// Returns the event category for filtering
    pub fn category(&self) -> SessionEventCategory {
        match self {
            SessionTraceEvent::SessionStarted { .. } | SessionTraceEvent::ConfigRejected { .. } => {
                SessionEventCategory::Lifecycle
            }
            SessionTraceEvent::EngagementChanged { .. } => SessionEventCategory::Engagement,
        }
    }
}

/// Category for session trace events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEventCategory {
    /// Session start and configuration
    Lifecycle,
    /// Engagement transitions
    Engagement,
}

impl fmt::Display for ControlTraceEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ControlTraceEvent::TickStart { tick } => write!(f, "TickStart(tick={tick})"),
            ControlTraceEvent::TickEnd {
                tick,
                processing_ns,
            } => write!(f, "TickEnd(tick={tick}, proc={processing_ns}ns)"),
            ControlTraceEvent::SetSpeedChanged {
                tick,
                from_kph,
                to_kph,
            } => write!(
                f,
                "SetSpeedChanged(tick={tick}, {from_kph}->{to_kph}km/h)"
            ),
            ControlTraceEvent::LongitudinalModeSwitch { tick, braking } => {
                let mode = if *braking { "brake" } else { "torque" };
                write!(f, "LongitudinalModeSwitch(tick={tick}, mode={mode})")
            }
            ControlTraceEvent::ProfileFallback { tick } => {
                write!(f, "ProfileFallback(tick={tick})")
            }
            ControlTraceEvent::LateralLockout { tick, until_tick } => {
                write!(f, "LateralLockout(tick={tick}, until={until_tick})")
            }
        }
    }
}

impl fmt::Display for SessionTraceEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionTraceEvent::SessionStarted { vehicle } => {
                write!(f, "SessionStarted(vehicle={vehicle})")
            }
            SessionTraceEvent::EngagementChanged {
                lateral,
                longitudinal,
            } => write!(
                f,
                "EngagementChanged(lateral={lateral}, longitudinal={longitudinal})"
            ),
            SessionTraceEvent::ConfigRejected { reason } => {
                write!(f, "ConfigRejected(reason={reason})")
            }
        }
    }
}

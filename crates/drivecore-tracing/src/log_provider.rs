//! Provider that forwards events to the `tracing` facade

use core::sync::atomic::{AtomicU64, Ordering};

use crate::{ControlTraceEvent, SessionTraceEvent, TraceError, TraceMetrics, TraceProvider};

#[derive(Debug, Default)]
struct Counters {
    control_events: AtomicU64,
    session_events: AtomicU64,
    ticks: AtomicU64,
    tick_processing_ns: AtomicU64,
    set_speed_changes: AtomicU64,
    profile_fallbacks: AtomicU64,
    lateral_lockouts: AtomicU64,
}

/// Structured logging provider
///
/// Timing events go out at `trace` level, state changes at `debug`, faults at
/// `warn`. Every event is counted.
///
/// # RT Safety
///
/// Control events only format fixed-size fields and bump relaxed atomics.
/// Whether a subscriber allocates is up to the subscriber installed by the
/// host.
#[derive(Debug, Default)]
pub struct LogProvider {
    counters: Counters,
    initialized: bool,
}

impl LogProvider {
    /// Create a new provider
    pub fn new() -> Self {
        Self::default()
    }

    /// True after [`initialize`](TraceProvider::initialize) and before
    /// [`shutdown`](TraceProvider::shutdown)
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    fn bump(counter: &AtomicU64, by: u64) {
        counter.fetch_add(by, Ordering::Relaxed);
    }
}

impl TraceProvider for LogProvider {
    fn initialize(&mut self) -> Result<(), TraceError> {
        self.initialized = true;
        tracing::info!("using log trace provider");
        Ok(())
    }

    fn emit_control_event(&self, event: ControlTraceEvent) {
        let c = &self.counters;
        Self::bump(&c.control_events, 1);

        match event {
            ControlTraceEvent::TickStart { tick } => {
                tracing::trace!(tick, "control tick start");
            }
            ControlTraceEvent::TickEnd {
                tick,
                processing_ns,
            } => {
                Self::bump(&c.ticks, 1);
                Self::bump(&c.tick_processing_ns, processing_ns);
                tracing::trace!(tick, processing_ns, "control tick end");
            }
            ControlTraceEvent::SetSpeedChanged {
                tick,
                from_kph,
                to_kph,
            } => {
                Self::bump(&c.set_speed_changes, 1);
                tracing::debug!(tick, from_kph, to_kph, "set speed changed");
            }
            ControlTraceEvent::LongitudinalModeSwitch { tick, braking } => {
                tracing::debug!(tick, braking, "longitudinal mode switch");
            }
            ControlTraceEvent::ProfileFallback { tick } => {
                Self::bump(&c.profile_fallbacks, 1);
                tracing::warn!(tick, "curvature profile replaced by zeros");
            }
            ControlTraceEvent::LateralLockout { tick, until_tick } => {
                Self::bump(&c.lateral_lockouts, 1);
                tracing::warn!(tick, until_tick, "steering locked out");
            }
        }
    }

    fn emit_session_event(&self, event: SessionTraceEvent) {
        Self::bump(&self.counters.session_events, 1);

        match &event {
            SessionTraceEvent::SessionStarted { vehicle } => {
                tracing::info!(vehicle = %vehicle, "control session started");
            }
            SessionTraceEvent::EngagementChanged {
                lateral,
                longitudinal,
            } => {
                tracing::info!(lateral, longitudinal, "engagement changed");
            }
            SessionTraceEvent::ConfigRejected { reason } => {
                tracing::error!(reason = %reason, "vehicle parameters rejected");
            }
        }
    }

    fn metrics(&self) -> TraceMetrics {
        let c = &self.counters;
        TraceMetrics {
            control_events_emitted: c.control_events.load(Ordering::Relaxed),
            session_events_emitted: c.session_events.load(Ordering::Relaxed),
            ticks_completed: c.ticks.load(Ordering::Relaxed),
            total_tick_processing_ns: c.tick_processing_ns.load(Ordering::Relaxed),
            set_speed_changes: c.set_speed_changes.load(Ordering::Relaxed),
            profile_fallbacks: c.profile_fallbacks.load(Ordering::Relaxed),
            lateral_lockouts: c.lateral_lockouts.load(Ordering::Relaxed),
        }
    }

    fn shutdown(&mut self) {
        self.initialized = false;
        tracing::info!(metrics = %self.metrics(), "log trace provider shutdown");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_provider_initialization() -> Result<(), TraceError> {
        let mut provider = LogProvider::new();
        assert!(!provider.is_initialized());
        provider.initialize()?;
        assert!(provider.is_initialized());
        provider.shutdown();
        assert!(!provider.is_initialized());
        Ok(())
    }

    #[test]
    fn test_log_provider_counts_control_events() {
        let provider = LogProvider::new();
        provider.emit_control_event(ControlTraceEvent::TickStart { tick: 1 });
        provider.emit_control_event(ControlTraceEvent::TickEnd {
            tick: 1,
            processing_ns: 800,
        });
        provider.emit_control_event(ControlTraceEvent::ProfileFallback { tick: 2 });
        provider.emit_control_event(ControlTraceEvent::LateralLockout {
            tick: 2,
            until_tick: 203,
        });

        let m = provider.metrics();
        assert_eq!(m.control_events_emitted, 4);
        assert_eq!(m.ticks_completed, 1);
        assert_eq!(m.total_tick_processing_ns, 800);
        assert_eq!(m.profile_fallbacks, 1);
        assert_eq!(m.lateral_lockouts, 1);
    }

    #[test]
    fn test_log_provider_session_events() {
        let provider = LogProvider::new();
        provider.emit_session_event(SessionTraceEvent::SessionStarted {
            vehicle: "ram_1500".to_string(),
        });
        provider.emit_session_event(SessionTraceEvent::ConfigRejected {
            reason: "long_press_frames must be > 0".to_string(),
        });
        assert_eq!(provider.metrics().session_events_emitted, 2);
        assert_eq!(provider.metrics().control_events_emitted, 0);
    }

    #[test]
    fn test_log_provider_with_subscriber() {
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::TRACE)
            .with_test_writer()
            .finish();
        tracing::subscriber::with_default(subscriber, || {
            let provider = LogProvider::new();
            provider.emit_control_event(ControlTraceEvent::SetSpeedChanged {
                tick: 7,
                from_kph: 40.0,
                to_kph: 45.0,
            });
            assert_eq!(provider.metrics().set_speed_changes, 1);
        });
    }
}

//! Tracing metrics

use core::time::Duration;

/// Counters collected by a trace provider
///
/// All counters are monotonically increasing and saturate at `u64::MAX`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TraceMetrics {
    /// Total number of control events emitted
    pub control_events_emitted: u64,

    /// Total number of session events emitted
    pub session_events_emitted: u64,

    /// Number of completed ticks
    pub ticks_completed: u64,

    /// Total tick processing time (nanoseconds)
    pub total_tick_processing_ns: u64,

    /// Number of set speed changes
    pub set_speed_changes: u64,

    /// Number of malformed curvature profiles replaced by zeros
    pub profile_fallbacks: u64,

    /// Number of steering lockouts
    pub lateral_lockouts: u64,
}

impl TraceMetrics {
    /// Create new metrics with zero values
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a control event emission
    #[inline]
    pub fn record_control_event(&mut self) {
        self.control_events_emitted = self.control_events_emitted.saturating_add(1);
    }

    /// Record a session event emission
    #[inline]
    pub fn record_session_event(&mut self) {
        self.session_events_emitted = self.session_events_emitted.saturating_add(1);
    }

    /// Record a completed tick and its processing time
    #[inline]
    pub fn record_tick(&mut self, processing_ns: u64) {
        self.ticks_completed = self.ticks_completed.saturating_add(1);
        self.total_tick_processing_ns = self.total_tick_processing_ns.saturating_add(processing_ns);
    }

    /// Average tick processing time
    pub fn average_tick_processing_time(&self) -> Duration {
        match self.total_tick_processing_ns.checked_div(self.ticks_completed) {
            Some(ns) => Duration::from_nanos(ns),
            None => Duration::ZERO,
        }
    }

    /// Fraction of completed ticks that hit a fault event
    pub fn fault_rate(&self) -> f64 {
        if self.ticks_completed == 0 {
            return 0.0;
        }
        let faults = self.profile_fallbacks.saturating_add(self.lateral_lockouts);
        (faults as f64) / (self.ticks_completed as f64)
    }

    /// Reset all metrics to zero
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Merge metrics from another instance
    pub fn merge(&mut self, other: &TraceMetrics) {
        self.control_events_emitted = self
            .control_events_emitted
            .saturating_add(other.control_events_emitted);
        self.session_events_emitted = self
            .session_events_emitted
            .saturating_add(other.session_events_emitted);
        self.ticks_completed = self.ticks_completed.saturating_add(other.ticks_completed);
        self.total_tick_processing_ns = self
            .total_tick_processing_ns
            .saturating_add(other.total_tick_processing_ns);
        self.set_speed_changes = self.set_speed_changes.saturating_add(other.set_speed_changes);
        self.profile_fallbacks = self.profile_fallbacks.saturating_add(other.profile_fallbacks);
        self.lateral_lockouts = self.lateral_lockouts.saturating_add(other.lateral_lockouts);
    }
}

impl core::fmt::Display for TraceMetrics {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "TraceMetrics(control={}, session={}, ticks={}, fallbacks={}, lockouts={}, avg={:?})",
            self.control_events_emitted,
            self.session_events_emitted,
            self.ticks_completed,
            self.profile_fallbacks,
            self.lateral_lockouts,
            self.average_tick_processing_time()
        )
    }
}

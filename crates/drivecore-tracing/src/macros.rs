//! Tracing macros for convenient event emission

/// Emit a tick start event
///
/// # Example
///
/// ```
/// use drivecore_tracing::{TraceManager, trace_tick_start};
///
/// let manager = TraceManager::new();
/// trace_tick_start!(manager, 1);
/// ```
#[macro_export]
macro_rules! trace_tick_start {
    ($tracer:expr, $tick:expr) => {
        $tracer.emit_control_event($crate::ControlTraceEvent::TickStart { tick: $tick });
    };
}

/// Emit a tick end event
///
/// # Example
///
/// ```
/// use drivecore_tracing::{TraceManager, trace_tick_end};
///
/// let manager = TraceManager::new();
/// trace_tick_end!(manager, 1, 500);
/// assert_eq!(manager.metrics().ticks_completed, 1);
/// ```
#[macro_export]
macro_rules! trace_tick_end {
    ($tracer:expr, $tick:expr, $processing_ns:expr) => {
        $tracer.emit_control_event($crate::ControlTraceEvent::TickEnd {
            tick: $tick,
            processing_ns: $processing_ns,
        });
    };
}

/// Emit a control event only when tracing is enabled
///
/// The event expression is not evaluated when tracing is disabled.
///
/// # Example
///
/// ```
/// use drivecore_tracing::{ControlTraceEvent, TraceManager, trace_if_enabled};
///
/// let mut manager = TraceManager::new();
/// manager.set_enabled(false);
/// trace_if_enabled!(manager, ControlTraceEvent::ProfileFallback { tick: 3 });
/// assert_eq!(manager.metrics().control_events_emitted, 0);
/// ```
#[macro_export]
macro_rules! trace_if_enabled {
    ($tracer:expr, $event:expr) => {
        if $tracer.is_enabled() {
            $tracer.emit_control_event($event);
        }
    };
}

//! Prelude for drivecore-tracing
//!
//! Re-exports the most commonly used types and macros.

pub use crate::{
    ControlTraceEvent, LogProvider, SessionTraceEvent, TraceError, TraceManager, TraceMetrics,
    TraceProvider,
    events::{ControlEventCategory, SessionEventCategory},
    trace_if_enabled, trace_tick_end, trace_tick_start,
};

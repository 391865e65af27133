//! Control tick tracing for DriveCore
//!
//! Structured trace events for the per-tick control loop and for session
//! lifecycle, emitted through a pluggable [`TraceProvider`]:
//!
//! - [`ControlTraceEvent`]: `Copy`, allocation-free, emitted from the tick
//! - [`SessionTraceEvent`]: may allocate, emitted outside the tick
//! - [`LogProvider`]: forwards events to the `tracing` facade and counts them
//!
//! # RT-Safety Guarantees
//!
//! Emitting a [`ControlTraceEvent`] through [`LogProvider`]:
//! - No heap allocations
//! - No locks; counters are relaxed atomics
//! - Bounded execution time
//!
//! # Example
//!
//! ```
//! use drivecore_tracing::{ControlTraceEvent, TraceManager, trace_tick_start};
//!
//! let mut manager = TraceManager::new();
//! manager.initialize()?;
//!
//! trace_tick_start!(manager, 1);
//! manager.emit_control_event(ControlTraceEvent::ProfileFallback { tick: 1 });
//!
//! assert_eq!(manager.metrics().control_events_emitted, 2);
//! # Ok::<(), drivecore_tracing::TraceError>(())
//! ```

#![deny(unsafe_op_in_unsafe_fn, clippy::unwrap_used)]
#![warn(missing_docs, missing_debug_implementations)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod error;
pub mod events;
pub mod log_provider;
pub mod macros;
pub mod manager;
pub mod metrics;
pub mod prelude;
pub mod provider;

pub use error::TraceError;
pub use events::{ControlEventCategory, ControlTraceEvent, SessionEventCategory, SessionTraceEvent};
pub use log_provider::LogProvider;
pub use manager::TraceManager;
pub use metrics::TraceMetrics;
pub use provider::TraceProvider;

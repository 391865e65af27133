//! Trace provider trait definition

use crate::{ControlTraceEvent, SessionTraceEvent, TraceError, TraceMetrics};

/// Destination for trace events
///
/// The [`emit_control_event`](TraceProvider::emit_control_event) method is
/// called from inside the control tick and has strict requirements:
///
/// # RT-Safety Requirements
///
/// - Must not allocate memory
/// - Must not block
/// - Must complete in bounded time
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync` so a control loop can move between
/// threads with its tracer.
pub trait TraceProvider: Send + Sync {
    /// Initialize the provider
    ///
    /// Called once before the first event. May allocate and block.
    ///
    /// # Errors
    ///
    /// Returns an error if the provider cannot be initialized.
    fn initialize(&mut self) -> Result<(), TraceError>;

    /// Emit a control tick event
    ///
    /// This method must be RT-safe. See trait documentation for requirements.
    fn emit_control_event(&self, event: ControlTraceEvent);

    /// Emit a session event
    ///
    /// This method is NOT RT-safe. It may allocate.
    fn emit_session_event(&self, event: SessionTraceEvent);

    /// Snapshot of the provider's counters
    fn metrics(&self) -> TraceMetrics;

    /// Check if the provider is enabled
    fn is_enabled(&self) -> bool {
        true
    }

    /// Shutdown the provider
    fn shutdown(&mut self);
}

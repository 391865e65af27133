//! Trace manager

use crate::{
    ControlTraceEvent, LogProvider, SessionTraceEvent, TraceError, TraceMetrics, TraceProvider,
};

/// Owns a trace provider and gates emission
///
/// # Example
///
/// ```
/// use drivecore_tracing::{ControlTraceEvent, TraceManager};
///
/// let mut manager = TraceManager::new();
/// manager.initialize()?;
///
/// manager.emit_control_event(ControlTraceEvent::TickStart { tick: 1 });
/// manager.set_enabled(false);
/// manager.emit_control_event(ControlTraceEvent::TickStart { tick: 2 });
///
/// assert_eq!(manager.metrics().control_events_emitted, 1);
/// manager.shutdown();
/// # Ok::<(), drivecore_tracing::TraceError>(())
/// ```
pub struct TraceManager {
    provider: Box<dyn TraceProvider>,
    enabled: bool,
}

impl TraceManager {
    /// Create a manager backed by a [`LogProvider`]
    pub fn new() -> Self {
        Self::with_provider(Box::new(LogProvider::new()))
    }

    /// Create a manager with a custom provider
    pub fn with_provider(provider: Box<dyn TraceProvider>) -> Self {
        Self {
            provider,
            enabled: true,
        }
    }

    /// Initialize the provider
    ///
    /// # Errors
    ///
    /// Returns an error if initialization fails.
    pub fn initialize(&mut self) -> Result<(), TraceError> {
        self.provider.initialize()
    }

    /// Enable or disable tracing
    ///
    /// When disabled, events are silently dropped.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Check if tracing is enabled
    pub fn is_enabled(&self) -> bool {
        self.enabled && self.provider.is_enabled()
    }

    /// Emit a control tick event
    ///
    /// RT-safe when the provider is.
    #[inline]
    pub fn emit_control_event(&self, event: ControlTraceEvent) {
        if self.enabled {
            self.provider.emit_control_event(event);
        }
    }

    /// Emit a session event
    pub fn emit_session_event(&self, event: SessionTraceEvent) {
        if self.enabled {
            self.provider.emit_session_event(event);
        }
    }

    /// Current provider metrics
    pub fn metrics(&self) -> TraceMetrics {
        self.provider.metrics()
    }

    /// Shutdown the provider
    pub fn shutdown(&mut self) {
        self.provider.shutdown();
    }
}

impl core::fmt::Debug for TraceManager {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("TraceManager")
            .field("enabled", &self.enabled)
            .field(
                "provider_type",
                &core::any::type_name_of_val(&*self.provider),
            )
            .finish()
    }
}

impl Default for TraceManager {
    fn default() -> Self {
        Self::new()
    }
}

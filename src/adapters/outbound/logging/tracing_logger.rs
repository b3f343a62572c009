use crate::ports::outbound::ResolutionLogger;
use std::fmt;

/// TracingResolutionLogger adapter forwarding diagnostics to `tracing`
///
/// Whether debug traces are written is decided by the subscriber's filter;
/// disabled events are never formatted.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingResolutionLogger;

impl TracingResolutionLogger {
    pub fn new() -> Self {
        Self
    }
}

impl ResolutionLogger for TracingResolutionLogger {
    fn warn(&self, message: fmt::Arguments<'_>) {
        tracing::warn!("{}", message);
    }

    fn debug(&self, message: fmt::Arguments<'_>) {
        tracing::debug!("{}", message);
    }
}

use std::fmt;

/// ResolutionLogger port receiving diagnostics from the resolution engine
///
/// One logger is handed to every component of a run. Messages are passed as
/// `fmt::Arguments` so debug traces cost nothing when debug mode is off.
pub trait ResolutionLogger {
    /// Recoverable problems: missing assets, unreadable or foreign POMs
    fn warn(&self, message: fmt::Arguments<'_>);

    /// Traces of individual resolution decisions
    fn debug(&self, message: fmt::Arguments<'_>);
}

impl<T: ResolutionLogger + ?Sized> ResolutionLogger for &T {
    fn warn(&self, message: fmt::Arguments<'_>) {
        (**self).warn(message)
    }

    fn debug(&self, message: fmt::Arguments<'_>) {
        (**self).debug(message)
    }
}

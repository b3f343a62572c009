use repominer::prelude::*;
use std::fmt;
use std::sync::{Arc, Mutex};

/// Mock ResolutionLogger recording warnings and debug traces
///
/// Clones share the same buffers, so a clone can be handed to the use case
/// while the test keeps one for assertions.
#[derive(Default, Clone)]
pub struct MockResolutionLogger {
    warnings: Arc<Mutex<Vec<String>>>,
    debugs: Arc<Mutex<Vec<String>>>,
}

impl MockResolutionLogger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn warnings(&self) -> Vec<String> {
        self.warnings.lock().unwrap().clone()
    }

    pub fn debugs(&self) -> Vec<String> {
        self.debugs.lock().unwrap().clone()
    }
}

impl ResolutionLogger for MockResolutionLogger {
    fn warn(&self, message: fmt::Arguments<'_>) {
        self.warnings.lock().unwrap().push(message.to_string());
    }

    fn debug(&self, message: fmt::Arguments<'_>) {
        self.debugs.lock().unwrap().push(message.to_string());
    }
}

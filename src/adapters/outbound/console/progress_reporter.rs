use crate::ports::outbound::ProgressReporter;
use indicatif::{ProgressBar, ProgressStyle};
use std::cell::RefCell;
use std::time::Duration;

const SPINNER_TEMPLATE: &str = "   {spinner:.green} {pos} found - {msg}";

/// StderrProgressReporter adapter for reporting progress to stderr
///
/// This adapter implements the ProgressReporter port, writing progress
/// information to stderr so it doesn't interfere with the coordinate
/// stream on stdout. The total is unknown up front, so progress is an
/// indicatif spinner rather than a bar. indicatif hides it when stderr is
/// not a terminal.
pub struct StderrProgressReporter {
    spinner: RefCell<Option<ProgressBar>>,
}

impl StderrProgressReporter {
    pub fn new() -> Self {
        Self {
            spinner: RefCell::new(None),
        }
    }

    fn get_or_create_spinner(&self) -> ProgressBar {
        let mut spinner_option = self.spinner.borrow_mut();
        if let Some(spinner) = spinner_option.as_ref() {
            return spinner.clone();
        }

        let spinner = ProgressBar::new_spinner();
        spinner.set_style(
            ProgressStyle::default_spinner()
                .template(SPINNER_TEMPLATE)
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        spinner.enable_steady_tick(Duration::from_millis(120));
        *spinner_option = Some(spinner.clone());
        spinner
    }

    fn clear_spinner(&self) {
        if let Some(spinner) = self.spinner.borrow_mut().take() {
            spinner.finish_and_clear();
        }
    }
}

impl Default for StderrProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressReporter for StderrProgressReporter {
    fn report(&self, message: &str) {
        eprintln!("{}", message);
    }

    fn report_progress(&self, found: usize, message: Option<&str>) {
        let spinner = self.get_or_create_spinner();
        spinner.set_position(found as u64);
        if let Some(msg) = message {
            spinner.set_message(msg.to_string());
        }
    }

    fn report_error(&self, message: &str) {
        self.clear_spinner();
        eprintln!("{}", message);
    }

    fn report_completion(&self, message: &str) {
        self.clear_spinner();
        eprintln!("{}", message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_reporter_lifecycle() {
        let reporter = StderrProgressReporter::new();
        // Output goes to stderr; verify the sequence doesn't panic
        reporter.report("Test message");
        reporter.report_progress(1, Some("g a 1.0"));
        reporter.report_progress(2, None);
        reporter.report_completion("Test completion");
        assert!(reporter.spinner.borrow().is_none());
    }

    #[test]
    fn test_progress_reporter_error_clears_spinner() {
        let reporter = StderrProgressReporter::default();
        reporter.report_progress(1, None);
        assert!(reporter.spinner.borrow().is_some());
        reporter.report_error("Test error");
        assert!(reporter.spinner.borrow().is_none());
    }
}

/// ProgressReporter port for reporting progress during a run
///
/// Progress goes to stderr so it never mixes with the coordinate stream.
pub trait ProgressReporter {
    /// Reports a progress message
    fn report(&self, message: &str);

    /// Reports how many coordinates have been found so far
    ///
    /// # Arguments
    /// * `found` - Number of coordinates emitted so far
    /// * `message` - Optional message, typically the latest coordinate
    fn report_progress(&self, found: usize, message: Option<&str>);

    /// Reports an error or warning message
    fn report_error(&self, message: &str);

    /// Reports completion of the run
    fn report_completion(&self, message: &str);
}

impl<T: ProgressReporter + ?Sized> ProgressReporter for &T {
    fn report(&self, message: &str) {
        (**self).report(message)
    }

    fn report_progress(&self, found: usize, message: Option<&str>) {
        (**self).report_progress(found, message)
    }

    fn report_error(&self, message: &str) {
        (**self).report_error(message)
    }

    fn report_completion(&self, message: &str) {
        (**self).report_completion(message)
    }
}

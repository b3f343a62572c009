/// Mock implementations for testing
mod collecting_sink;
mod mock_progress_reporter;
mod mock_resolution_logger;

pub use collecting_sink::CollectingSink;
pub use mock_progress_reporter::MockProgressReporter;
pub use mock_resolution_logger::MockResolutionLogger;

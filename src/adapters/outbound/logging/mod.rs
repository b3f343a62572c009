/// Logging adapters: the tracing-backed resolution logger and log file setup
mod log_file;
mod tracing_logger;

pub use log_file::{default_filter, filter_directives, init, open_log_file};
pub use tracing_logger::TracingResolutionLogger;

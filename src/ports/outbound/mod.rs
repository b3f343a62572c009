/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the resolution engine uses
/// to interact with the file system, the log file and the console.
pub mod coordinate_formatter;
pub mod coordinate_sink;
pub mod descriptor_store;
pub mod progress_reporter;
pub mod resolution_logger;

pub use coordinate_formatter::CoordinateFormatter;
pub use coordinate_sink::CoordinateSink;
pub use descriptor_store::DescriptorStore;
pub use progress_reporter::ProgressReporter;
pub use resolution_logger::ResolutionLogger;

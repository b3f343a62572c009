/// Ports module defining interfaces for hexagonal architecture
///
/// The resolution engine only talks to the outside world through the
/// outbound ports: the repository, the log, the output, and progress display.
pub mod outbound;

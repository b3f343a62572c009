/// Filesystem adapters: the repository reader and file/stdout writers
mod descriptor_store;
mod file_writer;
mod pom_parser;

pub use descriptor_store::FileSystemDescriptorStore;
pub use file_writer::WriterSink;
pub use pom_parser::parse_pom;

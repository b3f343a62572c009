//! repominer - transitive dependency miner for local Maven repositories
//!
//! Given the coordinate of an artifact in a Maven-style local repository,
//! this library walks its POM files, resolves every dependency version
//! (including `${property}` placeholders inherited through parent POMs) and
//! streams the resolved coordinates in depth-first pre-order.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Resolution Layer** (`resolution`): Coordinates, descriptors and the traversal services
//! - **Application Layer** (`application`): Use cases, DTOs and factories
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use repominer::prelude::*;
//!
//! # fn main() -> Result<()> {
//! // Create adapters
//! let descriptor_store = FileSystemDescriptorStore::open("/home/me/.m2/repository")?;
//! let resolution_logger = TracingResolutionLogger::new();
//! let progress_reporter = StderrProgressReporter::new();
//!
//! // Create use case
//! let use_case =
//!     MineDependenciesUseCase::new(descriptor_store, resolution_logger, progress_reporter);
//!
//! // Execute
//! let request = MineRequest::builder()
//!     .group_id("org.slf4j")
//!     .artifact_id("slf4j-simple")
//!     .version("2.0.9")
//!     .build()?;
//! let mut sink = WriterSink::stdout(Box::new(TextFormatter::new()));
//! let response = use_case.execute(request, &mut sink)?;
//! eprintln!("{} dependencies", response.dependency_count);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod config;
pub mod ports;
pub mod resolution;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{FileSystemDescriptorStore, WriterSink};
    pub use crate::adapters::outbound::formatters::{JsonLinesFormatter, TextFormatter};
    pub use crate::adapters::outbound::logging::TracingResolutionLogger;
    pub use crate::application::dto::{MineRequest, MineResponse, OutputFormat};
    pub use crate::application::factories::FormatterFactory;
    pub use crate::application::use_cases::MineDependenciesUseCase;
    pub use crate::ports::outbound::{
        CoordinateFormatter, CoordinateSink, DescriptorStore, ProgressReporter, ResolutionLogger,
    };
    pub use crate::resolution::domain::{Coordinate, Descriptor};
    pub use crate::resolution::services::{DependencyTraverser, Traversal, RECURSION_LIMIT};
    pub use crate::shared::Result;
}

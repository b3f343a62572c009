/// Resolution layer - Domain model and the dependency resolution engine
///
/// Everything in here is synchronous and single-threaded. Disk access goes
/// through the `DescriptorStore` port and diagnostics through the
/// `ResolutionLogger` port, both borrowed for the duration of one run.
pub mod domain;
pub mod services;

#[cfg(test)]
pub(crate) mod testing;

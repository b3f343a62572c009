use crate::application::dto::{MineRequest, MineResponse};
use crate::ports::outbound::{CoordinateSink, DescriptorStore, ProgressReporter, ResolutionLogger};
use crate::resolution::services::DependencyTraverser;
use crate::shared::Result;

/// MineDependenciesUseCase - Core use case for listing transitive dependencies
///
/// This use case orchestrates a mining run using generic dependency
/// injection for all infrastructure dependencies.
///
/// # Type Parameters
/// * `DS` - DescriptorStore implementation
/// * `RL` - ResolutionLogger implementation
/// * `PR` - ProgressReporter implementation
pub struct MineDependenciesUseCase<DS, RL, PR> {
    descriptor_store: DS,
    resolution_logger: RL,
    progress_reporter: PR,
}

impl<DS, RL, PR> MineDependenciesUseCase<DS, RL, PR>
where
    DS: DescriptorStore,
    RL: ResolutionLogger,
    PR: ProgressReporter,
{
    /// Creates a new MineDependenciesUseCase with injected dependencies
    pub fn new(descriptor_store: DS, resolution_logger: RL, progress_reporter: PR) -> Self {
        Self {
            descriptor_store,
            resolution_logger,
            progress_reporter,
        }
    }

    /// Executes the mining use case
    ///
    /// Coordinates are handed to `sink` as soon as they are resolved. Only a
    /// failing sink aborts the run; resolution problems are logged and the
    /// affected dependency is skipped.
    ///
    /// # Returns
    /// MineResponse with the number of dependency coordinates emitted
    pub fn execute<S>(&self, request: MineRequest, sink: &mut S) -> Result<MineResponse>
    where
        S: CoordinateSink + ?Sized,
    {
        let root = &request.coordinate;
        self.progress_reporter
            .report(&format!("🔍 Mining dependencies of {}", root.gav()));

        if request.include_top {
            sink.emit(root)?;
        }

        let traverser = DependencyTraverser::new(&self.descriptor_store, &self.resolution_logger);
        let mut dependency_count = 0;
        for coordinate in traverser.traverse(root) {
            sink.emit(&coordinate)?;
            dependency_count += 1;
            self.progress_reporter
                .report_progress(dependency_count, Some(coordinate.gav().as_str()));
        }
        sink.finish()?;

        if dependency_count == 0 {
            self.progress_reporter.report_error(&format!(
                "⚠️  Warning: No dependencies found for {}. Check the log file for missing or unreadable POMs.",
                root.gav()
            ));
        }
        self.progress_reporter.report_completion(&format!(
            "✅ Found {} dependenc{}",
            dependency_count,
            if dependency_count == 1 { "y" } else { "ies" }
        ));

        Ok(MineResponse::new(dependency_count, request.include_top))
    }
}

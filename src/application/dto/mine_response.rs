/// MineResponse - Summary of a completed mining run
///
/// The coordinates themselves have already been streamed to the sink.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MineResponse {
    /// Number of dependency coordinates emitted, excluding the top-level one
    pub dependency_count: usize,
    /// Whether the top-level coordinate was emitted as well
    pub included_top: bool,
}

impl MineResponse {
    pub fn new(dependency_count: usize, included_top: bool) -> Self {
        Self {
            dependency_count,
            included_top,
        }
    }

    /// Lines written to the sink
    pub fn emitted_count(&self) -> usize {
        self.dependency_count + usize::from(self.included_top)
    }
}

use repominer::prelude::*;

/// CoordinateSink keeping every coordinate in memory
#[derive(Default)]
pub struct CollectingSink {
    pub coordinates: Vec<Coordinate>,
    pub finished: bool,
}

impl CollectingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Coordinates in the `groupId artifactId version` text form
    pub fn lines(&self) -> Vec<String> {
        self.coordinates.iter().map(ToString::to_string).collect()
    }
}

impl CoordinateSink for CollectingSink {
    fn emit(&mut self, coordinate: &Coordinate) -> Result<()> {
        self.coordinates.push(coordinate.clone());
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.finished = true;
        Ok(())
    }
}

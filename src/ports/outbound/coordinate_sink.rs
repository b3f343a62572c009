use crate::resolution::domain::Coordinate;
use crate::shared::Result;

/// CoordinateSink port receiving resolved coordinates as they are discovered
///
/// Coordinates arrive in depth-first pre-order, one at a time, so a consumer
/// on the other end of a pipe can start working before the walk finishes.
pub trait CoordinateSink {
    /// Presents one coordinate
    ///
    /// # Errors
    /// Returns an error if writing to the destination fails
    fn emit(&mut self, coordinate: &Coordinate) -> Result<()>;

    /// Flushes anything still buffered
    fn finish(&mut self) -> Result<()> {
        Ok(())
    }
}

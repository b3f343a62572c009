use crate::resolution::domain::Coordinate;
use crate::shared::Result;

/// CoordinateFormatter port turning a coordinate into one output line
///
/// The returned string carries no trailing newline.
pub trait CoordinateFormatter {
    /// # Errors
    /// Returns an error if serialization fails
    fn format(&self, coordinate: &Coordinate) -> Result<String>;
}

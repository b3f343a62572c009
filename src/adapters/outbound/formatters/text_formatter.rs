use crate::ports::outbound::CoordinateFormatter;
use crate::resolution::domain::Coordinate;
use crate::shared::Result;

/// TextFormatter adapter producing `groupId artifactId version[-classifier]`
///
/// This is the format downstream scripts split on whitespace.
pub struct TextFormatter;

impl TextFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for TextFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl CoordinateFormatter for TextFormatter {
    fn format(&self, coordinate: &Coordinate) -> Result<String> {
        Ok(coordinate.to_string())
    }
}

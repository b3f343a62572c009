use crate::ports::outbound::CoordinateFormatter;
use crate::resolution::domain::Coordinate;
use crate::shared::Result;

/// JsonLinesFormatter adapter producing one compact JSON object per line
///
/// The classifier is kept as its own field instead of being folded into
/// the version.
pub struct JsonLinesFormatter;

impl JsonLinesFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonLinesFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl CoordinateFormatter for JsonLinesFormatter {
    fn format(&self, coordinate: &Coordinate) -> Result<String> {
        serde_json::to_string(coordinate)
            .map_err(|e| anyhow::anyhow!("Failed to serialize {}: {}", coordinate.gav(), e))
    }
}

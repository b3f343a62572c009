use crate::adapters::outbound::formatters::{JsonLinesFormatter, TextFormatter};
use crate::application::dto::OutputFormat;
use crate::ports::outbound::CoordinateFormatter;

/// Factory for creating coordinate formatters
///
/// Selects the infrastructure formatter matching the requested output format.
pub struct FormatterFactory;

impl FormatterFactory {
    /// Creates a formatter instance for the specified output format
    ///
    /// # Examples
    /// ```
    /// use repominer::application::dto::OutputFormat;
    /// use repominer::application::factories::FormatterFactory;
    ///
    /// let formatter = FormatterFactory::create(OutputFormat::Json);
    /// ```
    pub fn create(format: OutputFormat) -> Box<dyn CoordinateFormatter> {
        match format {
            OutputFormat::Text => Box::new(TextFormatter::new()),
            OutputFormat::Json => Box::new(JsonLinesFormatter::new()),
        }
    }
}

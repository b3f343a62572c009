/// Formatter adapters for the supported output line formats
mod json_formatter;
mod text_formatter;

pub use json_formatter::JsonLinesFormatter;
pub use text_formatter::TextFormatter;

/// Shared kernel: error types, the `Result` alias, and file guards
pub mod error;
pub mod result;
pub mod security;

pub use result::Result;

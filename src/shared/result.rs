/// Type alias for Result with anyhow::Error as the error type.
/// Fatal errors are `RepominerError` values wrapped in `anyhow::Error`.
pub type Result<T> = std::result::Result<T, anyhow::Error>;

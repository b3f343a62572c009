use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// Scripts that pipe repominer output can tell a usage mistake
/// apart from a repository or I/O failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// All reachable dependencies were written
    Success = 0,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (missing repository, unreadable config, output I/O, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Application-specific errors for repository mining.
///
/// `RepositoryNotFound`, `FileWriteError` and `Validation` abort the run and
/// carry a hint for the user. The lookup and parse variants are recoverable:
/// they are logged as warnings and only end the current branch, so their
/// messages stay on a single line.
#[derive(Debug, Error)]
pub enum RepominerError {
    #[error("Local repository not found: {path}\nReason: {reason}\n\n💡 Hint: Specify an existing repository directory with --repository")]
    RepositoryNotFound { path: PathBuf, reason: String },

    #[error("Asset not found: {path}")]
    AssetNotFound { path: PathBuf },

    #[error("No POM file found for asset: {path}")]
    DescriptorNotFound { path: PathBuf },

    #[error("Unable to read POM file {path}: {details}")]
    DescriptorParseError { path: PathBuf, details: String },

    #[error("Invalid coordinate {coordinate}: {reason}")]
    InvalidCoordinate { coordinate: String, reason: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    /// Validation error for builder patterns
    #[error("Validation error: {message}")]
    Validation { message: String },
}

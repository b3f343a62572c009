use crate::shared::Result;
use std::fs;
use std::path::Path;

/// Maximum POM file size (10 MiB)
/// Real descriptors are a few kilobytes; anything this large is not a POM.
pub const MAX_DESCRIPTOR_SIZE: u64 = 10 * 1024 * 1024;

/// Validates that a path is not a symbolic link
///
/// Used before writing output, so an attacker-planted link cannot redirect
/// the coordinate list somewhere else.
///
/// # Errors
/// Returns an error if the path is a symbolic link or if metadata cannot be read
pub fn validate_not_symlink(path: &Path, operation: &str) -> Result<()> {
    let metadata = fs::symlink_metadata(path).map_err(|e| {
        anyhow::anyhow!(
            "Failed to read metadata for {} operation on {}: {}",
            operation,
            path.display(),
            e
        )
    })?;

    if metadata.is_symlink() {
        anyhow::bail!(
            "Security: {} is a symbolic link. For security reasons, {} operations on symbolic links are not allowed.",
            path.display(),
            operation
        );
    }

    Ok(())
}

/// Validates that a path is a regular file no larger than `max_size`
///
/// Symbolic links are followed here: local repositories are commonly
/// assembled from linked directories.
///
/// # Errors
/// Returns an error if the path doesn't exist, is not a regular file,
/// or exceeds the size limit
pub fn validate_readable_file(path: &Path, max_size: u64) -> Result<()> {
    let metadata = fs::metadata(path)
        .map_err(|e| anyhow::anyhow!("Failed to read metadata: {}", e))?;

    if !metadata.is_file() {
        anyhow::bail!("{} is not a regular file", path.display());
    }

    validate_file_size(metadata.len(), path, max_size)
}

/// Validates file size is within acceptable limits
///
/// # Errors
/// Returns an error if the file size exceeds the maximum
pub fn validate_file_size(file_size: u64, path: &Path, max_size: u64) -> Result<()> {
    if file_size > max_size {
        anyhow::bail!(
            "Security: {} is too large ({} bytes). Maximum allowed size is {} bytes.",
            path.display(),
            file_size,
            max_size
        );
    }
    Ok(())
}

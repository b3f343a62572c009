use super::pom_parser::parse_pom;
use crate::ports::outbound::DescriptorStore;
use crate::resolution::domain::{Coordinate, Descriptor};
use crate::shared::error::RepominerError;
use crate::shared::security::{validate_readable_file, MAX_DESCRIPTOR_SIZE};
use crate::shared::Result;
use std::fs;
use std::path::{Path, PathBuf};

/// FileSystemDescriptorStore adapter reading POMs from a local repository
///
/// The repository is only ever read. Opening the store is the one place a
/// missing repository is fatal.
#[derive(Debug, Clone)]
pub struct FileSystemDescriptorStore {
    root: PathBuf,
}

impl FileSystemDescriptorStore {
    /// Opens the repository rooted at `root`
    ///
    /// # Errors
    /// Returns `RepominerError::RepositoryNotFound` if `root` is not a directory
    pub fn open(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        if !root.exists() {
            return Err(RepominerError::RepositoryNotFound {
                path: root,
                reason: "Directory does not exist".to_string(),
            }
            .into());
        }
        if !root.is_dir() {
            return Err(RepominerError::RepositoryNotFound {
                path: root,
                reason: "Not a directory".to_string(),
            }
            .into());
        }
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl DescriptorStore for FileSystemDescriptorStore {
    fn descriptor_path(&self, coordinate: &Coordinate) -> PathBuf {
        self.root
            .join(coordinate.relative_dir())
            .join(coordinate.descriptor_file_name())
    }

    fn locate_asset(&self, coordinate: &Coordinate) -> Result<PathBuf> {
        let asset_dir = self.root.join(coordinate.relative_dir());
        if !asset_dir.is_dir() {
            return Err(RepominerError::AssetNotFound { path: asset_dir }.into());
        }

        let path = asset_dir.join(coordinate.descriptor_file_name());
        if !path.exists() {
            return Err(RepominerError::DescriptorNotFound { path }.into());
        }
        Ok(path)
    }

    fn load_descriptor(&self, path: &Path) -> Result<Descriptor> {
        let parse_error = |details: String| RepominerError::DescriptorParseError {
            path: path.to_path_buf(),
            details,
        };

        validate_readable_file(path, MAX_DESCRIPTOR_SIZE).map_err(|e| parse_error(e.to_string()))?;
        let content = fs::read_to_string(path).map_err(|e| parse_error(e.to_string()))?;
        parse_pom(&content).map_err(|e| parse_error(e.to_string()).into())
    }
}

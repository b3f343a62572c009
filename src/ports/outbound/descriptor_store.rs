use crate::resolution::domain::{Coordinate, Descriptor};
use crate::shared::Result;
use std::path::{Path, PathBuf};

/// DescriptorStore port for read-only access to a local repository
///
/// The repository root is fixed when the store is created. Implementations
/// report failures as `RepominerError` values and never log themselves;
/// callers decide how loudly a missing asset is reported.
pub trait DescriptorStore {
    /// Computes where the POM for `coordinate` lives, without touching the disk
    ///
    /// Layout: `root/<group with '.' as '/'>/<artifact>/<version>[-<classifier>]/<artifact>-<version>[-<classifier>].pom`
    fn descriptor_path(&self, coordinate: &Coordinate) -> PathBuf;

    /// Locates the POM of an asset that is present in the repository
    ///
    /// # Errors
    /// - `RepominerError::AssetNotFound` if the asset directory is missing
    /// - `RepominerError::DescriptorNotFound` if the directory has no POM
    fn locate_asset(&self, coordinate: &Coordinate) -> Result<PathBuf>;

    /// Reads and parses the POM at `path`
    ///
    /// A namespace mismatch is not an error; the caller inspects
    /// `Descriptor::has_pom_namespace`.
    ///
    /// # Errors
    /// Returns `RepominerError::DescriptorParseError` if the file cannot be
    /// read or is not well-formed XML
    fn load_descriptor(&self, path: &Path) -> Result<Descriptor>;
}

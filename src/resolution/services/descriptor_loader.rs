use crate::ports::outbound::{DescriptorStore, ResolutionLogger};
use crate::resolution::domain::{Coordinate, Descriptor};
use std::path::{Path, PathBuf};

/// DescriptorLoader turns store failures into warnings
///
/// Every failure to produce a descriptor is recoverable: it is logged once,
/// here, and the caller simply sees `None`.
#[derive(Clone, Copy)]
pub struct DescriptorLoader<'a> {
    store: &'a dyn DescriptorStore,
    logger: &'a dyn ResolutionLogger,
}

impl<'a> DescriptorLoader<'a> {
    pub fn new(store: &'a dyn DescriptorStore, logger: &'a dyn ResolutionLogger) -> Self {
        Self { store, logger }
    }

    pub fn descriptor_path(&self, coordinate: &Coordinate) -> PathBuf {
        self.store.descriptor_path(coordinate)
    }

    /// Locates the asset for `coordinate` and parses its POM
    pub fn load_asset(&self, coordinate: &Coordinate) -> Option<Descriptor> {
        match self.store.locate_asset(coordinate) {
            Ok(path) => self.load(&path),
            Err(e) => {
                self.logger.warn(format_args!("{}", e));
                None
            }
        }
    }

    /// Parses the POM at `path`; a foreign namespace is reported but accepted
    pub fn load(&self, path: &Path) -> Option<Descriptor> {
        match self.store.load_descriptor(path) {
            Ok(descriptor) => {
                if !descriptor.has_pom_namespace() {
                    self.logger.warn(format_args!(
                        "Not a valid POM (namespace '{}'): {}",
                        descriptor.namespace(),
                        path.display()
                    ));
                }
                Some(descriptor)
            }
            Err(e) => {
                self.logger.warn(format_args!("{}", e));
                None
            }
        }
    }
}

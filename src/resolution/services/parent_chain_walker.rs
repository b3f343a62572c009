use super::DescriptorLoader;
use crate::ports::outbound::ResolutionLogger;
use crate::resolution::domain::{Coordinate, Descriptor};

/// ParentChainWalker loads the `<parent>` POM of a descriptor
///
/// One call climbs exactly one level; `VersionResolver` decides whether to
/// keep climbing.
#[derive(Clone, Copy)]
pub struct ParentChainWalker<'a> {
    loader: DescriptorLoader<'a>,
    logger: &'a dyn ResolutionLogger,
}

impl<'a> ParentChainWalker<'a> {
    pub fn new(loader: DescriptorLoader<'a>, logger: &'a dyn ResolutionLogger) -> Self {
        Self { loader, logger }
    }

    /// Loads the parent of `descriptor`, or `None` if it declares no usable
    /// parent or the parent POM cannot be read
    ///
    /// The parent path is computed directly from the reference, without a
    /// classifier and without checking that the asset directory exists.
    pub fn load_parent(&self, descriptor: &Descriptor) -> Option<Descriptor> {
        let parent = match descriptor.parent() {
            Some(parent) if parent.is_complete() => parent,
            _ => {
                self.logger.debug(format_args!(
                    "[load_parent] no parent: cannot identify parent POM coordinates"
                ));
                return None;
            }
        };
        self.logger.debug(format_args!(
            "[load_parent] parent coordinates: groupId {}, artifactId {}, version {}",
            parent.group_id, parent.artifact_id, parent.version
        ));

        let coordinate = match Coordinate::new(
            parent.group_id.clone(),
            parent.artifact_id.clone(),
            parent.version.clone(),
            None,
        ) {
            Ok(coordinate) => coordinate,
            Err(e) => {
                self.logger.warn(format_args!("Ignoring parent reference: {}", e));
                return None;
            }
        };

        let path = self.loader.descriptor_path(&coordinate);
        self.logger.debug(format_args!(
            "[load_parent] path to parent POM: {}",
            path.display()
        ));
        self.loader.load(&path)
    }
}

use super::{DescriptorLoader, ParentChainWalker, VersionResolver};
use crate::ports::outbound::{DescriptorStore, ResolutionLogger};
use crate::resolution::domain::{Coordinate, Descriptor, RawDependency};
use std::iter::FusedIterator;

/// DependencyTraverser service walking the dependency graph of an asset
///
/// The walk is depth-first and lazy: nothing is read from disk until the
/// returned `Traversal` is polled. There is no visited set, so an asset
/// reachable along two paths is read and reported twice.
pub struct DependencyTraverser<'a> {
    loader: DescriptorLoader<'a>,
    versions: VersionResolver<'a>,
    logger: &'a dyn ResolutionLogger,
}

impl<'a> DependencyTraverser<'a> {
    pub fn new(store: &'a dyn DescriptorStore, logger: &'a dyn ResolutionLogger) -> Self {
        let loader = DescriptorLoader::new(store, logger);
        let parents = ParentChainWalker::new(loader, logger);
        Self {
            loader,
            versions: VersionResolver::new(parents, logger),
            logger,
        }
    }

    /// Starts a walk below `root`
    ///
    /// The root itself is never yielded. If its POM cannot be loaded the
    /// traversal is empty.
    pub fn traverse(&self, root: &Coordinate) -> Traversal<'a> {
        self.logger
            .debug(format_args!("[traverse] <{}>", root.gav()));
        let stack = self.loader.load_asset(root).map(Frame::new).into_iter().collect();
        Traversal {
            loader: self.loader,
            versions: self.versions,
            logger: self.logger,
            stack,
        }
    }
}

/// One asset being walked: its descriptor and the next dependency to visit
struct Frame {
    descriptor: Descriptor,
    cursor: usize,
}

impl Frame {
    fn new(descriptor: Descriptor) -> Self {
        Self {
            descriptor,
            cursor: 0,
        }
    }

    fn advance(&mut self) -> Option<RawDependency> {
        let dependency = self.descriptor.dependencies().get(self.cursor)?.clone();
        self.cursor += 1;
        Some(dependency)
    }
}

/// Iterator over resolved dependency coordinates in depth-first pre-order
///
/// A coordinate is yielded before its own dependencies are explored.
/// Dependencies whose version cannot be resolved are skipped silently;
/// resolved ones are yielded even when their asset is missing.
pub struct Traversal<'a> {
    loader: DescriptorLoader<'a>,
    versions: VersionResolver<'a>,
    logger: &'a dyn ResolutionLogger,
    stack: Vec<Frame>,
}

impl Iterator for Traversal<'_> {
    type Item = Coordinate;

    fn next(&mut self) -> Option<Coordinate> {
        loop {
            let frame = self.stack.last_mut()?;
            let Some(dependency) = frame.advance() else {
                self.stack.pop();
                continue;
            };

            let version = self
                .versions
                .resolve(
                    &frame.descriptor,
                    &dependency.group_id,
                    &dependency.artifact_id,
                    &dependency.version_expression,
                    0,
                )
                .filter(|version| !version.is_empty());
            let Some(version) = version else {
                self.logger.debug(format_args!(
                    "[traverse] skipping {}:{} because no version",
                    dependency.group_id, dependency.artifact_id
                ));
                continue;
            };

            let child = match Coordinate::new(
                dependency.group_id,
                dependency.artifact_id,
                version,
                None,
            ) {
                Ok(child) => child,
                Err(e) => {
                    self.logger
                        .warn(format_args!("Skipping dependency: {}", e));
                    continue;
                }
            };

            self.logger
                .debug(format_args!("[traverse] looking for <{}>", child.gav()));
            if let Some(descriptor) = self.loader.load_asset(&child) {
                self.stack.push(Frame::new(descriptor));
            }
            return Some(child);
        }
    }
}

impl FusedIterator for Traversal<'_> {}

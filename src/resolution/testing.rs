//! In-memory doubles for exercising the resolution services without a disk.

use crate::ports::outbound::{DescriptorStore, ResolutionLogger};
use crate::resolution::domain::{Coordinate, Descriptor, ParentRef, RawDependency, POM_NAMESPACE};
use crate::shared::error::RepominerError;
use crate::shared::Result;
use std::cell::RefCell;
use std::collections::{HashMap, HashSet};
use std::fmt;
use std::path::{Path, PathBuf};

pub(crate) fn coordinate(group_id: &str, artifact_id: &str, version: &str) -> Coordinate {
    Coordinate::new(
        group_id.to_string(),
        artifact_id.to_string(),
        version.to_string(),
        None,
    )
    .unwrap()
}

/// Builder for descriptors used in service tests
#[derive(Default)]
pub(crate) struct PomBuilder {
    namespace: Option<String>,
    properties: HashMap<String, String>,
    parent: Option<ParentRef>,
    dependencies: Vec<RawDependency>,
}

impl PomBuilder {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn namespace(mut self, namespace: &str) -> Self {
        self.namespace = Some(namespace.to_string());
        self
    }

    pub(crate) fn property(mut self, name: &str, value: &str) -> Self {
        self.properties.insert(name.to_string(), value.to_string());
        self
    }

    pub(crate) fn parent(mut self, group_id: &str, artifact_id: &str, version: &str) -> Self {
        self.parent = Some(ParentRef::new(
            group_id.to_string(),
            artifact_id.to_string(),
            version.to_string(),
        ));
        self
    }

    pub(crate) fn dependency(mut self, group_id: &str, artifact_id: &str, version: &str) -> Self {
        self.dependencies.push(RawDependency::new(
            group_id.to_string(),
            artifact_id.to_string(),
            version.to_string(),
        ));
        self
    }

    pub(crate) fn build(self) -> Descriptor {
        Descriptor::new(
            self.namespace.unwrap_or_else(|| POM_NAMESPACE.to_string()),
            self.properties,
            self.parent,
            self.dependencies,
        )
    }
}

/// Repository held in memory, keyed by the same paths the filesystem store computes
pub(crate) struct InMemoryStore {
    root: PathBuf,
    descriptors: HashMap<PathBuf, Descriptor>,
    empty_dirs: HashSet<PathBuf>,
    broken: HashSet<PathBuf>,
    loads: RefCell<usize>,
}

impl InMemoryStore {
    pub(crate) fn new() -> Self {
        Self {
            root: PathBuf::from("/repo"),
            descriptors: HashMap::new(),
            empty_dirs: HashSet::new(),
            broken: HashSet::new(),
            loads: RefCell::new(0),
        }
    }

    pub(crate) fn with(mut self, coordinate: &Coordinate, descriptor: Descriptor) -> Self {
        let path = self.descriptor_path(coordinate);
        self.descriptors.insert(path, descriptor);
        self
    }

    /// Asset directory exists but holds no POM
    pub(crate) fn with_empty_dir(mut self, coordinate: &Coordinate) -> Self {
        self.empty_dirs.insert(self.root.join(coordinate.relative_dir()));
        self
    }

    /// POM exists but cannot be parsed
    pub(crate) fn with_broken(mut self, coordinate: &Coordinate) -> Self {
        let path = self.descriptor_path(coordinate);
        self.broken.insert(path);
        self
    }

    pub(crate) fn load_count(&self) -> usize {
        *self.loads.borrow()
    }
}

impl DescriptorStore for InMemoryStore {
    fn descriptor_path(&self, coordinate: &Coordinate) -> PathBuf {
        self.root
            .join(coordinate.relative_dir())
            .join(coordinate.descriptor_file_name())
    }

    fn locate_asset(&self, coordinate: &Coordinate) -> Result<PathBuf> {
        let path = self.descriptor_path(coordinate);
        if self.descriptors.contains_key(&path) || self.broken.contains(&path) {
            return Ok(path);
        }
        let dir = self.root.join(coordinate.relative_dir());
        if self.empty_dirs.contains(&dir) {
            return Err(RepominerError::DescriptorNotFound { path }.into());
        }
        Err(RepominerError::AssetNotFound { path: dir }.into())
    }

    fn load_descriptor(&self, path: &Path) -> Result<Descriptor> {
        *self.loads.borrow_mut() += 1;
        self.descriptors.get(path).cloned().ok_or_else(|| {
            RepominerError::DescriptorParseError {
                path: path.to_path_buf(),
                details: "no such file".to_string(),
            }
            .into()
        })
    }
}

/// Logger that keeps every message for later assertions
#[derive(Default)]
pub(crate) struct RecordingLogger {
    warnings: RefCell<Vec<String>>,
    debugs: RefCell<Vec<String>>,
}

impl RecordingLogger {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn warnings(&self) -> Vec<String> {
        self.warnings.borrow().clone()
    }

    pub(crate) fn debugs(&self) -> Vec<String> {
        self.debugs.borrow().clone()
    }
}

impl ResolutionLogger for RecordingLogger {
    fn warn(&self, message: fmt::Arguments<'_>) {
        self.warnings.borrow_mut().push(message.to_string());
    }

    fn debug(&self, message: fmt::Arguments<'_>) {
        self.debugs.borrow_mut().push(message.to_string());
    }
}

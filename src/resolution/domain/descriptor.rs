use std::collections::HashMap;

/// Namespace every Maven 4.0.0 POM declares on its root element
pub const POM_NAMESPACE: &str = "http://maven.apache.org/POM/4.0.0";

/// Parent reference as written in a POM; any field may be empty
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ParentRef {
    pub group_id: String,
    pub artifact_id: String,
    pub version: String,
}

impl ParentRef {
    pub fn new(group_id: String, artifact_id: String, version: String) -> Self {
        Self {
            group_id,
            artifact_id,
            version,
        }
    }

    /// A parent can only be located when all three fields are present
    pub fn is_complete(&self) -> bool {
        !self.group_id.is_empty() && !self.artifact_id.is_empty() && !self.version.is_empty()
    }
}

/// One `<dependency>` entry with its version left unevaluated
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RawDependency {
    pub group_id: String,
    pub artifact_id: String,
    /// Empty, a literal version, or a `${name}` placeholder
    pub version_expression: String,
}

impl RawDependency {
    pub fn new(group_id: String, artifact_id: String, version_expression: String) -> Self {
        Self {
            group_id,
            artifact_id,
            version_expression,
        }
    }
}

/// Parsed POM of a single asset
///
/// Descriptors are never cached: each visit of an asset parses its POM again
/// and drops the result once the asset's dependencies have been walked.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Descriptor {
    namespace: String,
    properties: HashMap<String, String>,
    parent: Option<ParentRef>,
    dependencies: Vec<RawDependency>,
}

impl Descriptor {
    pub fn new(
        namespace: String,
        properties: HashMap<String, String>,
        parent: Option<ParentRef>,
        dependencies: Vec<RawDependency>,
    ) -> Self {
        Self {
            namespace,
            properties,
            parent,
            dependencies,
        }
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    pub fn has_pom_namespace(&self) -> bool {
        self.namespace == POM_NAMESPACE
    }

    pub fn properties(&self) -> &HashMap<String, String> {
        &self.properties
    }

    pub fn parent(&self) -> Option<&ParentRef> {
        self.parent.as_ref()
    }

    pub fn dependencies(&self) -> &[RawDependency] {
        &self.dependencies
    }

    pub fn declares_artifact(&self, artifact_id: &str) -> bool {
        self.dependencies
            .iter()
            .any(|dependency| dependency.artifact_id == artifact_id)
    }
}

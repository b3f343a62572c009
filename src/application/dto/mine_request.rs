use crate::resolution::domain::Coordinate;
use crate::shared::error::RepominerError;
use crate::shared::Result;

/// MineRequest - Internal request DTO for the mining use case
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MineRequest {
    /// Asset whose dependencies are mined
    pub coordinate: Coordinate,
    /// Whether the starting coordinate itself is emitted first
    pub include_top: bool,
}

impl MineRequest {
    pub fn new(coordinate: Coordinate, include_top: bool) -> Self {
        Self {
            coordinate,
            include_top,
        }
    }

    pub fn builder() -> MineRequestBuilder {
        MineRequestBuilder::default()
    }
}

/// Builder assembling a `MineRequest` from loose strings
///
/// `build` fails when a required component is missing or the coordinate
/// would not map to a path inside the repository.
#[derive(Debug, Default)]
pub struct MineRequestBuilder {
    group_id: Option<String>,
    artifact_id: Option<String>,
    version: Option<String>,
    classifier: Option<String>,
    include_top: bool,
}

impl MineRequestBuilder {
    pub fn group_id(mut self, group_id: impl Into<String>) -> Self {
        self.group_id = Some(group_id.into());
        self
    }

    pub fn artifact_id(mut self, artifact_id: impl Into<String>) -> Self {
        self.artifact_id = Some(artifact_id.into());
        self
    }

    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    /// An empty classifier is treated as no classifier
    pub fn classifier(mut self, classifier: Option<impl Into<String>>) -> Self {
        self.classifier = classifier.map(Into::into).filter(|c| !c.is_empty());
        self
    }

    pub fn include_top(mut self, include_top: bool) -> Self {
        self.include_top = include_top;
        self
    }

    pub fn build(self) -> Result<MineRequest> {
        let group_id = required(self.group_id, "group id")?;
        let artifact_id = required(self.artifact_id, "artifact id")?;
        let version = required(self.version, "version")?;

        let coordinate = Coordinate::new(group_id, artifact_id, version, self.classifier)?;
        Ok(MineRequest::new(coordinate, self.include_top))
    }
}

fn required(value: Option<String>, name: &str) -> Result<String> {
    match value {
        Some(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(RepominerError::Validation {
            message: format!("{} is required", name),
        }
        .into()),
    }
}

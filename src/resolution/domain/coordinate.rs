use crate::shared::error::RepominerError;
use crate::shared::Result;
use serde::Serialize;
use std::path::PathBuf;

/// Coordinate value object identifying one artifact in the repository
///
/// Every component ends up as a path segment under the repository root, so
/// construction rejects anything that could climb out of it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Coordinate {
    group_id: String,
    artifact_id: String,
    version: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    classifier: Option<String>,
}

impl Coordinate {
    pub fn new(
        group_id: String,
        artifact_id: String,
        version: String,
        classifier: Option<String>,
    ) -> Result<Self> {
        let coordinate = Self {
            group_id,
            artifact_id,
            version,
            classifier,
        };
        coordinate.validate()?;
        Ok(coordinate)
    }

    fn validate(&self) -> Result<()> {
        if self.group_id.is_empty() {
            return Err(self.invalid("groupId cannot be empty"));
        }
        if self.group_id.split('.').any(str::is_empty) {
            return Err(self.invalid("groupId contains an empty segment"));
        }
        if self.artifact_id.is_empty() {
            return Err(self.invalid("artifactId cannot be empty"));
        }

        let mut parts = vec![
            ("groupId", self.group_id.as_str()),
            ("artifactId", self.artifact_id.as_str()),
            ("version", self.version.as_str()),
        ];
        if let Some(classifier) = &self.classifier {
            parts.push(("classifier", classifier.as_str()));
        }
        for (label, value) in parts {
            if value.contains('/') || value.contains('\\') {
                return Err(self.invalid(&format!("{} must not contain path separators", label)));
            }
            if value == "." || value == ".." {
                return Err(self.invalid(&format!("{} must not be a relative path", label)));
            }
        }
        Ok(())
    }

    fn invalid(&self, reason: &str) -> anyhow::Error {
        RepominerError::InvalidCoordinate {
            coordinate: self.gav(),
            reason: reason.to_string(),
        }
        .into()
    }

    pub fn group_id(&self) -> &str {
        &self.group_id
    }

    pub fn artifact_id(&self) -> &str {
        &self.artifact_id
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn classifier(&self) -> Option<&str> {
        self.classifier.as_deref()
    }

    /// `version` or `version-classifier`, as used in directory and file names
    pub fn version_with_classifier(&self) -> String {
        match &self.classifier {
            Some(classifier) => format!("{}-{}", self.version, classifier),
            None => self.version.clone(),
        }
    }

    /// Directory holding the asset, relative to the repository root
    pub fn relative_dir(&self) -> PathBuf {
        let mut dir: PathBuf = self.group_id.split('.').collect();
        dir.push(&self.artifact_id);
        dir.push(self.version_with_classifier());
        dir
    }

    /// File name of the asset's POM
    pub fn descriptor_file_name(&self) -> String {
        format!("{}-{}.pom", self.artifact_id, self.version_with_classifier())
    }

    /// `group:artifact:version[:classifier]`, for log messages
    pub fn gav(&self) -> String {
        match &self.classifier {
            Some(classifier) => format!(
                "{}:{}:{}:{}",
                self.group_id, self.artifact_id, self.version, classifier
            ),
            None => format!("{}:{}:{}", self.group_id, self.artifact_id, self.version),
        }
    }
}

/// `groupId artifactId version[-classifier]`, the line format consumers parse
impl std::fmt::Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {} {}",
            self.group_id,
            self.artifact_id,
            self.version_with_classifier()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn coordinate(g: &str, a: &str, v: &str, c: Option<&str>) -> Result<Coordinate> {
        Coordinate::new(
            g.to_string(),
            a.to_string(),
            v.to_string(),
            c.map(str::to_string),
        )
    }

    #[test]
    fn test_coordinate_new_valid() {
        let c = coordinate("org.example", "lib", "1.0", None).unwrap();
        assert_eq!(c.group_id(), "org.example");
        assert_eq!(c.artifact_id(), "lib");
        assert_eq!(c.version(), "1.0");
        assert_eq!(c.classifier(), None);
    }

    #[test]
    fn test_coordinate_accepts_empty_version() {
        let c = coordinate("g", "a", "", None).unwrap();
        assert_eq!(c.version(), "");
    }

    #[test]
    fn test_coordinate_rejects_empty_group_and_artifact() {
        assert!(coordinate("", "a", "1.0", None).is_err());
        assert!(coordinate("g", "", "1.0", None).is_err());
    }

    #[test]
    fn test_coordinate_rejects_empty_group_segment() {
        let err = coordinate("org..example", "a", "1.0", None).unwrap_err();
        assert!(err.to_string().contains("empty segment"));
        assert!(coordinate(".org", "a", "1.0", None).is_err());
    }

    #[test]
    fn test_coordinate_rejects_path_traversal() {
        assert!(coordinate("g", "../etc", "1.0", None).is_err());
        assert!(coordinate("g", "a", "..", None).is_err());
        assert!(coordinate("g", "a", "1.0", Some("x/y")).is_err());
        assert!(coordinate("g", "a\\b", "1.0", None).is_err());
    }

    #[test]
    fn test_relative_dir_without_classifier() {
        let c = coordinate("org.example.core", "lib", "1.0", None).unwrap();
        assert_eq!(c.relative_dir(), Path::new("org/example/core/lib/1.0"));
        assert_eq!(c.descriptor_file_name(), "lib-1.0.pom");
    }

    #[test]
    fn test_relative_dir_with_classifier() {
        let c = coordinate("g", "lib", "1.0", Some("jdk8")).unwrap();
        assert_eq!(c.relative_dir(), Path::new("g/lib/1.0-jdk8"));
        assert_eq!(c.descriptor_file_name(), "lib-1.0-jdk8.pom");
    }

    #[test]
    fn test_display() {
        let c = coordinate("g", "a", "1.0", None).unwrap();
        assert_eq!(c.to_string(), "g a 1.0");

        let c = coordinate("g", "a", "1.0", Some("tests")).unwrap();
        assert_eq!(c.to_string(), "g a 1.0-tests");
    }

    #[test]
    fn test_gav() {
        let c = coordinate("g", "a", "1.0", Some("tests")).unwrap();
        assert_eq!(c.gav(), "g:a:1.0:tests");
    }

    #[test]
    fn test_serialize_skips_missing_classifier() {
        let c = coordinate("g", "a", "1.0", None).unwrap();
        let json = serde_json::to_string(&c).unwrap();
        assert_eq!(json, r#"{"groupId":"g","artifactId":"a","version":"1.0"}"#);
    }
}

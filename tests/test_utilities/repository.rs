use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Local repository laid out on disk inside a temporary directory
pub struct TempRepository {
    dir: TempDir,
}

impl TempRepository {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().unwrap(),
        }
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    /// Writes `content` as the POM of `group:artifact:version_dir`
    ///
    /// `version_dir` is the version with the classifier suffix, if any.
    pub fn add_pom(&self, group_id: &str, artifact_id: &str, version_dir: &str, content: &str) -> PathBuf {
        let dir = self
            .root()
            .join(group_id.replace('.', "/"))
            .join(artifact_id)
            .join(version_dir);
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join(format!("{}-{}.pom", artifact_id, version_dir));
        fs::write(&path, content).unwrap();
        path
    }
}

/// POM text in the Maven namespace
pub fn pom(parent: Option<(&str, &str, &str)>, properties: &[(&str, &str)], dependencies: &[(&str, &str, &str)]) -> String {
    pom_with_root(
        r#"<project xmlns="http://maven.apache.org/POM/4.0.0">"#,
        parent,
        properties,
        dependencies,
    )
}

/// POM text with a caller-supplied `<project ...>` start tag
pub fn pom_with_root(
    root: &str,
    parent: Option<(&str, &str, &str)>,
    properties: &[(&str, &str)],
    dependencies: &[(&str, &str, &str)],
) -> String {
    let mut xml = format!("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n{}\n", root);
    if let Some((g, a, v)) = parent {
        xml.push_str(&format!(
            "  <parent><groupId>{}</groupId><artifactId>{}</artifactId><version>{}</version></parent>\n",
            g, a, v
        ));
    }
    if !properties.is_empty() {
        xml.push_str("  <properties>\n");
        for (name, value) in properties {
            xml.push_str(&format!("    <{0}>{1}</{0}>\n", name, value));
        }
        xml.push_str("  </properties>\n");
    }
    if !dependencies.is_empty() {
        xml.push_str("  <dependencies>\n");
        for (g, a, v) in dependencies {
            xml.push_str("    <dependency>");
            xml.push_str(&format!("<groupId>{}</groupId><artifactId>{}</artifactId>", g, a));
            if !v.is_empty() {
                xml.push_str(&format!("<version>{}</version>", v));
            }
            xml.push_str("</dependency>\n");
        }
        xml.push_str("  </dependencies>\n");
    }
    xml.push_str("</project>\n");
    xml
}

use crate::resolution::domain::{Descriptor, ParentRef, RawDependency};
use crate::shared::Result;
use roxmltree::{Document, Node, ParsingOptions};
use std::collections::HashMap;

/// Parses POM XML into a `Descriptor`
///
/// Elements are matched by local name. Only well-formedness is checked; a
/// root element outside the Maven namespace still produces a descriptor, and
/// a `<!DOCTYPE>` declaration is accepted.
pub fn parse_pom(content: &str) -> Result<Descriptor> {
    let options = ParsingOptions {
        allow_dtd: true,
        ..ParsingOptions::default()
    };
    let document = Document::parse_with_options(content, options)
        .map_err(|e| anyhow::anyhow!("Malformed XML: {}", e))?;
    let project = document.root_element();

    let namespace = project.tag_name().namespace().unwrap_or_default().to_string();

    let properties = child(project, "properties")
        .map(|properties| {
            elements(properties)
                .map(|property| (property.tag_name().name().to_string(), text(property)))
                .collect::<HashMap<_, _>>()
        })
        .unwrap_or_default();

    let parent = child(project, "parent").map(|parent| {
        ParentRef::new(
            child_text(parent, "groupId"),
            child_text(parent, "artifactId"),
            child_text(parent, "version"),
        )
    });

    // Every <dependencies> block in document order, including the ones under
    // dependencyManagement and build plugins.
    let dependencies = project
        .descendants()
        .filter(|node| node.is_element() && node.tag_name().name() == "dependencies")
        .flat_map(elements)
        .map(|dependency| {
            RawDependency::new(
                child_text(dependency, "groupId"),
                child_text(dependency, "artifactId"),
                child_text(dependency, "version"),
            )
        })
        .collect();

    Ok(Descriptor::new(namespace, properties, parent, dependencies))
}

fn elements<'a, 'input>(node: Node<'a, 'input>) -> impl Iterator<Item = Node<'a, 'input>> {
    node.children().filter(Node::is_element)
}

fn child<'a, 'input>(node: Node<'a, 'input>, name: &str) -> Option<Node<'a, 'input>> {
    elements(node).find(|element| element.tag_name().name() == name)
}

fn child_text(node: Node<'_, '_>, name: &str) -> String {
    child(node, name).map(text).unwrap_or_default()
}

/// All text children joined, so comments inside the element are skipped
fn text(node: Node<'_, '_>) -> String {
    node.children()
        .filter(Node::is_text)
        .filter_map(|child| child.text())
        .collect::<String>()
        .trim()
        .to_string()
}

use super::{ParentChainWalker, PropertyResolver};
use crate::ports::outbound::ResolutionLogger;
use crate::resolution::domain::Descriptor;

/// Maximum number of parent hops while resolving one dependency's version
pub const RECURSION_LIMIT: usize = 5;

const PLACEHOLDER_PREFIX: &str = "${";
const PLACEHOLDER_SUFFIX: char = '}';

/// VersionResolver service evaluating `<version>` expressions
///
/// Literals are returned as-is. A `${name}` placeholder is looked up in the
/// descriptor's own properties, then in each ancestor along the parent chain.
#[derive(Clone, Copy)]
pub struct VersionResolver<'a> {
    parents: ParentChainWalker<'a>,
    logger: &'a dyn ResolutionLogger,
}

impl<'a> VersionResolver<'a> {
    pub fn new(parents: ParentChainWalker<'a>, logger: &'a dyn ResolutionLogger) -> Self {
        Self { parents, logger }
    }

    /// Resolves `version_expression` as seen from `descriptor`
    ///
    /// `depth` counts parent hops for this one dependency and starts at 0
    /// for every dependency declaration. Returns `None` when the expression
    /// is empty, the parent chain runs out, or more than `RECURSION_LIMIT`
    /// hops would be needed.
    pub fn resolve(
        &self,
        descriptor: &Descriptor,
        group_id: &str,
        artifact_id: &str,
        version_expression: &str,
        depth: usize,
    ) -> Option<String> {
        if depth > RECURSION_LIMIT {
            self.logger.debug(format_args!(
                "[resolve] giving up on {}:{} {}: recursion limit ({}) reached",
                group_id, artifact_id, version_expression, RECURSION_LIMIT
            ));
            return None;
        }
        if version_expression.is_empty() {
            return None;
        }
        let Some(property_name) = placeholder_name(version_expression) else {
            return Some(version_expression.to_string());
        };

        let version = PropertyResolver::resolve_local(descriptor, property_name);
        if !version.is_empty() {
            self.logger.debug(format_args!(
                "[resolve] {}:{} version <{}> from property '{}' at depth {}",
                group_id, artifact_id, version, property_name, depth
            ));
            return Some(version.to_string());
        }

        let Some(parent) = self.parents.load_parent(descriptor) else {
            self.logger.debug(format_args!(
                "[resolve] {}:{} unresolved: parent POM could not be found",
                group_id, artifact_id
            ));
            return None;
        };

        // Computed for the trace only; resolution keeps climbing either way.
        let declared_by_parent = parent.declares_artifact(artifact_id);
        self.logger.debug(format_args!(
            "[resolve] parent declares {}: {}",
            artifact_id, declared_by_parent
        ));

        self.resolve(&parent, group_id, artifact_id, version_expression, depth + 1)
    }
}

/// `${name}` → `name`; `None` for literal versions
fn placeholder_name(expression: &str) -> Option<&str> {
    let rest = expression.strip_prefix(PLACEHOLDER_PREFIX)?;
    Some(rest.strip_suffix(PLACEHOLDER_SUFFIX).unwrap_or(rest))
}

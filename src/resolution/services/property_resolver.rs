use crate::resolution::domain::Descriptor;

/// PropertyResolver service for `<properties>` lookups
///
/// Pure lookup with no I/O. A missing property and a property with an empty
/// value both come back as `""`; callers cannot tell them apart.
pub struct PropertyResolver;

impl PropertyResolver {
    pub fn resolve_local<'d>(descriptor: &'d Descriptor, property_name: &str) -> &'d str {
        descriptor
            .properties()
            .get(property_name)
            .map(String::as_str)
            .unwrap_or("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolution::testing::PomBuilder;

    #[test]
    fn test_resolve_local_present() {
        let descriptor = PomBuilder::new().property("slf4j.version", "2.0.9").build();
        assert_eq!(
            PropertyResolver::resolve_local(&descriptor, "slf4j.version"),
            "2.0.9"
        );
    }

    #[test]
    fn test_resolve_local_absent_is_empty() {
        let descriptor = PomBuilder::new().build();
        assert_eq!(PropertyResolver::resolve_local(&descriptor, "missing"), "");
    }

    #[test]
    fn test_resolve_local_empty_value_matches_absent() {
        let descriptor = PomBuilder::new().property("blank", "").build();
        assert_eq!(
            PropertyResolver::resolve_local(&descriptor, "blank"),
            PropertyResolver::resolve_local(&descriptor, "missing")
        );
    }
}

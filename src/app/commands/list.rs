//! `list`: summarize the registry.

use crate::domain::Registry;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentSummary {
    pub name: String,
    pub description: String,
    pub dependencies: Vec<String>,
}

/// Summaries in registry order.
pub fn execute(registry: &Registry) -> Vec<ComponentSummary> {
    registry
        .list_all()
        .into_iter()
        .map(|c| ComponentSummary {
            name: c.name.to_string(),
            description: c.description.clone(),
            dependencies: c.dependencies.clone(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::load_embedded_registry;

    #[test]
    fn lists_bundled_components_by_name() {
        let summaries = execute(&load_embedded_registry().unwrap());

        let names: Vec<&str> = summaries.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, ["button-liquid", "parallax-card"]);
        assert_eq!(
            summaries[1].description,
            "Interactive card component with 3D parallax effects"
        );
        assert_eq!(summaries[1].dependencies, ["motion", "clsx"]);
    }

    #[test]
    fn empty_registry_lists_nothing() {
        assert!(execute(&Registry::default()).is_empty());
    }
}

//! Component registry model.
//!
//! The registry maps a component name to everything needed to materialize it
//! in a consumer project: verbatim source files, package dependencies, and
//! optional text additions for the build config and global stylesheet.

use std::collections::BTreeMap;

use serde::Deserialize;

use super::{AppError, ComponentName};

/// Category of a component file; decides the default install directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileKind {
    Component,
    Utils,
    Types,
}

/// A single file shipped by a component.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentFile {
    /// File name written into the resolved directory.
    pub name: String,
    /// Full file text, written verbatim.
    pub content: String,
    pub kind: FileKind,
    /// Project-relative path overriding category-based resolution.
    pub target: Option<String>,
}

/// Text insertion into the consumer's build-tool config.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct BuildConfigPatch {
    /// The patch counts as applied when every marker is already present.
    pub markers: Vec<String>,
    /// The snippet is inserted right after the first occurrence of this text.
    pub anchor: String,
    pub snippet: String,
    /// Shown to the user when the anchor cannot be found.
    pub manual_hint: String,
}

/// A registry entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentInfo {
    pub name: ComponentName,
    pub description: String,
    pub dependencies: Vec<String>,
    pub dev_dependencies: Vec<String>,
    pub files: Vec<ComponentFile>,
    pub build_config: Option<BuildConfigPatch>,
    pub global_css: Vec<String>,
}

/// De-duplicated package list preserving first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DependencySet(Vec<String>);

impl DependencySet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a package; returns false if it was already present.
    pub fn insert(&mut self, package: &str) -> bool {
        if self.0.iter().any(|p| p == package) {
            return false;
        }
        self.0.push(package.to_string());
        true
    }

    pub fn extend<'a>(&mut self, packages: impl IntoIterator<Item = &'a String>) {
        for package in packages {
            self.insert(package);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }
}

/// Dependencies aggregated across a batch of components.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AggregatedDependencies {
    pub dependencies: DependencySet,
    pub dev_dependencies: DependencySet,
}

impl AggregatedDependencies {
    pub fn collect<'a>(components: impl IntoIterator<Item = &'a ComponentInfo>) -> Self {
        let mut aggregated = Self::default();
        for component in components {
            aggregated.dependencies.extend(&component.dependencies);
            aggregated.dev_dependencies.extend(&component.dev_dependencies);
        }
        aggregated
    }
}

/// Read-only component registry, iterated in name order.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    components: BTreeMap<String, ComponentInfo>,
}

impl Registry {
    /// Build a registry, rejecting duplicate names.
    pub fn from_components(
        components: impl IntoIterator<Item = ComponentInfo>,
    ) -> Result<Self, AppError> {
        let mut map = BTreeMap::new();
        for component in components {
            let key = component.name.to_string();
            if map.contains_key(&key) {
                return Err(AppError::InvalidRegistryEntry {
                    component: key,
                    reason: "duplicate component name".to_string(),
                });
            }
            map.insert(key, component);
        }
        Ok(Self { components: map })
    }

    pub fn get(&self, name: &str) -> Option<&ComponentInfo> {
        self.components.get(name)
    }

    pub fn list_all(&self) -> Vec<&ComponentInfo> {
        self.components.values().collect()
    }

    pub fn names(&self) -> Vec<&str> {
        self.components.keys().map(String::as_str).collect()
    }

    /// Comma-separated list of valid names, for error reports.
    pub fn available(&self) -> String {
        self.names().join(", ")
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// Look up every requested name, failing on the first unknown one.
    pub fn resolve<S: AsRef<str>>(&self, names: &[S]) -> Result<Vec<&ComponentInfo>, AppError> {
        names
            .iter()
            .map(|name| {
                self.get(name.as_ref()).ok_or_else(|| AppError::ComponentNotFound {
                    name: name.as_ref().to_string(),
                    available: self.available(),
                })
            })
            .collect()
    }
}

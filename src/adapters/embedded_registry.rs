//! Component registry loaded from assets embedded in the binary.
//!
//! Each registry entry is a directory under `src/assets/registry/<name>/`
//! holding a `meta.toml` descriptor plus the source files it lists.

use include_dir::{Dir, include_dir};
use serde::Deserialize;
use tracing::debug;

use crate::domain::{
    AppError, BuildConfigPatch, ComponentFile, ComponentInfo, ComponentName, FileKind, Registry,
};

static REGISTRY_DIR: Dir<'_> = include_dir!("$CARGO_MANIFEST_DIR/src/assets/registry");

const META_FILE: &str = "meta.toml";

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ComponentMeta {
    /// Defaults to the directory name.
    name: Option<String>,
    description: String,
    #[serde(default)]
    dependencies: Vec<String>,
    #[serde(default)]
    dev_dependencies: Vec<String>,
    files: Vec<FileMeta>,
    build_config: Option<BuildConfigPatch>,
    #[serde(default)]
    global_css: Vec<String>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileMeta {
    name: String,
    kind: FileKind,
    /// Embedded file holding the content; defaults to `name`.
    source: Option<String>,
    target: Option<String>,
}

/// Load the registry shipped with this binary.
pub fn load_embedded_registry() -> Result<Registry, AppError> {
    load_registry_from(&REGISTRY_DIR)
}

fn load_registry_from(root: &Dir<'_>) -> Result<Registry, AppError> {
    let mut components = Vec::new();
    for entry in root.dirs() {
        let dir_name = entry.path().file_name().and_then(|n| n.to_str()).unwrap_or("");
        let Some(meta_file) = entry.get_file(entry.path().join(META_FILE)) else {
            debug!(entry = dir_name, "skipping registry directory without meta.toml");
            continue;
        };
        let meta_content = meta_file
            .contents_utf8()
            .ok_or_else(|| invalid(dir_name, "meta.toml is not valid UTF-8"))?;
        let meta: ComponentMeta =
            toml::from_str(meta_content).map_err(|e| invalid(dir_name, &e.to_string()))?;

        components.push(build_component(entry, dir_name, meta)?);
    }
    Registry::from_components(components)
}

fn build_component(
    dir: &Dir<'_>,
    dir_name: &str,
    meta: ComponentMeta,
) -> Result<ComponentInfo, AppError> {
    let name_str = meta.name.unwrap_or_else(|| dir_name.to_string());
    let name = ComponentName::new(&name_str)
        .map_err(|_| invalid(dir_name, &format!("Invalid component name '{}'", name_str)))?;

    if meta.files.is_empty() {
        return Err(invalid(dir_name, "component lists no files"));
    }

    let mut files = Vec::with_capacity(meta.files.len());
    for file in meta.files {
        let source = file.source.as_deref().unwrap_or(&file.name);
        let embedded = dir
            .get_file(dir.path().join(source))
            .ok_or_else(|| invalid(dir_name, &format!("missing source file '{}'", source)))?;
        let content = embedded
            .contents_utf8()
            .ok_or_else(|| invalid(dir_name, &format!("'{}' is not valid UTF-8", source)))?;

        files.push(ComponentFile {
            name: file.name,
            content: content.to_string(),
            kind: file.kind,
            target: file.target,
        });
    }

    Ok(ComponentInfo {
        name,
        description: meta.description,
        dependencies: meta.dependencies,
        dev_dependencies: meta.dev_dependencies,
        files,
        build_config: meta.build_config,
        global_css: meta.global_css,
    })
}

fn invalid(component: &str, reason: &str) -> AppError {
    AppError::InvalidRegistryEntry { component: component.to_string(), reason: reason.to_string() }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loads_shipped_components() {
        let registry = load_embedded_registry().unwrap();
        assert_eq!(registry.names(), vec!["button-liquid", "parallax-card"]);
    }

    #[test]
    fn parallax_card_carries_build_config_patch() {
        let registry = load_embedded_registry().unwrap();
        let card = registry.get("parallax-card").expect("parallax-card should exist");

        assert_eq!(card.dependencies, vec!["motion", "clsx"]);
        assert_eq!(card.files.len(), 1);
        assert_eq!(card.files[0].name, "parallax-card.tsx");
        assert_eq!(card.files[0].kind, FileKind::Component);
        assert!(card.files[0].content.starts_with("'use client';"));
        assert!(card.files[0].content.contains("export { ParallaxCard };"));

        let patch = card.build_config.as_ref().expect("build config patch");
        assert_eq!(patch.anchor, "extend: {");
        assert!(patch.snippet.starts_with("\n      perspective: {"));
    }

    #[test]
    fn button_liquid_has_no_build_mutations() {
        let registry = load_embedded_registry().unwrap();
        let button = registry.get("button-liquid").unwrap();

        assert!(!button.description.is_empty());
        assert!(button.build_config.is_none());
        assert!(button.global_css.is_empty());
        assert!(button.dev_dependencies.is_empty());
    }
}

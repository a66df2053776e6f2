//! Project configuration (`virtual-ui.json`) and alias resolution.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// File name written by `init`.
pub const CONFIG_FILE: &str = "virtual-ui.json";

/// Key under which `package.json` may embed the configuration.
pub const PACKAGE_JSON_KEY: &str = "virtual-ui";

pub const DEFAULT_TAILWIND_CONFIG: &str = "tailwind.config.js";
pub const DEFAULT_TAILWIND_CSS: &str = "app/globals.css";
pub const DEFAULT_COMPONENTS_ALIAS: &str = "@/components";
pub const DEFAULT_UTILS_ALIAS: &str = "@/lib/utils";
pub const DEFAULT_UI_ALIAS: &str = "@/components/ui";

const DEFAULT_UTILS_PATH: &str = "lib/utils";
const DEFAULT_UI_PATH: &str = "components/ui";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Style {
    Default,
    NewYork,
}

impl Style {
    pub const ALL: [Style; 2] = [Style::Default, Style::NewYork];

    pub fn label(&self) -> &'static str {
        match self {
            Style::Default => "Default",
            Style::NewYork => "New York",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TailwindSettings {
    /// Build-tool config path, relative to the project root.
    pub config: String,
    /// Global stylesheet path, relative to the project root.
    pub css: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub css_variables: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prefix: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Aliases {
    pub components: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub utils: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ui: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<Style>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rsc: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tsx: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tailwind: Option<TailwindSettings>,
    pub aliases: Aliases,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            style: Some(Style::Default),
            rsc: Some(true),
            tsx: Some(true),
            tailwind: Some(TailwindSettings {
                config: DEFAULT_TAILWIND_CONFIG.to_string(),
                css: DEFAULT_TAILWIND_CSS.to_string(),
                base_color: Some("slate".to_string()),
                css_variables: Some(true),
                prefix: None,
            }),
            aliases: Aliases {
                components: DEFAULT_COMPONENTS_ALIAS.to_string(),
                utils: Some(DEFAULT_UTILS_ALIAS.to_string()),
                ui: Some(DEFAULT_UI_ALIAS.to_string()),
            },
        }
    }
}

impl Config {
    pub fn typescript(&self) -> bool {
        self.tsx.unwrap_or(true)
    }
}

/// Concrete filesystem locations derived from a [`Config`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectPaths {
    pub tailwind_config: PathBuf,
    pub tailwind_css: PathBuf,
    pub components: PathBuf,
    /// Utils module path without extension (e.g. `<root>/lib/utils`).
    pub utils: PathBuf,
    pub ui: PathBuf,
}

impl ProjectPaths {
    /// Directory that receives `utils` category files.
    pub fn utils_dir(&self) -> &Path {
        self.utils.parent().unwrap_or(&self.utils)
    }
}

/// Strip the `@/` import prefix, leaving a project-relative path.
pub fn alias_to_relative(alias: &str) -> &str {
    alias.strip_prefix("@/").unwrap_or(alias)
}

pub fn resolve_paths(root: &Path, config: &Config) -> ProjectPaths {
    let tailwind = config.tailwind.as_ref();
    let tailwind_config = tailwind.map(|t| t.config.as_str()).unwrap_or(DEFAULT_TAILWIND_CONFIG);
    let tailwind_css = tailwind.map(|t| t.css.as_str()).unwrap_or(DEFAULT_TAILWIND_CSS);

    let components = alias_to_relative(&config.aliases.components);
    let utils = config.aliases.utils.as_deref().map(alias_to_relative).unwrap_or(DEFAULT_UTILS_PATH);
    let ui = config.aliases.ui.as_deref().map(alias_to_relative).unwrap_or(DEFAULT_UI_PATH);

    ProjectPaths {
        tailwind_config: root.join(tailwind_config),
        tailwind_css: root.join(tailwind_css),
        components: root.join(components),
        utils: root.join(utils),
        ui: root.join(ui),
    }
}

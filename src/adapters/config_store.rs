//! Filesystem persistence for `virtual-ui.json` and `package.json` reads.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::{debug, warn};

use crate::domain::config::{CONFIG_FILE, PACKAGE_JSON_KEY};
use crate::domain::{AppError, Config};

pub const PACKAGE_JSON: &str = "package.json";

/// JSON config files searched in order before falling back to `package.json`.
const CONFIG_SEARCH_PLACES: [&str; 2] = [CONFIG_FILE, "virtual-ui.config.json"];

/// Script configs need a JS runtime to evaluate; they are reported and ignored.
const SCRIPT_CONFIG_PLACES: [&str; 2] = ["virtual-ui.config.js", "virtual-ui.config.ts"];

/// Load the project configuration from `root`, if any.
///
/// Only `root` itself is searched; parent directories are not.
pub fn load_config(root: &Path) -> Result<Option<Config>, AppError> {
    for place in CONFIG_SEARCH_PLACES {
        let path = root.join(place);
        let Some(content) = read_optional(&path)? else {
            continue;
        };
        debug!(path = %path.display(), "loading config");
        let config = serde_json::from_str(&content)
            .map_err(|e| AppError::InvalidConfig { path, details: e.to_string() })?;
        return Ok(Some(config));
    }

    for place in SCRIPT_CONFIG_PLACES {
        if root.join(place).exists() {
            warn!(file = place, "script config files are not supported; use {}", CONFIG_FILE);
        }
    }

    let Some(package_json) = read_package_json(root)? else {
        return Ok(None);
    };
    match package_json.get(PACKAGE_JSON_KEY) {
        Some(section) => {
            debug!("loading config from package.json");
            let config = serde_json::from_value(section.clone()).map_err(|e| {
                AppError::InvalidConfig { path: root.join(PACKAGE_JSON), details: e.to_string() }
            })?;
            Ok(Some(config))
        }
        None => Ok(None),
    }
}

/// Write `virtual-ui.json` in `root` and return its path.
pub fn save_config(root: &Path, config: &Config) -> Result<PathBuf, AppError> {
    let path = root.join(CONFIG_FILE);
    let mut content = serde_json::to_string_pretty(config).map_err(|e| {
        AppError::InvalidConfig { path: path.clone(), details: e.to_string() }
    })?;
    content.push('\n');
    fs::write(&path, content).map_err(|e| AppError::write_failed(&path, e))?;
    Ok(path)
}

/// Parse `package.json` in `root`; `None` when the file does not exist.
pub fn read_package_json(root: &Path) -> Result<Option<Value>, AppError> {
    let path = root.join(PACKAGE_JSON);
    let Some(content) = read_optional(&path)? else {
        return Ok(None);
    };
    serde_json::from_str(&content)
        .map(Some)
        .map_err(|e| AppError::InvalidConfig { path, details: e.to_string() })
}

fn read_optional(path: &Path) -> Result<Option<String>, AppError> {
    match fs::read_to_string(path) {
        Ok(content) => Ok(Some(content)),
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(err) => Err(err.into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Style;
    use tempfile::TempDir;

    #[test]
    fn missing_config_is_none() {
        let dir = TempDir::new().unwrap();
        assert!(load_config(dir.path()).unwrap().is_none());
    }

    #[test]
    fn saved_config_round_trips() {
        let dir = TempDir::new().unwrap();
        let path = save_config(dir.path(), &Config::default()).unwrap();

        assert_eq!(path, dir.path().join("virtual-ui.json"));
        let raw = fs::read_to_string(&path).unwrap();
        assert!(raw.starts_with("{\n  \"style\": \"default\""));
        assert!(raw.ends_with("}\n"));
        assert_eq!(load_config(dir.path()).unwrap(), Some(Config::default()));
    }

    #[test]
    fn alternate_json_file_is_found() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("virtual-ui.config.json"),
            r#"{"style":"new-york","aliases":{"components":"@/ui-kit"}}"#,
        )
        .unwrap();

        let config = load_config(dir.path()).unwrap().unwrap();
        assert_eq!(config.style, Some(Style::NewYork));
        assert_eq!(config.aliases.components, "@/ui-kit");
    }

    #[test]
    fn primary_file_wins_over_alternate() {
        let dir = TempDir::new().unwrap();
        save_config(dir.path(), &Config::default()).unwrap();
        fs::write(
            dir.path().join("virtual-ui.config.json"),
            r#"{"aliases":{"components":"@/other"}}"#,
        )
        .unwrap();

        let config = load_config(dir.path()).unwrap().unwrap();
        assert_eq!(config.aliases.components, "@/components");
    }

    #[test]
    fn package_json_section_is_used() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("package.json"),
            r#"{"name":"app","virtual-ui":{"style":"new-york","aliases":{"components":"@/custom-components","utils":"@/custom-utils"}}}"#,
        )
        .unwrap();

        let config = load_config(dir.path()).unwrap().unwrap();
        assert_eq!(config.style, Some(Style::NewYork));
        assert_eq!(config.aliases.components, "@/custom-components");
    }

    #[test]
    fn package_json_without_section_is_none() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("package.json"), r#"{"name":"app"}"#).unwrap();
        assert!(load_config(dir.path()).unwrap().is_none());
    }

    #[test]
    fn malformed_config_is_an_error() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("virtual-ui.json"), "{ not json").unwrap();

        let err = load_config(dir.path()).unwrap_err();
        assert!(matches!(err, AppError::InvalidConfig { .. }));
    }
}

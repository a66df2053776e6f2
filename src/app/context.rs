use std::path::{Path, PathBuf};

use crate::domain::Registry;
use crate::ports::{PackageManager, Prompter};

/// Application context holding dependencies for command execution.
pub struct AppContext<P: Prompter, M: PackageManager> {
    root: PathBuf,
    prompter: P,
    packages: M,
    registry: Registry,
}

impl<P: Prompter, M: PackageManager> AppContext<P, M> {
    /// Create a new application context for the project at `root`.
    pub fn new(root: PathBuf, prompter: P, packages: M, registry: Registry) -> Self {
        Self { root, prompter, packages, registry }
    }

    /// Consumer project root.
    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn prompter(&self) -> &P {
        &self.prompter
    }

    pub fn packages(&self) -> &M {
        &self.packages
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Render `path` relative to the project root for user-facing messages.
    pub fn display_path(&self, path: &Path) -> String {
        path.strip_prefix(&self.root).unwrap_or(path).display().to_string()
    }
}

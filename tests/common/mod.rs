//! Shared testing utilities for virtual-ui CLI tests.

use assert_cmd::Command;
use assert_fs::TempDir;
use assert_fs::fixture::ChildPath;
use assert_fs::prelude::*;
use std::fs;
use std::path::Path;

/// Package manager program that never exists, so installs fail deterministically.
pub const MISSING_PACKAGE_MANAGER: &str = "virtual-ui-test-missing-pm";

/// Testing harness providing an isolated project for CLI exercises.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
    work_dir: ChildPath,
}

#[allow(dead_code)]
impl TestContext {
    /// Create an isolated Node.js project with a bare package.json.
    pub fn new() -> Self {
        let ctx = Self::without_package_json();
        ctx.work_dir.child("package.json").write_str(r#"{"name":"app"}"#).unwrap();
        ctx
    }

    /// Create an isolated directory that is not a Node.js project.
    pub fn without_package_json() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.child("work");
        work_dir.create_dir_all().expect("Failed to create test work directory");
        Self { root, work_dir }
    }

    /// Parent of the work directory.
    pub fn root(&self) -> &Path {
        self.root.path()
    }

    /// Path to the project directory used for CLI invocations.
    pub fn work_dir(&self) -> &ChildPath {
        &self.work_dir
    }

    /// A file or directory inside the project.
    pub fn child(&self, path: &str) -> ChildPath {
        self.work_dir.child(path)
    }

    /// Build a command for invoking the compiled binary within the project.
    pub fn cli(&self) -> Command {
        self.cli_in(self.work_dir.path())
    }

    /// Build a command for invoking the compiled binary within a custom directory.
    pub fn cli_in<P: AsRef<Path>>(&self, dir: P) -> Command {
        let mut cmd = Command::cargo_bin("virtual-ui").expect("Failed to locate virtual-ui binary");
        cmd.current_dir(dir.as_ref())
            .env("VIRTUAL_UI_PACKAGE_MANAGER", MISSING_PACKAGE_MANAGER)
            .env("NO_COLOR", "1")
            .env("CLICOLOR", "0")
            .env_remove("RUST_LOG");
        cmd
    }

    /// Write a minimal `virtual-ui.json` so commands treat the project as initialized.
    pub fn write_config(&self) {
        self.child("virtual-ui.json")
            .write_str(r#"{"aliases":{"components":"@/components"}}"#)
            .unwrap();
    }

    /// Read a project file as text.
    pub fn read(&self, path: &str) -> String {
        fs::read_to_string(self.child(path).path())
            .unwrap_or_else(|e| panic!("Failed to read {}: {}", path, e))
    }

    /// Parse `virtual-ui.json`.
    pub fn read_config(&self) -> serde_json::Value {
        serde_json::from_str(&self.read("virtual-ui.json")).expect("config should be valid JSON")
    }
}

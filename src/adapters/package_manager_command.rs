use std::path::PathBuf;
use std::process::Command;

use tracing::debug;

use crate::domain::AppError;
use crate::ports::{DependencyKind, PackageManager};

/// Environment variable selecting the package manager program.
pub const PACKAGE_MANAGER_ENV: &str = "VIRTUAL_UI_PACKAGE_MANAGER";
pub const DEFAULT_PACKAGE_MANAGER: &str = "npm";

/// Package manager driven through its command line (`npm` by default).
///
/// The program must understand `install [--save-dev] <pkgs>` and
/// `exec -- <tool> <args>`.
#[derive(Debug, Clone)]
pub struct CommandPackageManager {
    program: String,
    root: PathBuf,
}

impl CommandPackageManager {
    pub fn new(program: impl Into<String>, root: PathBuf) -> Self {
        Self { program: program.into(), root }
    }

    fn install_args<'a>(packages: &'a [String], kind: DependencyKind) -> Vec<&'a str> {
        let mut args = vec!["install"];
        if kind == DependencyKind::Dev {
            args.push("--save-dev");
        }
        args.extend(packages.iter().map(String::as_str));
        args
    }

    fn run(&self, args: &[&str]) -> Result<(), AppError> {
        let command_line = format!("{} {}", self.program, args.join(" "));
        debug!(command = %command_line, cwd = %self.root.display(), "running package manager");

        let output = Command::new(&self.program)
            .args(args)
            .current_dir(&self.root)
            .output()
            .map_err(|e| AppError::PackageManager {
                command: command_line.clone(),
                details: e.to_string(),
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            return Err(AppError::PackageManager {
                command: command_line,
                details: if stderr.is_empty() { output.status.to_string() } else { stderr },
            });
        }
        Ok(())
    }
}

impl PackageManager for CommandPackageManager {
    fn install(&self, packages: &[String], kind: DependencyKind) -> Result<(), AppError> {
        if packages.is_empty() {
            return Ok(());
        }
        self.run(&Self::install_args(packages, kind))
    }

    fn exec(&self, tool: &str, args: &[&str]) -> Result<(), AppError> {
        let mut full = vec!["exec", "--", tool];
        full.extend_from_slice(args);
        self.run(&full)
    }

    fn install_command(&self, packages: &[String], kind: DependencyKind) -> String {
        format!("{} {}", self.program, Self::install_args(packages, kind).join(" "))
    }
}

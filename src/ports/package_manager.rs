use crate::domain::AppError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DependencyKind {
    Runtime,
    Dev,
}

/// Port for the consumer project's package manager.
///
/// Implementations run inside the project root they were created for.
pub trait PackageManager {
    /// Install packages into the project.
    fn install(&self, packages: &[String], kind: DependencyKind) -> Result<(), AppError>;

    /// Run a package-provided executable (`npx`-style).
    fn exec(&self, tool: &str, args: &[&str]) -> Result<(), AppError>;

    /// Command line a user can run by hand when `install` fails.
    fn install_command(&self, packages: &[String], kind: DependencyKind) -> String;
}

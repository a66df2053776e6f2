//! API Facade for the application.
//!
//! This module exposes high-level functions that glue together context creation
//! and command execution.

use std::path::PathBuf;

use crate::adapters::{CommandPackageManager, DialoguerPrompter, load_embedded_registry};
use crate::app::{
    AppContext,
    commands::{add, init, list},
};

pub use crate::app::commands::add::{
    AddOptions, AddOutcome, AddReport, FileAction, FileReport, PatchReport, PatchStatus,
    PatchTarget,
};
pub use crate::app::commands::dependencies::{InstallReport, InstallStatus};
pub use crate::app::commands::init::{
    InitOptions, InitOutcome, InitReport, TAILWIND_DOCS_URL, TailwindSetup,
};
pub use crate::app::commands::list::ComponentSummary;
pub use crate::domain::AppError;

/// Create an `AppContext` for a project root using the terminal and a command-line package manager.
fn create_context(
    root: PathBuf,
    package_manager: &str,
) -> Result<AppContext<DialoguerPrompter, CommandPackageManager>, AppError> {
    let registry = load_embedded_registry()?;
    let packages = CommandPackageManager::new(package_manager, root.clone());
    Ok(AppContext::new(root, DialoguerPrompter::new(), packages, registry))
}

/// Initialize the project at `root`.
pub fn init_at(
    root: impl Into<PathBuf>,
    options: &InitOptions,
    package_manager: &str,
) -> Result<InitOutcome, AppError> {
    let ctx = create_context(root.into(), package_manager)?;
    init::execute(&ctx, options)
}

/// Add registry components to the project at `root`.
pub fn add_at(
    root: impl Into<PathBuf>,
    options: &AddOptions,
    package_manager: &str,
) -> Result<AddOutcome, AppError> {
    let ctx = create_context(root.into(), package_manager)?;
    add::execute(&ctx, options)
}

/// List every bundled component.
pub fn list() -> Result<Vec<ComponentSummary>, AppError> {
    Ok(list::execute(&load_embedded_registry()?))
}

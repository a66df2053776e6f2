//! Add command implementation.

use std::path::{Path, PathBuf};

use colored::Colorize;

use super::{print_install_reports, relative};
use crate::app::api::{AddOptions, AddOutcome, FileAction, PatchStatus};
use crate::domain::AppError;

pub fn run_add(
    root: &Path,
    components: Vec<String>,
    yes: bool,
    overwrite: bool,
    path: Option<PathBuf>,
    package_manager: &str,
) -> Result<(), AppError> {
    let options = AddOptions { components, yes, overwrite, path };
    let report = match crate::app::api::add_at(root, &options, package_manager)? {
        AddOutcome::Cancelled => {
            println!("Installation cancelled. Run `virtual-ui init` to get started.");
            return Ok(());
        }
        AddOutcome::Added(report) => report,
    };

    if let Some(init) = &report.initialized {
        super::init::print_report(root, init);
    }
    print_install_reports(&report.dependencies);

    for file in &report.files {
        let path = relative(root, &file.path);
        match file.action {
            FileAction::Created => println!("{} Added {}", "✔".green(), path),
            FileAction::Overwritten => println!("{} Overwrote {}", "✔".green(), path),
            FileAction::Skipped => {
                println!("{} Skipped {} (already exists)", "ℹ".blue(), path)
            }
            FileAction::Declined => println!("{} Kept existing {}", "ℹ".blue(), path),
        }
    }

    for patch in &report.patches {
        let path = relative(root, &patch.path);
        match &patch.status {
            PatchStatus::Applied => println!("{} Updated {}", "✔".green(), path),
            PatchStatus::ManualActionRequired(hint) => {
                println!("{} Could not update {} automatically", "⚠".yellow(), path);
                println!("  Please add the following manually:\n  {}", hint.cyan());
            }
            PatchStatus::AlreadyPresent | PatchStatus::TargetMissing => {}
        }
    }

    println!("{} Added {}", "✔".green(), report.components.join(", ").bold());
    Ok(())
}

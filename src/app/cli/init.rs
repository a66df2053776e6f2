//! Init command implementation.

use std::path::Path;

use colored::Colorize;

use super::{print_install_reports, relative};
use crate::app::api::{InitOptions, InitOutcome, InitReport, TAILWIND_DOCS_URL, TailwindSetup};
use crate::domain::AppError;

pub fn run_init(root: &Path, yes: bool, package_manager: &str) -> Result<(), AppError> {
    println!("{}", "Welcome to Virtual UI!".bold());

    match crate::app::api::init_at(root, &InitOptions { yes }, package_manager)? {
        InitOutcome::Cancelled => println!("Initialization cancelled."),
        InitOutcome::Initialized(report) => {
            print_report(root, &report);
            println!("{} Virtual UI initialized successfully!", "✔".green());
            println!();
            println!("You can now add components:");
            println!("  {}", "virtual-ui add parallax-card".cyan());
        }
    }
    Ok(())
}

/// Summarize an init run; shared with `add` auto-initialization.
pub(super) fn print_report(root: &Path, report: &InitReport) {
    println!("{} Saved configuration to {}", "✔".green(), relative(root, &report.config_path));
    print_install_reports(&report.dependencies);

    if report.utils_created {
        println!("{} Created {}", "✔".green(), relative(root, &report.utils_path));
    }

    match &report.tailwind {
        Some(TailwindSetup::Configured(path)) => {
            println!("{} Created {}", "✔".green(), relative(root, path));
        }
        Some(TailwindSetup::Failed(_)) => {
            println!("{} Failed to set up Tailwind CSS", "⚠".yellow());
            println!("  Please set it up manually: {}", TAILWIND_DOCS_URL.cyan());
        }
        None => {}
    }
}

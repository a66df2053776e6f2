//! CLI Adapter.

mod add;
mod init;
mod list;

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use colored::Colorize;
use tracing_subscriber::EnvFilter;

use crate::adapters::package_manager_command::{DEFAULT_PACKAGE_MANAGER, PACKAGE_MANAGER_ENV};
use crate::app::api::{InstallReport, InstallStatus};
use crate::domain::AppError;

#[derive(Parser)]
#[command(name = "virtual-ui")]
#[command(version)]
#[command(about = "Add Virtual UI components to your project", long_about = None)]
struct Cli {
    /// Package manager used to install dependencies and run tools
    #[arg(long, global = true, env = PACKAGE_MANAGER_ENV, default_value = DEFAULT_PACKAGE_MANAGER)]
    package_manager: String,
    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize Virtual UI in your project
    #[clap(visible_alias = "i")]
    Init {
        /// Skip confirmation prompts and use defaults
        #[arg(short, long)]
        yes: bool,
        /// Working directory (defaults to the current directory)
        #[arg(short, long)]
        cwd: Option<PathBuf>,
    },
    /// Add components to your project
    #[clap(visible_alias = "a")]
    Add {
        /// Component names
        components: Vec<String>,
        /// Skip confirmation prompts
        #[arg(short, long)]
        yes: bool,
        /// Overwrite existing files
        #[arg(short, long)]
        overwrite: bool,
        /// Working directory (defaults to the current directory)
        #[arg(short, long)]
        cwd: Option<PathBuf>,
        /// Directory for component files, relative to the working directory
        #[arg(short, long)]
        path: Option<PathBuf>,
    },
    /// List available components
    #[clap(visible_alias = "ls")]
    List,
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result: Result<(), AppError> = match cli.command {
        Commands::Init { yes, cwd } => {
            resolve_root(cwd).and_then(|root| init::run_init(&root, yes, &cli.package_manager))
        }
        Commands::Add { components, yes, overwrite, cwd, path } => resolve_root(cwd)
            .and_then(|root| {
                add::run_add(&root, components, yes, overwrite, path, &cli.package_manager)
            }),
        Commands::List => list::run_list(),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn resolve_root(cwd: Option<PathBuf>) -> Result<PathBuf, AppError> {
    let current = std::env::current_dir()?;
    Ok(match cwd {
        Some(dir) => current.join(dir),
        None => current,
    })
}

fn relative(root: &Path, path: &Path) -> String {
    path.strip_prefix(root).unwrap_or(path).display().to_string()
}

fn print_install_reports(reports: &[InstallReport]) {
    for report in reports {
        match &report.status {
            InstallStatus::Installed => {
                println!("{} Installed {}", "✔".green(), report.packages.join(", "));
            }
            InstallStatus::Failed { manual_command, .. } => {
                println!("{} Failed to install {}", "⚠".yellow(), report.packages.join(", "));
                println!("  Please install manually: {}", manual_command.cyan());
            }
        }
    }
}

//! `init`: write `virtual-ui.json` and prepare the consumer project.

use std::fs;
use std::path::PathBuf;

use serde_json::Value;
use tracing::{debug, info, warn};

use super::dependencies::{self, InstallReport};
use crate::adapters::config_store::{self, read_package_json};
use crate::adapters::templates;
use crate::domain::config::{
    DEFAULT_COMPONENTS_ALIAS, DEFAULT_TAILWIND_CONFIG, DEFAULT_UTILS_ALIAS, alias_to_relative,
};
use crate::domain::project::declares_dependency;
use crate::domain::{
    AppError, Aliases, Config, DependencySet, ProjectInfo, Style, TailwindSettings,
};
use crate::ports::{PackageManager, Prompter};

use crate::app::AppContext;

const REQUIRED_DEPENDENCIES: [&str; 1] = ["clsx"];
const TAILWIND_DEV_DEPENDENCIES: [&str; 3] = ["tailwindcss", "postcss", "autoprefixer"];

pub const TAILWIND_DOCS_URL: &str = "https://tailwindcss.com/docs/installation";

#[derive(Debug, Clone, Copy, Default)]
pub struct InitOptions {
    /// Skip every prompt and use the default configuration.
    pub yes: bool,
}

#[derive(Debug, Clone)]
pub enum InitOutcome {
    /// The user declined to replace an existing configuration.
    Cancelled,
    Initialized(InitReport),
}

/// Result of running `tailwindcss init` for projects without tailwind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TailwindSetup {
    Configured(PathBuf),
    Failed(String),
}

#[derive(Debug, Clone)]
pub struct InitReport {
    pub config_path: PathBuf,
    pub config: Config,
    pub project: ProjectInfo,
    /// Empty when every required dependency was already declared.
    pub dependencies: Vec<InstallReport>,
    pub utils_path: PathBuf,
    pub utils_created: bool,
    pub ui_dir: PathBuf,
    /// `None` when the project already uses tailwind.
    pub tailwind: Option<TailwindSetup>,
}

/// Execute the init command.
pub fn execute<P, M>(ctx: &AppContext<P, M>, options: &InitOptions) -> Result<InitOutcome, AppError>
where
    P: Prompter,
    M: PackageManager,
{
    let root = ctx.root();

    let existing = match config_store::load_config(root) {
        Ok(config) => config.is_some(),
        Err(AppError::InvalidConfig { path, details }) => {
            warn!(path = %path.display(), %details, "existing configuration is invalid");
            true
        }
        Err(err) => return Err(err),
    };

    if existing && !options.yes {
        let proceed = ctx.prompter().confirm(
            "Virtual UI is already initialized. Do you want to overwrite the configuration?",
            false,
        )?;
        if !proceed {
            info!("initialization cancelled by user");
            return Ok(InitOutcome::Cancelled);
        }
    }

    let package_json = read_package_json(root)?.ok_or(AppError::PackageJsonMissing)?;
    let project = ProjectInfo::detect(&package_json, root.join("tsconfig.json").exists());
    debug!(?project, "detected project");

    let config = if options.yes { Config::default() } else { prompt_config(ctx.prompter(), &project)? };

    let config_path = config_store::save_config(root, &config)?;
    info!(path = %config_path.display(), "configuration saved");

    let (missing, missing_dev) = missing_dependencies(&package_json, &project);
    let dependencies = dependencies::install_all(ctx.packages(), &missing, &missing_dev);

    let (utils_path, utils_created) = write_utils_file(root, &config)?;

    let ui_dir = root.join(alias_to_relative(&config.aliases.components)).join("ui");
    fs::create_dir_all(&ui_dir)?;

    let tailwind = if project.has_tailwind { None } else { Some(setup_tailwind(ctx)?) };

    Ok(InitOutcome::Initialized(InitReport {
        config_path,
        config,
        project,
        dependencies,
        utils_path,
        utils_created,
        ui_dir,
        tailwind,
    }))
}

fn prompt_config<P: Prompter>(prompter: &P, project: &ProjectInfo) -> Result<Config, AppError> {
    let styles: Vec<String> = Style::ALL.iter().map(|s| s.label().to_string()).collect();
    let style = Style::ALL[prompter.select("Which style would you like to use?", &styles, 0)?];

    let tsx = prompter.confirm("Would you like to use TypeScript?", project.has_typescript)?;
    let rsc = if project.is_next {
        prompter.confirm("Would you like to use React Server Components?", true)?
    } else {
        false
    };

    let components = prompter
        .input("Configure the import alias for components?", DEFAULT_COMPONENTS_ALIAS)?;
    let utils = prompter.input("Configure the import alias for utils?", DEFAULT_UTILS_ALIAS)?;
    let css_variables = prompter.confirm("Would you like to use CSS variables for colors?", true)?;

    let css = if project.is_next { "app/globals.css" } else { "src/index.css" };

    Ok(Config {
        style: Some(style),
        rsc: Some(rsc),
        tsx: Some(tsx),
        tailwind: Some(TailwindSettings {
            config: DEFAULT_TAILWIND_CONFIG.to_string(),
            css: css.to_string(),
            base_color: Some("slate".to_string()),
            css_variables: Some(css_variables),
            prefix: None,
        }),
        aliases: Aliases { ui: Some(format!("{}/ui", components)), components, utils: Some(utils) },
    })
}

fn missing_dependencies(
    package_json: &Value,
    project: &ProjectInfo,
) -> (DependencySet, DependencySet) {
    let mut missing = DependencySet::new();
    for dep in REQUIRED_DEPENDENCIES {
        if !declares_dependency(package_json, dep) {
            missing.insert(dep);
        }
    }

    let mut missing_dev = DependencySet::new();
    if !project.has_tailwind {
        for dep in TAILWIND_DEV_DEPENDENCIES {
            if !declares_dependency(package_json, dep) {
                missing_dev.insert(dep);
            }
        }
    }
    (missing, missing_dev)
}

fn write_utils_file(root: &std::path::Path, config: &Config) -> Result<(PathBuf, bool), AppError> {
    let alias = config.aliases.utils.as_deref().unwrap_or(DEFAULT_UTILS_ALIAS);
    let extension = if config.typescript() { "ts" } else { "js" };
    let path = root.join(format!("{}.{}", alias_to_relative(alias), extension));

    if path.exists() {
        debug!(path = %path.display(), "utils file already exists");
        return Ok((path, false));
    }
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = templates::render_utils(config.typescript())?;
    fs::write(&path, content).map_err(|e| AppError::write_failed(&path, e))?;
    Ok((path, true))
}

fn setup_tailwind<P, M>(ctx: &AppContext<P, M>) -> Result<TailwindSetup, AppError>
where
    P: Prompter,
    M: PackageManager,
{
    if let Err(err) = ctx.packages().exec("tailwindcss", &["init", "-p"]) {
        warn!(error = %err, "tailwind setup failed");
        return Ok(TailwindSetup::Failed(err.to_string()));
    }
    let path = ctx.root().join(DEFAULT_TAILWIND_CONFIG);
    let content = templates::render_tailwind_config()?;
    fs::write(&path, content).map_err(|e| AppError::write_failed(&path, e))?;
    Ok(TailwindSetup::Configured(path))
}

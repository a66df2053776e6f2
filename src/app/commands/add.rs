//! `add`: materialize registry components into the consumer project.

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use super::dependencies::{self, InstallReport};
use super::init::{self, InitOptions, InitOutcome, InitReport};
use crate::adapters::config_store;
use crate::app::AppContext;
use crate::domain::patch::{append_missing_rules, apply_build_config_patch};
use crate::domain::{
    AggregatedDependencies, AppError, BuildConfigEdit, BuildConfigPatch, ComponentFile,
    ComponentInfo, Config, ConflictPolicy, FileKind, ProjectPaths, resolve_paths,
};
use crate::ports::{PackageManager, Prompter};

const NOT_INITIALIZED: &str = "Virtual UI is not initialized in this project.";

#[derive(Debug, Clone, Default)]
pub struct AddOptions {
    /// Registry names; prompts for a selection when empty.
    pub components: Vec<String>,
    pub yes: bool,
    pub overwrite: bool,
    /// Project-relative directory overriding the configured ui directory.
    pub path: Option<PathBuf>,
}

#[derive(Debug, Clone)]
pub enum AddOutcome {
    /// The user declined auto-initialization; nothing was written.
    Cancelled,
    Added(AddReport),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileAction {
    Created,
    Overwritten,
    /// Existing file kept because of `--yes`.
    Skipped,
    /// Existing file kept because the user said no.
    Declined,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileReport {
    pub path: PathBuf,
    pub action: FileAction,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatchTarget {
    BuildConfig,
    Stylesheet,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatchStatus {
    Applied,
    AlreadyPresent,
    /// The file to patch does not exist; nothing was done.
    TargetMissing,
    ManualActionRequired(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatchReport {
    pub component: String,
    pub target: PatchTarget,
    pub path: PathBuf,
    pub status: PatchStatus,
}

#[derive(Debug, Clone)]
pub struct AddReport {
    /// Present when `add` had to initialize the project first.
    pub initialized: Option<InitReport>,
    pub components: Vec<String>,
    pub dependencies: Vec<InstallReport>,
    pub files: Vec<FileReport>,
    pub patches: Vec<PatchReport>,
}

/// Execute the add command.
pub fn execute<P, M>(ctx: &AppContext<P, M>, options: &AddOptions) -> Result<AddOutcome, AppError>
where
    P: Prompter,
    M: PackageManager,
{
    let names = select_components(ctx, options)?;
    let components = ctx.registry().resolve(&names)?;

    let (config, initialized) = match ensure_config(ctx, options.yes)? {
        Some(found) => found,
        None => return Ok(AddOutcome::Cancelled),
    };

    let paths = resolve_paths(ctx.root(), &config);
    let ui_dir = options.path.as_ref().map(|p| ctx.root().join(p)).unwrap_or(paths.ui.clone());
    fs::create_dir_all(&ui_dir)?;
    fs::create_dir_all(paths.utils_dir())?;

    let aggregated = AggregatedDependencies::collect(components.iter().copied());
    let dependencies = dependencies::install_all(
        ctx.packages(),
        &aggregated.dependencies,
        &aggregated.dev_dependencies,
    );

    let policy = ConflictPolicy::from_flags(options.overwrite, options.yes);
    let mut files = Vec::new();
    let mut patches = Vec::new();
    for component in &components {
        for file in &component.files {
            let target = target_path(ctx.root(), &paths, &ui_dir, file);
            files.push(write_component_file(ctx, &target, file, policy)?);
        }
        patches.extend(apply_patches(component, &paths)?);
    }

    info!(count = components.len(), "components added");
    Ok(AddOutcome::Added(AddReport {
        initialized,
        components: components.iter().map(|c| c.name.to_string()).collect(),
        dependencies,
        files,
        patches,
    }))
}

fn select_components<P, M>(ctx: &AppContext<P, M>, options: &AddOptions) -> Result<Vec<String>, AppError>
where
    P: Prompter,
    M: PackageManager,
{
    if !options.components.is_empty() {
        let mut seen = BTreeSet::new();
        let unique = options.components.iter().filter(|name| seen.insert(name.as_str()));
        return Ok(unique.cloned().collect());
    }
    let registry = ctx.registry();
    if options.yes || registry.is_empty() {
        return Err(AppError::NoComponentsSelected { available: registry.available() });
    }

    let all = registry.list_all();
    let items: Vec<String> =
        all.iter().map(|c| format!("{} - {}", c.name, c.description)).collect();
    let picked = ctx.prompter().multi_select("Which components would you like to add?", &items)?;
    if picked.is_empty() {
        return Err(AppError::NoComponentsSelected { available: registry.available() });
    }
    Ok(picked.into_iter().filter_map(|i| all.get(i)).map(|c| c.name.to_string()).collect())
}

/// Load the project config, auto-initializing when it is missing.
///
/// Returns `None` when the user declines initialization.
fn ensure_config<P, M>(
    ctx: &AppContext<P, M>,
    yes: bool,
) -> Result<Option<(Config, Option<InitReport>)>, AppError>
where
    P: Prompter,
    M: PackageManager,
{
    if let Some(config) = config_store::load_config(ctx.root())? {
        return Ok(Some((config, None)));
    }

    info!("project is not initialized");
    ctx.prompter().notice(NOT_INITIALIZED);
    if !yes && !ctx.prompter().confirm("Would you like to initialize Virtual UI now?", true)? {
        return Ok(None);
    }

    let report = match init::execute(ctx, &InitOptions { yes: true })? {
        InitOutcome::Initialized(report) => report,
        InitOutcome::Cancelled => return Err(AppError::InitializationFailed),
    };
    let config = config_store::load_config(ctx.root())?.ok_or(AppError::InitializationFailed)?;
    Ok(Some((config, Some(report))))
}

fn target_path(root: &Path, paths: &ProjectPaths, ui_dir: &Path, file: &ComponentFile) -> PathBuf {
    if let Some(target) = &file.target {
        return root.join(target);
    }
    match file.kind {
        FileKind::Component | FileKind::Types => ui_dir.join(&file.name),
        FileKind::Utils => paths.utils_dir().join(&file.name),
    }
}

fn write_component_file<P, M>(
    ctx: &AppContext<P, M>,
    target: &Path,
    file: &ComponentFile,
    policy: ConflictPolicy,
) -> Result<FileReport, AppError>
where
    P: Prompter,
    M: PackageManager,
{
    let existed = target.exists();
    if existed {
        let keep = match policy {
            ConflictPolicy::Overwrite => None,
            ConflictPolicy::Skip => Some(FileAction::Skipped),
            ConflictPolicy::Ask => {
                let message = format!("{} already exists. Overwrite?", ctx.display_path(target));
                if ctx.prompter().confirm(&message, false)? { None } else { Some(FileAction::Declined) }
            }
        };
        if let Some(action) = keep {
            debug!(path = %target.display(), ?action, "keeping existing file");
            return Ok(FileReport { path: target.to_path_buf(), action });
        }
    }

    if let Some(parent) = target.parent() {
        fs::create_dir_all(parent).map_err(|e| AppError::write_failed(parent, e))?;
    }
    fs::write(target, &file.content).map_err(|e| AppError::write_failed(target, e))?;

    let action = if existed { FileAction::Overwritten } else { FileAction::Created };
    debug!(path = %target.display(), ?action, "wrote component file");
    Ok(FileReport { path: target.to_path_buf(), action })
}

fn apply_patches(
    component: &ComponentInfo,
    paths: &ProjectPaths,
) -> Result<Vec<PatchReport>, AppError> {
    let mut reports = Vec::new();
    if let Some(patch) = &component.build_config {
        reports.push(PatchReport {
            component: component.name.to_string(),
            target: PatchTarget::BuildConfig,
            path: paths.tailwind_config.clone(),
            status: patch_build_config(&paths.tailwind_config, patch)?,
        });
    }
    if !component.global_css.is_empty() {
        reports.push(PatchReport {
            component: component.name.to_string(),
            target: PatchTarget::Stylesheet,
            path: paths.tailwind_css.clone(),
            status: patch_stylesheet(&paths.tailwind_css, &component.global_css)?,
        });
    }
    Ok(reports)
}

fn patch_build_config(path: &Path, patch: &BuildConfigPatch) -> Result<PatchStatus, AppError> {
    if !path.exists() {
        return Ok(PatchStatus::TargetMissing);
    }
    let current = fs::read_to_string(path)?;
    Ok(match apply_build_config_patch(&current, patch) {
        BuildConfigEdit::AlreadyPresent => PatchStatus::AlreadyPresent,
        BuildConfigEdit::Updated(updated) => {
            fs::write(path, updated).map_err(|e| AppError::write_failed(path, e))?;
            PatchStatus::Applied
        }
        BuildConfigEdit::ManualActionRequired(hint) => PatchStatus::ManualActionRequired(hint),
    })
}

fn patch_stylesheet(path: &Path, rules: &[String]) -> Result<PatchStatus, AppError> {
    if !path.exists() {
        return Ok(PatchStatus::TargetMissing);
    }
    let current = fs::read_to_string(path)?;
    match append_missing_rules(&current, rules) {
        Some(updated) => {
            fs::write(path, updated).map_err(|e| AppError::write_failed(path, e))?;
            Ok(PatchStatus::Applied)
        }
        None => Ok(PatchStatus::AlreadyPresent),
    }
}

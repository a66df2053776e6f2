use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Library-wide error type for virtual-ui operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// A config file exists but could not be parsed or validated.
    #[error("Invalid configuration in {}: {details}", path.display())]
    InvalidConfig { path: PathBuf, details: String },

    /// The project root has no package.json.
    #[error("No package.json found. Please run this command in a Node.js project.")]
    PackageJsonMissing,

    /// Auto-initialization finished but no configuration could be read back.
    #[error("Failed to initialize Virtual UI.")]
    InitializationFailed,

    /// Component not found in registry.
    #[error("Component \"{name}\" not found. Available components: {available}")]
    ComponentNotFound { name: String, available: String },

    /// No component was chosen for installation.
    #[error("No components selected. Available components: {available}")]
    NoComponentsSelected { available: String },

    /// Component name is not a valid identifier.
    #[error(
        "Invalid component name '{0}': must be alphanumeric with hyphens, underscores, or periods"
    )]
    InvalidComponentName(String),

    /// Embedded registry entry is malformed.
    #[error("Invalid registry entry for '{component}': {reason}")]
    InvalidRegistryEntry { component: String, reason: String },

    /// Writing a materialized file failed.
    #[error("Failed to write {}: {source}", path.display())]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Package manager invocation failed.
    #[error("Package manager error running '{command}': {details}")]
    PackageManager { command: String, details: String },

    /// Interactive prompt failed or was interrupted.
    #[error("Prompt failed: {0}")]
    Prompt(String),

    /// Template rendering failed.
    #[error("Template error: {0}")]
    Template(String),
}

impl AppError {
    pub fn write_failed(path: impl Into<PathBuf>, source: io::Error) -> Self {
        AppError::WriteFailed { path: path.into(), source }
    }

    /// Provide an `io::ErrorKind`-like view for callers that branch on error class.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            AppError::Io(err) | AppError::WriteFailed { source: err, .. } => err.kind(),
            AppError::InvalidConfig { .. }
            | AppError::InvalidComponentName(_)
            | AppError::InvalidRegistryEntry { .. }
            | AppError::NoComponentsSelected { .. }
            | AppError::Template(_) => io::ErrorKind::InvalidInput,
            AppError::PackageJsonMissing | AppError::ComponentNotFound { .. } => {
                io::ErrorKind::NotFound
            }
            AppError::InitializationFailed
            | AppError::PackageManager { .. }
            | AppError::Prompt(_) => io::ErrorKind::Other,
        }
    }
}

pub mod component_name;
pub mod config;
pub mod conflict;
pub mod error;
pub mod patch;
pub mod project;
pub mod registry;
mod validation;

pub use component_name::ComponentName;
pub use config::{Aliases, Config, ProjectPaths, Style, TailwindSettings, resolve_paths};
pub use conflict::ConflictPolicy;
pub use error::AppError;
pub use patch::BuildConfigEdit;
pub use project::ProjectInfo;
pub use registry::{
    AggregatedDependencies, BuildConfigPatch, ComponentFile, ComponentInfo, DependencySet,
    FileKind, Registry,
};

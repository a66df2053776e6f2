mod package_manager;
mod prompter;

pub use package_manager::{DependencyKind, PackageManager};
pub use prompter::Prompter;

//! Non-fatal dependency installation shared by `init` and `add`.

use tracing::warn;

use crate::domain::DependencySet;
use crate::ports::{DependencyKind, PackageManager};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InstallStatus {
    Installed,
    /// Installation failed; the user can retry with `manual_command`.
    Failed { manual_command: String, reason: String },
}

/// Outcome of one package-manager install run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallReport {
    pub kind: DependencyKind,
    pub packages: Vec<String>,
    pub status: InstallStatus,
}

impl InstallReport {
    pub fn succeeded(&self) -> bool {
        self.status == InstallStatus::Installed
    }
}

/// Install `packages`; failures are captured in the report, never returned.
///
/// Returns `None` for an empty set.
pub fn install<M: PackageManager>(
    packages: &M,
    set: &DependencySet,
    kind: DependencyKind,
) -> Option<InstallReport> {
    if set.is_empty() {
        return None;
    }
    let list = set.as_slice().to_vec();
    let status = match packages.install(&list, kind) {
        Ok(()) => InstallStatus::Installed,
        Err(err) => {
            warn!(error = %err, ?kind, "dependency installation failed");
            InstallStatus::Failed {
                manual_command: packages.install_command(&list, kind),
                reason: err.to_string(),
            }
        }
    };
    Some(InstallReport { kind, packages: list, status })
}

/// Install runtime dependencies, then dev dependencies.
pub fn install_all<M: PackageManager>(
    packages: &M,
    dependencies: &DependencySet,
    dev_dependencies: &DependencySet,
) -> Vec<InstallReport> {
    [
        install(packages, dependencies, DependencyKind::Runtime),
        install(packages, dev_dependencies, DependencyKind::Dev),
    ]
    .into_iter()
    .flatten()
    .collect()
}

use std::cell::RefCell;

use crate::domain::AppError;
use crate::ports::{DependencyKind, PackageManager};

/// A package manager call captured by [`RecordingPackageManager`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PackageCall {
    Install { packages: Vec<String>, kind: DependencyKind },
    Exec { tool: String, args: Vec<String> },
}

/// Package manager double that records calls and optionally fails them.
#[derive(Default)]
pub struct RecordingPackageManager {
    calls: RefCell<Vec<PackageCall>>,
    fail: bool,
}

impl RecordingPackageManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self { fail: true, ..Self::default() }
    }

    pub fn calls(&self) -> Vec<PackageCall> {
        self.calls.borrow().clone()
    }

    pub fn installed(&self, kind: DependencyKind) -> Vec<String> {
        self.calls
            .borrow()
            .iter()
            .filter_map(|call| match call {
                PackageCall::Install { packages, kind: k } if *k == kind => Some(packages.clone()),
                _ => None,
            })
            .flatten()
            .collect()
    }

    fn outcome(&self, command: String) -> Result<(), AppError> {
        if self.fail {
            Err(AppError::PackageManager { command, details: "simulated failure".to_string() })
        } else {
            Ok(())
        }
    }
}

impl PackageManager for RecordingPackageManager {
    fn install(&self, packages: &[String], kind: DependencyKind) -> Result<(), AppError> {
        self.calls.borrow_mut().push(PackageCall::Install { packages: packages.to_vec(), kind });
        self.outcome(self.install_command(packages, kind))
    }

    fn exec(&self, tool: &str, args: &[&str]) -> Result<(), AppError> {
        self.calls.borrow_mut().push(PackageCall::Exec {
            tool: tool.to_string(),
            args: args.iter().map(|a| a.to_string()).collect(),
        });
        self.outcome(format!("fake exec -- {} {}", tool, args.join(" ")))
    }

    fn install_command(&self, packages: &[String], kind: DependencyKind) -> String {
        match kind {
            DependencyKind::Runtime => format!("fake install {}", packages.join(" ")),
            DependencyKind::Dev => format!("fake install --save-dev {}", packages.join(" ")),
        }
    }
}

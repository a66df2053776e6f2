/// How `add` treats a target file that already exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConflictPolicy {
    /// Replace the file without asking.
    Overwrite,
    /// Leave the file untouched and report it as skipped.
    Skip,
    /// Ask the user per file.
    Ask,
}

impl ConflictPolicy {
    /// Precedence: `--overwrite` beats `--yes`, which beats prompting.
    pub fn from_flags(overwrite: bool, yes: bool) -> Self {
        if overwrite {
            ConflictPolicy::Overwrite
        } else if yes {
            ConflictPolicy::Skip
        } else {
            ConflictPolicy::Ask
        }
    }
}

//! Idempotent text additions to consumer-owned files.
//!
//! Both functions are pure: they take the current file text and return the
//! new text only when something has to change.

use super::registry::BuildConfigPatch;

/// Result of patching a build-tool config.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuildConfigEdit {
    /// All markers were already present.
    AlreadyPresent,
    /// Snippet inserted after the anchor.
    Updated(String),
    /// Anchor not found; the user has to apply the hint by hand.
    ManualActionRequired(String),
}

pub fn apply_build_config_patch(current: &str, patch: &BuildConfigPatch) -> BuildConfigEdit {
    if !patch.markers.is_empty() && patch.markers.iter().all(|m| current.contains(m.as_str())) {
        return BuildConfigEdit::AlreadyPresent;
    }

    match current.find(&patch.anchor) {
        Some(index) => {
            let split = index + patch.anchor.len();
            let mut updated = String::with_capacity(current.len() + patch.snippet.len());
            updated.push_str(&current[..split]);
            updated.push_str(&patch.snippet);
            updated.push_str(&current[split..]);
            BuildConfigEdit::Updated(updated)
        }
        None => BuildConfigEdit::ManualActionRequired(patch.manual_hint.clone()),
    }
}

/// Append stylesheet rules that are not already contained in `current`.
///
/// Returns `None` when every rule is present.
pub fn append_missing_rules(current: &str, rules: &[String]) -> Option<String> {
    let missing: Vec<&str> =
        rules.iter().map(String::as_str).filter(|rule| !current.contains(rule)).collect();
    if missing.is_empty() {
        return None;
    }
    Some(format!("{}\n\n{}", current, missing.join("\n")))
}

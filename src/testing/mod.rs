mod recording_package_manager;
mod scripted_prompter;

pub use recording_package_manager::{PackageCall, RecordingPackageManager};
pub use scripted_prompter::{Answer, ScriptedPrompter};

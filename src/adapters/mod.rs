pub mod config_store;
pub mod dialoguer_prompter;
pub mod embedded_registry;
pub mod package_manager_command;
pub mod templates;

pub use dialoguer_prompter::DialoguerPrompter;
pub use embedded_registry::load_embedded_registry;
pub use package_manager_command::CommandPackageManager;

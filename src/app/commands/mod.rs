pub mod add;
pub mod dependencies;
pub mod init;
pub mod list;

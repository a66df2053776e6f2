//! virtual-ui: add interactive UI components to a web project from an embedded registry.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

pub use app::api::{
    AddOptions, AddOutcome, AddReport, ComponentSummary, InitOptions, InitOutcome, InitReport,
    add_at, init_at, list,
};
pub use domain::AppError;

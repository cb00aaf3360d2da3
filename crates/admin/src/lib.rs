//! Prevtrans admin front-end core.
//!
//! Framework-agnostic presentation layer for the Prevtrans administrative
//! interface: a reactive form engine, debounced remote uniqueness
//! validation, page workflows and the route table. Rendering, styling and
//! toast display are external collaborators behind the `ui` traits.

pub mod config;
pub mod forms;
pub mod pages;
pub mod routes;
pub mod state;
pub mod ui;
pub mod validation;

pub use config::AdminConfig;
pub use state::AppState;

//! Common utilities shared across the Prevtrans client crates.
//!
//! This crate provides:
//! - The single normalized error contract (`AppError`)
//! - Shared configuration structures

pub mod config;
pub mod error;

pub use config::*;
pub use error::{AppError, AppResult, OptionExt};

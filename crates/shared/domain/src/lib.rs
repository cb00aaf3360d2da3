//! Domain layer - Prevtrans business entities and validation rules.
//!
//! This crate contains pure domain logic with no infrastructure dependencies.
//! All types here are shared between the HTTP access layer and the admin
//! front-end crates.

pub mod acidente;
pub mod constants;
pub mod error;
pub mod usuario;

pub use acidente::AcidenteTransito;
pub use constants::*;
pub use error::{DomainError, DomainResult};
pub use usuario::Usuario;

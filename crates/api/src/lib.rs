//! Prevtrans HTTP access layer.
//!
//! Thin typed clients over the Prevtrans REST API: every call carries the
//! session's bearer credential and every failure is normalized into
//! `common::AppError`.

pub mod acidente_client;
pub mod client;
pub mod session;
pub mod usuario_client;

pub use acidente_client::{AcidenteApi, AcidenteClient};
pub use client::ApiClient;
pub use session::{AuthSession, JwtSession, StaticSession};
pub use usuario_client::{UsuarioApi, UsuarioClient};

#[cfg(any(test, feature = "test-utils"))]
pub use acidente_client::MockAcidenteApi;
#[cfg(any(test, feature = "test-utils"))]
pub use usuario_client::MockUsuarioApi;

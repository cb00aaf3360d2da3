//! Reactive form engine.
//!
//! Declarative form state: controls carry their value, touched/dirty flags
//! and an error bag keyed by failure token; groups nest controls and other
//! groups and run cross-field validators. The view layer is expected to
//! re-render whenever this state changes; there is no imperative hook.

pub mod control;
pub mod group;
pub mod validators;

pub use control::{ErroValidacao, FormControl, Validador};
pub use group::{FormGroup, FormGroupBuilder, FormMember};
pub use validators::{min_length, pattern, required, senhas_conferem, senhas_iguais};

/// Tri-state result of an asynchronous field check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AsyncOutcome {
    /// Check scheduled or in flight; the field is not submittable yet.
    Pending,
    /// No conflict.
    Valid,
    /// Named validation failure (e.g. `"usuarioEmUso"`).
    Invalid(&'static str),
}

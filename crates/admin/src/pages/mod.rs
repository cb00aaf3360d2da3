//! Page workflows.

pub mod acidentes_transito;
pub mod perfil_usuario;

pub use acidentes_transito::AcidentesTransitoPage;
pub use perfil_usuario::{PerfilUsuarioPage, SubmitState};

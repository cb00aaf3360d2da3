//! Typed client for the `/usuarios` resource.

use async_trait::async_trait;
use serde_json::json;
use uuid::Uuid;
use validator::Validate;

use common::AppResult;
use domain::Usuario;

use crate::client::ApiClient;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// User profile operations against the backend.
///
/// `verifica_*` return `true` when the value is still available for the
/// given owner (the owner's current value never counts as a collision).
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UsuarioApi: Send + Sync {
    /// List all users
    async fn usuarios(&self) -> AppResult<Vec<Usuario>>;

    /// Fetch one user by id
    async fn get_usuario(&self, id: Uuid) -> AppResult<Usuario>;

    /// Create a user; returns the canonical stored record
    async fn post_usuario(&self, usuario: &Usuario) -> AppResult<Usuario>;

    /// Update a user's profile; returns the canonical stored record
    async fn alterar_perfil(&self, id: Uuid, usuario: &Usuario) -> AppResult<Usuario>;

    /// Change a user's password
    async fn alterar_senha(&self, id: Uuid, senha: &str) -> AppResult<()>;

    /// Check whether a login handle is available
    async fn verifica_usuario(&self, valor: &str, id_excluido: Uuid) -> AppResult<bool>;

    /// Check whether an email is available
    async fn verifica_email(&self, valor: &str, id_excluido: Uuid) -> AppResult<bool>;
}

/// Live implementation over [`ApiClient`].
pub struct UsuarioClient {
    api: ApiClient,
}

impl UsuarioClient {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }
}

#[async_trait]
impl UsuarioApi for UsuarioClient {
    async fn usuarios(&self) -> AppResult<Vec<Usuario>> {
        self.api.get_json("usuarios").await
    }

    async fn get_usuario(&self, id: Uuid) -> AppResult<Usuario> {
        self.api.get_json(&format!("usuarios/{}", id)).await
    }

    async fn post_usuario(&self, usuario: &Usuario) -> AppResult<Usuario> {
        usuario.validate()?;
        self.api.post_json("usuarios", usuario).await
    }

    async fn alterar_perfil(&self, id: Uuid, usuario: &Usuario) -> AppResult<Usuario> {
        usuario.validate()?;
        self.api.put_json(&format!("usuarios/{}", id), usuario).await
    }

    async fn alterar_senha(&self, id: Uuid, senha: &str) -> AppResult<()> {
        self.api
            .put_unit(&format!("usuarios/{}/senha", id), &json!({ "senha": senha }))
            .await
    }

    async fn verifica_usuario(&self, valor: &str, id_excluido: Uuid) -> AppResult<bool> {
        self.api
            .check_available(
                "usuarios/verifica-usuario",
                &[
                    ("valor", valor.to_string()),
                    ("idUsuario", id_excluido.to_string()),
                ],
            )
            .await
    }

    async fn verifica_email(&self, valor: &str, id_excluido: Uuid) -> AppResult<bool> {
        self.api
            .check_available(
                "usuarios/verifica-email",
                &[
                    ("valor", valor.to_string()),
                    ("idUsuario", id_excluido.to_string()),
                ],
            )
            .await
    }
}

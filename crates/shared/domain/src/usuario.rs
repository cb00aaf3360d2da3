//! Usuario domain entity.

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::constants::{EMAIL_REGEX, LOGIN_REGEX};

/// User profile record.
///
/// `senha` is write-only: it is sent on create/update calls and never comes
/// back from the backend, so responses deserialize it as `None` and it is
/// skipped when absent.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct Usuario {
    pub id: Uuid,
    #[validate(length(min = 5, message = "Nome deve ter no mínimo 5 caracteres"))]
    pub nome: String,
    #[validate(regex(path = *LOGIN_REGEX, message = "Usuário contém caracteres inválidos"))]
    pub usuario: String,
    #[validate(regex(path = *EMAIL_REGEX, message = "E-mail inválido"))]
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 8, message = "Senha deve ter no mínimo 8 caracteres"))]
    pub senha: Option<String>,
}

impl Usuario {
    /// Create a profile record without a password (the common case: the
    /// password travels only through the dedicated change-password call).
    pub fn new(id: Uuid, nome: String, usuario: String, email: String) -> Self {
        Self {
            id,
            nome,
            usuario,
            email,
            senha: None,
        }
    }

    /// Check the record against the synchronous profile rules.
    pub fn is_valido(&self) -> bool {
        self.validate().is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn usuario_valido() -> Usuario {
        Usuario::new(
            Uuid::new_v4(),
            "João Silva".to_string(),
            "joao.silva".to_string(),
            "joao@example.com".to_string(),
        )
    }

    #[test]
    fn valid_profile_passes() {
        assert!(usuario_valido().is_valido());
    }

    #[test]
    fn short_nome_fails() {
        let mut u = usuario_valido();
        u.nome = "João".to_string();
        assert!(!u.is_valido());
    }

    #[test]
    fn login_with_forbidden_character_fails() {
        let mut u = usuario_valido();
        u.usuario = "joao silva".to_string();
        assert!(!u.is_valido());
    }

    #[test]
    fn malformed_email_fails() {
        let mut u = usuario_valido();
        u.email = "joao@".to_string();
        assert!(!u.is_valido());
    }

    #[test]
    fn senha_is_never_serialized_when_absent() {
        let json = serde_json::to_value(usuario_valido()).unwrap();
        assert!(json.get("senha").is_none());
    }

    #[test]
    fn short_senha_fails() {
        let mut u = usuario_valido();
        u.senha = Some("1234567".to_string());
        assert!(!u.is_valido());
    }
}

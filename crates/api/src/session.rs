//! Authenticated session handling.
//!
//! The admin front-end never issues tokens; it receives a bearer JWT from
//! the login flow (an external collaborator) and only needs two things from
//! it: the raw token for outbound calls and the principal's id.

use jsonwebtoken::{Algorithm, DecodingKey, Validation};
use serde::Deserialize;
use uuid::Uuid;

use common::AppResult;

/// Supplies the bearer credential and the current principal's identity.
pub trait AuthSession: Send + Sync {
    /// Raw bearer token attached to every outbound request.
    fn token(&self) -> &str;

    /// Identifier of the authenticated user.
    fn id_usuario(&self) -> Uuid;
}

/// Claims the client reads from the token payload.
#[derive(Debug, Clone, Deserialize)]
struct JwtPayload {
    #[serde(rename = "idUsuario")]
    id_usuario: Uuid,
    #[allow(dead_code)]
    exp: i64,
}

/// Session backed by a bearer JWT.
///
/// The signature is NOT verified here: the backend is the verifier, the
/// client only reads the payload to learn who is logged in. Expiry is still
/// honored so a stale token fails fast instead of on the first 401.
pub struct JwtSession {
    token: String,
    payload: JwtPayload,
}

impl JwtSession {
    pub fn from_token(token: impl Into<String>) -> AppResult<Self> {
        let token = token.into();

        let mut validation = Validation::new(Algorithm::HS256);
        validation.insecure_disable_signature_validation();

        let data = jsonwebtoken::decode::<JwtPayload>(
            &token,
            &DecodingKey::from_secret(&[]),
            &validation,
        )?;

        Ok(Self {
            token,
            payload: data.claims,
        })
    }
}

impl AuthSession for JwtSession {
    fn token(&self) -> &str {
        &self.token
    }

    fn id_usuario(&self) -> Uuid {
        self.payload.id_usuario
    }
}

/// Fixed-identity session for tests and tooling.
pub struct StaticSession {
    token: String,
    id_usuario: Uuid,
}

impl StaticSession {
    pub fn new(token: impl Into<String>, id_usuario: Uuid) -> Self {
        Self {
            token: token.into(),
            id_usuario,
        }
    }
}

impl AuthSession for StaticSession {
    fn token(&self) -> &str {
        &self.token
    }

    fn id_usuario(&self) -> Uuid {
        self.id_usuario
    }
}

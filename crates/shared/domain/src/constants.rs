//! Domain-level constants.
//!
//! These constants define the validation rules the profile form enforces
//! before anything reaches the backend.

use once_cell::sync::Lazy;
use regex::Regex;

// =============================================================================
// Validation patterns
// =============================================================================

/// Characters allowed in a login handle.
pub const LOGIN_PATTERN: &str = r"^[_'.@A-Za-z0-9-]*$";

/// Permissive RFC-5322-like email pattern (case-insensitive).
pub const EMAIL_PATTERN: &str = concat!(
    "(?i)",
    r#"^(([^<>()\[\].,;:\s@"]+(\.[^<>()\[\].,;:\s@"]+)*)|(".+"))"#,
    r#"@(([^<>()\[\].,;:\s@"]+\.)+[^<>()\[\].,;:\s@"]{2,})$"#,
);

/// Compiled login handle pattern.
pub static LOGIN_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(LOGIN_PATTERN).expect("valid login pattern"));

/// Compiled email pattern.
pub static EMAIL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(EMAIL_PATTERN).expect("valid email pattern"));

// =============================================================================
// Validation limits
// =============================================================================

/// Minimum display name length.
pub const MIN_NOME_LENGTH: u64 = 5;

/// Minimum password length.
pub const MIN_SENHA_LENGTH: u64 = 8;

// =============================================================================
// Validation failure tokens
// =============================================================================

/// Login handle already assigned to another user.
pub const ERRO_USUARIO_EM_USO: &str = "usuarioEmUso";

/// Email already assigned to another user.
pub const ERRO_EMAIL_EM_USO: &str = "emailEmUso";

/// Password and confirmation differ.
pub const ERRO_SENHA_NOT_MATCH: &str = "senhaNotMatch";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_pattern_accepts_allowed_characters() {
        for valido in ["joao.silva", "maria_souza", "user@host", "abc-123", "'", ""] {
            assert!(LOGIN_REGEX.is_match(valido), "rejected {valido:?}");
        }
    }

    #[test]
    fn login_pattern_rejects_other_characters() {
        for invalido in ["joão", "a b", "user!", "x/y", "a,b"] {
            assert!(!LOGIN_REGEX.is_match(invalido), "accepted {invalido:?}");
        }
    }

    #[test]
    fn email_pattern_accepts_common_addresses() {
        for valido in [
            "joao@example.com",
            "a.b@sub.example.org",
            "JOAO@EXAMPLE.COM",
            "\"quoted name\"@example.com",
        ] {
            assert!(EMAIL_REGEX.is_match(valido), "rejected {valido:?}");
        }
    }

    #[test]
    fn email_pattern_rejects_malformed_addresses() {
        for invalido in ["joao", "joao@", "@example.com", "a b@example.com", "a@b"] {
            assert!(!EMAIL_REGEX.is_match(invalido), "accepted {invalido:?}");
        }
    }
}

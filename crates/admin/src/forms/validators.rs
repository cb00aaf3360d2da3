//! Synchronous validators.
//!
//! Each validator is a pure function from the field value to an optional
//! named failure. Length rules ignore empty values; `required` owns those.

use regex::Regex;

use domain::ERRO_SENHA_NOT_MATCH;

use super::control::{ErroValidacao, Validador};
use super::group::FormGroup;

pub fn required() -> Validador {
    Box::new(|value| {
        if value.trim().is_empty() {
            Some(("required", "Campo obrigatório".to_string()))
        } else {
            None
        }
    })
}

pub fn min_length(min: usize) -> Validador {
    Box::new(move |value| {
        if !value.is_empty() && value.chars().count() < min {
            Some(("minlength", format!("Mínimo de {} caracteres", min)))
        } else {
            None
        }
    })
}

pub fn pattern(regex: &'static Regex, message: &'static str) -> Validador {
    Box::new(move |value| {
        if regex.is_match(value) {
            None
        } else {
            Some(("pattern", message.to_string()))
        }
    })
}

/// Pure cross-field comparator: the two password entries must be literally
/// equal.
pub fn senhas_iguais(senha: &str, verifica_senha: &str) -> bool {
    senha == verifica_senha
}

/// Group validator wiring [`senhas_iguais`] to the `senha` /
/// `verificaSenha` controls.
pub fn senhas_conferem(group: &FormGroup) -> Option<ErroValidacao> {
    let senha = group.control("senha")?;
    let verifica = group.control("verificaSenha")?;
    if senhas_iguais(senha.value(), verifica.value()) {
        None
    } else {
        Some((ERRO_SENHA_NOT_MATCH, "As senhas não conferem".to_string()))
    }
}

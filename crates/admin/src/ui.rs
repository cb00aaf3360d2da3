//! Outward-facing UI seams: navigation and toasts.
//!
//! Rendering is an external collaborator; pages only emit intents through
//! these traits.

use common::AppResult;

/// Transient, non-blocking notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub titulo: String,
    pub msg: String,
    pub timeout_ms: u64,
    pub show_close: bool,
}

impl Toast {
    /// Confirmation toast shown after a completed action.
    pub fn confirmacao(msg: impl Into<String>) -> Self {
        Self {
            titulo: "Confirmação".to_string(),
            msg: msg.into(),
            timeout_ms: 10_000,
            show_close: true,
        }
    }

    /// Error toast shown when an action fails.
    pub fn erro(msg: impl Into<String>) -> Self {
        Self {
            titulo: "Erro".to_string(),
            msg: msg.into(),
            timeout_ms: 10_000,
            show_close: true,
        }
    }
}

/// Displays toasts to the user.
pub trait Notifier: Send + Sync {
    fn success(&self, toast: Toast);
    fn error(&self, toast: Toast);
}

/// Moves the user to another route.
pub trait Navigator: Send + Sync {
    fn navigate(&self, path: &str) -> AppResult<()>;
}

/// Notifier that writes toasts to the log (CLI and tests).
#[derive(Debug, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn success(&self, toast: Toast) {
        tracing::info!(titulo = %toast.titulo, "{}", toast.msg);
    }

    fn error(&self, toast: Toast) {
        tracing::warn!(titulo = %toast.titulo, "{}", toast.msg);
    }
}

/// Navigator that only records the intent in the log (CLI).
#[derive(Debug, Default)]
pub struct LogNavigator;

impl Navigator for LogNavigator {
    fn navigate(&self, path: &str) -> AppResult<()> {
        tracing::info!("navigate to {}", path);
        Ok(())
    }
}

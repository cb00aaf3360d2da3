//! Debounced remote uniqueness validation.
//!
//! Each keystroke schedules a delayed check and supersedes any pending one
//! for the same field: the quiescence window restarts, the previous task is
//! aborted and a generation guard keeps a superseded task that already woke
//! up from publishing. Only the most recently scheduled check's result ever
//! reaches form state.

use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::warn;
use uuid::Uuid;

use domain::{ERRO_EMAIL_EM_USO, ERRO_USUARIO_EM_USO};
use prevtrans_api::UsuarioApi;

use crate::forms::AsyncOutcome;

/// Which uniqueness-checked field this validator watches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CampoUnico {
    Usuario,
    Email,
}

impl CampoUnico {
    /// Failure token attached to the field on conflict.
    pub fn token(self) -> &'static str {
        match self {
            CampoUnico::Usuario => ERRO_USUARIO_EM_USO,
            CampoUnico::Email => ERRO_EMAIL_EM_USO,
        }
    }

    fn mensagem_em_uso(self) -> &'static str {
        match self {
            CampoUnico::Usuario => "Usuário já está em uso",
            CampoUnico::Email => "E-mail já está em uso",
        }
    }
}

struct PublishState {
    generation: u64,
    advisory: String,
}

/// Generation, advisory and the outcome channel behind one lock, so that
/// superseding (bump + Pending edge) and publishing (generation re-check +
/// advisory + outcome edge) are atomic with respect to each other. A task
/// that lost the generation race can never slip its outcome in after the
/// Pending edge of the check that superseded it.
struct Shared {
    state: Mutex<PublishState>,
    tx: watch::Sender<AsyncOutcome>,
}

impl Shared {
    fn lock(&self) -> MutexGuard<'_, PublishState> {
        match self.state.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

/// Cancellation-aware debounced check of one field against the backend.
///
/// Dropping the validator aborts any in-flight check; nothing is published
/// afterwards.
pub struct RemoteUniquenessValidator {
    campo: CampoUnico,
    api: Arc<dyn UsuarioApi>,
    id_excluido: Uuid,
    quiescence: Duration,
    shared: Arc<Shared>,
    rx: watch::Receiver<AsyncOutcome>,
    task: Mutex<Option<JoinHandle<()>>>,
}

impl RemoteUniquenessValidator {
    pub fn new(
        campo: CampoUnico,
        api: Arc<dyn UsuarioApi>,
        id_excluido: Uuid,
        quiescence: Duration,
    ) -> Self {
        let (tx, rx) = watch::channel(AsyncOutcome::Valid);
        Self {
            campo,
            api,
            id_excluido,
            quiescence,
            shared: Arc::new(Shared {
                state: Mutex::new(PublishState {
                    generation: 0,
                    advisory: String::new(),
                }),
                tx,
            }),
            rx,
            task: Mutex::new(None),
        }
    }

    /// Schedule a check for `valor`, superseding any pending check.
    pub fn schedule(&self, valor: &str) {
        let geracao = {
            let mut state = self.shared.lock();
            state.generation += 1;
            self.shared.tx.send_replace(AsyncOutcome::Pending);
            state.generation
        };
        self.abort_task();

        let shared = self.shared.clone();
        let api = self.api.clone();
        let campo = self.campo;
        let id_excluido = self.id_excluido;
        let quiescence = self.quiescence;
        let valor = valor.to_string();

        let handle = tokio::spawn(async move {
            tokio::time::sleep(quiescence).await;
            if shared.lock().generation != geracao {
                return;
            }

            let disponivel = match campo {
                CampoUnico::Usuario => api.verifica_usuario(&valor, id_excluido).await,
                CampoUnico::Email => api.verifica_email(&valor, id_excluido).await,
            };

            let (advisory, outcome) = match disponivel {
                Ok(true) => (String::new(), AsyncOutcome::Valid),
                Ok(false) => (
                    campo.mensagem_em_uso().to_string(),
                    AsyncOutcome::Invalid(campo.token()),
                ),
                Err(err) => {
                    // Transport failure must never crash the form; it
                    // resolves to the named failure token.
                    warn!(code = err.code(), "uniqueness check failed: {}", err);
                    (
                        campo.mensagem_em_uso().to_string(),
                        AsyncOutcome::Invalid(campo.token()),
                    )
                }
            };

            // Re-check and publish under the lock: a supersede that raced
            // this task either moved the generation on (this publish is
            // dropped) or has not happened yet (its Pending edge will land
            // after this outcome, which is then the superseded one).
            let mut state = shared.lock();
            if state.generation != geracao {
                return;
            }
            state.advisory = advisory;
            shared.tx.send_replace(outcome);
        });

        if let Ok(mut task) = self.task.lock() {
            *task = Some(handle);
        }
    }

    /// Discard any pending check without scheduling a new one; the outcome
    /// and advisory reset to their no-check-outstanding state. Used when the
    /// field's value stops being a candidate, e.g. it no longer passes the
    /// synchronous rules.
    pub fn cancel(&self) {
        {
            let mut state = self.shared.lock();
            state.generation += 1;
            state.advisory.clear();
            self.shared.tx.send_replace(AsyncOutcome::Valid);
        }
        self.abort_task();
    }

    fn abort_task(&self) {
        if let Ok(mut task) = self.task.lock() {
            if let Some(handle) = task.take() {
                handle.abort();
            }
        }
    }

    /// Current outcome without waiting.
    pub fn outcome(&self) -> AsyncOutcome {
        self.rx.borrow().clone()
    }

    /// Advisory message for display next to the field; empty when the last
    /// check found no conflict.
    pub fn advisory(&self) -> String {
        self.shared.lock().advisory.clone()
    }

    /// Wait until the latest scheduled check settles.
    pub async fn resolved(&self) -> AsyncOutcome {
        let mut rx = self.rx.clone();
        loop {
            let atual = rx.borrow_and_update().clone();
            if atual != AsyncOutcome::Pending {
                return atual;
            }
            if rx.changed().await.is_err() {
                return atual;
            }
        }
    }

    /// Observe outcome changes, e.g. to re-render the field.
    pub fn subscribe(&self) -> watch::Receiver<AsyncOutcome> {
        self.rx.clone()
    }
}

impl Drop for RemoteUniquenessValidator {
    fn drop(&mut self) {
        // Unmount: discard silently, no state mutation afterwards.
        self.shared.lock().generation += 1;
        self.abort_task();
    }
}

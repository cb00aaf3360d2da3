//! Remote uniqueness validator tests.
//!
//! Timers run under a paused clock, so the quiescence window elapses
//! deterministically without real waiting.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use uuid::Uuid;

use common::AppError;
use prevtrans_admin_lib::forms::AsyncOutcome;
use prevtrans_admin_lib::validation::{CampoUnico, RemoteUniquenessValidator};
use prevtrans_api::MockUsuarioApi;

const QUIESCENCE: Duration = Duration::from_millis(1000);

#[tokio::test(start_paused = true)]
async fn rapid_edits_collapse_to_one_check_for_the_final_value() {
    let mut mock = MockUsuarioApi::new();
    mock.expect_verifica_usuario()
        .withf(|valor, _| valor == "joao.silva")
        .times(1)
        .returning(|_, _| Ok(true));

    let validator = RemoteUniquenessValidator::new(
        CampoUnico::Usuario,
        Arc::new(mock),
        Uuid::new_v4(),
        QUIESCENCE,
    );

    validator.schedule("joao");
    validator.schedule("joao.s");
    validator.schedule("joao.silva");

    assert_eq!(validator.resolved().await, AsyncOutcome::Valid);
    assert_eq!(validator.advisory(), "");
}

#[tokio::test(start_paused = true)]
async fn taken_login_resolves_to_the_failure_token_with_advisory() {
    let mut mock = MockUsuarioApi::new();
    mock.expect_verifica_usuario()
        .times(1)
        .returning(|_, _| Ok(false));

    let validator = RemoteUniquenessValidator::new(
        CampoUnico::Usuario,
        Arc::new(mock),
        Uuid::new_v4(),
        QUIESCENCE,
    );

    validator.schedule("admin");

    let outcome = validator.resolved().await;
    assert_eq!(outcome, AsyncOutcome::Invalid("usuarioEmUso"));
    // The advisory is stored before the outcome edge, so it is already
    // readable when the outcome is observed.
    assert_eq!(validator.advisory(), "Usuário já está em uso");
}

#[tokio::test(start_paused = true)]
async fn taken_email_uses_the_email_token() {
    let mut mock = MockUsuarioApi::new();
    mock.expect_verifica_email()
        .times(1)
        .returning(|_, _| Ok(false));

    let validator = RemoteUniquenessValidator::new(
        CampoUnico::Email,
        Arc::new(mock),
        Uuid::new_v4(),
        QUIESCENCE,
    );

    validator.schedule("joao@example.com");

    assert_eq!(
        validator.resolved().await,
        AsyncOutcome::Invalid("emailEmUso")
    );
    assert_eq!(validator.advisory(), "E-mail já está em uso");
}

#[tokio::test(start_paused = true)]
async fn transport_error_resolves_to_the_failure_token() {
    let mut mock = MockUsuarioApi::new();
    mock.expect_verifica_usuario()
        .times(1)
        .returning(|_, _| Err(AppError::service_unavailable("prevtrans")));

    let validator = RemoteUniquenessValidator::new(
        CampoUnico::Usuario,
        Arc::new(mock),
        Uuid::new_v4(),
        QUIESCENCE,
    );

    validator.schedule("joao.silva");

    assert_eq!(
        validator.resolved().await,
        AsyncOutcome::Invalid("usuarioEmUso")
    );
}

#[tokio::test(start_paused = true)]
async fn a_new_edit_restarts_the_quiescence_window() {
    let calls = Arc::new(AtomicUsize::new(0));
    let contador = calls.clone();

    let mut mock = MockUsuarioApi::new();
    mock.expect_verifica_usuario().returning(move |_, _| {
        contador.fetch_add(1, Ordering::SeqCst);
        Ok(true)
    });

    let validator = RemoteUniquenessValidator::new(
        CampoUnico::Usuario,
        Arc::new(mock),
        Uuid::new_v4(),
        QUIESCENCE,
    );

    validator.schedule("joao");
    tokio::time::advance(Duration::from_millis(900)).await;
    assert_eq!(calls.load(Ordering::SeqCst), 0);

    // Second edit inside the window supersedes the first check entirely.
    validator.schedule("joao.silva");
    tokio::time::advance(Duration::from_millis(900)).await;
    assert_eq!(calls.load(Ordering::SeqCst), 0);

    assert_eq!(validator.resolved().await, AsyncOutcome::Valid);
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[tokio::test(start_paused = true)]
async fn cancel_discards_the_pending_check_and_resets_the_outcome() {
    let calls = Arc::new(AtomicUsize::new(0));
    let contador = calls.clone();

    let mut mock = MockUsuarioApi::new();
    mock.expect_verifica_usuario().returning(move |_, _| {
        contador.fetch_add(1, Ordering::SeqCst);
        Ok(false)
    });

    let validator = RemoteUniquenessValidator::new(
        CampoUnico::Usuario,
        Arc::new(mock),
        Uuid::new_v4(),
        QUIESCENCE,
    );

    validator.schedule("admin");
    assert_eq!(validator.outcome(), AsyncOutcome::Pending);
    validator.cancel();

    tokio::time::sleep(Duration::from_millis(2000)).await;
    assert_eq!(calls.load(Ordering::SeqCst), 0);
    assert_eq!(validator.outcome(), AsyncOutcome::Valid);
    assert_eq!(validator.advisory(), "");
}

#[tokio::test(start_paused = true)]
async fn dropping_the_validator_discards_the_pending_check() {
    let calls = Arc::new(AtomicUsize::new(0));
    let contador = calls.clone();

    let mut mock = MockUsuarioApi::new();
    mock.expect_verifica_usuario().returning(move |_, _| {
        contador.fetch_add(1, Ordering::SeqCst);
        Ok(true)
    });

    let validator = RemoteUniquenessValidator::new(
        CampoUnico::Usuario,
        Arc::new(mock),
        Uuid::new_v4(),
        QUIESCENCE,
    );

    validator.schedule("joao.silva");
    drop(validator);

    tokio::time::sleep(Duration::from_millis(2000)).await;
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

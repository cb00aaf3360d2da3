//! User profile page.
//!
//! Owns the profile form (nome, usuario, email) with its two remote
//! uniqueness checks, the save/cancel workflow and the password-change
//! sub-workflow behind a modal.

use std::sync::Arc;
use std::time::Duration;

use tracing::warn;

use common::{AppError, AppResult, FormConfig};
use domain::{Usuario, EMAIL_REGEX, LOGIN_REGEX, MIN_NOME_LENGTH, MIN_SENHA_LENGTH};
use prevtrans_api::{AuthSession, UsuarioApi};

use crate::forms::{min_length, pattern, required, senhas_conferem, AsyncOutcome, FormGroup};
use crate::ui::{Navigator, Notifier, Toast};
use crate::validation::{CampoUnico, RemoteUniquenessValidator};

/// Submission workflow state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitState {
    Editing,
    Validating,
    Submitting,
    Succeeded,
    /// Client-side validation failed; nothing was sent.
    RejectedLocal,
    /// The backend rejected the update; single attempt, no retry.
    RejectedRemote,
}

/// Profile page component.
pub struct PerfilUsuarioPage {
    pub titulo: String,
    form: FormGroup,
    senha_form: FormGroup,
    estado: SubmitState,
    modal_senha_aberto: bool,
    api: Arc<dyn UsuarioApi>,
    session: Arc<dyn AuthSession>,
    navigator: Arc<dyn Navigator>,
    notifier: Arc<dyn Notifier>,
    verifica_usuario: RemoteUniquenessValidator,
    verifica_email: RemoteUniquenessValidator,
}

impl PerfilUsuarioPage {
    pub fn new(
        api: Arc<dyn UsuarioApi>,
        session: Arc<dyn AuthSession>,
        navigator: Arc<dyn Navigator>,
        notifier: Arc<dyn Notifier>,
        config: &FormConfig,
    ) -> Self {
        let form = FormGroup::builder()
            .control(
                "nome",
                vec![required(), min_length(MIN_NOME_LENGTH as usize)],
            )
            .control(
                "usuario",
                vec![
                    required(),
                    pattern(&LOGIN_REGEX, "Usuário contém caracteres inválidos"),
                ],
            )
            .control(
                "email",
                vec![required(), pattern(&EMAIL_REGEX, "E-mail inválido")],
            )
            .build();

        let senha_form = FormGroup::builder()
            .control(
                "senha",
                vec![required(), min_length(MIN_SENHA_LENGTH as usize)],
            )
            .control(
                "verificaSenha",
                vec![required(), min_length(MIN_SENHA_LENGTH as usize)],
            )
            .validator(senhas_conferem)
            .build();

        let quiescence = Duration::from_millis(config.quiescence_ms);
        let id_usuario = session.id_usuario();

        Self {
            titulo: "Perfil Usuário".to_string(),
            form,
            senha_form,
            estado: SubmitState::Editing,
            modal_senha_aberto: false,
            verifica_usuario: RemoteUniquenessValidator::new(
                CampoUnico::Usuario,
                api.clone(),
                id_usuario,
                quiescence,
            ),
            verifica_email: RemoteUniquenessValidator::new(
                CampoUnico::Email,
                api.clone(),
                id_usuario,
                quiescence,
            ),
            api,
            session,
            navigator,
            notifier,
        }
    }

    pub fn form(&self) -> &FormGroup {
        &self.form
    }

    pub fn senha_form(&self) -> &FormGroup {
        &self.senha_form
    }

    pub fn estado(&self) -> SubmitState {
        self.estado
    }

    pub fn modal_senha_aberto(&self) -> bool {
        self.modal_senha_aberto
    }

    /// Advisory message for the login-handle field.
    pub fn mensagem_erro_usuario(&self) -> String {
        self.verifica_usuario.advisory()
    }

    /// Advisory message for the email field.
    pub fn mensagem_erro_email(&self) -> String {
        self.verifica_email.advisory()
    }

    /// Load the authenticated principal's profile into the form.
    pub async fn carregar_perfil(&mut self) -> AppResult<()> {
        let usuario = self.api.get_usuario(self.session.id_usuario()).await?;
        self.patch_form(&usuario)?;
        Ok(())
    }

    pub fn edita_nome(&mut self, valor: &str) {
        self.form.set_value("nome", valor);
    }

    /// Edit the login handle; a clean value schedules a uniqueness check.
    pub fn edita_usuario(&mut self, valor: &str) {
        self.form.set_value("usuario", valor);
        self.agenda_verificacao(CampoUnico::Usuario, valor);
    }

    /// Edit the email; a clean value schedules a uniqueness check.
    pub fn edita_email(&mut self, valor: &str) {
        self.form.set_value("email", valor);
        self.agenda_verificacao(CampoUnico::Email, valor);
    }

    fn agenda_verificacao(&mut self, campo: CampoUnico, valor: &str) {
        let (nome_controle, validator) = match campo {
            CampoUnico::Usuario => ("usuario", &self.verifica_usuario),
            CampoUnico::Email => ("email", &self.verifica_email),
        };
        let Some(control) = self.form.control(nome_controle) else {
            return;
        };
        // Async checks only run once the sync rules pass. A value that
        // stopped passing them also supersedes any check still pending for
        // the previous value.
        let limpo = control.errors().is_empty();
        if limpo {
            validator.schedule(valor);
        } else {
            validator.cancel();
        }
        if let Some(control) = self.form.control_mut(nome_controle) {
            if limpo {
                control.set_async_outcome(AsyncOutcome::Pending);
            } else {
                control.clear_async_outcome();
            }
        }
    }

    /// Save the profile: local + async validation, then a single update
    /// attempt.
    pub async fn salvar(&mut self) -> AppResult<()> {
        self.estado = SubmitState::Validating;

        let outcome_usuario = self.verifica_usuario.resolved().await;
        let outcome_email = self.verifica_email.resolved().await;
        if let Some(control) = self.form.control_mut("usuario") {
            control.set_async_outcome(outcome_usuario);
        }
        if let Some(control) = self.form.control_mut("email") {
            control.set_async_outcome(outcome_email);
        }

        if !self.form.is_valid() {
            self.form.mark_all_touched();
            self.estado = SubmitState::RejectedLocal;
            return Ok(());
        }

        self.estado = SubmitState::Submitting;
        let usuario = Usuario::new(
            self.session.id_usuario(),
            self.form.value_of("nome").to_string(),
            self.form.value_of("usuario").to_string(),
            self.form.value_of("email").to_string(),
        );

        match self.api.alterar_perfil(usuario.id, &usuario).await {
            Ok(atual) => {
                self.patch_form(&atual)?;
                self.navigator.navigate("admin")?;
                self.notifier
                    .success(Toast::confirmacao("Dados do Usuário Alterados com sucesso!!"));
                self.estado = SubmitState::Succeeded;
            }
            Err(err) => {
                warn!(code = err.code(), "profile update rejected: {}", err);
                self.notifier.error(Toast::erro(err.user_message()));
                self.estado = SubmitState::RejectedRemote;
            }
        }
        Ok(())
    }

    /// Leave the page without saving.
    pub fn cancelar(&mut self) -> AppResult<()> {
        self.navigator.navigate("admin")?;
        self.notifier
            .success(Toast::confirmacao("Operação Cancelada !!"));
        Ok(())
    }

    pub fn abre_modal_senha(&mut self) {
        self.modal_senha_aberto = true;
    }

    pub fn fecha_modal_senha(&mut self) {
        self.modal_senha_aberto = false;
    }

    pub fn edita_senha(&mut self, valor: &str) {
        self.senha_form.set_value("senha", valor);
    }

    pub fn edita_verifica_senha(&mut self, valor: &str) {
        self.senha_form.set_value("verificaSenha", valor);
    }

    /// Submit the password change; only fires when the sub-form is valid.
    pub async fn salvar_senha(&mut self) -> AppResult<()> {
        if !self.senha_form.is_valid() {
            self.senha_form.mark_all_touched();
            return Ok(());
        }

        let senha = self.senha_form.value_of("senha").to_string();
        match self
            .api
            .alterar_senha(self.session.id_usuario(), &senha)
            .await
        {
            Ok(()) => {
                self.fecha_modal_senha();
                self.notifier
                    .success(Toast::confirmacao("Senha Alterada Com Sucesso!!"));
            }
            Err(err) => {
                warn!(code = err.code(), "password change rejected: {}", err);
                self.notifier.error(Toast::erro(err.user_message()));
            }
        }
        Ok(())
    }

    fn patch_form(&mut self, usuario: &Usuario) -> AppResult<()> {
        let value = serde_json::to_value(usuario)
            .map_err(|e| AppError::internal(format!("serialize usuario: {}", e)))?;
        self.form.patch_value(&value);
        Ok(())
    }
}

//! Traffic-accident listing and registration page.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::warn;

use common::AppResult;
use domain::AcidenteTransito;
use prevtrans_api::AcidenteApi;

use crate::forms::{required, FormGroup};
use crate::ui::{Navigator, Notifier, Toast};

/// Accident listing plus the cadastro form.
pub struct AcidentesTransitoPage {
    pub titulo: String,
    acidentes: Vec<AcidenteTransito>,
    cadastro_form: FormGroup,
    api: Arc<dyn AcidenteApi>,
    navigator: Arc<dyn Navigator>,
    notifier: Arc<dyn Notifier>,
}

impl AcidentesTransitoPage {
    pub fn new(
        api: Arc<dyn AcidenteApi>,
        navigator: Arc<dyn Navigator>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        let cadastro_form = FormGroup::builder()
            .control("titulo", vec![required()])
            .control("descricao", vec![required()])
            .build();

        Self {
            titulo: "Acidentes de Trânsito".to_string(),
            acidentes: Vec::new(),
            cadastro_form,
            api,
            navigator,
            notifier,
        }
    }

    pub fn acidentes(&self) -> &[AcidenteTransito] {
        &self.acidentes
    }

    pub fn cadastro_form(&self) -> &FormGroup {
        &self.cadastro_form
    }

    /// Load the accident listing.
    pub async fn carregar(&mut self) -> AppResult<()> {
        self.acidentes = self.api.acidentes().await?;
        Ok(())
    }

    pub fn edita_titulo(&mut self, valor: &str) {
        self.cadastro_form.set_value("titulo", valor);
    }

    pub fn edita_descricao(&mut self, valor: &str) {
        self.cadastro_form.set_value("descricao", valor);
    }

    /// Register a new accident with the form's title/description and the
    /// given occurrence data.
    pub async fn salvar(
        &mut self,
        data: DateTime<Utc>,
        latitude: f64,
        longitude: f64,
    ) -> AppResult<()> {
        if !self.cadastro_form.is_valid() {
            self.cadastro_form.mark_all_touched();
            return Ok(());
        }

        let acidente = AcidenteTransito::new(
            self.cadastro_form.value_of("titulo").to_string(),
            self.cadastro_form.value_of("descricao").to_string(),
            data,
            latitude,
            longitude,
        );

        match self.api.post_acidente(&acidente).await {
            Ok(salvo) => {
                self.acidentes.push(salvo);
                self.navigator.navigate("admin/acidentes-de-transito")?;
                self.notifier.success(Toast::confirmacao(
                    "Acidente de Trânsito Cadastrado com sucesso!!",
                ));
            }
            Err(err) => {
                warn!(code = err.code(), "accident registration rejected: {}", err);
                self.notifier.error(Toast::erro(err.user_message()));
            }
        }
        Ok(())
    }
}

//! Accident page tests.

use std::sync::{Arc, Mutex};

use chrono::Utc;

use common::AppResult;
use domain::AcidenteTransito;
use prevtrans_admin_lib::pages::AcidentesTransitoPage;
use prevtrans_admin_lib::ui::{Navigator, Notifier, Toast};
use prevtrans_api::MockAcidenteApi;

#[derive(Default)]
struct RecordingShell {
    paths: Mutex<Vec<String>>,
    toasts: Mutex<Vec<Toast>>,
}

impl Navigator for RecordingShell {
    fn navigate(&self, path: &str) -> AppResult<()> {
        self.paths.lock().unwrap().push(path.to_string());
        Ok(())
    }
}

impl Notifier for RecordingShell {
    fn success(&self, toast: Toast) {
        self.toasts.lock().unwrap().push(toast);
    }

    fn error(&self, toast: Toast) {
        self.toasts.lock().unwrap().push(toast);
    }
}

fn acidente(titulo: &str) -> AcidenteTransito {
    AcidenteTransito::new(
        titulo.to_string(),
        "Colisão em cruzamento".to_string(),
        Utc::now(),
        -23.55,
        -46.63,
    )
}

#[tokio::test]
async fn carregar_fills_the_listing() {
    let mut mock = MockAcidenteApi::new();
    mock.expect_acidentes()
        .times(1)
        .returning(|| Ok(vec![acidente("Acidente A"), acidente("Acidente B")]));

    let shell = Arc::new(RecordingShell::default());
    let mut page = AcidentesTransitoPage::new(Arc::new(mock), shell.clone(), shell.clone());

    page.carregar().await.unwrap();
    assert_eq!(page.acidentes().len(), 2);
}

#[tokio::test]
async fn empty_cadastro_is_rejected_without_any_network_call() {
    // No expectations: any API call would fail the test.
    let shell = Arc::new(RecordingShell::default());
    let mut page =
        AcidentesTransitoPage::new(Arc::new(MockAcidenteApi::new()), shell.clone(), shell.clone());

    page.salvar(Utc::now(), -23.55, -46.63).await.unwrap();

    assert!(page.cadastro_form().control("titulo").unwrap().touched());
    assert!(shell.paths.lock().unwrap().is_empty());
}

#[tokio::test]
async fn valid_cadastro_posts_navigates_and_confirms() {
    let mut mock = MockAcidenteApi::new();
    mock.expect_post_acidente()
        .withf(|acidente| acidente.titulo == "Atropelamento na BR-101")
        .times(1)
        .returning(|acidente| Ok(acidente.clone()));

    let shell = Arc::new(RecordingShell::default());
    let mut page = AcidentesTransitoPage::new(Arc::new(mock), shell.clone(), shell.clone());

    page.edita_titulo("Atropelamento na BR-101");
    page.edita_descricao("Vítima encaminhada ao hospital");
    page.salvar(Utc::now(), -27.59, -48.55).await.unwrap();

    assert_eq!(page.acidentes().len(), 1);
    assert_eq!(
        shell.paths.lock().unwrap().clone(),
        vec!["admin/acidentes-de-transito".to_string()]
    );
    assert_eq!(
        shell.toasts.lock().unwrap()[0].msg,
        "Acidente de Trânsito Cadastrado com sucesso!!"
    );
}

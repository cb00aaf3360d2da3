//! Application state for dependency injection.

use std::sync::Arc;

use common::AppResult;
use prevtrans_api::{
    AcidenteApi, AcidenteClient, ApiClient, AuthSession, UsuarioApi, UsuarioClient,
};

use crate::config::AdminConfig;

/// Application state shared across pages.
#[derive(Clone)]
pub struct AppState {
    pub usuarios: Arc<dyn UsuarioApi>,
    pub acidentes: Arc<dyn AcidenteApi>,
    pub session: Arc<dyn AuthSession>,
    pub config: AdminConfig,
}

impl AppState {
    pub fn new(
        usuarios: Arc<dyn UsuarioApi>,
        acidentes: Arc<dyn AcidenteApi>,
        session: Arc<dyn AuthSession>,
        config: AdminConfig,
    ) -> Self {
        Self {
            usuarios,
            acidentes,
            session,
            config,
        }
    }

    /// Wire the live HTTP clients from configuration.
    pub fn from_config(config: AdminConfig, session: Arc<dyn AuthSession>) -> AppResult<Self> {
        let api = ApiClient::new(&config.api, session.clone())?;
        Ok(Self {
            usuarios: Arc::new(UsuarioClient::new(api.clone())),
            acidentes: Arc::new(AcidenteClient::new(api)),
            session,
            config,
        })
    }
}

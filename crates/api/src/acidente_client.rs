//! Typed client for the `/acidentesTransito` resource.

use async_trait::async_trait;
use validator::Validate;

use common::AppResult;
use domain::AcidenteTransito;

use crate::client::ApiClient;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Traffic-accident operations against the backend.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait AcidenteApi: Send + Sync {
    /// List all traffic-accident records
    async fn acidentes(&self) -> AppResult<Vec<AcidenteTransito>>;

    /// Create a record; returns the canonical stored record
    async fn post_acidente(&self, acidente: &AcidenteTransito) -> AppResult<AcidenteTransito>;
}

/// Live implementation over [`ApiClient`].
pub struct AcidenteClient {
    api: ApiClient,
}

impl AcidenteClient {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }
}

#[async_trait]
impl AcidenteApi for AcidenteClient {
    async fn acidentes(&self) -> AppResult<Vec<AcidenteTransito>> {
        self.api.get_json("acidentesTransito").await
    }

    async fn post_acidente(&self, acidente: &AcidenteTransito) -> AppResult<AcidenteTransito> {
        acidente.validate()?;
        self.api.post_json("acidentesTransito", acidente).await
    }
}

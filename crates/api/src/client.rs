//! Base HTTP client for the Prevtrans REST API.

use std::sync::Arc;
use std::time::Duration;

use reqwest::{RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use common::{ApiClientConfig, AppError, AppResult};

use crate::session::AuthSession;

/// Authenticated JSON client bound to a fixed base URL.
///
/// Every request carries the session's bearer credential; every non-success
/// response is normalized into [`AppError`] before it reaches a caller.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    session: Arc<dyn AuthSession>,
}

impl ApiClient {
    pub fn new(config: &ApiClientConfig, session: Arc<dyn AuthSession>) -> AppResult<Self> {
        let http = reqwest::Client::builder()
            .connect_timeout(Duration::from_millis(config.connect_timeout_ms))
            .timeout(Duration::from_millis(config.request_timeout_ms))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            session,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    fn authorized(&self, req: RequestBuilder) -> RequestBuilder {
        req.bearer_auth(self.session.token())
    }

    /// `GET {base}/{path}` deserialized as JSON.
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> AppResult<T> {
        debug!("GET {}", path);
        let resp = self.authorized(self.http.get(self.url(path))).send().await?;
        Self::decode(resp).await
    }

    /// `POST {base}/{path}` with a JSON body, deserialized response.
    pub async fn post_json<B, T>(&self, path: &str, body: &B) -> AppResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        debug!("POST {}", path);
        let resp = self
            .authorized(self.http.post(self.url(path)).json(body))
            .send()
            .await?;
        Self::decode(resp).await
    }

    /// `PUT {base}/{path}` with a JSON body, deserialized response.
    pub async fn put_json<B, T>(&self, path: &str, body: &B) -> AppResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        debug!("PUT {}", path);
        let resp = self
            .authorized(self.http.put(self.url(path)).json(body))
            .send()
            .await?;
        Self::decode(resp).await
    }

    /// `PUT {base}/{path}` with a JSON body, discarding the response body.
    pub async fn put_unit<B>(&self, path: &str, body: &B) -> AppResult<()>
    where
        B: Serialize + ?Sized,
    {
        debug!("PUT {}", path);
        let resp = self
            .authorized(self.http.put(self.url(path)).json(body))
            .send()
            .await?;
        let status = resp.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(Self::normalize(status, resp).await)
        }
    }

    /// Availability probe for the uniqueness-check endpoints.
    ///
    /// The wire convention is inverted relative to what callers want: the
    /// backend answers success when the value is free and `409 Conflict`
    /// when it is taken. This is the only place that convention exists;
    /// callers get a plain boolean (`true` = available).
    pub async fn check_available(&self, path: &str, query: &[(&str, String)]) -> AppResult<bool> {
        debug!("GET {} (availability check)", path);
        let resp = self
            .authorized(self.http.get(self.url(path)).query(query))
            .send()
            .await?;

        let status = resp.status();
        if status.is_success() {
            Ok(true)
        } else if status == reqwest::StatusCode::CONFLICT {
            Ok(false)
        } else {
            Err(Self::normalize(status, resp).await)
        }
    }

    async fn decode<T: DeserializeOwned>(resp: Response) -> AppResult<T> {
        let status = resp.status();
        if status.is_success() {
            Ok(resp.json::<T>().await?)
        } else {
            Err(Self::normalize(status, resp).await)
        }
    }

    async fn normalize(status: reqwest::StatusCode, resp: Response) -> AppError {
        let message = resp.text().await.unwrap_or_default();
        AppError::from_response_status(status, message)
    }
}

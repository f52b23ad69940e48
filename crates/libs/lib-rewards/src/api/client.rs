//! # API Client
//!
//! Main HTTP client for backend API communication.

use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use shared::{Ad, AdminUser, BalanceResponse, Credentials, ErrorResponse};

use crate::config::ClientConfig;
use crate::error::{ClientError, Result};
use crate::service::RewardsApi;

/// HTTP client for communicating with the rewards backend.
///
/// Cloning is cheap: the underlying `reqwest::Client` shares its connection pool.
#[derive(Debug, Clone)]
pub struct ApiClient {
    pub(crate) client: Client,
    base_url: String,
}

impl ApiClient {
    /// Create a client for an already resolved base URL.
    ///
    /// On native targets requests time out after 10 seconds; the browser's fetch
    /// has no per-request timeout.
    pub fn new(base_url: impl Into<String>) -> Self {
        #[cfg(not(target_arch = "wasm32"))]
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(10))
            .build()
            .unwrap_or_else(|_| Client::new());

        #[cfg(target_arch = "wasm32")]
        let client = Client::new();

        let base_url: String = base_url.into();
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Create a client from configuration. `origin` is needed for same-origin mode.
    pub fn from_config(config: &ClientConfig, origin: Option<&str>) -> Result<Self> {
        let base_url = config.base.resolve(origin)?;
        Ok(Self::new(base_url))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let response = self.client.get(self.url(path)).send().await?;
        let response = check_status(response).await?;
        decode(response).await
    }

    /// POST a JSON body and discard whatever the backend answers on success.
    pub(crate) async fn post_unit<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<()> {
        let response = self.client.post(self.url(path)).json(body).send().await?;
        check_status(response).await?;
        Ok(())
    }
}

/// Turn a non-2xx response into [`ClientError::Status`].
pub(crate) async fn check_status(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    let message = match serde_json::from_str::<ErrorResponse>(&body) {
        Ok(error) => error.error,
        Err(_) if !body.trim().is_empty() => body.trim().to_string(),
        Err(_) => status.canonical_reason().unwrap_or("Unknown status").to_string(),
    };

    Err(ClientError::Status {
        status: status.as_u16(),
        message,
    })
}

pub(crate) async fn decode<T: DeserializeOwned>(response: Response) -> Result<T> {
    let body = response.text().await?;
    serde_json::from_str(&body).map_err(|e| ClientError::Decode(e.to_string()))
}

#[async_trait(?Send)]
impl RewardsApi for ApiClient {
    async fn login(&self, credentials: &Credentials) -> Result<()> {
        crate::api::auth::login(self, credentials).await
    }

    async fn register(&self, credentials: &Credentials) -> Result<()> {
        crate::api::auth::register(self, credentials).await
    }

    async fn balance(&self, user: &str) -> Result<BalanceResponse> {
        crate::api::rewards::get_balance(self, user).await
    }

    async fn ads(&self) -> Result<Vec<Ad>> {
        crate::api::rewards::list_ads(self).await
    }

    async fn admin_users(&self) -> Result<Vec<AdminUser>> {
        crate::api::admin::list_users(self).await
    }

    async fn withdraw(&self, email: &str) -> Result<()> {
        crate::api::admin::withdraw(self, email).await
    }
}

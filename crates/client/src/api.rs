//! HTTP access to the user listing endpoint.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Url};
use tracing::debug;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

use domain::{UserResponse, USERS_PATH};

use crate::config::ClientConfig;
use crate::error::{ClientError, ClientResult};

/// Source of the user list.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UserApi: Send + Sync {
    /// Fetch every registered user.
    async fn get_users(&self) -> ClientResult<Vec<UserResponse>>;
}

/// `UserApi` backed by a reqwest client.
pub struct HttpUserApi {
    client: Client,
    endpoint: Url,
}

impl HttpUserApi {
    /// Build a client for the API at `base_url` with a per-request timeout.
    ///
    /// # Errors
    ///
    /// Returns an error when the URL is invalid or the reqwest client cannot
    /// be constructed.
    pub fn new(base_url: &str, timeout: Duration) -> ClientResult<Self> {
        let endpoint = users_endpoint(base_url)?;
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self { client, endpoint })
    }

    pub fn from_config(config: &ClientConfig) -> ClientResult<Self> {
        Self::new(&config.api_url, config.timeout())
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl UserApi for HttpUserApi {
    async fn get_users(&self) -> ClientResult<Vec<UserResponse>> {
        debug!("GET {}", self.endpoint);

        let response = self
            .client
            .get(self.endpoint.clone())
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await?;

        let status = response.status();
        let body = response.bytes().await?;
        if !status.is_success() {
            return Err(ClientError::Status(status.as_u16()));
        }

        parse_users(body.as_ref())
    }
}

/// Resolve the users path below the base URL, keeping any path prefix.
fn users_endpoint(base_url: &str) -> ClientResult<Url> {
    let mut base = Url::parse(base_url).map_err(|e| invalid_url(base_url, e))?;
    if !base.path().ends_with('/') {
        let path = format!("{}/", base.path());
        base.set_path(&path);
    }
    base.join(USERS_PATH.trim_start_matches('/'))
        .map_err(|e| invalid_url(base_url, e))
}

fn invalid_url(base_url: &str, err: impl std::fmt::Display) -> ClientError {
    ClientError::InvalidUrl(format!("{base_url}: {err}"))
}

fn parse_users(body: &[u8]) -> ClientResult<Vec<UserResponse>> {
    serde_json::from_slice(body).map_err(|e| ClientError::Decode(e.to_string()))
}

//! JSON-over-HTTP access to the backend

use std::time::Duration;

use reqwest::Client;
use serde::{de::DeserializeOwned, Serialize};
use tracing::{debug, info};
use url::Url;

use super::error::RemoteError;

pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8000";
pub const DEFAULT_ROADMAP_PATH: &str = "/api/roadmap";
pub const DEFAULT_TESTS_PATH: &str = "/api/discover/tests";
pub const DEFAULT_EVALUATE_PATH: &str = "/api/discover/evaluate";
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Where the backend lives and which paths it serves
#[derive(Debug, Clone)]
pub struct BackendConfig {
    pub base_url: String,
    pub roadmap_path: String,
    pub tests_path: String,
    pub evaluate_path: String,
    pub timeout: Duration,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BACKEND_URL.to_string(),
            roadmap_path: DEFAULT_ROADMAP_PATH.to_string(),
            tests_path: DEFAULT_TESTS_PATH.to_string(),
            evaluate_path: DEFAULT_EVALUATE_PATH.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

/// Shared HTTP client bound to one base URL
#[derive(Debug, Clone)]
pub struct Backend {
    client: Client,
    base: Url,
}

impl Backend {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, RemoteError> {
        let base = Url::parse(base_url).map_err(|source| RemoteError::InvalidUrl {
            url: base_url.to_string(),
            source,
        })?;
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|source| RemoteError::Transport {
                url: base_url.to_string(),
                source,
            })?;
        Ok(Self { client, base })
    }

    pub fn from_config(config: &BackendConfig) -> Result<Self, RemoteError> {
        Self::new(&config.base_url, config.timeout)
    }

    pub fn base_url(&self) -> &Url {
        &self.base
    }

    /// Resolve `path` against the base URL, keeping any base path prefix
    pub fn endpoint(&self, path: &str) -> Result<Url, RemoteError> {
        let mut joined = self.base.as_str().trim_end_matches('/').to_string();
        joined.push('/');
        joined.push_str(path.trim_start_matches('/'));
        Url::parse(&joined).map_err(|source| RemoteError::InvalidUrl {
            url: joined,
            source,
        })
    }

    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, RemoteError> {
        let url = self.endpoint(path)?;
        debug!(url = %url, "GET");

        let resp = self
            .client
            .get(url.as_str())
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|source| RemoteError::Transport {
                url: url.to_string(),
                source,
            })?;

        decode(url, resp).await
    }

    pub async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T, RemoteError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.endpoint(path)?;
        debug!(url = %url, "POST");

        let resp = self
            .client
            .post(url.as_str())
            .header("Accept", "application/json")
            .json(body)
            .send()
            .await
            .map_err(|source| RemoteError::Transport {
                url: url.to_string(),
                source,
            })?;

        decode(url, resp).await
    }
}

async fn decode<T: DeserializeOwned>(url: Url, resp: reqwest::Response) -> Result<T, RemoteError> {
    let status = resp.status();
    let body = resp.text().await.map_err(|source| RemoteError::Transport {
        url: url.to_string(),
        source,
    })?;

    if !status.is_success() {
        return Err(RemoteError::Status {
            url: url.to_string(),
            status: status.as_u16(),
            body,
        });
    }

    let value = serde_json::from_str(&body).map_err(|source| RemoteError::MalformedBody {
        url: url.to_string(),
        source,
    })?;
    info!(url = %url, status = status.as_u16(), "backend responded");
    Ok(value)
}

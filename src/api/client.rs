use std::time::Duration;

use async_trait::async_trait;
use log::{debug, warn};

use crate::domain::ApiError;

/// Connect and request deadline used when nothing else is configured.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// Raw HTTP GET. Implementations classify every failure into [`ApiError`]
/// so no transport-specific error type escapes this boundary.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Fetches `url` and returns the response body on a 2xx status.
    async fn get(&self, url: &str) -> Result<String, ApiError>;
}

/// reqwest-backed transport with a fixed connect and request timeout.
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    pub fn new(timeout: Duration) -> Result<Self, ApiError> {
        let client = reqwest::Client::builder()
            .connect_timeout(timeout)
            .timeout(timeout)
            .build()
            .map_err(|e| ApiError::Unknown(format!("Failed to build HTTP client: {e}")))?;
        Ok(Self { client })
    }
}

/// Maps a reqwest failure onto the error taxonomy.
fn classify(e: &reqwest::Error) -> ApiError {
    if e.is_timeout() {
        ApiError::Timeout
    } else if let Some(status) = e.status() {
        ApiError::Server(status.as_u16())
    } else if e.is_connect() || e.is_request() || e.is_body() {
        ApiError::Network
    } else if e.is_decode() {
        ApiError::Parse(e.to_string())
    } else {
        ApiError::Unknown(e.to_string())
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn get(&self, url: &str) -> Result<String, ApiError> {
        debug!("GET {}", url);

        let response = self.client.get(url).send().await.map_err(|e| {
            warn!("GET {} failed: {}", url, e);
            classify(&e)
        })?;

        let status = response.status();
        debug!("GET {} -> {}", url, status);
        if !status.is_success() {
            warn!("GET {} returned HTTP {}", url, status.as_u16());
            return Err(ApiError::Server(status.as_u16()));
        }

        response.text().await.map_err(|e| {
            warn!("Failed to read body from {}: {}", url, e);
            classify(&e)
        })
    }
}

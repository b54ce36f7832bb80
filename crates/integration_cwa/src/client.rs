//! CWA open-data client
//!
//! HTTP client for the CWA open-data platform. Authentication is a query
//! parameter API key; the key is checked on every call so a missing key
//! surfaces as a per-request error instead of a startup crash.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, instrument, warn};

use crate::models::{CwaResponse, Records};

/// Dataset identifier of the 36-hour general weather forecast
pub const FORECAST_36H_DATASET: &str = "F-C0032-001";

/// CWA client errors
#[derive(Debug, Error)]
pub enum CwaError {
    /// No API key configured; detected before any request is issued
    #[error("CWA API key is not configured")]
    MissingCredential,

    /// Upstream reachable but returned a non-2xx status
    #[error("CWA API returned HTTP {status}: {message}")]
    UpstreamStatus {
        status: u16,
        message: String,
        details: Value,
    },

    /// Network-level failure, no structured upstream response
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Response body did not match the expected schema
    #[error("Parse error: {0}")]
    ParseError(String),
}

/// CWA service configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CwaConfig {
    /// CWA open-data API base URL
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// Open-data platform API key, checked per request
    #[serde(default)]
    pub api_key: Option<String>,

    /// Location queried by the fixed forecast route
    #[serde(default = "default_fixed_location")]
    pub fixed_location: String,
}

fn default_base_url() -> String {
    "https://opendata.cwa.gov.tw/api".to_string()
}

const fn default_timeout() -> u64 {
    30
}

fn default_fixed_location() -> String {
    // TODO: the fixed route is named kaohsiung but the service has always
    // queried 桃園市; confirm the intended city before changing this default.
    "桃園市".to_string()
}

impl Default for CwaConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout(),
            api_key: None,
            fixed_location: default_fixed_location(),
        }
    }
}

/// Forecast client trait, the seam handlers are tested through
#[async_trait]
pub trait ForecastClient: Send + Sync {
    /// Fetch 36-hour forecast records for a full county/city name
    async fn fetch_forecast(&self, location_name: &str) -> Result<Records, CwaError>;
}

/// CWA open-data HTTP client implementation
#[derive(Debug, Clone)]
pub struct CwaClient {
    client: Client,
    config: CwaConfig,
}

impl CwaClient {
    /// Create a new client with the given configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(config: CwaConfig) -> Result<Self, CwaError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| CwaError::RequestFailed(e.to_string()))?;

        Ok(Self { client, config })
    }

    fn datastore_url(&self) -> String {
        format!(
            "{}/v1/rest/datastore/{FORECAST_36H_DATASET}",
            self.config.base_url
        )
    }
}

#[async_trait]
impl ForecastClient for CwaClient {
    #[instrument(skip(self), fields(location = %location_name))]
    async fn fetch_forecast(&self, location_name: &str) -> Result<Records, CwaError> {
        let api_key = match self.config.api_key.as_deref() {
            Some(key) if !key.is_empty() => key,
            _ => return Err(CwaError::MissingCredential),
        };

        let url = self.datastore_url();
        debug!(url = %url, "Fetching CWA forecast");

        let response = self
            .client
            .get(&url)
            .query(&[("Authorization", api_key), ("locationName", location_name)])
            .send()
            .await
            .map_err(|e| CwaError::RequestFailed(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let details: Value = response.json().await.unwrap_or(Value::Null);
            let message = details
                .get("message")
                .and_then(Value::as_str)
                .unwrap_or("無法取得天氣資料")
                .to_string();
            warn!(status = %status, message = %message, "CWA API returned an error status");
            return Err(CwaError::UpstreamStatus {
                status: status.as_u16(),
                message,
                details,
            });
        }

        let body: CwaResponse = response
            .json()
            .await
            .map_err(|e| CwaError::ParseError(e.to_string()))?;

        Ok(body.records)
    }
}

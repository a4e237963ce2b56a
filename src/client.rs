//! High-level client — `PredictorClient` with nested sub-client accessors.
//!
//! Each domain has its own sub-client in `domain/<name>/client.rs`.
//! This module keeps the builder, the accessor methods, and the
//! [`PredictionSource`] seam the dashboard controller fetches through.

use crate::domain::prediction::client::PredictionClient;
use crate::domain::prediction::PredictionResponse;
use crate::error::FetchError;
use crate::http::PredictorHttp;
use crate::network::{DEFAULT_API_URL, DEFAULT_TIMEOUT_SECS};

use async_trait::async_trait;
use std::time::Duration;

// Re-export sub-client types for convenience.
pub use crate::domain::prediction::client::PredictionClient as PredictionSubClient;

/// Anything that can produce a forecast for a ticker.
///
/// Implemented by [`PredictorClient`]; tests and embedders can supply their own.
#[async_trait]
pub trait PredictionSource: Send + Sync + 'static {
    async fn fetch_prediction(&self, symbol: &str) -> Result<PredictionResponse, FetchError>;
}

/// The primary entry point for the prediction API.
#[derive(Clone)]
pub struct PredictorClient {
    pub(crate) http: PredictorHttp,
}

impl PredictorClient {
    pub fn builder() -> PredictorClientBuilder {
        PredictorClientBuilder::default()
    }

    /// Client for the deployment's fixed API URL.
    pub fn new() -> Result<Self, FetchError> {
        Self::builder().build()
    }

    // ── Sub-client accessors ─────────────────────────────────────────────

    pub fn predictions(&self) -> PredictionClient<'_> {
        PredictionClient { client: self }
    }

    pub fn base_url(&self) -> &str {
        self.http.base_url()
    }
}

#[async_trait]
impl PredictionSource for PredictorClient {
    async fn fetch_prediction(&self, symbol: &str) -> Result<PredictionResponse, FetchError> {
        self.predictions().get(symbol).await
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

pub struct PredictorClientBuilder {
    base_url: String,
    timeout: Duration,
}

impl Default for PredictorClientBuilder {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl PredictorClientBuilder {
    pub fn base_url(mut self, url: &str) -> Self {
        self.base_url = url.to_string();
        self
    }

    /// Transport timeout for each request.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn build(self) -> Result<PredictorClient, FetchError> {
        Ok(PredictorClient {
            http: PredictorHttp::new(&self.base_url, self.timeout)?,
        })
    }
}

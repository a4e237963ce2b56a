//! Low-level HTTP client — `PredictorHttp`.
//!
//! One method per API endpoint. Returns wire types. Internal to the crate —
//! `PredictorClient` wraps this.

use crate::domain::prediction::PredictionResponse;
use crate::error::FetchError;
use crate::network::PREDICT_PATH;
use crate::shared::Symbol;

use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;

/// Low-level HTTP client for the prediction REST API.
#[derive(Clone)]
pub struct PredictorHttp {
    base_url: String,
    client: Client,
}

impl PredictorHttp {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, FetchError> {
        let mut builder = Client::builder();
        #[cfg(not(target_arch = "wasm32"))]
        {
            builder = builder.timeout(timeout).pool_max_idle_per_host(4);
        }
        #[cfg(target_arch = "wasm32")]
        let _ = timeout;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: builder.build()?,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// URL of the prediction endpoint for `symbol`.
    pub fn prediction_url(&self, symbol: &Symbol) -> String {
        format!("{}{}/{}", self.base_url, PREDICT_PATH, symbol.path_segment())
    }

    // ── Predictions ──────────────────────────────────────────────────────

    pub async fn get_prediction(&self, symbol: &Symbol) -> Result<PredictionResponse, FetchError> {
        let url = self.prediction_url(symbol);
        self.get(&url).await
    }

    // ── Internal HTTP methods ────────────────────────────────────────────

    async fn get<T: DeserializeOwned>(&self, url: &str) -> Result<T, FetchError> {
        tracing::debug!(url, "GET");

        let resp = self.client.get(url).send().await?;
        let status = resp.status();
        let body = resp.text().await?;

        tracing::debug!(status = status.as_u16(), bytes = body.len(), "Response from {}", url);

        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), "Request to {} failed", url);
            return Err(FetchError::Status {
                status: status.as_u16(),
                body,
            });
        }

        serde_json::from_str::<T>(&body).map_err(|e| {
            tracing::warn!(error = %e, "Undecodable body from {}", url);
            FetchError::Decode(e)
        })
    }
}

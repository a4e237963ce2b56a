//! Prediction sub-client — one forecast per call, no caching.

use crate::client::PredictorClient;
use crate::domain::prediction::PredictionResponse;
use crate::error::FetchError;
use crate::shared::Symbol;

/// Sub-client for prediction operations.
pub struct PredictionClient<'a> {
    pub(crate) client: &'a PredictorClient,
}

impl<'a> PredictionClient<'a> {
    /// Fetch the forecast for `symbol`.
    ///
    /// The input is normalised (trimmed, uppercased) before the request is
    /// built. Single attempt: any failure is returned as-is.
    pub async fn get(&self, symbol: &str) -> Result<PredictionResponse, FetchError> {
        let symbol: Symbol = symbol.parse()?;
        self.client.http.get_prediction(&symbol).await
    }
}

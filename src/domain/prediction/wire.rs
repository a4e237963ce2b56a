//! Wire types for the prediction endpoint (REST).

use serde::{Deserialize, Serialize};

/// REST response for `GET /predict/{symbol}`.
///
/// Unknown fields are ignored; every listed field is required.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictionResponse {
    /// Uppercased ticker echoed by the backend.
    pub symbol: String,
    pub current_price: f64,
    pub predicted_price: f64,
    /// Backend certainty in `[0, 1]`.
    pub confidence: f64,
    /// Opaque, not parsed.
    pub timestamp: String,
    pub predictions: Predictions,
    /// Chronological; insertion order is display order.
    pub historical_prices: Vec<HistoricalPrice>,
}

/// Forecasts per horizon.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Predictions {
    pub one_day: f64,
    pub one_week: f64,
    pub one_month: f64,
}

/// One historical close.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoricalPrice {
    pub timestamp: String,
    pub price: f64,
}

//! Render model — what the screen shows for each phase, independent of any toolkit.

use super::{Dashboard, Phase};
use crate::domain::prediction::{Horizon, PredictionResponse, Trend};
use crate::domain::price_history::PriceChart;
use crate::shared::fmt::num;

pub const TITLE: &str = "Stock Predictor";
pub const INPUT_LABEL: &str = "Enter Stock Symbol (e.g. AAPL)";

/// Everything needed to draw the screen once.
#[derive(Debug, Clone, PartialEq)]
pub struct Screen {
    pub title: &'static str,
    pub input_label: &'static str,
    pub input: String,
    pub body: Body,
}

/// Content below the input form.
#[derive(Debug, Clone, PartialEq)]
pub enum Body {
    /// Nothing submitted yet.
    Form,
    /// Indeterminate progress for `symbol`.
    Progress { symbol: String },
    Error(String),
    Prediction(PredictionCard),
}

/// Formatted forecast for one symbol.
#[derive(Debug, Clone, PartialEq)]
pub struct PredictionCard {
    pub symbol: String,
    pub current_price: String,
    /// One-day predicted price.
    pub predicted_price: String,
    pub trend: Trend,
    /// Signed change, e.g. `+$5.00 (+3.33%)`.
    pub change: String,
    pub confidence: String,
    /// Label and formatted price for the longer horizons.
    pub horizons: Vec<(&'static str, String)>,
    pub chart: PriceChart,
}

impl PredictionCard {
    pub fn new(data: &PredictionResponse) -> Self {
        let change = match data.expected_change_pct() {
            Some(pct) => format!(
                "{} ({})",
                num::signed_price(data.expected_change()),
                num::signed_percent(pct)
            ),
            None => num::signed_price(data.expected_change()),
        };

        Self {
            symbol: data.symbol.clone(),
            current_price: num::price(data.current_price),
            predicted_price: num::price(data.predicted_price),
            trend: data.trend(),
            change,
            confidence: num::percent(data.confidence_percent()),
            horizons: [Horizon::OneWeek, Horizon::OneMonth]
                .into_iter()
                .map(|h| (h.label(), num::price(data.forecast(h))))
                .collect(),
            chart: PriceChart::from_history(&data.historical_prices),
        }
    }
}

impl Dashboard {
    pub fn screen(&self) -> Screen {
        let body = match self.phase() {
            Phase::Idle => Body::Form,
            Phase::Loading { symbol, .. } => Body::Progress {
                symbol: symbol.clone(),
            },
            Phase::Failed(message) => Body::Error(message.clone()),
            Phase::Success(data) => Body::Prediction(PredictionCard::new(data)),
        };

        Screen {
            title: TITLE,
            input_label: INPUT_LABEL,
            input: self.input().to_string(),
            body,
        }
    }
}

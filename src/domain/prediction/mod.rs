//! Prediction domain — forecast response, horizons, trend.

#[cfg(feature = "http")]
pub mod client;
pub mod wire;

pub use wire::{HistoricalPrice, PredictionResponse, Predictions};

/// A named future offset for which the backend produces a forecast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Horizon {
    OneDay,
    OneWeek,
    OneMonth,
}

impl Horizon {
    pub fn label(&self) -> &'static str {
        match self {
            Horizon::OneDay => "1 Day",
            Horizon::OneWeek => "1 Week",
            Horizon::OneMonth => "1 Month",
        }
    }
}

impl std::fmt::Display for Horizon {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Direction of the predicted move relative to the current price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Trend {
    Up,
    Down,
}

impl Trend {
    /// `Up` when `predicted >= current`.
    pub fn between(current: f64, predicted: f64) -> Self {
        if predicted >= current {
            Trend::Up
        } else {
            Trend::Down
        }
    }
}

impl Predictions {
    pub fn get(&self, horizon: Horizon) -> f64 {
        match horizon {
            Horizon::OneDay => self.one_day,
            Horizon::OneWeek => self.one_week,
            Horizon::OneMonth => self.one_month,
        }
    }
}

impl PredictionResponse {
    pub fn trend(&self) -> Trend {
        Trend::between(self.current_price, self.predicted_price)
    }

    pub fn expected_change(&self) -> f64 {
        self.predicted_price - self.current_price
    }

    /// Expected change in percent of the current price; `None` when the current price is zero.
    pub fn expected_change_pct(&self) -> Option<f64> {
        if self.current_price == 0.0 {
            return None;
        }
        Some(self.expected_change() / self.current_price * 100.0)
    }

    /// Confidence as a whole percentage, rounded and clamped to `0..=100`.
    pub fn confidence_percent(&self) -> u8 {
        let pct = (self.confidence * 100.0).round();
        if pct.is_nan() {
            return 0;
        }
        pct.clamp(0.0, 100.0) as u8
    }

    pub fn forecast(&self, horizon: Horizon) -> f64 {
        self.predictions.get(horizon)
    }
}

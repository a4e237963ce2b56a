//! Price history domain — chart points derived from historical prices.

pub mod chart;

use crate::domain::prediction::HistoricalPrice;

pub use chart::PriceChart;

/// A single data point on a price chart, plotted by position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineData {
    /// Index into the historical series.
    pub x: usize,
    pub price: f64,
}

impl LineData {
    pub fn from_history(history: &[HistoricalPrice]) -> Vec<LineData> {
        history
            .iter()
            .enumerate()
            .map(|(x, p)| LineData { x, price: p.price })
            .collect()
    }
}

//! Line chart model for the price-history panel.

use super::LineData;
use crate::domain::prediction::HistoricalPrice;

const LEVELS: [char; 8] = ['▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];

/// Historical prices plotted by index (x) against price (y).
///
/// An empty chart is valid and renders nothing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PriceChart {
    points: Vec<LineData>,
}

impl PriceChart {
    pub fn from_history(history: &[HistoricalPrice]) -> Self {
        Self {
            points: LineData::from_history(history),
        }
    }

    pub fn points(&self) -> &[LineData] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// `(min, max)` of the plotted prices, `None` for an empty chart.
    pub fn bounds(&self) -> Option<(f64, f64)> {
        bounds_of(self.points.iter().map(|p| p.price))
    }

    /// Render as a one-line sparkline at most `width` cells wide.
    ///
    /// Longer series are downsampled by averaging equal-sized buckets.
    pub fn sparkline(&self, width: usize) -> String {
        if self.points.is_empty() || width == 0 {
            return String::new();
        }

        let values = self.downsample(width);
        let Some((min, max)) = bounds_of(values.iter().copied()) else {
            return String::new();
        };
        let span = max - min;

        values
            .iter()
            .map(|v| {
                let level = if span <= f64::EPSILON {
                    LEVELS.len() / 2 - 1
                } else {
                    (((v - min) / span) * (LEVELS.len() - 1) as f64).round() as usize
                };
                LEVELS[level.min(LEVELS.len() - 1)]
            })
            .collect()
    }

    fn downsample(&self, width: usize) -> Vec<f64> {
        let len = self.points.len();
        if len <= width {
            return self.points.iter().map(|p| p.price).collect();
        }

        (0..width)
            .map(|i| {
                let start = i * len / width;
                let end = ((i + 1) * len / width).max(start + 1);
                let bucket = &self.points[start..end];
                bucket.iter().map(|p| p.price).sum::<f64>() / bucket.len() as f64
            })
            .collect()
    }
}

fn bounds_of(values: impl Iterator<Item = f64>) -> Option<(f64, f64)> {
    values
        .filter(|v| v.is_finite())
        .fold(None, |acc, v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })
}

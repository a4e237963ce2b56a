//! Terminal painter for [`Screen`].

use std::io::{self, Write};

use colored::Colorize;

use crate::domain::dashboard::{Body, PredictionCard, Screen};
use crate::domain::prediction::Trend;

/// Width of the price-history sparkline, in cells.
pub const CHART_WIDTH: usize = 48;

/// Clear the terminal and move the cursor home.
pub fn clear(out: &mut impl Write) -> io::Result<()> {
    write!(out, "\x1b[2J\x1b[H")
}

/// Write one frame of the dashboard.
pub fn paint(screen: &Screen, out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "{}", format!("📊 {}", screen.title).bold())?;
    writeln!(out)?;
    writeln!(out, "{}", screen.input_label.dimmed())?;
    writeln!(out, "> {}", screen.input)?;
    writeln!(out)?;

    match &screen.body {
        Body::Form => {}
        Body::Progress { symbol } => {
            writeln!(out, "{} Predicting {}…", "⠋".blue(), symbol)?;
        }
        Body::Error(message) => {
            writeln!(out, "{}", format!("Error: {}", message).red())?;
        }
        Body::Prediction(card) => paint_card(card, out)?,
    }

    writeln!(out)?;
    writeln!(out, "{}", "Type a symbol and press Enter · :q to quit".dimmed())?;
    out.flush()
}

fn paint_card(card: &PredictionCard, out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "{}", format!("📈 {}", card.symbol).bold())?;
    writeln!(out, "Current Price: {}", card.current_price)?;

    let predicted = format!(
        "Predicted Price (1 Day): {}  {}",
        card.predicted_price, card.change
    );
    let predicted = match card.trend {
        Trend::Up => predicted.green(),
        Trend::Down => predicted.red(),
    };
    writeln!(out, "{}", predicted.bold())?;

    for (label, price) in &card.horizons {
        writeln!(out, "{}", format!("Predicted Price ({}): {}", label, price).dimmed())?;
    }
    writeln!(out, "{}", format!("Confidence: {}", card.confidence).dimmed())?;

    writeln!(out)?;
    writeln!(out, "{}", "📊 Price History".bold())?;
    if let Some((low, high)) = card.chart.bounds() {
        writeln!(out, "{}", card.chart.sparkline(CHART_WIDTH).blue())?;
        writeln!(
            out,
            "{}",
            format!("low {:.2} · high {:.2} · {} points", low, high, card.chart.len()).dimmed()
        )?;
    }
    Ok(())
}

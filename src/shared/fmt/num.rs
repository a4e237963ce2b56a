//! Number formatting utilities for human-readable display.
//!
//! Prices are always shown with two decimals and comma separators
//! (`$1,234.50`); percentages are whole numbers unless signed.

/// Inserts thousands separators into a formatted number, keeping its decimals.
pub fn group_thousands(formatted: &str) -> String {
    let (sign, unsigned) = match formatted.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", formatted),
    };
    let (integer, fraction) = match unsigned.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (unsigned, None),
    };

    let grouped = integer
        .chars()
        .rev()
        .collect::<String>()
        .as_bytes()
        .chunks(3)
        .map(|c| std::str::from_utf8(c).unwrap_or_default())
        .collect::<Vec<_>>()
        .join(",")
        .chars()
        .rev()
        .collect::<String>();

    match fraction {
        Some(f) => format!("{}{}.{}", sign, grouped, f),
        None => format!("{}{}", sign, grouped),
    }
}

/// Format a price as dollars with two decimals: `1234.5` → `$1,234.50`.
pub fn price(amount: f64) -> String {
    let grouped = group_thousands(&format!("{:.2}", amount.abs()));
    if amount < 0.0 {
        format!("-${}", grouped)
    } else {
        format!("${}", grouped)
    }
}

/// Format a price change with an explicit sign: `5.0` → `+$5.00`.
pub fn signed_price(change: f64) -> String {
    if change < 0.0 {
        price(change)
    } else {
        format!("+{}", price(change))
    }
}

/// Format a whole percentage: `82` → `82%`.
pub fn percent(value: u8) -> String {
    format!("{}%", value)
}

/// Format a fractional percentage with an explicit sign: `3.3333` → `+3.33%`.
pub fn signed_percent(value: f64) -> String {
    if value < 0.0 {
        format!("{:.2}%", value)
    } else {
        format!("+{:.2}%", value)
    }
}

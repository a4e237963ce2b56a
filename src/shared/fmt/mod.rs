//! Display formatting for prices and percentages.

pub mod num;

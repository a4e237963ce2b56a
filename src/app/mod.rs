//! Native runtime — the tokio controller and the terminal painter.

pub mod controller;
pub mod terminal;

pub use controller::{DashboardController, DashboardEvent};

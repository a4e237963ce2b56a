//! # Stock Predictor
//!
//! Client and view model for a single-screen stock prediction dashboard.
//!
//! ## Architecture
//!
//! The crate is organized in layers:
//!
//! 1. **Core** — Symbol newtype, prediction DTO, chart model, dashboard state machine
//! 2. **HTTP API** — `PredictorHttp`, one GET per prediction, no retry
//! 3. **High-Level Client** — `PredictorClient` with nested sub-clients
//! 4. **Native** — tokio `DashboardController` and terminal painter
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use stock_predictor::prelude::*;
//!
//! let client = PredictorClient::new()?;
//! let forecast = client.predictions().get("aapl").await?;
//!
//! let controller = DashboardController::new(client);
//! controller.submit_symbol("msft").await;
//! ```

// ── Layer 1: Core ────────────────────────────────────────────────────────────

/// Shared newtypes and display formatting.
pub mod shared;

/// Domain modules (vertical slices): types, wire types, state.
pub mod domain;

/// Error types.
pub mod error;

/// Network constants.
pub mod network;

// ── Layer 2: HTTP API ────────────────────────────────────────────────────────

/// Low-level HTTP client.
#[cfg(feature = "http")]
pub mod http;

// ── Layer 3: High-Level Client ───────────────────────────────────────────────

/// `PredictorClient` — the primary entry point.
#[cfg(feature = "http")]
pub mod client;

// ── Layer 4: Native ──────────────────────────────────────────────────────────

/// Dashboard controller and terminal painter.
#[cfg(feature = "native")]
pub mod app;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    pub use crate::shared::Symbol;

    // Domain types — prediction
    pub use crate::domain::prediction::{
        HistoricalPrice, Horizon, PredictionResponse, Predictions, Trend,
    };

    // Domain types — price history
    pub use crate::domain::price_history::{LineData, PriceChart};

    // Domain types — dashboard
    pub use crate::domain::dashboard::{
        Body, Dashboard, FetchTicket, Phase, PredictionCard, RequestId, Screen,
    };

    // Errors
    pub use crate::error::{ErrorKind, FetchError, SymbolError};

    // Network
    pub use crate::network::DEFAULT_API_URL;

    // HTTP client + sub-clients
    #[cfg(feature = "http")]
    pub use crate::client::{
        PredictionSource, PredictionSubClient, PredictorClient, PredictorClientBuilder,
    };

    // Native runtime
    #[cfg(feature = "native")]
    pub use crate::app::{DashboardController, DashboardEvent};
}

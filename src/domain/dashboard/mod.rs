//! Dashboard domain — the single prediction screen as a state machine.
//!
//! - `state.rs` — `Dashboard`, the app-owned view state with its transitions
//! - `view.rs` — pure render model derived from the state

pub mod state;
pub mod view;

use crate::domain::prediction::PredictionResponse;

pub use state::Dashboard;
pub use view::{Body, PredictionCard, Screen};

/// Generation number of a submitted fetch.
///
/// Strictly increasing per [`Dashboard`]; only the newest one can land.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestId(pub u64);

impl std::fmt::Display for RequestId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// What the screen is currently showing.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Phase {
    #[default]
    Idle,
    Loading {
        request: RequestId,
        symbol: String,
    },
    Success(PredictionResponse),
    Failed(String),
}

impl Phase {
    pub fn is_loading(&self) -> bool {
        matches!(self, Phase::Loading { .. })
    }

    pub fn data(&self) -> Option<&PredictionResponse> {
        match self {
            Phase::Success(data) => Some(data),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Phase::Failed(message) => Some(message),
            _ => None,
        }
    }
}

/// A fetch the effect handler must run for a submit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket {
    pub request: RequestId,
    /// The input as typed; the client normalises it.
    pub symbol: String,
}

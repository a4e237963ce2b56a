//! Dashboard state container — app-owned, crate-provided transition logic.

use super::{FetchTicket, Phase, RequestId};
use crate::domain::prediction::PredictionResponse;
use crate::error::FetchError;

const UNKNOWN_ERROR: &str = "Unknown error occurred";

/// View state of the prediction screen: the pending input plus one [`Phase`].
///
/// Submitting is cancel-and-replace: every submit supersedes the previous
/// request, and a result is applied only if it belongs to the request the
/// screen is still loading.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dashboard {
    input: String,
    phase: Phase,
    next_request: u64,
}

impl Dashboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    /// Replace the pending input. Never refetches or changes the phase.
    pub fn edit(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    /// Start a fetch for the current input.
    ///
    /// Returns `None` (and changes nothing) when the input is empty.
    pub fn submit(&mut self) -> Option<FetchTicket> {
        if self.input.is_empty() {
            return None;
        }

        self.next_request += 1;
        let request = RequestId(self.next_request);
        let symbol = self.input.clone();

        if let Phase::Loading { request: previous, .. } = &self.phase {
            tracing::debug!(%previous, %request, "Superseding in-flight request");
        }

        self.phase = Phase::Loading {
            request,
            symbol: symbol.clone(),
        };
        Some(FetchTicket { request, symbol })
    }

    /// Apply the outcome of `request`.
    ///
    /// Returns `false` when the outcome is stale (the screen is no longer
    /// loading that request) and was dropped.
    pub fn resolve(
        &mut self,
        request: RequestId,
        outcome: Result<PredictionResponse, FetchError>,
    ) -> bool {
        match &self.phase {
            Phase::Loading { request: current, .. } if *current == request => {}
            _ => {
                tracing::debug!(%request, "Dropping stale result");
                return false;
            }
        }

        self.phase = match outcome {
            Ok(data) => Phase::Success(data),
            Err(e) => {
                let message = e.to_string();
                if message.is_empty() {
                    Phase::Failed(UNKNOWN_ERROR.to_string())
                } else {
                    Phase::Failed(message)
                }
            }
        };
        true
    }

    /// The request currently in flight, if any.
    pub fn pending_request(&self) -> Option<RequestId> {
        match &self.phase {
            Phase::Loading { request, .. } => Some(*request),
            _ => None,
        }
    }
}

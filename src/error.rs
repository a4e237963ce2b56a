//! Error types for symbol validation and prediction fetches.

use thiserror::Error;

/// Rejected ticker input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SymbolError {
    #[error("Symbol is empty")]
    Empty,

    #[error("Symbol contains invalid character {0:?}")]
    InvalidCharacter(char),

    #[error("Symbol cannot consist only of dots")]
    DotSegment,
}

/// Failure of a single prediction fetch.
///
/// Every variant renders to a non-empty message, which is what the
/// dashboard shows in its error state.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("Invalid symbol: {0}")]
    InvalidSymbol(#[from] SymbolError),

    #[error("Request failed: {0}")]
    Network(String),

    #[error("Request timed out")]
    Timeout,

    #[error("Server returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Malformed prediction response: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Coarse classification of a [`FetchError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Input,
    Network,
    HttpStatus,
    Decode,
}

impl FetchError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            FetchError::InvalidSymbol(_) => ErrorKind::Input,
            FetchError::Network(_) | FetchError::Timeout => ErrorKind::Network,
            FetchError::Status { .. } => ErrorKind::HttpStatus,
            FetchError::Decode(_) => ErrorKind::Decode,
        }
    }
}

#[cfg(feature = "http")]
impl From<reqwest::Error> for FetchError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            FetchError::Timeout
        } else {
            FetchError::Network(e.to_string())
        }
    }
}

//! Network constants for the prediction API.

/// Default REST API base URL (deployment constant).
pub const DEFAULT_API_URL: &str = "http://16.170.143.63:8000";

/// Path prefix of the prediction endpoint; the symbol is appended as one segment.
pub const PREDICT_PATH: &str = "/predict";

/// Transport timeout applied by the HTTP layer, in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

//! HTTP client layer — `PredictorHttp`, single attempt per request.

pub mod client;

pub use client::PredictorHttp;

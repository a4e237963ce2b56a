//! Domain modules organized as vertical slices.
//!
//! Each sub-module contains some of:
//! - `mod.rs` — Rich domain types and derived values
//! - `wire.rs` — Raw serde structs matching backend responses
//! - `state.rs` — App-owned state containers with transition methods
//! - `client.rs` — Sub-client with HTTP methods

pub mod dashboard;
pub mod prediction;
pub mod price_history;

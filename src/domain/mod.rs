//! Domain modules organized as vertical slices.
//!
//! Each sub-module contains:
//! - `mod.rs` — Typed request parameters for the slice's endpoints
//! - `client.rs` — Sub-client delegating to the HTTP layer
//!
//! Responses stay `serde_json::Value`: the server's response shapes are not
//! part of this SDK's contract.

pub mod account;
pub mod geocode;
pub mod search;
pub mod server;
pub mod user;
pub mod vis;

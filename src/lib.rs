//! # loklak SDK
//!
//! A Rust client for the loklak social-search server's JSON and image
//! endpoints: search, aggregations, user lookup, geocoding, peer/status
//! introspection, account management, and map/markdown PNG rendering.
//!
//! ## Architecture
//!
//! The SDK is organized in layers:
//!
//! 1. **Core** — Errors, URL constants, typed request parameters
//! 2. **HTTP API** — `LoklakHttp`, one method per endpoint
//! 3. **High-Level Client** — `LoklakClient` with nested sub-clients
//!
//! ## Error convention
//!
//! The server signals contract-level failures in-band: a missing required
//! input or a non-200 response yields an error-shaped JSON payload (or an
//! empty object / empty bytes, depending on the endpoint) inside `Ok`.
//! `Err` is reserved for transport failures — DNS, refused connections,
//! timeouts.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use loklak_sdk::prelude::*;
//!
//! let client = LoklakClient::builder()
//!     .base_url("http://loklak.org/")
//!     .build()?;
//!
//! let results = client.search().run(&SearchQuery::new("cat")).await?;
//! let tile = client.vis().map(&MapParams::new(48.85, 2.35).zoom(11)).await?;
//! ```

// ── Layer 1: Core ────────────────────────────────────────────────────────────

/// Domain modules (vertical slices): request parameters and sub-clients.
pub mod domain;

/// Unified SDK error types and the in-band error payload.
pub mod error;

/// Network URL and header constants.
pub mod network;

// ── Layer 2: HTTP API ────────────────────────────────────────────────────────

/// HTTP client, one method per endpoint.
pub mod http;

// ── Layer 3: High-Level Client ───────────────────────────────────────────────

/// `LoklakClient` — the primary entry point.
pub mod client;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    // Request parameter types
    pub use crate::domain::search::{AggregationQuery, SearchQuery, DEFAULT_AGGREGATION_LIMIT};
    pub use crate::domain::vis::{MapParams, MarkdownParams};

    // Errors
    pub use crate::error::{ErrorPayload, HttpError, SdkError};

    // Network
    pub use crate::network::{DEFAULT_ADMIN_URL, DEFAULT_API_URL};

    // HTTP client + sub-clients
    pub use crate::client::{
        AccountClient, GeocodeClient, LoklakClient, LoklakClientBuilder, SearchClient,
        ServerClient, UsersClient, VisClient,
    };
    pub use crate::http::LoklakHttp;
}

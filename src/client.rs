//! High-level client — `LoklakClient` with nested sub-client accessors.
//!
//! Each domain has its own sub-client in `domain/<name>/client.rs`.
//! This module keeps the builder and the accessor methods. The client holds
//! configuration only — every call is an independent request/response round
//! trip with no state shared between invocations.

use crate::domain::account::client::Account;
use crate::domain::geocode::client::Geocode;
use crate::domain::search::client::Search;
use crate::domain::server::client::Server;
use crate::domain::user::client::Users;
use crate::domain::vis::client::Vis;
use crate::error::SdkError;
use crate::http::LoklakHttp;

use std::time::Duration;

// Re-export sub-client types for convenience.
pub use crate::domain::account::client::Account as AccountClient;
pub use crate::domain::geocode::client::Geocode as GeocodeClient;
pub use crate::domain::search::client::Search as SearchClient;
pub use crate::domain::server::client::Server as ServerClient;
pub use crate::domain::user::client::Users as UsersClient;
pub use crate::domain::vis::client::Vis as VisClient;

/// The primary entry point for the loklak SDK.
///
/// Provides nested sub-client accessors for each domain:
/// `client.search()`, `client.users()`, etc.
#[derive(Clone)]
pub struct LoklakClient {
    pub(crate) http: LoklakHttp,
}

impl LoklakClient {
    pub fn builder() -> LoklakClientBuilder {
        LoklakClientBuilder::default()
    }

    // ── Sub-client accessors ─────────────────────────────────────────────

    pub fn server(&self) -> Server<'_> {
        Server { client: self }
    }

    pub fn geocode(&self) -> Geocode<'_> {
        Geocode { client: self }
    }

    pub fn search(&self) -> Search<'_> {
        Search { client: self }
    }

    pub fn users(&self) -> Users<'_> {
        Users { client: self }
    }

    pub fn vis(&self) -> Vis<'_> {
        Vis { client: self }
    }

    pub fn account(&self) -> Account<'_> {
        Account { client: self }
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

pub struct LoklakClientBuilder {
    base_url: String,
    admin_url: String,
    timeout: Duration,
}

impl Default for LoklakClientBuilder {
    fn default() -> Self {
        Self {
            base_url: crate::network::DEFAULT_API_URL.to_string(),
            admin_url: crate::network::DEFAULT_ADMIN_URL.to_string(),
            timeout: Duration::from_secs(30),
        }
    }
}

impl LoklakClientBuilder {
    pub fn base_url(mut self, url: &str) -> Self {
        self.base_url = url.to_string();
        self
    }

    /// The local-admin base URL used by account operations.
    pub fn admin_url(mut self, url: &str) -> Self {
        self.admin_url = url.to_string();
        self
    }

    /// Per-request timeout. Timeouts surface as `HttpError::Timeout`.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn build(self) -> Result<LoklakClient, SdkError> {
        Ok(LoklakClient {
            http: LoklakHttp::new(&self.base_url, &self.admin_url, self.timeout),
        })
    }
}

//! Network URL and header constants for the loklak SDK.

/// Default public API base URL.
pub const DEFAULT_API_URL: &str = "http://loklak.org/";

/// Default local-admin base URL. Account operations only — the server grants
/// them to localhost clients.
pub const DEFAULT_ADMIN_URL: &str = "http://localhost:9000/api/";

/// `User-Agent` header sent on account calls.
pub const ACCOUNT_USER_AGENT: &str =
    "Mozilla/5.0 (Android 4.4; Mobile; rv:41.0) Gecko/41.0 Firefox/41.0";

/// `From` header sent on account calls.
pub const ACCOUNT_FROM: &str = "info@loklak.org";

//! Account sub-client — local-admin account management.

use crate::client::LoklakClient;
use crate::error::SdkError;
use serde_json::Value;

/// Sub-client for account operations.
///
/// These go to the local-admin URL rather than the public base URL, with the
/// fixed identification headers the server expects.
pub struct Account<'a> {
    pub(crate) client: &'a LoklakClient,
}

impl<'a> Account<'a> {
    /// Fetch the account record for a screen name.
    pub async fn lookup(&self, screen_name: &str) -> Result<Value, SdkError> {
        Ok(self
            .client
            .http
            .account(Some(screen_name), None, None)
            .await?)
    }

    /// Push an account update. `data` is sent as a JSON string in the `data`
    /// query parameter of a POST.
    pub async fn update(&self, data: &Value) -> Result<Value, SdkError> {
        Ok(self
            .client
            .http
            .account(None, Some("update"), Some(data))
            .await?)
    }

    /// Raw form preserving the server's precedence: a given `name` always
    /// wins over `action`/`data`.
    pub async fn request(
        &self,
        name: Option<&str>,
        action: Option<&str>,
        data: Option<&Value>,
    ) -> Result<Value, SdkError> {
        Ok(self.client.http.account(name, action, data).await?)
    }
}

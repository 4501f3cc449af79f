//! Users sub-client.

use crate::client::LoklakClient;
use crate::error::SdkError;
use serde_json::Value;

/// Sub-client for user lookup.
pub struct Users<'a> {
    pub(crate) client: &'a LoklakClient,
}

impl<'a> Users<'a> {
    /// Look up a user by screen name.
    pub async fn lookup(&self, name: Option<&str>) -> Result<Value, SdkError> {
        Ok(self.client.http.user(name, None, None).await?)
    }

    /// Look up a user and choose whether the follower/following graphs are
    /// included. An explicit `Some(false)` is sent on the wire; `None` omits
    /// the parameter entirely.
    pub async fn lookup_with_graph(
        &self,
        name: Option<&str>,
        followers: Option<bool>,
        following: Option<bool>,
    ) -> Result<Value, SdkError> {
        Ok(self.client.http.user(name, followers, following).await?)
    }
}

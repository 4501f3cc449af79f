//! Server sub-client — status, hello, peers, settings.

use crate::client::LoklakClient;
use crate::error::SdkError;
use serde_json::Value;

/// Sub-client for server status and introspection.
pub struct Server<'a> {
    pub(crate) client: &'a LoklakClient,
}

impl<'a> Server<'a> {
    /// Server status: index sizes, ingestion counters, runtime info.
    pub async fn status(&self) -> Result<Value, SdkError> {
        Ok(self.client.http.status().await?)
    }

    /// Liveness check against `api/hello.json`.
    pub async fn hello(&self) -> Result<Value, SdkError> {
        Ok(self.client.http.hello().await?)
    }

    /// Peers known to this node.
    pub async fn peers(&self) -> Result<Value, SdkError> {
        Ok(self.client.http.peers().await?)
    }

    /// Server settings. Access is restricted to localhost clients; the
    /// restriction payload comes back for anyone else.
    pub async fn settings(&self) -> Result<Value, SdkError> {
        Ok(self.client.http.settings().await?)
    }
}

//! Geocode sub-client.

use crate::client::LoklakClient;
use crate::error::SdkError;
use serde_json::Value;

/// Sub-client for place-name resolution.
pub struct Geocode<'a> {
    pub(crate) client: &'a LoklakClient,
}

impl<'a> Geocode<'a> {
    /// Resolve place names to coordinates. `places` is a comma-separated
    /// list; passing `None` queries the endpoint without a filter.
    pub async fn resolve(&self, places: Option<&str>) -> Result<Value, SdkError> {
        Ok(self.client.http.geocode(places).await?)
    }
}

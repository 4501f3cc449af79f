//! Vis sub-client — rendered PNG endpoints.

use crate::client::LoklakClient;
use crate::domain::vis::{MapParams, MarkdownParams};
use crate::error::SdkError;

/// Sub-client for image rendering. Both endpoints return the raw PNG bytes,
/// or empty bytes on a non-200 response.
pub struct Vis<'a> {
    pub(crate) client: &'a LoklakClient,
}

impl<'a> Vis<'a> {
    /// Render a map tile centered on a coordinate.
    pub async fn map(&self, params: &MapParams) -> Result<Vec<u8>, SdkError> {
        Ok(self.client.http.map(params).await?)
    }

    /// Render markdown text to an image.
    pub async fn markdown(&self, params: &MarkdownParams) -> Result<Vec<u8>, SdkError> {
        Ok(self.client.http.markdown(params).await?)
    }
}

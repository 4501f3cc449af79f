//! Search sub-client — search and aggregations.

use crate::client::LoklakClient;
use crate::domain::search::{AggregationQuery, SearchQuery};
use crate::error::SdkError;
use serde_json::Value;

/// Sub-client for search operations.
pub struct Search<'a> {
    pub(crate) client: &'a LoklakClient,
}

impl<'a> Search<'a> {
    /// Run a search with the full modifier set.
    pub async fn run(&self, query: &SearchQuery) -> Result<Value, SdkError> {
        Ok(self.client.http.search(query).await?)
    }

    /// Plain text query with no modifiers.
    pub async fn text(&self, query: &str) -> Result<Value, SdkError> {
        self.run(&SearchQuery::new(query)).await
    }

    /// Run an aggregation query. Always served from cache with zero result
    /// docs; only the aggregation buckets come back.
    pub async fn aggregate(&self, query: &AggregationQuery) -> Result<Value, SdkError> {
        Ok(self.client.http.aggregations(query).await?)
    }
}

//! Search domain — full-text search and field aggregations.

pub mod client;
pub mod query;

pub use query::{AggregationQuery, SearchQuery, DEFAULT_AGGREGATION_LIMIT};

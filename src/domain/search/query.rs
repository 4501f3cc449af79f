//! Compound-query assembly for search and aggregation requests.
//!
//! The loklak server takes its time-window and author filters inside the
//! `query` parameter itself, as space-separated modifier clauses
//! (`"cat since:2020-01-01 from:alice"`). The renderers here make the clause
//! order and separator an explicit contract: base text, then `since:`, then
//! `until:`, then `from:`, joined by single spaces.

use chrono::NaiveDate;

/// Limit sent for aggregation requests when none is set.
pub const DEFAULT_AGGREGATION_LIMIT: u32 = 6;

/// A search request against `api/search.json`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchQuery {
    query: String,
    since: Option<NaiveDate>,
    until: Option<NaiveDate>,
    from_user: Option<String>,
}

impl SearchQuery {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            ..Self::default()
        }
    }

    /// Only results on or after this date (`since:` clause).
    pub fn since(mut self, date: NaiveDate) -> Self {
        self.since = Some(date);
        self
    }

    /// Only results on or before this date (`until:` clause).
    pub fn until(mut self, date: NaiveDate) -> Self {
        self.until = Some(date);
        self
    }

    /// Only results authored by this screen name (`from:` clause).
    pub fn from_user(mut self, user: impl Into<String>) -> Self {
        self.from_user = Some(user.into());
        self
    }

    /// Render the compound `query` parameter value, or `None` when no query
    /// text was given.
    pub fn to_query_param(&self) -> Option<String> {
        render_compound(
            &self.query,
            self.since,
            self.until,
            self.from_user.as_deref(),
        )
    }
}

/// An aggregation request: a search additionally asking for summary
/// statistics over the given fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AggregationQuery {
    query: String,
    since: Option<NaiveDate>,
    until: Option<NaiveDate>,
    fields: Vec<String>,
    limit: Option<u32>,
}

impl AggregationQuery {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            ..Self::default()
        }
    }

    pub fn since(mut self, date: NaiveDate) -> Self {
        self.since = Some(date);
        self
    }

    pub fn until(mut self, date: NaiveDate) -> Self {
        self.until = Some(date);
        self
    }

    /// Append one field to aggregate over. Field order is preserved on the
    /// wire.
    pub fn field(mut self, field: impl Into<String>) -> Self {
        self.fields.push(field.into());
        self
    }

    /// Append several fields to aggregate over.
    pub fn fields<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.fields.extend(fields.into_iter().map(Into::into));
        self
    }

    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Render the compound `query` parameter value, or `None` when no query
    /// text was given. Aggregations carry no `from:` clause.
    pub fn to_query_param(&self) -> Option<String> {
        render_compound(&self.query, self.since, self.until, None)
    }

    /// Comma-joined field list, including the trailing comma the server has
    /// always been sent (`"a,b,"`). Kept bit-for-bit for compatibility.
    pub fn fields_param(&self) -> Option<String> {
        if self.fields.is_empty() {
            return None;
        }
        let mut out = String::new();
        for field in &self.fields {
            out.push_str(field);
            out.push(',');
        }
        Some(out)
    }

    pub fn limit_or_default(&self) -> u32 {
        self.limit.unwrap_or(DEFAULT_AGGREGATION_LIMIT)
    }
}

fn render_compound(
    query: &str,
    since: Option<NaiveDate>,
    until: Option<NaiveDate>,
    from_user: Option<&str>,
) -> Option<String> {
    if query.is_empty() {
        return None;
    }
    let mut clauses = vec![query.to_string()];
    if let Some(date) = since {
        clauses.push(format!("since:{}", date.format("%Y-%m-%d")));
    }
    if let Some(date) = until {
        clauses.push(format!("until:{}", date.format("%Y-%m-%d")));
    }
    if let Some(user) = from_user {
        if !user.is_empty() {
            clauses.push(format!("from:{}", user));
        }
    }
    Some(clauses.join(" "))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_plain_query_renders_unchanged() {
        let q = SearchQuery::new("cat");
        assert_eq!(q.to_query_param().unwrap(), "cat");
    }

    #[test]
    fn test_modifier_order_is_fixed() {
        // Setter call order must not leak into the rendered clause order.
        let q = SearchQuery::new("cat")
            .from_user("alice")
            .until(date(2020, 2, 1))
            .since(date(2020, 1, 1));
        assert_eq!(
            q.to_query_param().unwrap(),
            "cat since:2020-01-01 until:2020-02-01 from:alice"
        );
    }

    #[test]
    fn test_empty_query_renders_nothing() {
        assert_eq!(SearchQuery::new("").to_query_param(), None);
        assert_eq!(AggregationQuery::new("").to_query_param(), None);
    }

    #[test]
    fn test_aggregation_query_skips_from_clause() {
        let q = AggregationQuery::new("dog").since(date(2021, 6, 1));
        assert_eq!(q.to_query_param().unwrap(), "dog since:2021-06-01");
    }

    #[test]
    fn test_fields_keep_trailing_comma() {
        let q = AggregationQuery::new("dog").fields(["a", "b"]);
        assert_eq!(q.fields_param().unwrap(), "a,b,");
    }

    #[test]
    fn test_no_fields_renders_no_param() {
        assert_eq!(AggregationQuery::new("dog").fields_param(), None);
    }

    #[test]
    fn test_limit_defaults_to_six() {
        assert_eq!(AggregationQuery::new("dog").limit_or_default(), 6);
        assert_eq!(
            AggregationQuery::new("dog").limit(20).limit_or_default(),
            20
        );
    }
}

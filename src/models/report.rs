use serde::Serialize;

use super::ShoeItem;
use crate::report::filter_at_or_below;

/// Outcome of one saved query for this run.
///
/// The qualifying subset is derived once in [`QueryResult::new`] and the value
/// is read-only afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QueryResult {
    query_url: String,
    threshold_price: f64,
    matching_shoes: Vec<ShoeItem>,
    shoes_at_or_below_threshold: Vec<ShoeItem>,
}

impl QueryResult {
    pub fn new(
        query_url: impl Into<String>,
        threshold_price: f64,
        matching_shoes: Vec<ShoeItem>,
    ) -> Self {
        let shoes_at_or_below_threshold = filter_at_or_below(&matching_shoes, threshold_price);
        Self {
            query_url: query_url.into(),
            threshold_price,
            matching_shoes,
            shoes_at_or_below_threshold,
        }
    }

    pub fn query_url(&self) -> &str {
        &self.query_url
    }

    pub fn threshold_price(&self) -> f64 {
        self.threshold_price
    }

    pub fn matching_shoes(&self) -> &[ShoeItem] {
        &self.matching_shoes
    }

    /// Ascending by low price, ties in API order.
    pub fn shoes_at_or_below_threshold(&self) -> &[ShoeItem] {
        &self.shoes_at_or_below_threshold
    }

    pub fn has_matches(&self) -> bool {
        !self.shoes_at_or_below_threshold.is_empty()
    }
}

/// Everything handed to the email template: only queries with at least one
/// qualifying shoe, in configured order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct NotificationPayload {
    results: Vec<QueryResult>,
}

impl NotificationPayload {
    pub fn from_results(results: impl IntoIterator<Item = QueryResult>) -> Self {
        Self {
            results: results.into_iter().filter(QueryResult::has_matches).collect(),
        }
    }

    pub fn results(&self) -> &[QueryResult] {
        &self.results
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    /// Total shoes across all retained queries.
    pub fn qualifying_count(&self) -> usize {
        self.results
            .iter()
            .map(|result| result.shoes_at_or_below_threshold.len())
            .sum()
    }
}

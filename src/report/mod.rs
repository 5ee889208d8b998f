mod filter;

pub use filter::filter_at_or_below;

use tracing::{debug, info};

use crate::error::SearchError;
use crate::models::{NotificationPayload, QueryResult};
use crate::search::QuerySource;

/// Runs every saved query in order and keeps the ones with qualifying shoes.
///
/// Queries are fetched one at a time; the first failure aborts the whole run.
pub async fn assemble<S>(
    source: &S,
    query_urls: &[String],
    threshold_price: f64,
) -> Result<NotificationPayload, SearchError>
where
    S: QuerySource + ?Sized,
{
    let mut results = Vec::with_capacity(query_urls.len());

    for query_url in query_urls {
        let shoes = source.fetch(query_url).await?;
        let result = QueryResult::new(query_url.as_str(), threshold_price, shoes);

        if result.has_matches() {
            info!(
                "{} of {} shoes at or below {:.2} for {}",
                result.shoes_at_or_below_threshold().len(),
                result.matching_shoes().len(),
                threshold_price,
                query_url
            );
            for shoe in result.shoes_at_or_below_threshold() {
                debug!("  {}", shoe);
            }
        } else {
            debug!("No shoes at or below {:.2} for {}", threshold_price, query_url);
        }

        results.push(result);
    }

    Ok(NotificationPayload::from_results(results))
}

#[cfg(test)]
mod test {
    use std::collections::HashMap;
    use std::sync::Mutex;

    use async_trait::async_trait;
    use pretty_assertions::assert_eq;
    use tokio_test::assert_err;

    use super::assemble;
    use crate::error::SearchError;
    use crate::models::ShoeItem;
    use crate::search::QuerySource;

    #[derive(Default)]
    struct CannedSource {
        responses: HashMap<String, Vec<ShoeItem>>,
        calls: Mutex<Vec<String>>,
    }

    impl CannedSource {
        fn with(mut self, url: &str, items: Vec<ShoeItem>) -> Self {
            self.responses.insert(url.to_string(), items);
            self
        }
    }

    #[async_trait]
    impl QuerySource for CannedSource {
        async fn fetch(&self, query_url: &str) -> Result<Vec<ShoeItem>, SearchError> {
            self.calls.lock().unwrap().push(query_url.to_string());
            self.responses
                .get(query_url)
                .cloned()
                .ok_or_else(|| SearchError::Status {
                    url: query_url.to_string(),
                    status: reqwest::StatusCode::NOT_FOUND,
                })
        }
    }

    fn shoe(name: &str, price_low: f64) -> ShoeItem {
        ShoeItem {
            parent_name: name.to_string(),
            price_low,
            ..ShoeItem::default()
        }
    }

    fn urls(list: &[&str]) -> Vec<String> {
        list.iter().map(|u| u.to_string()).collect()
    }

    #[tokio::test]
    async fn keeps_matching_queries_in_configured_order() {
        let source = CannedSource::default()
            .with(
                "trail",
                vec![
                    shoe("Merrel Trail Glove", 79.99),
                    shoe("Hoka Challenger", 50.0),
                    shoe("Altra Lone Peak", 45.99),
                ],
            )
            .with("road", vec![])
            .with("track", vec![shoe("Spike", 30.0)]);

        let payload = assemble(&source, &urls(&["track", "road", "trail"]), 50.0)
            .await
            .unwrap();

        let urls: Vec<&str> = payload.results().iter().map(|r| r.query_url()).collect();
        assert_eq!(urls, vec!["track", "trail"]);

        let trail: Vec<&str> = payload.results()[1]
            .shoes_at_or_below_threshold()
            .iter()
            .map(|s| s.parent_name.as_str())
            .collect();
        assert_eq!(trail, vec!["Altra Lone Peak", "Hoka Challenger"]);
        assert_eq!(*source.calls.lock().unwrap(), vec!["track", "road", "trail"]);
    }

    #[tokio::test]
    async fn empty_items_leave_payload_empty() {
        let source = CannedSource::default().with("road", vec![]);
        let payload = assemble(&source, &urls(&["road"]), 55.43).await.unwrap();
        assert!(payload.is_empty());
    }

    #[tokio::test]
    async fn first_failure_stops_remaining_queries() {
        let source = CannedSource::default()
            .with("a", vec![shoe("One", 1.0)])
            .with("c", vec![shoe("Three", 1.0)]);

        assert_err!(assemble(&source, &urls(&["a", "missing", "c"]), 10.0).await);
        assert_eq!(*source.calls.lock().unwrap(), vec!["a", "missing"]);
    }
}

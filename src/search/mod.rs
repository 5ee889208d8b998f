use async_trait::async_trait;

use crate::error::SearchError;
use crate::models::ShoeItem;

mod http;

pub use http::{create_client, HttpSearchClient};

/// Anything that can turn a saved query URL into the shoes it matches.
#[async_trait]
pub trait QuerySource: Send + Sync {
    async fn fetch(&self, query_url: &str) -> Result<Vec<ShoeItem>, SearchError>;
}

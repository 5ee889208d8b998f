use async_trait::async_trait;
use reqwest::{Client, ClientBuilder};
use tracing::{debug, info};

use crate::error::SearchError;
use crate::models::{SearchEnvelope, ShoeItem};
use crate::search::QuerySource;

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// No timeout and no retry: a stalled or failed request ends the run.
pub fn create_client() -> Result<Client, SearchError> {
    ClientBuilder::new()
        .user_agent(USER_AGENT)
        .build()
        .map_err(SearchError::Client)
}

pub struct HttpSearchClient {
    client: Client,
}

impl HttpSearchClient {
    pub fn new() -> Result<Self, SearchError> {
        Ok(Self::with_client(create_client()?))
    }

    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl QuerySource for HttpSearchClient {
    async fn fetch(&self, query_url: &str) -> Result<Vec<ShoeItem>, SearchError> {
        debug!("GET {}", query_url);

        let request_error = |source| SearchError::Request {
            url: query_url.to_string(),
            source,
        };

        let response = self
            .client
            .get(query_url)
            .send()
            .await
            .map_err(request_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(SearchError::Status {
                url: query_url.to_string(),
                status,
            });
        }

        let body = response.bytes().await.map_err(request_error)?;
        let envelope: SearchEnvelope =
            serde_json::from_slice(&body).map_err(|source| SearchError::Decode {
                url: query_url.to_string(),
                source,
            })?;

        info!(
            "Query returned {} docs (numFound {}): {}",
            envelope.response.docs.len(),
            envelope.response.num_found,
            query_url
        );

        Ok(envelope.response.docs)
    }
}

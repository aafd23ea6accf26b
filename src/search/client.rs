use futures::future::try_join_all;
use tracing::debug;

use super::dto::SearchResponse;
use crate::config::{SearchQuery, SearchSettings};
use crate::library::Track;

#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("HTTP {status} for term {term:?}")]
    Status {
        status: reqwest::StatusCode,
        term: String,
    },
}

/// Song search client.
pub struct SearchClient {
    http_client: reqwest::Client,
    endpoint: String,
    limit: u32,
}

impl SearchClient {
    pub fn new(settings: &SearchSettings) -> Self {
        Self {
            http_client: reqwest::Client::new(),
            endpoint: settings.endpoint.clone(),
            limit: settings.limit,
        }
    }

    /// Search songs for one term/country pair.
    pub async fn search(&self, query: &SearchQuery) -> Result<Vec<Track>, SearchError> {
        let limit = self.limit.to_string();
        let response = self
            .http_client
            .get(&self.endpoint)
            .query(&[
                ("term", query.term.as_str()),
                ("media", "music"),
                ("entity", "song"),
                ("country", query.country.as_str()),
                ("limit", limit.as_str()),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(SearchError::Status {
                status,
                term: query.term.clone(),
            });
        }

        let body: SearchResponse = response.json().await?;
        debug!(term = %query.term, results = body.result_count, "search response");
        Ok(body.into_tracks())
    }

    /// Issue every query at once; any failure fails the whole batch.
    pub async fn search_all(&self, queries: &[SearchQuery]) -> Result<Vec<Track>, SearchError> {
        let batches = try_join_all(queries.iter().map(|q| self.search(q))).await?;
        Ok(batches.into_iter().flatten().collect())
    }
}

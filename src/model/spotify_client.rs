//! Spotify Web API search client

use serde::Deserialize;
use thiserror::Error;

use crate::auth::AccessToken;
use crate::config::Config;
use super::content::SearchResults;
use super::types::Category;

const SEARCH_PATH: &str = "/v1/search";

/// Search always starts at the first page.
const SEARCH_OFFSET: u32 = 0;

#[derive(Debug, Error)]
pub enum SearchError {
    #[error("search request failed: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("search rejected with status {status}: {message}")]
    Status { status: u16, message: String },

    #[error("search response could not be decoded: {0}")]
    Decode(#[source] serde_json::Error),
}

/// Regular error object of the Web API.
#[derive(Deserialize)]
struct ApiErrorBody {
    error: ApiError,
}

#[derive(Deserialize)]
struct ApiError {
    #[serde(default)]
    message: String,
}

/// Thin wrapper over the search endpoint
#[derive(Clone)]
pub struct SpotifyClient {
    http: reqwest::Client,
    api_url: String,
    market: String,
    limit: u8,
}

impl SpotifyClient {
    pub fn new(http: reqwest::Client, config: &Config) -> Self {
        Self {
            http,
            api_url: config.api_url.clone(),
            market: config.market.clone(),
            limit: config.limit,
        }
    }

    /// Build the GET request for one search without sending it.
    pub fn search_request(
        &self,
        query: &str,
        category: Category,
        token: &AccessToken,
    ) -> reqwest::Result<reqwest::Request> {
        let limit = self.limit.to_string();
        let offset = SEARCH_OFFSET.to_string();

        self.http
            .get(format!("{}{}", self.api_url, SEARCH_PATH))
            .query(&[
                ("query", query),
                ("type", category.as_str()),
                ("market", self.market.as_str()),
                ("limit", limit.as_str()),
                ("offset", offset.as_str()),
            ])
            .bearer_auth(&token.access_token)
            .build()
    }

    /// Search one category and decode its result envelope.
    pub async fn search(
        &self,
        query: &str,
        category: Category,
        token: &AccessToken,
    ) -> Result<SearchResults, SearchError> {
        crate::log_api_request!("search", query, category = %category, limit = self.limit);

        let result = self.execute_search(query, category, token).await;
        crate::log_api_result!("search", result);

        if let Ok(ref results) = result {
            tracing::debug!(
                query,
                category = %category,
                returned = results.len(),
                total = results.total,
                "Search decoded"
            );
        }
        result
    }

    async fn execute_search(
        &self,
        query: &str,
        category: Category,
        token: &AccessToken,
    ) -> Result<SearchResults, SearchError> {
        let request = self
            .search_request(query, category, token)
            .map_err(SearchError::Transport)?;

        let response = self
            .http
            .execute(request)
            .await
            .map_err(SearchError::Transport)?;

        let status = response.status();
        let body = response.text().await.map_err(SearchError::Transport)?;

        if !status.is_success() {
            return Err(SearchError::Status {
                status: status.as_u16(),
                message: api_error_message(&body, status),
            });
        }

        SearchResults::from_json(category, &body).map_err(SearchError::Decode)
    }
}

fn api_error_message(body: &str, status: reqwest::StatusCode) -> String {
    match serde_json::from_str::<ApiErrorBody>(body) {
        Ok(parsed) if !parsed.error.message.is_empty() => parsed.error.message,
        _ => status
            .canonical_reason()
            .unwrap_or("unknown error")
            .to_string(),
    }
}

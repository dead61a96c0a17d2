//! JobTech Search API client
//!
//! Queries the public job-search endpoint at jobsearch.api.jobtechdev.se
//! and maps the `hits` array onto `common::JobPosting`.

use std::time::Duration;

use async_trait::async_trait;
use common::{JobPosting, SearchResponse};
use reqwest::{header::ACCEPT, Client};
use thiserror::Error;
use tracing::debug;
use url::Url;

pub const DEFAULT_BASE_URL: &str = "https://jobsearch.api.jobtechdev.se";
/// Skåne län.
pub const DEFAULT_REGION: &str = "12";
pub const DEFAULT_LIMIT: u32 = 100;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Invalid search URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("HTTP error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Search API returned status {0}")]
    Status(u16),

    #[error("Malformed search response: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Fixed parameters sent with every search.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchParams {
    pub base_url: String,
    pub region: String,
    pub limit: u32,
}

impl Default for SearchParams {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            region: DEFAULT_REGION.to_string(),
            limit: DEFAULT_LIMIT,
        }
    }
}

impl SearchParams {
    /// Builds `<base>/search?q=<query>&region=<region>&limit=<limit>`.
    pub fn url_for(&self, query: &str) -> Result<Url, FetchError> {
        let mut url = Url::parse(&format!("{}/search", self.base_url.trim_end_matches('/')))?;
        url.query_pairs_mut()
            .append_pair("q", query)
            .append_pair("region", &self.region)
            .append_pair("limit", &self.limit.to_string());
        Ok(url)
    }
}

/// Anything that can answer a free-text job search.
#[async_trait]
pub trait JobSource: Send + Sync {
    async fn search(&self, query: &str) -> Result<Vec<JobPosting>, FetchError>;
}

#[derive(Clone)]
pub struct JobTechClient {
    client: Client,
    params: SearchParams,
}

impl JobTechClient {
    /// A client without a request timeout: a silent server keeps the search
    /// pending until the connection drops.
    pub fn new(params: SearchParams) -> Result<Self, FetchError> {
        Self::with_timeout(params, None)
    }

    pub fn with_timeout(params: SearchParams, timeout: Option<Duration>) -> Result<Self, FetchError> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            client: builder.build()?,
            params,
        })
    }

    /// Issues exactly one GET for `query` and returns the hits in API order.
    pub async fn fetch(&self, query: &str) -> Result<Vec<JobPosting>, FetchError> {
        let url = self.params.url_for(query)?;
        debug!(%url, "Querying JobTech search");

        let response = self
            .client
            .get(url)
            .header(ACCEPT, "application/json")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        let body = response.bytes().await?;
        let parsed: SearchResponse = serde_json::from_slice(&body)?;
        debug!(query, hits = parsed.hits.len(), "JobTech search finished");
        Ok(parsed.hits)
    }
}

#[async_trait]
impl JobSource for JobTechClient {
    async fn search(&self, query: &str) -> Result<Vec<JobPosting>, FetchError> {
        self.fetch(query).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(url: &Url) -> Vec<(String, String)> {
        url.query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect()
    }

    #[test]
    fn test_url_carries_fixed_params() {
        let url = SearchParams::default().url_for("lager").unwrap();
        assert_eq!(url.host_str(), Some("jobsearch.api.jobtechdev.se"));
        assert_eq!(url.path(), "/search");
        assert_eq!(
            pairs(&url),
            vec![
                ("q".to_string(), "lager".to_string()),
                ("region".to_string(), "12".to_string()),
                ("limit".to_string(), "100".to_string()),
            ]
        );
    }

    #[test]
    fn test_url_encodes_query() {
        let url = SearchParams::default().url_for("chaufför & buss").unwrap();
        let raw = url.query().unwrap();
        assert!(raw.starts_with("q=chauff%C3%B6r+%26+buss&"));
        assert_eq!(pairs(&url)[0].1, "chaufför & buss");
    }

    #[test]
    fn test_empty_query_is_sent() {
        let url = SearchParams::default().url_for("").unwrap();
        assert_eq!(pairs(&url)[0], ("q".to_string(), String::new()));
    }

    #[test]
    fn test_base_url_trailing_slash() {
        let params = SearchParams {
            base_url: "http://127.0.0.1:8080/".to_string(),
            ..Default::default()
        };
        assert_eq!(params.url_for("x").unwrap().path(), "/search");
    }

    #[test]
    fn test_invalid_base_url() {
        let params = SearchParams {
            base_url: "not a url".to_string(),
            ..Default::default()
        };
        assert!(matches!(params.url_for("x"), Err(FetchError::InvalidUrl(_))));
    }
}

use std::future::Future;

use reqwest::StatusCode;
use serde::Deserialize;
use thiserror::Error;

use crate::data_models::{SearchCriteria, SearchResult};

pub const SEARCH_PATH: &str = "/api/search";

#[derive(Error, Debug)]
pub enum SearchError {
    #[error("search request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("search endpoint answered {status} with a non-JSON body: {source}")]
    Status {
        status: StatusCode,
        source: serde_json::Error,
    },

    #[error("search response was not valid JSON: {0}")]
    Decode(#[from] serde_json::Error),
}

/// What the client reads out of a search reply.
///
/// Only `results` is looked at; `null` or a missing key is an empty list and
/// every other key is ignored.
#[derive(Debug, Default, Deserialize)]
pub struct SearchReply {
    #[serde(default)]
    results: Option<Vec<SearchResult>>,
}

impl SearchReply {
    pub fn new(results: Vec<SearchResult>) -> Self {
        Self {
            results: Some(results),
        }
    }

    pub fn into_results(self) -> Vec<SearchResult> {
        self.results.unwrap_or_default()
    }
}

/// Anything that can answer a search for the form.
pub trait SearchBackend {
    fn search(
        &self,
        criteria: &SearchCriteria,
    ) -> impl Future<Output = Result<SearchReply, SearchError>> + Send;
}

/// `SearchBackend` over HTTP, posting to `<base_url>/api/search`.
#[derive(Debug, Clone)]
pub struct HttpSearchBackend {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpSearchBackend {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: format!("{}{}", base_url.trim_end_matches('/'), SEARCH_PATH),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl SearchBackend for HttpSearchBackend {
    /// The body is decoded whatever the status; an error status only matters
    /// when the body isn't JSON.
    async fn search(&self, criteria: &SearchCriteria) -> Result<SearchReply, SearchError> {
        let res = self.client.post(&self.endpoint).json(criteria).send().await?;

        let status = res.status();
        let body = res.bytes().await?;
        match serde_json::from_slice(&body) {
            Ok(reply) => Ok(reply),
            Err(source) if !status.is_success() => Err(SearchError::Status { status, source }),
            Err(e) => Err(SearchError::Decode(e)),
        }
    }
}

use serde::Serialize;

use crate::data_models::{SearchCriteria, SearchResult};

/// Body of a `/api/search` reply.
#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub filters: SearchCriteria,
    pub count: usize,
    pub results: Vec<SearchResult>,
}

impl SearchResponse {
    pub fn new(filters: SearchCriteria, results: Vec<SearchResult>) -> Self {
        Self {
            filters,
            count: results.len(),
            results,
        }
    }
}

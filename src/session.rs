use crate::client::{SearchBackend, SearchError};
use crate::data_models::{SearchCriteria, SearchResult};
use crate::form::FormState;

pub const SEARCH_FAILED_NOTICE: &str = "Something went wrong. Please try again.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchPhase {
    #[default]
    Idle,
    Loading,
    Loaded,
    Errored,
}

/// The search page: form, in-flight flag, last results and a pending notice.
#[derive(Debug, Default)]
pub struct SearchPage {
    pub form: FormState,
    phase: SearchPhase,
    results: Vec<SearchResult>,
    notice: Option<String>,
}

impl SearchPage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> SearchPhase {
        self.phase
    }

    pub fn is_loading(&self) -> bool {
        self.phase == SearchPhase::Loading
    }

    pub fn results(&self) -> &[SearchResult] {
        &self.results
    }

    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    /// Hands the pending notice to the UI, clearing it.
    pub fn take_notice(&mut self) -> Option<String> {
        self.notice.take()
    }

    /// Runs one search against `backend` with the current form values.
    ///
    /// Failures never escape: they leave the results empty and post a notice.
    pub async fn submit<B: SearchBackend>(&mut self, backend: &B) {
        let criteria = self.begin_search();
        let outcome = backend.search(&criteria).await;
        self.finish_search(outcome.map(|reply| reply.into_results()));
    }

    /// Enters `Loading`, drops old results and snapshots the request body.
    pub fn begin_search(&mut self) -> SearchCriteria {
        self.phase = SearchPhase::Loading;
        self.results.clear();
        self.form.criteria().clone()
    }

    pub fn finish_search(&mut self, outcome: Result<Vec<SearchResult>, SearchError>) {
        match outcome {
            Ok(results) => {
                self.results = results;
                self.phase = SearchPhase::Loaded;
            }
            Err(e) => {
                log::error!("search failed: {:#}", e);
                self.results.clear();
                self.notice = Some(SEARCH_FAILED_NOTICE.to_string());
                self.phase = SearchPhase::Errored;
            }
        }
    }
}

//! Search state store.
//!
//! Owns the query, the last result bundle, the loading and visibility flags,
//! the category selection and the session history. Components receive the
//! store by reference; nothing reaches it ambiently.
//!
//! A search is split into [`SearchStore::begin_search`], which hands out a
//! [`SearchTicket`] stamped with a fresh generation, and
//! [`SearchStore::complete_search`], which only applies an outcome whose
//! generation is still the latest. Responses landing out of order therefore
//! never overwrite a newer search.

use crate::api_client::{ApiClientError, SearchApi};
use omnisearch_core::{EntityFilter, SearchFilters, SearchHistory, SearchResults};

/// Handle for one in-flight global search.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchTicket {
    generation: u64,
    query: String,
    filters: SearchFilters,
}

impl SearchTicket {
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn filters(&self) -> &SearchFilters {
        &self.filters
    }
}

/// What became of a completed search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    Applied,
    Failed,
    /// A newer search was issued after this one; the outcome was dropped.
    Stale,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchStatus {
    Idle,
    Loading,
    Ready,
    /// The last search failed; results are empty but this is not "no matches".
    Unavailable(String),
}

#[derive(Debug, Clone)]
pub struct SearchStore {
    query: String,
    filters: SearchFilters,
    results: SearchResults,
    loading: bool,
    results_visible: bool,
    selected_filter: EntityFilter,
    history: SearchHistory,
    error: Option<String>,
    generation: u64,
    completed: bool,
}

impl SearchStore {
    pub fn new(history_limit: usize) -> Self {
        Self {
            query: String::new(),
            filters: SearchFilters::default(),
            results: SearchResults::empty(),
            loading: false,
            results_visible: false,
            selected_filter: EntityFilter::All,
            history: SearchHistory::new(history_limit),
            error: None,
            generation: 0,
            completed: false,
        }
    }

    pub fn with_filters(mut self, filters: SearchFilters) -> Self {
        self.filters = filters;
        self
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    pub fn filters(&self) -> &SearchFilters {
        &self.filters
    }

    pub fn results(&self) -> &SearchResults {
        &self.results
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn results_visible(&self) -> bool {
        self.results_visible
    }

    pub fn selected_filter(&self) -> EntityFilter {
        self.selected_filter
    }

    pub fn history(&self) -> &SearchHistory {
        &self.history
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn status(&self) -> SearchStatus {
        if self.loading {
            SearchStatus::Loading
        } else if let Some(error) = &self.error {
            SearchStatus::Unavailable(error.clone())
        } else if self.completed {
            SearchStatus::Ready
        } else {
            SearchStatus::Idle
        }
    }

    /// Start a global search for `query`.
    ///
    /// A blank query clears the results, hides the panel and returns `None`
    /// without a request. `filters` defaults to the store's current filters.
    pub fn begin_search(
        &mut self,
        query: &str,
        filters: Option<SearchFilters>,
    ) -> Option<SearchTicket> {
        self.generation += 1;
        if query.trim().is_empty() {
            self.results = SearchResults::empty();
            self.results_visible = false;
            self.loading = false;
            self.error = None;
            self.completed = false;
            return None;
        }

        let filters = filters.unwrap_or_else(|| self.filters.clone());
        self.loading = true;
        tracing::debug!(generation = self.generation, query, "search started");
        Some(SearchTicket {
            generation: self.generation,
            query: query.to_string(),
            filters,
        })
    }

    /// Apply the outcome of `ticket` if it is still the latest search.
    pub fn complete_search(
        &mut self,
        ticket: &SearchTicket,
        outcome: Result<SearchResults, ApiClientError>,
    ) -> Completion {
        if ticket.generation != self.generation {
            tracing::debug!(
                generation = ticket.generation,
                latest = self.generation,
                query = ticket.query.as_str(),
                "discarding stale search response"
            );
            return Completion::Stale;
        }

        self.loading = false;
        self.completed = true;
        self.results_visible = true;
        match outcome {
            Ok(results) => {
                tracing::info!(
                    query = ticket.query.as_str(),
                    total = results.total(),
                    "search completed"
                );
                self.results = results;
                self.error = None;
                self.history.record(&ticket.query);
                Completion::Applied
            }
            Err(err) => {
                tracing::error!(error = %err, query = ticket.query.as_str(), "global search failed");
                self.results = SearchResults::empty();
                self.error = Some(err.to_string());
                Completion::Failed
            }
        }
    }

    /// Run a complete global search against `api`.
    pub async fn perform_search(
        &mut self,
        api: &dyn SearchApi,
        query: &str,
        filters: Option<SearchFilters>,
    ) -> Option<Completion> {
        let ticket = self.begin_search(query, filters)?;
        let outcome = api.global_search(ticket.query(), ticket.filters()).await;
        Some(self.complete_search(&ticket, outcome))
    }

    /// Reset query, results, selection and visibility. In-flight searches
    /// become stale.
    pub fn clear_search(&mut self) {
        self.generation += 1;
        self.query.clear();
        self.results = SearchResults::empty();
        self.results_visible = false;
        self.selected_filter = EntityFilter::All;
        self.loading = false;
        self.error = None;
        self.completed = false;
    }

    pub fn hide_results(&mut self) {
        self.results_visible = false;
    }

    /// Re-open the panel over the stored results, if there is an active query.
    pub fn show_results(&mut self) {
        if !self.query.trim().is_empty() && (self.completed || self.loading) {
            self.results_visible = true;
        }
    }

    pub fn set_filter(&mut self, filter: EntityFilter) {
        self.selected_filter = filter;
    }

    pub fn cycle_filter(&mut self, forward: bool) {
        self.selected_filter = if forward {
            self.selected_filter.next()
        } else {
            self.selected_filter.previous()
        };
    }
}

impl Default for SearchStore {
    fn default() -> Self {
        Self::new(omnisearch_core::DEFAULT_HISTORY_LIMIT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use omnisearch_core::{EntityKind, Product};

    fn one_product() -> SearchResults {
        SearchResults {
            products: vec![Product {
                name: Some("Mouse".to_string()),
                ..Default::default()
            }],
            ..Default::default()
        }
    }

    #[test]
    fn test_begin_sets_loading() {
        let mut store = SearchStore::default();
        let ticket = store.begin_search("mouse", None).unwrap();
        assert!(store.is_loading());
        assert_eq!(store.status(), SearchStatus::Loading);
        assert_eq!(ticket.query(), "mouse");
    }

    #[test]
    fn test_blank_query_clears_without_ticket() {
        let mut store = SearchStore::default();
        let ticket = store.begin_search("mouse", None).unwrap();
        store.complete_search(&ticket, Ok(one_product()));
        assert!(store.results_visible());

        assert!(store.begin_search("   ", None).is_none());
        assert!(store.results().is_empty());
        assert!(!store.results_visible());
        assert!(!store.is_loading());
    }

    #[test]
    fn test_stale_response_dropped() {
        let mut store = SearchStore::default();
        let first = store.begin_search("mou", None).unwrap();
        let second = store.begin_search("mouse", None).unwrap();

        assert_eq!(
            store.complete_search(&second, Ok(one_product())),
            Completion::Applied
        );
        assert_eq!(
            store.complete_search(&first, Ok(SearchResults::empty())),
            Completion::Stale
        );
        assert_eq!(store.results().count(EntityKind::Products), 1);
        assert_eq!(store.history().iter().collect::<Vec<_>>(), vec!["mouse"]);
    }

    #[test]
    fn test_stale_response_keeps_loading_for_latest() {
        let mut store = SearchStore::default();
        let first = store.begin_search("a", None).unwrap();
        let _second = store.begin_search("ab", None).unwrap();
        store.complete_search(&first, Ok(one_product()));
        assert!(store.is_loading());
        assert!(store.results().is_empty());
    }

    #[test]
    fn test_failure_is_distinguishable() {
        let mut store = SearchStore::default();
        let ticket = store.begin_search("mouse", None).unwrap();
        let outcome = store.complete_search(
            &ticket,
            Err(ApiClientError::Status {
                status: 503,
                body: "down".to_string(),
            }),
        );
        assert_eq!(outcome, Completion::Failed);
        assert!(!store.is_loading());
        assert!(store.results().is_empty());
        assert!(matches!(store.status(), SearchStatus::Unavailable(_)));
        assert!(store.history().is_empty());
    }

    #[test]
    fn test_clear_resets_everything() {
        let mut store = SearchStore::default();
        store.set_query("mouse");
        let ticket = store.begin_search("mouse", None).unwrap();
        store.complete_search(&ticket, Ok(one_product()));
        store.set_filter(EntityFilter::Only(EntityKind::Orders));

        store.clear_search();
        assert_eq!(store.query(), "");
        assert!(store.results().is_empty());
        assert!(!store.results_visible());
        assert_eq!(store.selected_filter(), EntityFilter::All);
        assert_eq!(store.status(), SearchStatus::Idle);
    }

    #[test]
    fn test_hide_keeps_data() {
        let mut store = SearchStore::default();
        store.set_query("mouse");
        let ticket = store.begin_search("mouse", None).unwrap();
        store.complete_search(&ticket, Ok(one_product()));
        store.hide_results();
        assert!(!store.results_visible());
        assert_eq!(store.query(), "mouse");
        assert_eq!(store.results().total(), 1);

        store.show_results();
        assert!(store.results_visible());
    }
}

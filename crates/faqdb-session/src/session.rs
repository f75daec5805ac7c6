use std::time::{Duration, Instant};

use serde::Serialize;

use faqdb_core::options::SearchOptions;
use faqdb_core::traits::{FaqSearch, Scorer};
use faqdb_core::types::{CategorySelection, Facet, FaqRecord, FilterState};
use faqdb_search::{FaqSearchEngine, Hit, SubstringScorer};

use crate::debounce::Debouncer;
use crate::state;

/// Everything a view needs to render one frame.
#[derive(Debug, Clone, Serialize)]
pub struct SearchView<'a> {
    pub results: Vec<&'a FaqRecord>,
    pub total: usize,
    pub facets: Vec<Facet>,
    pub suggestions: Vec<String>,
}

/// Owns the record set, the current [`FilterState`] and the last result set.
///
/// Every mutation goes through the pure transitions in [`crate::state`]; the
/// search only re-runs when the query or the category actually changed.
/// Mutators return whether the state changed.
///
/// With a debounce delay set, [`FaqSession::schedule_search`] queues typed
/// queries and [`FaqSession::poll`] applies the latest one once it is due.
pub struct FaqSession<S = SubstringScorer> {
    engine: FaqSearchEngine<S>,
    state: FilterState,
    hits: Vec<Hit>,
    debouncer: Option<Debouncer>,
}

impl FaqSession<SubstringScorer> {
    pub fn new(records: Vec<FaqRecord>, options: SearchOptions) -> Self {
        Self::with_engine(FaqSearchEngine::new(records, options))
    }
}

impl<S: Scorer> FaqSession<S> {
    pub fn with_engine(engine: FaqSearchEngine<S>) -> Self {
        let state = FilterState::default();
        let hits = engine.hits(&state);
        Self { engine, state, hits, debouncer: None }
    }

    pub fn with_debounce(mut self, delay: Duration) -> Self {
        self.debouncer = Some(Debouncer::new(delay));
        self
    }

    /// When the pending debounced query becomes due, if any.
    pub fn search_deadline(&self) -> Option<Instant> {
        self.debouncer.as_ref().and_then(Debouncer::deadline)
    }

    /// Queue `query` behind the debounce delay, replacing any pending one.
    /// Without a debouncer the search is applied immediately.
    pub fn schedule_search(&mut self, query: impl Into<String>, now: Instant) -> bool {
        match self.debouncer.as_mut() {
            Some(debouncer) => {
                debouncer.schedule(query, now);
                false
            }
            None => self.set_search(query),
        }
    }

    /// Apply the pending query if its delay has elapsed. Returns whether the
    /// state changed.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.debouncer.as_mut().and_then(|d| d.poll(now)) {
            Some(query) => self.set_search(query),
            None => false,
        }
    }

    pub fn engine(&self) -> &FaqSearchEngine<S> { &self.engine }

    pub fn state(&self) -> &FilterState { &self.state }

    pub fn hits(&self) -> &[Hit] { &self.hits }

    pub fn total(&self) -> usize { self.hits.len() }

    pub fn results(&self) -> impl Iterator<Item = &FaqRecord> + '_ {
        let records = self.engine.records();
        self.hits.iter().map(move |hit| &records[hit.index])
    }

    pub fn set_search(&mut self, query: impl Into<String>) -> bool {
        let next = state::update_search(&self.state, query);
        let changed = self.apply(next);
        if changed {
            tracing::info!(target: "faqdb::analytics", event = "search", query = %self.state.search_query, results = self.hits.len());
        }
        changed
    }

    pub fn set_category(&mut self, category: impl Into<CategorySelection>) -> bool {
        let next = state::update_category(&self.state, category);
        let changed = self.apply(next);
        if changed {
            tracing::info!(target: "faqdb::analytics", event = "category", category = %self.state.selected_category, results = self.hits.len());
        }
        changed
    }

    /// Toggle an accordion item. Returns whether it is open afterwards.
    pub fn toggle(&mut self, id: &str) -> bool {
        let next = state::toggle_item(&self.state, id);
        self.apply(next);
        let open = state::is_open(&self.state, id);
        tracing::info!(target: "faqdb::analytics", event = "toggle", id, open);
        open
    }

    /// Reset query and category. A pending debounced query is dropped so it
    /// cannot land after the reset.
    pub fn clear(&mut self) -> bool {
        if let Some(debouncer) = self.debouncer.as_mut() {
            debouncer.cancel();
        }
        let next = state::clear_filters(&self.state);
        self.apply(next)
    }

    pub fn collapse_all(&mut self) -> bool {
        let next = state::collapse_all(&self.state);
        self.apply(next)
    }

    pub fn view(&self) -> SearchView<'_> {
        SearchView {
            results: self.results().collect(),
            total: self.total(),
            facets: self.engine.facets(),
            suggestions: self.engine.suggest(&self.state.search_query),
        }
    }

    fn apply(&mut self, next: FilterState) -> bool {
        if next == self.state {
            return false;
        }
        let refilter = next.search_query != self.state.search_query
            || next.selected_category != self.state.selected_category;
        self.state = next;
        if refilter {
            self.hits = self.engine.hits(&self.state);
            tracing::debug!(
                query = %self.state.search_query,
                category = %self.state.selected_category,
                results = self.hits.len(),
                "re-ran search"
            );
        }
        true
    }
}

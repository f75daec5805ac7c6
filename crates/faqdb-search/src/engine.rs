use faqdb_core::options::SearchOptions;
use faqdb_core::traits::{FaqSearch, Scorer};
use faqdb_core::types::{Facet, FaqRecord, FilterState};

use crate::facets::aggregate;
use crate::filter::{filter_hits_with, Hit};
use crate::scorer::SubstringScorer;
use crate::suggest::suggest;

/// A fixed record set bundled with the options and scorer used to search it.
pub struct FaqSearchEngine<S = SubstringScorer> {
    records: Vec<FaqRecord>,
    options: SearchOptions,
    custom_facets: Option<Vec<Facet>>,
    scorer: S,
}

impl FaqSearchEngine<SubstringScorer> {
    pub fn new(records: Vec<FaqRecord>, options: SearchOptions) -> Self {
        Self::with_scorer(records, options, SubstringScorer)
    }
}

impl<S: Scorer> FaqSearchEngine<S> {
    pub fn with_scorer(records: Vec<FaqRecord>, options: SearchOptions, scorer: S) -> Self {
        tracing::debug!(records = records.len(), "search engine ready");
        Self { records, options, custom_facets: None, scorer }
    }

    pub fn with_custom_facets(mut self, facets: Vec<Facet>) -> Self {
        self.custom_facets = Some(facets);
        self
    }

    pub fn records(&self) -> &[FaqRecord] { &self.records }

    pub fn options(&self) -> &SearchOptions { &self.options }

    pub fn hits(&self, state: &FilterState) -> Vec<Hit> {
        filter_hits_with(&self.scorer, &self.records, state, &self.options)
    }
}

impl<S: Scorer> FaqSearch for FaqSearchEngine<S> {
    fn search(&self, state: &FilterState) -> Vec<&FaqRecord> {
        self.hits(state).into_iter().map(|hit| &self.records[hit.index]).collect()
    }

    fn facets(&self) -> Vec<Facet> {
        aggregate(&self.records, self.custom_facets.as_deref())
    }

    fn suggest(&self, query: &str) -> Vec<String> {
        suggest(&self.records, query)
    }
}

use crate::options::SearchOptions;
use crate::types::{Facet, FaqRecord, FilterState};

/// Relevance heuristic for one record. `query` is already trimmed and
/// lowercased; higher is better and there is no upper bound.
pub trait Scorer: Send + Sync {
    fn score(&self, record: &FaqRecord, query: &str, options: &SearchOptions) -> u32;
}

/// Read-only search surface over a fixed record set.
pub trait FaqSearch: Send + Sync {
    fn search(&self, state: &FilterState) -> Vec<&FaqRecord>;
    fn facets(&self) -> Vec<Facet>;
    fn suggest(&self, query: &str) -> Vec<String>;
}

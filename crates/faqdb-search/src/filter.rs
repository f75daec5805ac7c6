use faqdb_core::options::SearchOptions;
use faqdb_core::traits::Scorer;
use faqdb_core::types::{FaqRecord, FilterState};

use crate::scorer::{matches_query, normalize_query, SubstringScorer};

/// One filtered record, addressed by its position in the input slice.
///
/// `score` is the relevance score against the current query, or 0 when the
/// query is empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hit {
    pub index: usize,
    pub score: u32,
}

/// Category filter, text filter, relevance ranking and capping, in that order.
///
/// Ranking only happens when fuzzy search is enabled and the query is
/// non-empty; it drops matches below `search_threshold` and orders the rest
/// by descending score with ties in input order. Otherwise matches keep
/// input order.
pub fn filter_hits_with<S>(scorer: &S, records: &[FaqRecord], state: &FilterState, options: &SearchOptions) -> Vec<Hit>
where
    S: Scorer + ?Sized,
{
    let query = normalize_query(&state.search_query);

    let mut hits: Vec<Hit> = records
        .iter()
        .enumerate()
        .filter(|(_, record)| state.selected_category.admits(record.category))
        .filter(|(_, record)| query.is_empty() || matches_query(record, &query, options))
        .map(|(index, record)| Hit {
            index,
            score: if query.is_empty() { 0 } else { scorer.score(record, &query, options) },
        })
        .collect();

    if options.enable_fuzzy_search && !query.is_empty() {
        hits.retain(|hit| options.passes_threshold(hit.score));
        // slice::sort_by is stable, so equal scores keep input order
        hits.sort_by(|a, b| b.score.cmp(&a.score));
    }

    hits.truncate(options.max_results);
    tracing::trace!(
        query = %query,
        category = %state.selected_category,
        candidates = records.len(),
        hits = hits.len(),
        "filtered records"
    );
    hits
}

pub fn filter_hits(records: &[FaqRecord], state: &FilterState, options: &SearchOptions) -> Vec<Hit> {
    filter_hits_with(&SubstringScorer, records, state, options)
}

/// The matching records themselves, in result order.
pub fn filter<'a>(records: &'a [FaqRecord], state: &FilterState, options: &SearchOptions) -> Vec<&'a FaqRecord> {
    filter_hits(records, state, options)
        .into_iter()
        .map(|hit| &records[hit.index])
        .collect()
}

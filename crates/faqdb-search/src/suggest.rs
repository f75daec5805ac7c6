use faqdb_core::types::FaqRecord;

use crate::scorer::{contains_ci, normalize_query};

pub const MAX_POPULAR_SUGGESTIONS: usize = 5;
pub const MAX_TAG_SUGGESTIONS: usize = 3;

/// Popular records in input order, at most `limit` of them.
pub fn popular_items(records: &[FaqRecord], limit: usize) -> Vec<&FaqRecord> {
    records.iter().filter(|r| r.popular).take(limit).collect()
}

/// Autocomplete hints for a partially typed query.
///
/// Popular questions come first regardless of the query, then distinct tags
/// containing it. An empty query yields nothing.
pub fn suggest(records: &[FaqRecord], query: &str) -> Vec<String> {
    let query = normalize_query(query);
    if query.is_empty() {
        return Vec::new();
    }

    let mut suggestions: Vec<String> = popular_items(records, MAX_POPULAR_SUGGESTIONS)
        .into_iter()
        .map(|r| r.question.clone())
        .collect();

    let mut tags: Vec<&str> = Vec::with_capacity(MAX_TAG_SUGGESTIONS);
    for tag in records.iter().flat_map(|r| r.tags.iter()) {
        if tags.len() == MAX_TAG_SUGGESTIONS {
            break;
        }
        if contains_ci(tag, &query) && !tags.contains(&tag.as_str()) {
            tags.push(tag);
        }
    }
    suggestions.extend(tags.into_iter().map(str::to_string));
    suggestions
}

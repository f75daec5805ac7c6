use faqdb_core::options::SearchOptions;
use faqdb_core::traits::Scorer;
use faqdb_core::types::FaqRecord;

const QUESTION_PREFIX: u32 = 10;
const QUESTION_CONTAINS: u32 = 5;
const ANSWER_CONTAINS: u32 = 3;
const KEYWORD_CONTAINS: u32 = 2;
const TAG_CONTAINS: u32 = 1;
const POPULAR_BONUS: u32 = 1;

/// Trim and lowercase a raw query. An empty result means "no search".
pub fn normalize_query(query: &str) -> String {
    query.trim().to_lowercase()
}

/// Case-insensitive substring test; `needle` must already be lowercase.
pub(crate) fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}

/// Whether any searchable field of `record` contains `query`. Same matching
/// rule as the scorer, without the weights.
pub(crate) fn matches_query(record: &FaqRecord, query: &str, options: &SearchOptions) -> bool {
    contains_ci(&record.question, query)
        || (options.include_answers && contains_ci(&record.answer, query))
        || (options.include_keywords && record.search_keywords.iter().any(|k| contains_ci(k, query)))
        || record.tags.iter().any(|t| contains_ci(t, query))
}

/// Additive substring scorer.
///
/// Question prefix 10 (otherwise 5 anywhere in the question), answer 3,
/// 2 per matching search keyword, 1 per matching tag, 1 for popular records.
/// Scores are not normalised by length, so a record with many matching tags
/// can outrank a better question match.
#[derive(Debug, Clone, Copy, Default)]
pub struct SubstringScorer;

impl Scorer for SubstringScorer {
    fn score(&self, record: &FaqRecord, query: &str, options: &SearchOptions) -> u32 {
        let mut score = 0;

        let question = record.question.to_lowercase();
        if question.starts_with(query) {
            score += QUESTION_PREFIX;
        } else if question.contains(query) {
            score += QUESTION_CONTAINS;
        }

        if options.include_answers && contains_ci(&record.answer, query) {
            score += ANSWER_CONTAINS;
        }

        if options.include_keywords {
            let keyword_hits = record.search_keywords.iter().filter(|k| contains_ci(k, query)).count();
            score += KEYWORD_CONTAINS * keyword_hits as u32;
        }

        let tag_hits = record.tags.iter().filter(|t| contains_ci(t, query)).count();
        score += TAG_CONTAINS * tag_hits as u32;

        if record.popular {
            score += POPULAR_BONUS;
        }

        score
    }
}

/// Score `record` against a raw query with the default scorer.
pub fn score(record: &FaqRecord, query: &str, options: &SearchOptions) -> u32 {
    SubstringScorer.score(record, &normalize_query(query), options)
}

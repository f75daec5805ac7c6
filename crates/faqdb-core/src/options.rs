//! Per-call search options and the pure merge of caller overrides.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

pub const DEFAULT_SEARCH_THRESHOLD: f64 = 0.3;
pub const DEFAULT_MAX_RESULTS: usize = 50;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchOptions {
    /// Sort matches by relevance. When off, matches keep input order.
    pub enable_fuzzy_search: bool,
    /// Minimum relevance score a match needs to stay in a ranked result.
    ///
    /// The score is an unbounded integer while this is a fraction, so with
    /// the default every match passes. Kept that way on purpose; see
    /// [`SearchOptions::passes_threshold`].
    pub search_threshold: f64,
    pub max_results: usize,
    pub include_keywords: bool,
    pub include_answers: bool,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            enable_fuzzy_search: true,
            search_threshold: DEFAULT_SEARCH_THRESHOLD,
            max_results: DEFAULT_MAX_RESULTS,
            include_keywords: true,
            include_answers: true,
        }
    }
}

/// Partial options supplied by a caller or a config file. `None` keeps the
/// base value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchOptionsOverrides {
    pub enable_fuzzy_search: Option<bool>,
    pub search_threshold: Option<f64>,
    pub max_results: Option<usize>,
    pub include_keywords: Option<bool>,
    pub include_answers: Option<bool>,
}

impl SearchOptions {
    pub fn merge(self, overrides: &SearchOptionsOverrides) -> Self {
        Self {
            enable_fuzzy_search: overrides.enable_fuzzy_search.unwrap_or(self.enable_fuzzy_search),
            search_threshold: overrides.search_threshold.unwrap_or(self.search_threshold),
            max_results: overrides.max_results.unwrap_or(self.max_results),
            include_keywords: overrides.include_keywords.unwrap_or(self.include_keywords),
            include_answers: overrides.include_answers.unwrap_or(self.include_answers),
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.max_results == 0 {
            return Err(Error::InvalidConfig("max_results must be at least 1".to_string()));
        }
        if self.search_threshold.is_nan() || self.search_threshold < 0.0 {
            return Err(Error::InvalidConfig(format!(
                "search_threshold must be a non-negative number, got {}",
                self.search_threshold
            )));
        }
        Ok(())
    }

    /// Raw comparison of an integer score against the fractional threshold.
    pub fn passes_threshold(&self, score: u32) -> bool {
        f64::from(score) >= self.search_threshold
    }
}

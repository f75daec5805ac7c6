//! faqdb-search
//!
//! Substring relevance scoring, filtering, category facets and query
//! suggestions over an in-memory FAQ record set. Every function here is pure:
//! nothing mutates the records or the filter state it is given.

pub mod engine;
pub mod facets;
pub mod filter;
pub mod scorer;
pub mod suggest;

pub use engine::FaqSearchEngine;
pub use facets::aggregate;
pub use filter::{filter, filter_hits, filter_hits_with, Hit};
pub use scorer::{normalize_query, score, SubstringScorer};
pub use suggest::{popular_items, suggest};

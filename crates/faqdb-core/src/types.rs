//! Domain types used by the search engine and the session layer.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use crate::error::Error;

pub type RecordId = String;

/// Sentinel selection key meaning "do not filter by category".
pub const ALL_CATEGORIES: &str = "all";

/// The closed set of FAQ categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    General,
    Courses,
    Payment,
    Technical,
    Enrollment,
    Certification,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::General,
        Category::Courses,
        Category::Payment,
        Category::Technical,
        Category::Enrollment,
        Category::Certification,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Category::General => "general",
            Category::Courses => "courses",
            Category::Payment => "payment",
            Category::Technical => "technical",
            Category::Enrollment => "enrollment",
            Category::Certification => "certification",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Category::General => "General",
            Category::Courses => "Courses",
            Category::Payment => "Payment & Billing",
            Category::Technical => "Technical Support",
            Category::Enrollment => "Enrollment",
            Category::Certification => "Certification",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Category {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.key() == s)
            .ok_or_else(|| Error::UnknownCategory(s.to_string()))
    }
}

/// Display label for a facet key. Unknown keys are shown as-is.
pub fn facet_label(key: &str) -> &str {
    if key == ALL_CATEGORIES {
        return "All Questions";
    }
    key.parse::<Category>().map_or(key, |c| c.label())
}

/// Which category the caller has selected.
///
/// `Only` holds a raw key rather than a [`Category`] so that keys coming from
/// custom facets survive the round trip; a key outside the closed set simply
/// matches nothing.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CategorySelection {
    #[default]
    All,
    Only(String),
}

impl CategorySelection {
    pub fn key(&self) -> &str {
        match self {
            CategorySelection::All => ALL_CATEGORIES,
            CategorySelection::Only(key) => key,
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, CategorySelection::All)
    }

    /// Whether a record with the given category passes this selection.
    pub fn admits(&self, category: Option<Category>) -> bool {
        match self {
            CategorySelection::All => true,
            CategorySelection::Only(key) => category.is_some_and(|c| c.key() == key),
        }
    }
}

impl From<&str> for CategorySelection {
    fn from(key: &str) -> Self {
        if key == ALL_CATEGORIES {
            CategorySelection::All
        } else {
            CategorySelection::Only(key.to_string())
        }
    }
}

impl From<String> for CategorySelection {
    fn from(key: String) -> Self {
        if key == ALL_CATEGORIES {
            CategorySelection::All
        } else {
            CategorySelection::Only(key)
        }
    }
}

impl From<Category> for CategorySelection {
    fn from(category: Category) -> Self {
        CategorySelection::Only(category.key().to_string())
    }
}

impl From<CategorySelection> for String {
    fn from(selection: CategorySelection) -> Self {
        match selection {
            CategorySelection::All => ALL_CATEGORIES.to_string(),
            CategorySelection::Only(key) => key,
        }
    }
}

impl fmt::Display for CategorySelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// One FAQ entry as supplied by the content source.
///
/// - `tags`/`search_keywords`: absent in the source means empty
/// - `read_time`/`last_updated`: display metadata, never searched
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FaqRecord {
    pub id: RecordId,
    #[serde(default)]
    pub question: String,
    #[serde(default)]
    pub answer: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
    #[serde(default)]
    pub popular: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub search_keywords: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub read_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<String>,
}

impl FaqRecord {
    pub fn new(id: impl Into<RecordId>, question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            question: question.into(),
            answer: answer.into(),
            category: None,
            popular: false,
            tags: Vec::new(),
            search_keywords: Vec::new(),
            read_time: None,
            last_updated: None,
        }
    }

    pub fn with_category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }

    pub fn with_popular(mut self, popular: bool) -> Self {
        self.popular = popular;
        self
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_search_keywords<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.search_keywords = keywords.into_iter().map(Into::into).collect();
        self
    }
}

/// Caller-held snapshot of the current search query, category selection and
/// expanded accordion items. `open_items` never influences filtering.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FilterState {
    pub search_query: String,
    pub selected_category: CategorySelection,
    pub open_items: BTreeSet<RecordId>,
}

/// A category with its display label and record count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Facet {
    pub key: String,
    pub label: String,
    pub count: usize,
}

impl Facet {
    pub fn new(key: impl Into<String>, count: usize) -> Self {
        let key = key.into();
        let label = facet_label(&key).to_string();
        Self { key, label, count }
    }
}

//! Pure transitions over [`FilterState`].
//!
//! Each operation takes a snapshot and returns a new one; the input is never
//! modified, so callers detect changes by comparing old and new.

use faqdb_core::types::{CategorySelection, FilterState, RecordId};

pub fn update_search(state: &FilterState, query: impl Into<String>) -> FilterState {
    FilterState { search_query: query.into(), ..state.clone() }
}

pub fn update_category(state: &FilterState, category: impl Into<CategorySelection>) -> FilterState {
    FilterState { selected_category: category.into(), ..state.clone() }
}

/// Open `id` if it is closed, close it if it is open.
pub fn toggle_item(state: &FilterState, id: &str) -> FilterState {
    let mut next = state.clone();
    if !next.open_items.remove(id) {
        next.open_items.insert(id.to_string());
    }
    next
}

/// Reset query and category. Open items stay open.
pub fn clear_filters(state: &FilterState) -> FilterState {
    FilterState {
        search_query: String::new(),
        selected_category: CategorySelection::All,
        open_items: state.open_items.clone(),
    }
}

pub fn is_open(state: &FilterState, id: &str) -> bool {
    state.open_items.contains(id)
}

pub fn expand_all<I>(state: &FilterState, ids: I) -> FilterState
where
    I: IntoIterator<Item = RecordId>,
{
    let mut next = state.clone();
    next.open_items.extend(ids);
    next
}

pub fn collapse_all(state: &FilterState) -> FilterState {
    FilterState { open_items: Default::default(), ..state.clone() }
}

/// True when a query or a specific category narrows the results.
pub fn has_active_filters(state: &FilterState) -> bool {
    !state.search_query.trim().is_empty() || !state.selected_category.is_all()
}

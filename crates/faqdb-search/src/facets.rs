use std::collections::HashMap;

use faqdb_core::types::{Category, Facet, FaqRecord, ALL_CATEGORIES};

/// Category facets for `records`.
///
/// Custom facets are returned unchanged. Otherwise the result starts with a
/// synthetic "all" facet counting every record, followed by each category in
/// the order it is first seen. Categories with no records never appear.
pub fn aggregate(records: &[FaqRecord], custom: Option<&[Facet]>) -> Vec<Facet> {
    if let Some(custom) = custom {
        return custom.to_vec();
    }

    let mut facets = vec![Facet::new(ALL_CATEGORIES, records.len())];
    let mut positions: HashMap<Category, usize> = HashMap::new();
    for category in records.iter().filter_map(|r| r.category) {
        let pos = *positions.entry(category).or_insert_with(|| {
            facets.push(Facet::new(category.key(), 0));
            facets.len() - 1
        });
        facets[pos].count += 1;
    }
    facets
}

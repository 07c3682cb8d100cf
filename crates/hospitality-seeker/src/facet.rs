//! Facet extraction: the option lists behind filter dropdowns.

use std::collections::BTreeSet;

use crate::matcher::Matcher;
use crate::schema::{Dimension, Schema};
use crate::traits::Record;

/// Distinct values of `field` across `records`, sorted ascending.
///
/// Deduplication is exact and case-sensitive. Records without a value for the
/// field contribute nothing.
pub fn distinct_values<R: Record>(records: &[R], field: &str) -> Vec<String> {
    let mut seen: BTreeSet<String> = BTreeSet::new();
    for record in records {
        if let Some(text) = record.field_value(field).to_text() {
            if !seen.contains(text.as_ref()) {
                seen.insert(text.into_owned());
            }
        }
    }
    seen.into_iter().collect()
}

/// The options one dimension offers, plus its wildcard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FacetOptions {
    /// Dimension name.
    pub dimension: String,
    /// The "match all" entry, listed first by most front-ends.
    pub wildcard: String,
    /// Concrete options, in display order.
    pub options: Vec<String>,
}

impl FacetOptions {
    /// Computes the options of `dim` for the given records.
    ///
    /// Fixed options win; bool-label dimensions list their labels; anything
    /// else is derived from the records.
    pub fn for_dimension<R: Record>(dim: &Dimension, records: &[R]) -> Self {
        let options = match (dim.fixed_options(), dim.matcher()) {
            (Some(fixed), _) => fixed.to_vec(),
            (None, Matcher::BoolLabel { labels, .. }) => {
                labels.iter().map(|(label, _)| label.clone()).collect()
            }
            (None, _) => distinct_values(records, dim.field()),
        };
        FacetOptions {
            dimension: dim.name().to_string(),
            wildcard: dim.wildcard().to_string(),
            options,
        }
    }

    /// Returns `true` if `value` is the wildcard or one of the options.
    pub fn contains(&self, value: &str) -> bool {
        value == self.wildcard || self.options.iter().any(|o| o == value)
    }
}

/// Facet options for every dimension of `schema`, in declaration order.
pub fn facets<R: Record>(schema: &Schema, records: &[R]) -> Vec<FacetOptions> {
    schema
        .dimensions()
        .iter()
        .map(|dim| FacetOptions::for_dimension(dim, records))
        .collect()
}

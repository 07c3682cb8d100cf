//! Field matchers: predicates over a single record field.
//!
//! Three kinds exist:
//!
//! - **Substring** (free-text search): case-insensitive containment; an empty
//!   query always matches.
//! - **Equality** (categorical filters): exact, case-sensitive equality, or
//!   the dimension's wildcard which matches everything.
//! - **Bool label** (tri-state toggles over a stored boolean): the selected
//!   label is mapped to its expected boolean; the wildcard matches everything.
//!
//! None of them fail. A missing field only ever satisfies the wildcard or the
//! empty query.

use crate::traits::Record;
use crate::value::Value;

/// Case-insensitive substring match.
///
/// `query` is compared in lowercase; callers running many matches against the
/// same query should lowercase it once and use [`substring_matches_lowered`].
pub fn substring_matches(value: &Value<'_>, query: &str) -> bool {
    substring_matches_lowered(value, &query.to_lowercase())
}

/// Substring match against an already-lowercased query.
pub fn substring_matches_lowered(value: &Value<'_>, query_lower: &str) -> bool {
    if query_lower.is_empty() {
        return true;
    }
    match value {
        Value::String(s) => s.to_lowercase().contains(query_lower),
        _ => false,
    }
}

/// Exact equality, with `wildcard` matching anything.
pub fn equality_matches(value: &Value<'_>, query: &str, wildcard: &str) -> bool {
    if query == wildcard {
        return true;
    }
    value.to_text().is_some_and(|text| text == query)
}

/// Label-to-boolean match, with `wildcard` matching anything.
///
/// An undeclared label never matches; schemas reject such labels before they
/// reach a filter.
pub fn bool_label_matches(
    value: &Value<'_>,
    label: &str,
    wildcard: &str,
    labels: &[(String, bool)],
) -> bool {
    if label == wildcard {
        return true;
    }
    let Some(expected) = labels
        .iter()
        .find(|(candidate, _)| candidate == label)
        .map(|(_, b)| *b)
    else {
        return false;
    };
    value.as_bool() == Some(expected)
}

/// A configured field matcher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Matcher {
    /// Free-text, case-insensitive containment.
    Substring,
    /// Categorical equality with a wildcard sentinel.
    Equality { wildcard: String },
    /// Tri-state label over a boolean field.
    BoolLabel {
        wildcard: String,
        labels: Vec<(String, bool)>,
    },
}

impl Matcher {
    /// Evaluates this matcher for `record[field]` against `query`.
    pub fn matches<R: Record>(&self, record: &R, field: &str, query: &str) -> bool {
        self.matches_value(&record.field_value(field), query)
    }

    /// Evaluates this matcher against an extracted value.
    pub fn matches_value(&self, value: &Value<'_>, query: &str) -> bool {
        match self {
            Matcher::Substring => substring_matches(value, query),
            Matcher::Equality { wildcard } => equality_matches(value, query, wildcard),
            Matcher::BoolLabel { wildcard, labels } => {
                bool_label_matches(value, query, wildcard, labels)
            }
        }
    }

    /// The wildcard sentinel, if this matcher has one.
    pub fn wildcard(&self) -> Option<&str> {
        match self {
            Matcher::Substring => None,
            Matcher::Equality { wildcard } | Matcher::BoolLabel { wildcard, .. } => {
                Some(wildcard)
            }
        }
    }

    /// Returns the display name of this matcher kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            Matcher::Substring => "substring",
            Matcher::Equality { .. } => "equality",
            Matcher::BoolLabel { .. } => "bool-label",
        }
    }
}

impl std::fmt::Display for Matcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

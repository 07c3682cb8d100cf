//! Filter state and the composite filter.
//!
//! The composite filter combines free-text search with every declared
//! dimension:
//!
//! ```text
//! keep = (query is empty ∨ no searchable fields ∨ any searchable field contains query)
//!      ∧ (every dimension matches its selected value)
//! ```
//!
//! Results keep the input order and never touch the input slice.

use crate::error::{Result, SeekerError};
use crate::matcher::substring_matches_lowered;
use crate::schema::Schema;
use crate::traits::Record;

/// The selected value of every dimension of a schema.
///
/// The key set is the schema's dimension list and never changes. A fresh
/// state selects each dimension's wildcard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterState {
    names: Vec<String>,
    wildcards: Vec<String>,
    selected: Vec<String>,
}

impl FilterState {
    /// Creates a state with every dimension at its wildcard.
    pub fn new(schema: &Schema) -> Self {
        let names: Vec<String> = schema
            .dimensions()
            .iter()
            .map(|d| d.name().to_string())
            .collect();
        let wildcards: Vec<String> = schema
            .dimensions()
            .iter()
            .map(|d| d.wildcard().to_string())
            .collect();
        FilterState {
            selected: wildcards.clone(),
            names,
            wildcards,
        }
    }

    /// Selects `value` for dimension `name`.
    ///
    /// Fails for undeclared dimensions, and for labels a bool-label dimension
    /// does not declare.
    pub fn set(&mut self, schema: &Schema, name: &str, value: impl Into<String>) -> Result<()> {
        let idx = schema.position(name)?;
        let value = value.into();
        let dim = &schema.dimensions()[idx];
        if !dim.accepts(&value) {
            return Err(SeekerError::UnknownLabel {
                dimension: name.to_string(),
                label: value,
            });
        }
        self.selected[idx] = value;
        Ok(())
    }

    /// The selected value of dimension `name`.
    pub fn get(&self, name: &str) -> Result<&str> {
        self.names
            .iter()
            .position(|n| n == name)
            .map(|idx| self.selected[idx].as_str())
            .ok_or_else(|| SeekerError::UnknownDimension(name.to_string()))
    }

    /// Resets every dimension to its wildcard.
    pub fn clear(&mut self) {
        self.selected.clone_from(&self.wildcards);
    }

    /// Number of dimensions holding a concrete (non-wildcard) value.
    pub fn active_count(&self) -> usize {
        self.selected
            .iter()
            .zip(&self.wildcards)
            .filter(|(selected, wildcard)| selected != wildcard)
            .count()
    }

    /// `(name, value)` pairs for the dimensions holding a concrete value.
    pub fn active(&self) -> impl Iterator<Item = (&str, &str)> {
        self.names
            .iter()
            .zip(&self.selected)
            .zip(&self.wildcards)
            .filter(|((_, selected), wildcard)| selected != wildcard)
            .map(|((name, selected), _)| (name.as_str(), selected.as_str()))
    }

    /// The selected values, aligned with the schema's dimensions.
    pub fn values(&self) -> &[String] {
        &self.selected
    }
}

/// Search plus filter state, evaluated against records of any shape.
///
/// # Example
///
/// ```
/// use std::borrow::Cow;
/// use hospitality_seeker::{CompositeFilter, FilterState, Record, Schema, Value};
///
/// struct Guest { id: String, name: String, hostel: String }
///
/// impl Record for Guest {
///     const FIELDS: &'static [&'static str] = &["name", "hostel"];
///     fn record_id(&self) -> Cow<'_, str> { Cow::Borrowed(&self.id) }
///     fn field_value(&self, field: &str) -> Value<'_> {
///         match field {
///             "name" => Value::String(&self.name),
///             "hostel" => Value::String(&self.hostel),
///             _ => Value::None,
///         }
///     }
/// }
///
/// let schema = Schema::builder()
///     .searchable("name")
///     .equality("hostel", "hostel", "All hostels")
///     .build()
///     .unwrap();
///
/// let guests = vec![
///     Guest { id: "1".into(), name: "Priya Sharma".into(), hostel: "B".into() },
///     Guest { id: "2".into(), name: "Rahul Verma".into(), hostel: "B".into() },
///     Guest { id: "3".into(), name: "Priya Nair".into(), hostel: "A".into() },
/// ];
///
/// let mut state = FilterState::new(&schema);
/// state.set(&schema, "hostel", "B").unwrap();
///
/// let results = CompositeFilter::new(&schema, "priya", &state).apply(&guests);
/// assert_eq!(results.len(), 1);
/// assert_eq!(results[0].id, "1");
/// ```
#[derive(Debug, Clone)]
pub struct CompositeFilter<'s> {
    schema: &'s Schema,
    search_lower: String,
    state: &'s FilterState,
}

impl<'s> CompositeFilter<'s> {
    /// Creates a filter for one search query and filter state.
    pub fn new(schema: &'s Schema, search: &str, state: &'s FilterState) -> Self {
        CompositeFilter {
            schema,
            search_lower: search.to_lowercase(),
            state,
        }
    }

    /// Tests a single record.
    pub fn matches<R: Record>(&self, record: &R) -> bool {
        self.search_matches(record) && self.dimensions_match(record)
    }

    fn search_matches<R: Record>(&self, record: &R) -> bool {
        let fields = self.schema.searchable();
        if self.search_lower.is_empty() || fields.is_empty() {
            return true;
        }
        fields
            .iter()
            .any(|field| substring_matches_lowered(&record.field_value(field), &self.search_lower))
    }

    fn dimensions_match<R: Record>(&self, record: &R) -> bool {
        self.schema
            .dimensions()
            .iter()
            .zip(self.state.values())
            .all(|(dim, selected)| dim.matcher().matches(record, dim.field(), selected))
    }

    /// Returns references to the matching records, in input order.
    pub fn apply<'a, R: Record>(&self, records: &'a [R]) -> Vec<&'a R> {
        records.iter().filter(|r| self.matches(*r)).collect()
    }

    /// Returns the indices of the matching records, in input order.
    pub fn apply_indices<R: Record>(&self, records: &[R]) -> Vec<usize> {
        records
            .iter()
            .enumerate()
            .filter(|(_, r)| self.matches(*r))
            .map(|(idx, _)| idx)
            .collect()
    }

    /// Clones the matching records.
    pub fn apply_cloned<R: Record + Clone>(&self, records: &[R]) -> Vec<R> {
        self.apply(records).into_iter().cloned().collect()
    }

    /// Counts the matching records.
    pub fn count<R: Record>(&self, records: &[R]) -> usize {
        records.iter().filter(|r| self.matches(*r)).count()
    }
}

//! View schemas: which fields are searchable and which filter dimensions exist.
//!
//! A [`Schema`] is declared once per screen and never changes shape. Mistakes
//! in it surface at [`SchemaBuilder::build`] or [`Schema::bind`], not during
//! filtering.
//!
//! ```
//! use hospitality_seeker::Schema;
//!
//! let schema = Schema::builder()
//!     .searchable("fullName")
//!     .searchable("email")
//!     .equality("hostel", "hostel", "All hostels")
//!     .options("hostel", ["A", "B", "C", "D"])
//!     .bool_label("gender", "is_male", "All", [("Male", true), ("Female", false)])
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(schema.dimensions().len(), 2);
//! assert_eq!(schema.dimension("hostel").unwrap().wildcard(), "All hostels");
//! ```

use crate::error::{Result, SeekerError};
use crate::matcher::Matcher;
use crate::traits::Record;

/// A named filter dimension bound to one record field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dimension {
    name: String,
    field: String,
    matcher: Matcher,
    options: Option<Vec<String>>,
}

impl Dimension {
    /// The dimension name used to set filter values.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The record field this dimension filters on.
    pub fn field(&self) -> &str {
        &self.field
    }

    /// The configured matcher.
    pub fn matcher(&self) -> &Matcher {
        &self.matcher
    }

    /// The "match all" sentinel for this dimension.
    pub fn wildcard(&self) -> &str {
        // Dimensions are only ever built with Equality or BoolLabel matchers.
        self.matcher.wildcard().unwrap_or_default()
    }

    /// Fixed facet options, if declared.
    pub fn fixed_options(&self) -> Option<&[String]> {
        self.options.as_deref()
    }

    /// Returns `true` if `value` is acceptable for this dimension.
    ///
    /// Equality dimensions accept any value (an unknown value simply matches
    /// nothing); bool-label dimensions accept only their labels and wildcard.
    pub fn accepts(&self, value: &str) -> bool {
        match &self.matcher {
            Matcher::BoolLabel { wildcard, labels } => {
                value == wildcard || labels.iter().any(|(label, _)| label == value)
            }
            _ => true,
        }
    }
}

/// Searchable fields plus filter dimensions for one view.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Schema {
    searchable: Vec<String>,
    dimensions: Vec<Dimension>,
}

impl Schema {
    /// Starts a new schema declaration.
    pub fn builder() -> SchemaBuilder {
        SchemaBuilder::default()
    }

    /// The declared searchable fields, in declaration order.
    pub fn searchable(&self) -> &[String] {
        &self.searchable
    }

    /// The declared dimensions, in declaration order.
    pub fn dimensions(&self) -> &[Dimension] {
        &self.dimensions
    }

    /// Looks up a dimension by name.
    pub fn dimension(&self, name: &str) -> Result<&Dimension> {
        self.position(name).map(|idx| &self.dimensions[idx])
    }

    /// Index of a dimension by name.
    pub fn position(&self, name: &str) -> Result<usize> {
        self.dimensions
            .iter()
            .position(|d| d.name == name)
            .ok_or_else(|| SeekerError::UnknownDimension(name.to_string()))
    }

    /// Checks every referenced field against `R::FIELDS`.
    pub fn bind<R: Record>(&self) -> Result<()> {
        let referenced = self
            .searchable
            .iter()
            .map(String::as_str)
            .chain(self.dimensions.iter().map(|d| d.field.as_str()));
        for field in referenced {
            if !R::FIELDS.contains(&field) {
                return Err(SeekerError::UnknownField {
                    record: R::type_name(),
                    field: field.to_string(),
                });
            }
        }
        Ok(())
    }
}

/// Builder for [`Schema`].
///
/// Errors are collected and reported by [`build`](Self::build) so that the
/// declaration reads as a single chain.
#[derive(Debug, Default)]
pub struct SchemaBuilder {
    searchable: Vec<String>,
    dimensions: Vec<Dimension>,
    options: Vec<(String, Vec<String>)>,
}

impl SchemaBuilder {
    /// Declares a field eligible for free-text search.
    pub fn searchable(mut self, field: impl Into<String>) -> Self {
        self.searchable.push(field.into());
        self
    }

    /// Declares a categorical equality dimension.
    pub fn equality(
        mut self,
        name: impl Into<String>,
        field: impl Into<String>,
        wildcard: impl Into<String>,
    ) -> Self {
        self.dimensions.push(Dimension {
            name: name.into(),
            field: field.into(),
            matcher: Matcher::Equality {
                wildcard: wildcard.into(),
            },
            options: None,
        });
        self
    }

    /// Declares a tri-state dimension over a boolean field.
    pub fn bool_label<I, L>(
        mut self,
        name: impl Into<String>,
        field: impl Into<String>,
        wildcard: impl Into<String>,
        labels: I,
    ) -> Self
    where
        I: IntoIterator<Item = (L, bool)>,
        L: Into<String>,
    {
        self.dimensions.push(Dimension {
            name: name.into(),
            field: field.into(),
            matcher: Matcher::BoolLabel {
                wildcard: wildcard.into(),
                labels: labels.into_iter().map(|(l, b)| (l.into(), b)).collect(),
            },
            options: None,
        });
        self
    }

    /// Fixes the facet options of a dimension instead of deriving them.
    pub fn options<I, S>(mut self, name: impl Into<String>, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options
            .push((name.into(), options.into_iter().map(Into::into).collect()));
        self
    }

    /// Validates the declaration and produces the schema.
    pub fn build(self) -> Result<Schema> {
        let SchemaBuilder {
            searchable,
            mut dimensions,
            options,
        } = self;

        for (idx, dim) in dimensions.iter().enumerate() {
            if dimensions[..idx].iter().any(|d| d.name == dim.name) {
                return Err(SeekerError::DuplicateDimension(dim.name.clone()));
            }
            if let Matcher::BoolLabel { wildcard, labels } = &dim.matcher {
                if labels.is_empty() {
                    return Err(SeekerError::EmptyLabels(dim.name.clone()));
                }
                if let Some((label, _)) = labels.iter().find(|(l, _)| l == wildcard) {
                    return Err(SeekerError::LabelIsWildcard {
                        dimension: dim.name.clone(),
                        label: label.clone(),
                    });
                }
            }
        }

        for (name, values) in options {
            let dim = dimensions
                .iter_mut()
                .find(|d| d.name == name)
                .ok_or(SeekerError::UnknownDimension(name))?;
            dim.options = Some(values);
        }

        Ok(Schema {
            searchable,
            dimensions,
        })
    }
}

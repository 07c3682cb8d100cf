//! Error types for the seeker crate.
//!
//! Every variant is a configuration mistake. Filtering and pagination over
//! well-formed configuration never fail.

use thiserror::Error;

/// Errors raised while configuring a schema or driving a view.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SeekerError {
    /// A filter dimension was referenced that the schema never declared.
    #[error("unknown filter dimension '{0}'")]
    UnknownDimension(String),

    /// Two dimensions were declared with the same name.
    #[error("filter dimension '{0}' is declared more than once")]
    DuplicateDimension(String),

    /// A bool-label dimension received a label it does not know.
    #[error("'{label}' is not a valid value for filter dimension '{dimension}'")]
    UnknownLabel { dimension: String, label: String },

    /// A bool-label dimension was declared without any labels.
    #[error("filter dimension '{0}' declares no labels")]
    EmptyLabels(String),

    /// A bool-label dimension uses its wildcard as a concrete label.
    #[error("label '{label}' of filter dimension '{dimension}' collides with its wildcard")]
    LabelIsWildcard { dimension: String, label: String },

    /// A schema references a field the record type does not declare.
    #[error("record type {record} has no field '{field}'")]
    UnknownField { record: &'static str, field: String },
}

/// Result type for seeker operations.
pub type Result<T> = std::result::Result<T, SeekerError>;

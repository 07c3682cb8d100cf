//! MutationView result type and builder.
//!
//! Covers create, update, delete and remove operations:
//! - The affected item
//! - Whether it was a `--dry-run`
//! - Client-side validation failures
//! - Status messages
//!
//! # Example
//!
//! ```rust
//! use hospitality_panel::views::{mutation_view, Action};
//!
//! let result = mutation_view(Action::Create, serde_json::json!({"hostel_name": "AMRITA BHAVANAM - DORM"}))
//!     .dry_run()
//!     .build();
//!
//! assert!(result.is_dry_run());
//! assert!(result.is_valid());
//! ```

use serde::Serialize;

use super::{Message, MessageLevel};

/// One failed form rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationError {
    /// The field that failed validation (e.g., "hostel_name", "warden_email").
    pub field: String,
    pub message: String,
}

impl ValidationError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// The kind of mutation a view reports on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    Create,
    Update,
    Delete,
    Remove,
}

impl Action {
    /// Past-tense verb for success messages.
    pub fn past_tense(&self) -> &'static str {
        match self {
            Action::Create => "created",
            Action::Update => "updated",
            Action::Delete => "deleted",
            Action::Remove => "removed",
        }
    }
}

/// Result type for mutation commands.
#[derive(Debug, Clone, Serialize)]
pub struct MutationView<T> {
    pub action: Action,

    /// The item as sent to (or returned by) the server.
    pub item: T,

    /// Whether this was a dry-run (nothing sent).
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub dry_run: bool,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub validation_errors: Vec<ValidationError>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub messages: Vec<Message>,
}

impl<T> MutationView<T> {
    pub fn is_dry_run(&self) -> bool {
        self.dry_run
    }

    /// Returns true if there are no validation errors.
    pub fn is_valid(&self) -> bool {
        self.validation_errors.is_empty()
    }
}

/// Builder for constructing `MutationView` instances.
#[derive(Debug)]
pub struct MutationViewBuilder<T> {
    action: Action,
    item: T,
    dry_run: bool,
    validation_errors: Vec<ValidationError>,
    messages: Vec<Message>,
}

impl<T> MutationViewBuilder<T> {
    pub fn new(action: Action, item: T) -> Self {
        Self {
            action,
            item,
            dry_run: false,
            validation_errors: Vec::new(),
            messages: Vec::new(),
        }
    }

    /// Mark this as a dry-run (no request performed).
    pub fn dry_run(mut self) -> Self {
        self.dry_run = true;
        self
    }

    /// Add validation errors.
    pub fn validation_errors(mut self, errors: impl IntoIterator<Item = ValidationError>) -> Self {
        self.validation_errors.extend(errors);
        self
    }

    pub fn message(mut self, level: MessageLevel, text: impl Into<String>) -> Self {
        self.messages.push(Message::new(level, text));
        self
    }

    pub fn success(self, text: impl Into<String>) -> Self {
        self.message(MessageLevel::Success, text)
    }

    pub fn info(self, text: impl Into<String>) -> Self {
        self.message(MessageLevel::Info, text)
    }

    pub fn error(self, text: impl Into<String>) -> Self {
        self.message(MessageLevel::Error, text)
    }

    pub fn build(self) -> MutationView<T> {
        MutationView {
            action: self.action,
            item: self.item,
            dry_run: self.dry_run,
            validation_errors: self.validation_errors,
            messages: self.messages,
        }
    }
}

/// Create a new mutation view builder.
pub fn mutation_view<T>(action: Action, item: T) -> MutationViewBuilder<T> {
    MutationViewBuilder::new(action, item)
}

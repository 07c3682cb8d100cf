//! Serializable results produced by commands.
//!
//! Views carry everything a renderer needs and nothing about how it is drawn:
//! the same value is printed as a styled table or serialized as JSON.

mod analytics_view;
mod list_view;
mod message;
mod mutation_view;

pub use analytics_view::{AnalyticsView, HISTORY_DAYS};
pub use list_view::{list_view, ActiveFilter, FacetView, ListView, ListViewBuilder};
pub use message::{Message, MessageLevel};
pub use mutation_view::{mutation_view, Action, MutationView, MutationViewBuilder, ValidationError};

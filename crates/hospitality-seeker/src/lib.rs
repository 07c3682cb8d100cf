//! Seeker - filtering, faceting and pagination for flat record collections.
//!
//! This crate is the engine behind every list screen in the hospitality
//! panel. It is pure and synchronous: records arrive from the outside, and
//! everything derived from them is recomputed in memory.
//!
//! - Field matchers: case-insensitive substring, categorical equality with a
//!   wildcard, and tri-state labels over stored booleans
//! - A composite filter combining free-text search with every dimension
//! - Facet extraction for dropdown option lists
//! - Fixed-size pagination with a clamped page cursor
//! - A view coordinator that ties search, filters and pages together
//!
//! # Quick Start
//!
//! ```rust
//! use std::borrow::Cow;
//! use std::num::NonZeroUsize;
//! use hospitality_seeker::{Record, Schema, Value, ViewCoordinator};
//!
//! #[derive(Debug)]
//! struct Registrant {
//!     id: String,
//!     full_name: String,
//!     hostel: String,
//! }
//!
//! impl Record for Registrant {
//!     const FIELDS: &'static [&'static str] = &["fullName", "hostel"];
//!
//!     fn record_id(&self) -> Cow<'_, str> {
//!         Cow::Borrowed(&self.id)
//!     }
//!
//!     fn field_value(&self, field: &str) -> Value<'_> {
//!         match field {
//!             "fullName" => Value::String(&self.full_name),
//!             "hostel" => Value::String(&self.hostel),
//!             _ => Value::None,
//!         }
//!     }
//! }
//!
//! let schema = Schema::builder()
//!     .searchable("fullName")
//!     .equality("hostel", "hostel", "All hostels")
//!     .options("hostel", ["A", "B", "C", "D", "Not Assigned"])
//!     .build()
//!     .unwrap();
//!
//! let mut view = ViewCoordinator::<Registrant>::new(schema, NonZeroUsize::new(50).unwrap()).unwrap();
//! view.replace_records(vec![
//!     Registrant { id: "1".into(), full_name: "Priya Sharma".into(), hostel: "B".into() },
//!     Registrant { id: "2".into(), full_name: "Rahul Verma".into(), hostel: "A".into() },
//! ]);
//!
//! view.set_search("priya");
//! let frame = view.frame();
//! assert_eq!(frame.total_filtered, 1);
//! assert_eq!(frame.page[0].id, "1");
//! assert_eq!(frame.current_page, 1);
//! ```
//!
//! # Filter Semantics
//!
//! ```text
//! keep = (search matches any searchable field, or the query is empty)
//!      ∧ (every dimension matches its selected value)
//! ```
//!
//! Each dimension starts at its wildcard, which matches every record,
//! including records missing the field.
//!
//! # Matchers
//!
//! | Matcher | Field type | Semantics |
//! |---------|------------|-----------|
//! | `Substring` | String | Case-insensitive containment, empty query matches |
//! | `Equality` | String, Bool | Exact, case-sensitive; wildcard matches all |
//! | `BoolLabel` | Bool | Label mapped to a boolean; wildcard matches all |

mod coordinator;
mod error;
mod facet;
mod filter;
mod matcher;
mod paginate;
mod schema;
mod traits;
mod value;

// Re-export public API
pub use coordinator::{Frame, ViewCoordinator, ViewStatus};
pub use error::{Result, SeekerError};
pub use facet::{distinct_values, facets, FacetOptions};
pub use filter::{CompositeFilter, FilterState};
pub use matcher::{
    bool_label_matches, equality_matches, substring_matches, substring_matches_lowered, Matcher,
};
pub use paginate::{page, total_pages, PageCursor};
pub use schema::{Dimension, Schema, SchemaBuilder};
pub use traits::Record;
pub use value::Value;

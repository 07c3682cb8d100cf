//! One page of a list screen.
//!
//! A `ListView` is one page of a screen, plus the numbers a footer needs:
//! - Items on the current page
//! - "Showing X of Y" counts and page position
//! - Active search and filters
//! - Facet option lists (optional, for `--facets`)
//! - Toast messages, e.g. a failed load
//!
//! Most views are built straight from a coordinator frame with
//! [`ListView::from_frame`].

use hospitality_seeker::{FacetOptions, Frame, ViewStatus};
use serde::Serialize;

use super::{Message, MessageLevel};

/// A `dimension=value` pair holding a concrete selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActiveFilter {
    pub dimension: String,
    pub value: String,
}

/// Serializable option list for one filter dimension.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FacetView {
    pub dimension: String,
    pub wildcard: String,
    pub options: Vec<String>,
}

impl From<&FacetOptions> for FacetView {
    fn from(facet: &FacetOptions) -> Self {
        FacetView {
            dimension: facet.dimension.clone(),
            wildcard: facet.wildcard.clone(),
            options: facet.options.clone(),
        }
    }
}

/// Result type for list screens.
#[derive(Debug, Clone, Serialize)]
pub struct ListView<T> {
    /// Screen heading.
    pub title: String,

    /// Items on the current page.
    pub items: Vec<T>,

    /// Records passing search and filters.
    pub total_count: usize,

    /// Records before search and filters.
    pub total_records: usize,

    pub current_page: usize,
    pub total_pages: usize,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub filters: Vec<ActiveFilter>,

    /// `dim=value` pairs joined for the "filtered by:" line.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter_summary: Option<String>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub facets: Vec<FacetView>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub messages: Vec<Message>,
}

impl<T> ListView<T> {
    /// Returns true if the current page is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the number of items on the current page.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true when search or filters hide some records.
    pub fn is_filtered(&self) -> bool {
        self.total_count < self.total_records
    }
}

impl<'a, R> ListView<&'a R> {
    /// Builds the view for one coordinator frame.
    ///
    /// A failed load becomes an error message next to an empty page.
    pub fn from_frame(title: impl Into<String>, frame: &Frame<'a, R>, with_facets: bool) -> Self {
        let mut builder = list_view(frame.page.iter().copied())
            .title(title)
            .counts((frame.total_filtered, frame.total_records))
            .pages(frame.current_page, frame.total_pages);

        if !frame.search.is_empty() {
            builder = builder.search(frame.search);
        }
        for (dimension, value) in &frame.active_filters {
            builder = builder.filter(*dimension, *value);
        }
        if with_facets {
            builder = builder.facets(frame.facets.iter().map(FacetView::from));
        }
        match frame.status {
            ViewStatus::Failed(message) => builder = builder.error(message.clone()),
            ViewStatus::Loading => builder = builder.info("Loading..."),
            ViewStatus::Ready => {}
        }
        builder.build()
    }
}

/// Builder for constructing `ListView` instances.
///
/// ```rust
/// use hospitality_panel::views::list_view;
///
/// let view = list_view(vec!["A BHAVANAM - SINGLE", "B BHAVANAM - DORM"])
///     .title("Hostels")
///     .counts((2, 5))
///     .filter("gender", "Male")
///     .build();
///
/// assert_eq!(view.filter_summary.as_deref(), Some("gender=Male"));
/// assert!(view.is_filtered());
/// ```
#[derive(Debug)]
pub struct ListViewBuilder<T> {
    title: String,
    items: Vec<T>,
    total_count: Option<usize>,
    total_records: Option<usize>,
    current_page: usize,
    total_pages: usize,
    search: Option<String>,
    filters: Vec<ActiveFilter>,
    facets: Vec<FacetView>,
    messages: Vec<Message>,
}

impl<T> ListViewBuilder<T> {
    pub fn new(items: impl IntoIterator<Item = T>) -> Self {
        Self {
            title: String::new(),
            items: items.into_iter().collect(),
            total_count: None,
            total_records: None,
            current_page: 1,
            total_pages: 1,
            search: None,
            filters: Vec::new(),
            facets: Vec::new(),
            messages: Vec::new(),
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets `(filtered, total)` record counts.
    pub fn counts(mut self, (filtered, total): (usize, usize)) -> Self {
        self.total_count = Some(filtered);
        self.total_records = Some(total);
        self
    }

    pub fn pages(mut self, current: usize, total: usize) -> Self {
        self.current_page = current;
        self.total_pages = total;
        self
    }

    pub fn search(mut self, query: impl Into<String>) -> Self {
        self.search = Some(query.into());
        self
    }

    pub fn filter(mut self, dimension: impl Into<String>, value: impl Into<String>) -> Self {
        self.filters.push(ActiveFilter {
            dimension: dimension.into(),
            value: value.into(),
        });
        self
    }

    pub fn facets(mut self, facets: impl IntoIterator<Item = FacetView>) -> Self {
        self.facets.extend(facets);
        self
    }

    /// Add a status message.
    pub fn message(mut self, level: MessageLevel, text: impl Into<String>) -> Self {
        self.messages.push(Message::new(level, text));
        self
    }

    pub fn info(self, text: impl Into<String>) -> Self {
        self.message(MessageLevel::Info, text)
    }

    pub fn warning(self, text: impl Into<String>) -> Self {
        self.message(MessageLevel::Warning, text)
    }

    pub fn error(self, text: impl Into<String>) -> Self {
        self.message(MessageLevel::Error, text)
    }

    pub fn build(self) -> ListView<T> {
        let filter_summary = summarize(self.search.as_deref(), &self.filters);
        let len = self.items.len();
        ListView {
            title: self.title,
            total_count: self.total_count.unwrap_or(len),
            total_records: self.total_records.unwrap_or(len),
            items: self.items,
            current_page: self.current_page,
            total_pages: self.total_pages,
            search: self.search,
            filters: self.filters,
            filter_summary,
            facets: self.facets,
            messages: self.messages,
        }
    }
}

fn summarize(search: Option<&str>, filters: &[ActiveFilter]) -> Option<String> {
    let mut parts: Vec<String> = filters
        .iter()
        .map(|f| format!("{}={}", f.dimension, f.value))
        .collect();
    if let Some(query) = search {
        parts.push(format!("search \"{query}\""));
    }
    if parts.is_empty() {
        None
    } else {
        Some(parts.join(", "))
    }
}

/// Starts a [`ListViewBuilder`].
pub fn list_view<T>(items: impl IntoIterator<Item = T>) -> ListViewBuilder<T> {
    ListViewBuilder::new(items)
}

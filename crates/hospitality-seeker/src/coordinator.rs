//! The view coordinator: one screen's worth of search, filter and page state.
//!
//! A [`ViewCoordinator`] owns the raw record collection and everything derived
//! from it. Mutations come in two kinds:
//!
//! - **Search and filter setters** update the state, re-run the composite
//!   filter, recompute the page count and reset to page 1. The reset is
//!   unconditional, even when the current page would still exist.
//! - **Pagination controls** only move the cursor. The filtered collection is
//!   not recomputed.
//!
//! Fresh data replaces the collection wholesale via
//! [`replace_records`](ViewCoordinator::replace_records); facets are rebuilt and
//! the cursor is clamped. A failed load is recorded with
//! [`fail_load`](ViewCoordinator::fail_load) and renders no records.

use std::num::NonZeroUsize;

use crate::error::Result;
use crate::facet::{facets, FacetOptions};
use crate::filter::{CompositeFilter, FilterState};
use crate::paginate::{page, total_pages, PageCursor};
use crate::schema::Schema;
use crate::traits::Record;

/// Load status of the underlying collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewStatus {
    /// No data has arrived yet.
    Loading,
    /// The collection holds the latest successful fetch.
    Ready,
    /// The last fetch failed with this message.
    Failed(String),
}

impl ViewStatus {
    /// Returns `true` for [`ViewStatus::Failed`].
    pub fn is_failed(&self) -> bool {
        matches!(self, ViewStatus::Failed(_))
    }
}

/// Everything a render pass needs.
#[derive(Debug, Clone)]
pub struct Frame<'a, R> {
    /// Records on the current page, in filtered order.
    pub page: Vec<&'a R>,
    /// Number of records passing search and filters.
    pub total_filtered: usize,
    /// Size of the raw collection.
    pub total_records: usize,
    pub total_pages: usize,
    pub current_page: usize,
    /// Option lists per dimension, in schema order.
    pub facets: &'a [FacetOptions],
    /// `(dimension, value)` for each non-wildcard dimension.
    pub active_filters: Vec<(&'a str, &'a str)>,
    pub search: &'a str,
    pub status: &'a ViewStatus,
}

/// Search, filter and pagination state over a collection of `R`.
#[derive(Debug, Clone)]
pub struct ViewCoordinator<R> {
    schema: Schema,
    page_size: NonZeroUsize,
    records: Vec<R>,
    filtered: Vec<usize>,
    search: String,
    state: FilterState,
    cursor: PageCursor,
    facets: Vec<FacetOptions>,
    status: ViewStatus,
    filter_runs: usize,
}

impl<R: Record> ViewCoordinator<R> {
    /// Creates an empty coordinator in the [`Loading`](ViewStatus::Loading) state.
    ///
    /// Fails if the schema references a field `R` does not declare.
    pub fn new(schema: Schema, page_size: NonZeroUsize) -> Result<Self> {
        schema.bind::<R>()?;
        let state = FilterState::new(&schema);
        let facets = facets::<R>(&schema, &[]);
        Ok(ViewCoordinator {
            schema,
            page_size,
            records: Vec::new(),
            filtered: Vec::new(),
            search: String::new(),
            state,
            cursor: PageCursor::default(),
            facets,
            status: ViewStatus::Loading,
            filter_runs: 0,
        })
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    pub fn page_size(&self) -> NonZeroUsize {
        self.page_size
    }

    /// The raw collection, as last supplied.
    pub fn records(&self) -> &[R] {
        &self.records
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn filters(&self) -> &FilterState {
        &self.state
    }

    pub fn status(&self) -> &ViewStatus {
        &self.status
    }

    pub fn current_page(&self) -> usize {
        self.cursor.current()
    }

    pub fn total_pages(&self) -> usize {
        self.cursor.total_pages()
    }

    /// Number of records passing search and filters.
    pub fn filtered_count(&self) -> usize {
        self.filtered.len()
    }

    /// The filtered records, in collection order.
    pub fn filtered(&self) -> impl Iterator<Item = &R> + '_ {
        self.filtered.iter().map(|&idx| &self.records[idx])
    }

    /// Facet options computed from the current collection.
    pub fn facets(&self) -> &[FacetOptions] {
        &self.facets
    }

    /// How many times the composite filter has run.
    pub fn filter_runs(&self) -> usize {
        self.filter_runs
    }

    /// Replaces the search query.
    pub fn set_search(&mut self, query: impl Into<String>) {
        self.search = query.into();
        self.refilter_and_reset();
    }

    /// Selects `value` for dimension `name`.
    ///
    /// A rejected value leaves every piece of state untouched.
    pub fn set_filter(&mut self, name: &str, value: impl Into<String>) -> Result<()> {
        self.state.set(&self.schema, name, value)?;
        self.refilter_and_reset();
        Ok(())
    }

    /// Resets every dimension to its wildcard.
    pub fn clear_filters(&mut self) {
        self.state.clear();
        self.refilter_and_reset();
    }

    /// Changes the page size and returns to page 1.
    pub fn set_page_size(&mut self, page_size: NonZeroUsize) {
        self.page_size = page_size;
        self.cursor
            .reset(total_pages(self.filtered.len(), self.page_size));
    }

    pub fn first_page(&mut self) {
        self.cursor.first();
    }

    pub fn last_page(&mut self) {
        self.cursor.last();
    }

    pub fn next_page(&mut self) {
        self.cursor.next();
    }

    pub fn prev_page(&mut self) {
        self.cursor.prev();
    }

    /// Jumps to `page`, clamped to the available pages.
    pub fn go_to_page(&mut self, page: usize) {
        self.cursor.go_to(page);
    }

    /// Swaps in a freshly fetched collection.
    ///
    /// Search and filter selections survive. The current page is kept when it
    /// still exists and falls back to page 1 otherwise.
    pub fn replace_records(&mut self, records: Vec<R>) {
        self.records = records;
        self.facets = facets(&self.schema, &self.records);
        self.status = ViewStatus::Ready;
        self.refilter();
        self.cursor
            .set_total_pages(total_pages(self.filtered.len(), self.page_size));
    }

    /// Records a failed fetch. The collection is dropped so no stale records
    /// render next to the error.
    pub fn fail_load(&mut self, message: impl Into<String>) {
        self.records.clear();
        self.filtered.clear();
        self.facets = facets::<R>(&self.schema, &[]);
        self.cursor.reset(1);
        self.status = ViewStatus::Failed(message.into());
    }

    /// Looks a record up by id across the raw collection.
    pub fn find(&self, id: &str) -> Option<&R> {
        self.records.iter().find(|r| r.record_id() == id)
    }

    /// Records on the current page.
    pub fn page(&self) -> Vec<&R> {
        page(&self.filtered, self.cursor.current(), self.page_size)
            .iter()
            .map(|&idx| &self.records[idx])
            .collect()
    }

    /// Snapshot for one render pass.
    pub fn frame(&self) -> Frame<'_, R> {
        Frame {
            page: self.page(),
            total_filtered: self.filtered.len(),
            total_records: self.records.len(),
            total_pages: self.cursor.total_pages(),
            current_page: self.cursor.current(),
            facets: &self.facets,
            active_filters: self.state.active().collect(),
            search: &self.search,
            status: &self.status,
        }
    }

    fn refilter(&mut self) {
        self.filtered =
            CompositeFilter::new(&self.schema, &self.search, &self.state).apply_indices(&self.records);
        self.filter_runs += 1;
    }

    fn refilter_and_reset(&mut self) {
        self.refilter();
        self.cursor
            .reset(total_pages(self.filtered.len(), self.page_size));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SeekerError;
    use crate::value::Value;
    use std::borrow::Cow;

    #[derive(Debug, Clone, PartialEq)]
    struct Guest {
        id: String,
        name: String,
        hostel: String,
    }

    impl Record for Guest {
        const FIELDS: &'static [&'static str] = &["id", "name", "hostel"];

        fn record_id(&self) -> Cow<'_, str> {
            Cow::Borrowed(&self.id)
        }

        fn field_value(&self, field: &str) -> Value<'_> {
            match field {
                "id" => Value::String(&self.id),
                "name" => Value::String(&self.name),
                "hostel" => Value::String(&self.hostel),
                _ => Value::None,
            }
        }
    }

    fn guest(id: usize, name: &str, hostel: &str) -> Guest {
        Guest {
            id: id.to_string(),
            name: name.to_string(),
            hostel: hostel.to_string(),
        }
    }

    fn schema() -> Schema {
        Schema::builder()
            .searchable("name")
            .equality("hostel", "hostel", "All hostels")
            .build()
            .unwrap()
    }

    fn size(n: usize) -> NonZeroUsize {
        NonZeroUsize::new(n).unwrap()
    }

    fn coordinator(records: Vec<Guest>, page_size: usize) -> ViewCoordinator<Guest> {
        let mut view = ViewCoordinator::new(schema(), size(page_size)).unwrap();
        view.replace_records(records);
        view
    }

    fn twelve_across_hostels() -> Vec<Guest> {
        (0..12)
            .map(|i| guest(i, &format!("Guest {i}"), ["A", "B", "C", "D"][i % 4]))
            .collect()
    }

    #[test]
    fn unbound_field_fails_construction() {
        let schema = Schema::builder().searchable("email").build().unwrap();
        let err = ViewCoordinator::<Guest>::new(schema, size(10)).unwrap_err();
        assert!(matches!(err, SeekerError::UnknownField { .. }));
    }

    #[test]
    fn starts_loading_and_empty() {
        let view = ViewCoordinator::<Guest>::new(schema(), size(10)).unwrap();
        let frame = view.frame();
        assert_eq!(frame.status, &ViewStatus::Loading);
        assert!(frame.page.is_empty());
        assert_eq!(frame.total_pages, 1);
        assert_eq!(frame.current_page, 1);
    }

    #[test]
    fn single_hostel_fits_one_page() {
        let mut view = coordinator(twelve_across_hostels(), 10);
        view.set_filter("hostel", "B").unwrap();

        let frame = view.frame();
        assert_eq!(frame.total_filtered, 3);
        assert_eq!(frame.total_pages, 1);
        assert_eq!(frame.page.len(), 3);
        assert!(frame.page.iter().all(|g| g.hostel == "B"));

        view.go_to_page(2);
        assert_eq!(view.current_page(), 1);
    }

    #[test]
    fn empty_collection_is_a_valid_state() {
        let view = coordinator(Vec::new(), 10);
        let frame = view.frame();
        assert_eq!(frame.total_records, 0);
        assert_eq!(frame.total_pages, 1);
        assert!(frame.page.is_empty());
        assert!(frame.facets[0].options.is_empty());
        assert_eq!(frame.status, &ViewStatus::Ready);
    }

    #[test]
    fn search_ignores_case() {
        let mut view = coordinator(
            vec![guest(1, "Priya Sharma", "A"), guest(2, "Rahul Verma", "A")],
            10,
        );
        view.set_search("priya");
        let frame = view.frame();
        assert_eq!(frame.page.len(), 1);
        assert_eq!(frame.page[0].name, "Priya Sharma");
    }

    #[test]
    fn narrowing_filter_resets_to_first_page() {
        let mut records: Vec<Guest> = (0..20).map(|i| guest(i, "Guest", "A")).collect();
        records.extend((20..25).map(|i| guest(i, "Guest", "B")));
        let mut view = coordinator(records, 10);

        assert_eq!(view.total_pages(), 3);
        view.go_to_page(3);
        assert_eq!(view.current_page(), 3);

        view.set_filter("hostel", "B").unwrap();
        assert_eq!(view.current_page(), 1);
        assert_eq!(view.total_pages(), 1);
        assert_eq!(view.page().len(), 5);
    }

    #[test]
    fn reset_fires_even_when_page_still_exists() {
        let records: Vec<Guest> = (0..30).map(|i| guest(i, "Guest", "A")).collect();
        let mut view = coordinator(records, 10);
        view.go_to_page(2);

        // "guest" still matches all 30 records
        view.set_search("guest");
        assert_eq!(view.total_pages(), 3);
        assert_eq!(view.current_page(), 1);
    }

    #[test]
    fn pagination_does_not_refilter() {
        let records: Vec<Guest> = (0..30).map(|i| guest(i, "Guest", "A")).collect();
        let mut view = coordinator(records, 10);
        let runs = view.filter_runs();

        view.next_page();
        view.last_page();
        view.prev_page();
        view.first_page();
        view.go_to_page(2);
        assert_eq!(view.filter_runs(), runs);
        assert_eq!(view.page()[0].id, "10");

        view.set_search("x");
        assert_eq!(view.filter_runs(), runs + 1);
    }

    #[test]
    fn rejected_filter_changes_nothing() {
        let records: Vec<Guest> = (0..30).map(|i| guest(i, "Guest", "A")).collect();
        let mut view = coordinator(records, 10);
        view.go_to_page(2);
        let runs = view.filter_runs();

        assert!(view.set_filter("college", "X").is_err());
        assert_eq!(view.current_page(), 2);
        assert_eq!(view.filter_runs(), runs);
    }

    #[test]
    fn refresh_keeps_state_and_clamps_page() {
        let records: Vec<Guest> = (0..30).map(|i| guest(i, "Guest", "A")).collect();
        let mut view = coordinator(records, 10);
        view.set_filter("hostel", "A").unwrap();
        view.go_to_page(2);

        view.replace_records((0..25).map(|i| guest(i, "Guest", "A")).collect());
        assert_eq!(view.current_page(), 2);
        assert_eq!(view.filters().get("hostel").unwrap(), "A");

        view.go_to_page(3);
        view.replace_records((0..12).map(|i| guest(i, "Guest", "A")).collect());
        assert_eq!(view.total_pages(), 2);
        assert_eq!(view.current_page(), 1);
    }

    #[test]
    fn refresh_recomputes_facets() {
        let mut view = coordinator(vec![guest(1, "Guest", "A")], 10);
        assert_eq!(view.facets()[0].options, vec!["A"]);

        view.replace_records(vec![guest(1, "Guest", "C"), guest(2, "Guest", "B")]);
        assert_eq!(view.facets()[0].options, vec!["B", "C"]);
    }

    #[test]
    fn failed_load_renders_nothing() {
        let mut view = coordinator(twelve_across_hostels(), 10);
        view.fail_load("connection refused");

        let frame = view.frame();
        assert!(frame.page.is_empty());
        assert_eq!(frame.total_records, 0);
        assert_eq!(frame.status, &ViewStatus::Failed("connection refused".into()));
        assert!(frame.status.is_failed());

        view.replace_records(twelve_across_hostels());
        assert_eq!(view.status(), &ViewStatus::Ready);
        assert_eq!(view.frame().total_records, 12);
    }

    #[test]
    fn active_filters_and_find() {
        let mut view = coordinator(twelve_across_hostels(), 10);
        view.set_filter("hostel", "C").unwrap();
        assert_eq!(view.frame().active_filters, vec![("hostel", "C")]);

        view.clear_filters();
        assert!(view.frame().active_filters.is_empty());

        assert_eq!(view.find("7").map(|g| g.hostel.as_str()), Some("D"));
        assert!(view.find("99").is_none());
    }

    #[test]
    fn page_size_change_returns_to_first_page() {
        let mut view = coordinator(twelve_across_hostels(), 5);
        view.last_page();
        assert_eq!(view.current_page(), 3);

        view.set_page_size(size(4));
        assert_eq!(view.current_page(), 1);
        assert_eq!(view.total_pages(), 3);
    }
}

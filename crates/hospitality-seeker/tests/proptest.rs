//! Property-based tests for the filter, paginator and view coordinator.

use std::borrow::Cow;
use std::num::NonZeroUsize;

use proptest::prelude::*;
use hospitality_seeker::{
    page, total_pages, CompositeFilter, FilterState, Record, Schema, Value, ViewCoordinator,
};

// ============================================================================
// Test helpers
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
struct Item {
    id: String,
    name: String,
    hostel: String,
    college: Option<String>,
    is_male: bool,
}

impl Record for Item {
    const FIELDS: &'static [&'static str] = &["name", "hostel", "college", "is_male"];

    fn record_id(&self) -> Cow<'_, str> {
        Cow::Borrowed(&self.id)
    }

    fn field_value(&self, field: &str) -> Value<'_> {
        match field {
            "name" => Value::String(&self.name),
            "hostel" => Value::String(&self.hostel),
            "college" => Value::from(&self.college),
            "is_male" => Value::Bool(self.is_male),
            _ => Value::None,
        }
    }
}

const HOSTELS: &[&str] = &["A", "B", "C", "D", "Not Assigned"];
const COLLEGES: &[&str] = &["IIT Madras", "PSG Tech", "Amrita"];

fn schema() -> Schema {
    Schema::builder()
        .searchable("name")
        .equality("hostel", "hostel", "All hostels")
        .equality("college", "college", "All colleges")
        .bool_label("gender", "is_male", "All", [("Male", true), ("Female", false)])
        .build()
        .unwrap()
}

fn item_strategy() -> impl Strategy<Value = (String, usize, Option<usize>, bool)> {
    (
        "[a-zA-Z]{0,6}( [a-zA-Z]{0,6})?",
        0..HOSTELS.len(),
        proptest::option::of(0..COLLEGES.len()),
        any::<bool>(),
    )
}

fn items_strategy(max: usize) -> impl Strategy<Value = Vec<Item>> {
    prop::collection::vec(item_strategy(), 0..max).prop_map(|raw| {
        raw.into_iter()
            .enumerate()
            .map(|(idx, (name, hostel, college, is_male))| Item {
                id: idx.to_string(),
                name,
                hostel: HOSTELS[hostel].to_string(),
                college: college.map(|c| COLLEGES[c].to_string()),
                is_male,
            })
            .collect()
    })
}

#[derive(Debug, Clone)]
enum Filter {
    Hostel(usize),
    College(usize),
    Gender(bool),
}

fn filter_strategy() -> impl Strategy<Value = Filter> {
    prop_oneof![
        (0..HOSTELS.len()).prop_map(Filter::Hostel),
        (0..COLLEGES.len()).prop_map(Filter::College),
        any::<bool>().prop_map(Filter::Gender),
    ]
}

fn apply_filter(schema: &Schema, state: &mut FilterState, filter: &Filter) {
    let (name, value) = match filter {
        Filter::Hostel(h) => ("hostel", HOSTELS[*h]),
        Filter::College(c) => ("college", COLLEGES[*c]),
        Filter::Gender(true) => ("gender", "Male"),
        Filter::Gender(false) => ("gender", "Female"),
    };
    state.set(schema, name, value).unwrap();
}

#[derive(Debug, Clone)]
enum Action {
    Search(String),
    Filter(Filter),
    Clear,
    First,
    Last,
    Next,
    Prev,
    GoTo(usize),
}

impl Action {
    fn mutates_query(&self) -> bool {
        matches!(self, Action::Search(_) | Action::Filter(_) | Action::Clear)
    }
}

fn action_strategy() -> impl Strategy<Value = Action> {
    prop_oneof![
        "[a-z]{0,3}".prop_map(Action::Search),
        filter_strategy().prop_map(Action::Filter),
        Just(Action::Clear),
        Just(Action::First),
        Just(Action::Last),
        Just(Action::Next),
        Just(Action::Prev),
        (0usize..20).prop_map(Action::GoTo),
    ]
}

fn run(view: &mut ViewCoordinator<Item>, action: &Action) {
    match action {
        Action::Search(q) => view.set_search(q.clone()),
        Action::Filter(Filter::Hostel(h)) => view.set_filter("hostel", HOSTELS[*h]).unwrap(),
        Action::Filter(Filter::College(c)) => view.set_filter("college", COLLEGES[*c]).unwrap(),
        Action::Filter(Filter::Gender(m)) => view
            .set_filter("gender", if *m { "Male" } else { "Female" })
            .unwrap(),
        Action::Clear => view.clear_filters(),
        Action::First => view.first_page(),
        Action::Last => view.last_page(),
        Action::Next => view.next_page(),
        Action::Prev => view.prev_page(),
        Action::GoTo(n) => view.go_to_page(*n),
    }
}

fn ids<R: Record>(records: &[R]) -> Vec<String> {
    records.iter().map(|r| r.record_id().into_owned()).collect()
}

// ============================================================================
// Filter properties
// ============================================================================

proptest! {
    /// Filtering a filtered result again changes nothing.
    #[test]
    fn filter_is_idempotent(
        items in items_strategy(40),
        query in "[a-z]{0,2}",
        filters in prop::collection::vec(filter_strategy(), 0..3),
    ) {
        let schema = schema();
        let mut state = FilterState::new(&schema);
        for f in &filters {
            apply_filter(&schema, &mut state, f);
        }
        let filter = CompositeFilter::new(&schema, &query, &state);

        let once = filter.apply(&items);
        let twice = filter.apply(&once);
        prop_assert_eq!(ids(&once), ids(&twice));
    }

    /// Narrowing a wildcard dimension to a concrete value never grows the result.
    #[test]
    fn concrete_filter_never_grows_result(
        items in items_strategy(40),
        query in "[a-z]{0,2}",
        extra in filter_strategy(),
    ) {
        let schema = schema();
        let wide = FilterState::new(&schema);
        let mut narrow = wide.clone();
        apply_filter(&schema, &mut narrow, &extra);

        let wide_count = CompositeFilter::new(&schema, &query, &wide).count(&items);
        let narrow_count = CompositeFilter::new(&schema, &query, &narrow).count(&items);
        prop_assert!(narrow_count <= wide_count);
    }

    /// Matches keep their input order.
    #[test]
    fn filter_preserves_order(items in items_strategy(40), filter in filter_strategy()) {
        let schema = schema();
        let mut state = FilterState::new(&schema);
        apply_filter(&schema, &mut state, &filter);

        let indices = CompositeFilter::new(&schema, "", &state).apply_indices(&items);
        prop_assert!(indices.windows(2).all(|w| w[0] < w[1]));
    }

    /// An empty query with every dimension at its wildcard keeps everything.
    #[test]
    fn default_state_keeps_everything(items in items_strategy(40)) {
        let schema = schema();
        let state = FilterState::new(&schema);
        prop_assert_eq!(CompositeFilter::new(&schema, "", &state).count(&items), items.len());
    }
}

// ============================================================================
// Pagination properties
// ============================================================================

proptest! {
    /// Concatenating every page reproduces the collection exactly.
    #[test]
    fn pages_cover_collection(items in prop::collection::vec(any::<u16>(), 0..120), size in 1usize..30) {
        let size = NonZeroUsize::new(size).unwrap();
        let pages = total_pages(items.len(), size);

        let joined: Vec<u16> = (1..=pages)
            .flat_map(|n| page(&items, n, size).iter().copied())
            .collect();
        prop_assert_eq!(joined, items.clone());
        prop_assert!(page(&items, pages + 1, size).is_empty());
    }

    /// Every page but the last is full.
    #[test]
    fn only_last_page_is_short(len in 1usize..200, size in 1usize..30) {
        let items: Vec<usize> = (0..len).collect();
        let size = NonZeroUsize::new(size).unwrap();
        let pages = total_pages(len, size);

        for n in 1..pages {
            prop_assert_eq!(page(&items, n, size).len(), size.get());
        }
        prop_assert!(!page(&items, pages, size).is_empty());
    }
}

// ============================================================================
// Coordinator properties
// ============================================================================

proptest! {
    /// Every search or filter mutation lands on page 1, and the cursor is
    /// always within `[1, total_pages]`.
    #[test]
    fn cursor_invariants_hold(
        items in items_strategy(80),
        size in 1usize..15,
        actions in prop::collection::vec(action_strategy(), 0..40),
    ) {
        let mut view = ViewCoordinator::new(schema(), NonZeroUsize::new(size).unwrap()).unwrap();
        view.replace_records(items);

        for action in &actions {
            run(&mut view, action);
            if action.mutates_query() {
                prop_assert_eq!(view.current_page(), 1);
            }
            prop_assert!(view.current_page() >= 1);
            prop_assert!(view.current_page() <= view.total_pages().max(1));
            prop_assert_eq!(
                view.total_pages(),
                total_pages(view.filtered_count(), view.page_size())
            );
        }
    }

    /// The coordinator's pages agree with a one-shot filter over the same state.
    #[test]
    fn coordinator_matches_direct_filter(
        items in items_strategy(60),
        query in "[a-z]{0,2}",
        filter in filter_strategy(),
    ) {
        let schema = schema();
        let mut state = FilterState::new(&schema);
        apply_filter(&schema, &mut state, &filter);
        let expected = ids(&CompositeFilter::new(&schema, &query, &state).apply(&items));

        let mut view = ViewCoordinator::new(schema.clone(), NonZeroUsize::new(7).unwrap()).unwrap();
        view.replace_records(items);
        run(&mut view, &Action::Filter(filter));
        view.set_search(query);

        let mut seen = Vec::new();
        for n in 1..=view.total_pages() {
            view.go_to_page(n);
            seen.extend(view.page().into_iter().map(|r| r.id.clone()));
        }
        prop_assert_eq!(seen, expected);
    }
}

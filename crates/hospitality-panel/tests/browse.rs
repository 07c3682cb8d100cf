//! Scripted interactive sessions.

use hospitality_panel::browse;
use hospitality_panel::models::PendingAllotment;
use hospitality_panel::render::{OutputMode, Renderer};
use hospitality_panel::screens::allotments;
use hospitality_panel::source::StaticSource;

fn beds(n: usize) -> Vec<PendingAllotment> {
    (1..=n)
        .map(|i| PendingAllotment {
            id: format!("bed-{i:02}"),
            student_name: format!("Student {i:02}"),
            hostel_name: if i % 2 == 0 { "A BHAVANAM - DORM" } else { "B BHAVANAM - SINGLE" }.into(),
            student_email: format!("s{i}@example.com"),
            phone_number: format!("90000000{i:02}"),
        })
        .collect()
}

async fn session(script: &str, records: Vec<PendingAllotment>) -> (String, hospitality_seeker::ViewCoordinator<PendingAllotment>) {
    let mut view = allotments::coordinator(std::num::NonZeroUsize::new(10)).unwrap();
    let renderer = Renderer::new(OutputMode::Text).unwrap().with_width(100);
    let mut out = Vec::new();
    browse::run(
        &mut view,
        &StaticSource::new(records),
        &renderer,
        allotments::TITLE,
        script.as_bytes(),
        &mut out,
    )
    .await
    .unwrap();
    (String::from_utf8(out).unwrap(), view)
}

#[tokio::test]
async fn paging_and_filtering() {
    let (out, view) = session("next\nnext\nfilter hostel A BHAVANAM - DORM\nquit\n", beds(25)).await;

    assert!(out.contains("page 1 of 3"));
    assert!(out.contains("page 3 of 3"));
    // Filtering returns to page 1.
    assert!(out.contains("Showing 10 of 12 results, page 1 of 2 (25 records in total)"));
    assert_eq!(view.frame().current_page, 1);
}

#[tokio::test]
async fn bad_commands_keep_the_session_alive() {
    let (out, view) = session("jump\nfilter colour red\nsearch student 07\n", beds(12)).await;

    assert!(out.contains("unknown command `jump`"));
    assert!(out.contains("unknown filter dimension 'colour'"));
    assert_eq!(view.frame().total_filtered, 1);
}

#[tokio::test]
async fn clear_resets_search_and_filters() {
    let (_, view) = session("search s3\nfilter hostel B BHAVANAM - SINGLE\nclear\n", beds(12)).await;

    let frame = view.frame();
    assert_eq!(frame.search, "");
    assert!(frame.active_filters.is_empty());
    assert_eq!(frame.total_filtered, 12);
}

#[tokio::test]
async fn help_and_end_of_input() {
    let (out, _) = session("help\n", beds(1)).await;
    assert!(out.contains("commands:"));
    assert!(out.ends_with("> "));
}

use deck_core::assessment::QUESTIONS;

use super::test_harness::{ViewKind, setup_view_harness};

#[tokio::test(flavor = "current_thread")]
async fn deck_view_renders_the_first_slide() {
    let mut harness = setup_view_harness(ViewKind::Deck);
    harness.rebuild();
    harness.drive_async().await;

    let html = harness.render();
    assert!(html.contains("1 / 10"), "counter missing: {html}");
    assert!(html.contains("Velocity Embedded"), "title slide missing");
    assert!(html.contains("slide active"), "no active slide");
}

#[tokio::test(flavor = "current_thread")]
async fn deck_view_disables_previous_on_the_first_slide() {
    let mut harness = setup_view_harness(ViewKind::Deck);
    harness.rebuild();
    harness.drive_async().await;

    let html = harness.render();
    assert!(html.contains("disabled"), "previous should start disabled");
    assert!(html.contains("id=\"deck-prev\""));
    assert!(html.contains("id=\"deck-next\""));
}

#[tokio::test(flavor = "current_thread")]
async fn assessment_panel_renders_every_question() {
    let mut harness = setup_view_harness(ViewKind::Assessment);
    harness.rebuild();
    harness.drive_async().await;

    let html = harness.render();
    assert!(html.contains("SDV Readiness Assessment"));
    for question in QUESTIONS {
        assert!(html.contains(question.prompt), "missing prompt: {}", question.prompt);
    }
    assert!(html.contains("See My Score"));
}

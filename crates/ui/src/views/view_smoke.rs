use belajar_core::model::{ExerciseId, LessonId};

use super::test_harness::{ViewKind, setup_view_harness, test_services};

#[tokio::test(flavor = "current_thread")]
async fn unit_map_shows_open_and_locked_units() {
    let mut harness = setup_view_harness(ViewKind::UnitMap, test_services().await);
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("Pelajaran 1"), "missing unit title in {html}");
    assert!(html.contains("Complete previous unit"), "missing lock badge in {html}");
    assert!(!html.contains("Coming Soon"), "unexpected coming soon in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn unlocked_unit_without_content_is_coming_soon() {
    let services = test_services().await;
    let progress = services.progress();
    for id in ["1-1", "1-2", "1-3"] {
        progress.complete_lesson(LessonId::new(id)).await;
    }

    let mut harness = setup_view_harness(ViewKind::UnitMap, services);
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("Coming Soon"), "missing coming soon in {html}");
    assert!(html.contains(">30<"), "missing xp in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn unit_overview_lists_scores_and_collapses_vocabulary() {
    let services = test_services().await;
    services
        .progress()
        .complete_exercise(ExerciseId::new("ex-1-1"), 1, 2)
        .await;

    let mut harness = setup_view_harness(ViewKind::UnitOverview(1), services);
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("Salam"), "missing lesson in {html}");
    assert!(html.contains("Score: 1/2"), "missing score in {html}");
    assert!(html.contains("+2 more words"), "missing vocabulary overflow in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn unit_overview_without_content_is_coming_soon() {
    let mut harness = setup_view_harness(ViewKind::UnitOverview(2), test_services().await);
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Unit 2 coming soon!"), "missing fallback in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn lesson_view_renders_section_or_not_found() {
    let mut harness = setup_view_harness(
        ViewKind::Lesson(1, "1-1".to_string()),
        test_services().await,
    );
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Greetings"), "missing lesson title in {html}");
    assert!(html.contains("Complete Lesson"), "missing complete button in {html}");

    let mut harness = setup_view_harness(
        ViewKind::Lesson(1, "1-9".to_string()),
        test_services().await,
    );
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Section not found."), "missing fallback in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn multiple_choice_exercise_renders_lettered_options() {
    let mut harness = setup_view_harness(
        ViewKind::Exercise(1, "ex-1-1".to_string()),
        test_services().await,
    );
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("selamat pagi"), "missing question in {html}");
    assert!(html.contains("1/2"), "missing position in {html}");
    assert!(html.contains(">A<") && html.contains(">B<"), "missing letters in {html}");
    assert!(html.contains("Check Answer"), "missing confirm button in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn unresolved_exercises_render_fallbacks_without_progress() {
    let services = test_services().await;

    let mut harness = setup_view_harness(
        ViewKind::Exercise(1, "ex-1-2".to_string()),
        services.clone(),
    );
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Unknown exercise type."), "missing fallback in {html}");

    let mut harness = setup_view_harness(
        ViewKind::Exercise(1, "ex-1-9".to_string()),
        services.clone(),
    );
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Exercise not found."), "missing fallback in {html}");

    assert_eq!(services.progress().snapshot().xp(), 0);
}

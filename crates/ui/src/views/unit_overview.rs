use belajar_core::model::UnitId;
use dioxus::prelude::*;
use dioxus_router::Link;

use crate::context::{AppContext, use_progress};
use crate::routes::Route;
use crate::views::ViewError;
use crate::vm::{
    ExerciseRowVm, LessonRowVm, VocabPreviewVm, map_exercise_rows, map_lesson_rows,
    map_vocab_preview,
};

#[derive(Clone, Debug, PartialEq)]
struct OverviewData {
    title: String,
    subtitle: String,
    lessons: Vec<LessonRowVm>,
    exercises: Vec<ExerciseRowVm>,
    vocabulary: VocabPreviewVm,
}

#[component]
pub fn UnitOverviewView(unit_id: u32) -> Element {
    let ctx = use_context::<AppContext>();
    let progress = use_progress().get();
    let loaded = ctx
        .content()
        .unit(UnitId::new(unit_id))
        .map(|unit| OverviewData {
            title: unit.title.clone(),
            subtitle: unit.subtitle.clone(),
            lessons: map_lesson_rows(&unit, &progress),
            exercises: map_exercise_rows(&unit, &progress),
            vocabulary: map_vocab_preview(&unit),
        })
        .map_err(ViewError::from);

    let data = match loaded {
        Ok(data) => data,
        Err(err) => {
            return rsx! {
                div { class: "container unit-overview-empty",
                    h2 { "Unit {unit_id} coming soon!" }
                    p { "{err.message()}" }
                    Link { class: "btn btn-primary", to: Route::Home {}, "← Back to Map" }
                }
            };
        }
    };

    rsx! {
        div { class: "unit-overview container",
            Link { class: "back-link", to: Route::Home {}, "← Back to Map" }

            div { class: "unit-overview-header",
                h1 { "{data.title}" }
                p { class: "unit-overview-subtitle", "{data.subtitle}" }
            }

            section { class: "section-group",
                h2 { "📖 Lessons" }
                div { class: "section-list",
                    for row in data.lessons {
                        Link {
                            key: "{row.id}",
                            class: card_class(row.completed),
                            to: Route::Lesson { unit_id, section_id: row.id.to_string() },
                            div { class: "section-card-left",
                                div { class: badge_class("section-badge", row.completed),
                                    "{row.badge}"
                                }
                            }
                            div { class: "section-card-content",
                                h3 { "{row.title}" }
                                p { "{row.title_en}" }
                                if row.has_audio {
                                    span { class: "audio-tag", "🎧 Audio" }
                                }
                            }
                            div { class: "section-card-arrow", "→" }
                        }
                    }
                }
            }

            section { class: "section-group",
                h2 { "🧠 Exercises" }
                div { class: "section-list",
                    for row in data.exercises {
                        Link {
                            key: "{row.id}",
                            class: card_class(row.completed),
                            to: Route::Exercise { unit_id, exercise_id: row.id.to_string() },
                            div { class: "section-card-left",
                                div { class: badge_class("section-badge exercise", row.completed),
                                    if row.completed { "✓" } else { "?" }
                                }
                            }
                            div { class: "section-card-content",
                                h3 { "{row.instruction}" }
                                p { "{row.type_label}" }
                                if let Some(score) = row.score_label {
                                    span { class: "score-tag", "{score}" }
                                }
                            }
                            div { class: "section-card-arrow", "→" }
                        }
                    }
                }
            }

            section { class: "section-group",
                h2 { "📝 Vocabulary Review" }
                div { class: "vocab-grid",
                    for item in data.vocabulary.items {
                        div { class: "vocab-mini-card",
                            span { class: "vocab-word", "{item.word}" }
                            span { class: "vocab-meaning", "{item.meaning}" }
                        }
                    }
                    if let Some(more) = data.vocabulary.more_label {
                        div { class: "vocab-more", "{more}" }
                    }
                }
            }
        }
    }
}

fn card_class(completed: bool) -> &'static str {
    if completed {
        "section-card card completed"
    } else {
        "section-card card"
    }
}

fn badge_class(base: &str, completed: bool) -> String {
    if completed {
        format!("{base} done")
    } else {
        base.to_string()
    }
}

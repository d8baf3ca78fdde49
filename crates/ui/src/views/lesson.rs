use std::collections::BTreeSet;

use belajar_core::model::content::Section;
use belajar_core::model::{LessonId, UnitId};
use dioxus::prelude::*;
use dioxus_router::{Link, use_navigator};

use crate::context::{AppContext, use_progress};
use crate::routes::Route;
use crate::views::ViewError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum LessonTab {
    Lesson,
    Vocabulary,
    Grammar,
}

#[component]
pub fn LessonView(unit_id: u32, section_id: String) -> Element {
    let ctx = use_context::<AppContext>();
    let navigator = use_navigator();
    let progress = use_progress();
    let mut tab = use_signal(|| LessonTab::Lesson);
    let mut show_translation = use_signal(|| false);
    let flipped = use_signal(BTreeSet::<usize>::new);

    let section = match ctx
        .content()
        .lesson(UnitId::new(unit_id), &LessonId::new(section_id.as_str()))
    {
        Ok(section) => section,
        Err(err) => {
            let message = ViewError::from(err).message();
            return rsx! {
                div { class: "container",
                    p { "{message}" }
                    Link { to: Route::Home {}, "← Home" }
                }
            };
        }
    };

    let on_complete = {
        let progress_service = ctx.progress();
        let lesson_id = section.id.clone();
        move |_: MouseEvent| {
            let progress_service = progress_service.clone();
            let lesson_id = lesson_id.clone();
            let mut progress = progress;
            spawn(async move {
                progress_service.complete_lesson(lesson_id).await;
                progress.refresh(&progress_service);
                navigator.push(Route::Unit { unit_id });
            });
        }
    };

    let has_grammar = section.content.grammar.is_some();
    let tab_class = move |which: LessonTab| {
        if tab() == which {
            "lesson-tab active"
        } else {
            "lesson-tab"
        }
    };

    rsx! {
        div { class: "lesson-view container",
            Link { class: "back-link", to: Route::Unit { unit_id }, "← Unit {unit_id}" }

            div { class: "lesson-header",
                div { class: "lesson-header-meta", "Section {section.id}" }
                h1 { "{section.title}" }
                p { class: "lesson-header-sub", "{section.title_en}" }
            }

            div { class: "lesson-tabs",
                button { class: tab_class(LessonTab::Lesson), onclick: move |_| tab.set(LessonTab::Lesson), "📖 Lesson" }
                button { class: tab_class(LessonTab::Vocabulary), onclick: move |_| tab.set(LessonTab::Vocabulary), "📝 Vocabulary" }
                if has_grammar {
                    button { class: tab_class(LessonTab::Grammar), onclick: move |_| tab.set(LessonTab::Grammar), "📐 Grammar" }
                }
            }

            match tab() {
                LessonTab::Lesson => rsx! {
                    LessonBody { section: section.clone(), show_translation: show_translation(), on_toggle: move |()| show_translation.toggle() }
                },
                LessonTab::Vocabulary => rsx! {
                    VocabularyCards { section: section.clone(), flipped }
                },
                LessonTab::Grammar => rsx! {
                    GrammarCard { section: section.clone() }
                },
            }

            div { class: "lesson-footer",
                button { class: "btn btn-primary btn-lg", onclick: on_complete, "Complete Lesson ✓" }
            }
        }
    }
}

#[component]
fn LessonBody(section: Section, show_translation: bool, on_toggle: EventHandler) -> Element {
    let content = &section.content;
    let toggle_label = if show_translation { "Hide Translation" } else { "Show Translation" };

    rsx! {
        div { class: "lesson-content",
            if let Some(intro) = &content.intro {
                div { class: "lesson-intro card", p { "{intro}" } }
            }

            if let Some(file) = &section.audio {
                div { class: "audio-section",
                    div { class: "audio-player card",
                        span { class: "audio-label", "🎧 Listen to this section" }
                        audio { class: "audio-element", controls: true, src: "/audio/{file}" }
                    }
                }
            }

            if !content.sentences.is_empty() {
                div { class: "sentences-section",
                    div { class: "section-title-bar",
                        h3 { "Basic Sentences" }
                        button { class: "btn btn-ghost btn-sm", onclick: move |_| on_toggle.call(()), "{toggle_label}" }
                    }
                    div { class: "sentence-list",
                        for sentence in content.sentences.iter() {
                            div { class: "sentence-item card",
                                div { class: "sentence-id", "{sentence.id}" }
                                if show_translation {
                                    div { class: "sentence-en", "{sentence.en}" }
                                }
                            }
                        }
                    }
                }
            }

            if !content.dialogue.is_empty() {
                div { class: "dialogue-section",
                    h3 { "Dialogue" }
                    div { class: "dialogue-list",
                        for line in content.dialogue.iter() {
                            div {
                                class: bubble_class(line.is_opening_speaker(&content.dialogue)),
                                div { class: "dialogue-speaker", "{line.speaker}" }
                                div { class: "dialogue-text", "{line.id}" }
                                if show_translation {
                                    div { class: "dialogue-translation", "{line.en}" }
                                }
                            }
                        }
                    }
                    button { class: "btn btn-ghost btn-sm", onclick: move |_| on_toggle.call(()), "{toggle_label}" }
                }
            }

            if !content.zodiac_list.is_empty() {
                div { class: "zodiac-section",
                    h3 { "Chinese Zodiac Animals" }
                    div { class: "zodiac-grid",
                        for entry in content.zodiac_list.iter() {
                            div { class: "zodiac-card card",
                                div { class: "zodiac-animal", "{entry.animal}" }
                                div { class: "zodiac-en", "{entry.en}" }
                                div { class: "zodiac-traits", "{entry.traits}" }
                                div { class: "zodiac-traits-en", "{entry.traits_en}" }
                            }
                        }
                    }
                }
            }

            if let Some(note) = &content.cultural_note {
                div { class: "cultural-note card",
                    h3 { "🌏 Cultural Note" }
                    p { "{note}" }
                }
            }
        }
    }
}

#[component]
fn VocabularyCards(section: Section, flipped: Signal<BTreeSet<usize>>) -> Element {
    rsx! {
        div { class: "vocab-content",
            p { class: "vocab-hint", "Tap a card to reveal its meaning" }
            div { class: "vocab-flashcard-grid",
                for (index, item) in section.vocabulary.iter().enumerate() {
                    div {
                        key: "{index}",
                        class: flashcard_class(flipped.read().contains(&index)),
                        onclick: move |_| toggle_card(flipped, index),
                        div { class: "vocab-flashcard-inner",
                            div { class: "vocab-flashcard-front",
                                span { class: "vocab-flashcard-word", "{item.word}" }
                            }
                            div { class: "vocab-flashcard-back",
                                span { class: "vocab-flashcard-meaning", "{item.meaning}" }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn GrammarCard(section: Section) -> Element {
    let Some(grammar) = &section.content.grammar else {
        return rsx! {};
    };

    rsx! {
        div { class: "grammar-content",
            div { class: "grammar-card card",
                h3 { "{grammar.title}" }
                p { class: "grammar-explanation", "{grammar.explanation}" }
                div { class: "grammar-examples",
                    for example in grammar.examples.iter() {
                        div { class: "grammar-example",
                            div { class: "grammar-example-id", "{example.id}" }
                            div { class: "grammar-example-en", "{example.en}" }
                            if let Some(note) = &example.note {
                                div { class: "grammar-example-note", "💡 {note}" }
                            }
                        }
                    }
                }
            }
        }
    }
}

fn bubble_class(opening_speaker: bool) -> &'static str {
    if opening_speaker {
        "dialogue-bubble left"
    } else {
        "dialogue-bubble right"
    }
}

fn flashcard_class(flipped: bool) -> &'static str {
    if flipped {
        "vocab-flashcard flipped"
    } else {
        "vocab-flashcard"
    }
}

fn toggle_card(mut flipped: Signal<BTreeSet<usize>>, index: usize) {
    let mut cards = flipped.write();
    if !cards.remove(&index) {
        cards.insert(index);
    }
}

use dioxus::prelude::*;
use dioxus_router::Link;

use crate::context::{AppContext, use_progress};
use crate::routes::Route;
use crate::vm::{MapStatsVm, UnitCardState, UnitCardVm, map_unit_cards};

#[component]
pub fn UnitMapView() -> Element {
    let ctx = use_context::<AppContext>();
    let progress = use_progress().get();
    let stats = MapStatsVm::from(&progress);
    let cards = map_unit_cards(&ctx.content().unit_map(&progress));
    let unit_count = cards.len();

    rsx! {
        div { class: "unit-map container",
            div { class: "unit-map-header",
                h1 { "Belajar Bahasa Indonesia!" }
                p { class: "unit-map-subtitle",
                    "Learn Indonesian step by step through {unit_count} interactive units"
                }
                div { class: "overall-stats",
                    OverallStat { value: stats.xp.to_string(), label: "XP Earned" }
                    OverallStat { value: stats.lessons_done.to_string(), label: "Lessons Done" }
                    OverallStat { value: stats.streak.to_string(), label: "Day Streak" }
                }
            }

            div { class: "unit-path",
                div { class: "path-line" }
                for card in cards {
                    UnitCard { key: "{card.id}", card }
                }
            }
        }
    }
}

#[component]
fn OverallStat(value: String, label: &'static str) -> Element {
    rsx! {
        div { class: "overall-stat",
            span { class: "overall-stat-number", "{value}" }
            span { class: "overall-stat-label", "{label}" }
        }
    }
}

#[component]
fn UnitCard(card: UnitCardVm) -> Element {
    let body = rsx! {
        div { class: "unit-card-icon", span { "{card.icon}" } }
        div { class: "unit-card-content",
            div { class: "unit-card-number", "{card.number_label}" }
            h3 { class: "unit-card-title", "{card.title}" }
            p { class: "unit-card-subtitle", "{card.subtitle}" }
            if let Some(percent) = card.progress_percent {
                div { class: "unit-card-progress",
                    div { class: "progress-bar-container",
                        div { class: "progress-bar-fill", style: "width: {percent}%" }
                    }
                    span { class: "unit-card-progress-text", "{percent}%" }
                }
            }
            match card.state {
                UnitCardState::Locked => rsx! {
                    span { class: "badge badge-warning", "Complete previous unit" }
                },
                UnitCardState::ComingSoon => rsx! {
                    span { class: "badge badge-warning", "Coming Soon" }
                },
                UnitCardState::Open => rsx! {},
            }
        }
    };

    match card.state {
        UnitCardState::Open => rsx! {
            div { class: "unit-node",
                Link { class: "unit-card card", to: Route::Unit { unit_id: card.id.value() },
                    {body}
                    div { class: "unit-card-arrow", "→" }
                }
            }
        },
        UnitCardState::ComingSoon => rsx! {
            div { class: "unit-node",
                div { class: "unit-card card coming-soon", {body} }
            }
        },
        UnitCardState::Locked => rsx! {
            div { class: "unit-node locked",
                div { class: "unit-card card", {body} }
            }
        },
    }
}

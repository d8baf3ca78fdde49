use belajar_core::model::ResultSummary;
use dioxus::prelude::*;
use dioxus_router::use_navigator;

use crate::routes::Route;
use crate::vm::xp_earned_label;

#[component]
pub(super) fn ResultsPanel(
    summary: ResultSummary,
    xp_awarded: Option<u32>,
    unit_id: u32,
    on_retry: EventHandler,
) -> Element {
    let navigator = use_navigator();
    let xp_label = xp_earned_label(xp_awarded);

    rsx! {
        div { class: "exercise-results container",
            div { class: "results-card card",
                div { class: "results-emoji", "{summary.tier.emoji()}" }
                h2 { class: "results-message", "{summary.tier.message()}" }
                div { class: "results-score",
                    span { class: "results-score-number", "{summary.score}" }
                    span { class: "results-score-divider", "/" }
                    span { class: "results-score-total", "{summary.total}" }
                }
                div { class: "results-percentage", "{summary.percentage}% correct" }
                div { class: "results-xp", "{xp_label}" }
                div { class: "results-actions",
                    button {
                        class: "btn btn-primary",
                        onclick: move |_| {
                            navigator.push(Route::Unit { unit_id });
                        },
                        "Continue →"
                    }
                    button { class: "btn btn-ghost", onclick: move |_| on_retry.call(()), "Try Again" }
                }
            }
        }
    }
}

use dioxus::prelude::*;
use services::ExerciseSession;
use services::exercises::{MatchOutcome, WRONG_ATTEMPT_CLEAR_DELAY};

use super::{AttemptSignal, StepBar, with_session};
use crate::vm::MatchingVm;

#[component]
pub(super) fn MatchingPanel(
    attempt: AttemptSignal,
    instruction: String,
    on_finished: EventHandler,
) -> Element {
    let Some(vm) = attempt
        .read()
        .as_ref()
        .ok()
        .and_then(|current| match &current.session {
            ExerciseSession::Matching(session) => Some(MatchingVm::from(session)),
            _ => None,
        })
    else {
        return rsx! {};
    };

    let on_right = move |index: usize| {
        let outcome = with_session(attempt, |session| {
            Some(session.as_matching_mut()?.select_right(index))
        });
        match outcome {
            Some(MatchOutcome::Wrong(token)) => {
                spawn(async move {
                    tokio::time::sleep(WRONG_ATTEMPT_CLEAR_DELAY).await;
                    with_session(attempt, |session| {
                        Some(session.as_matching_mut()?.clear_wrong_attempt(token))
                    });
                });
            }
            Some(MatchOutcome::Completed(_)) => on_finished.call(()),
            _ => {}
        }
    };

    rsx! {
        StepBar { label: vm.position_label.clone(), percent: vm.percent }

        div { class: "exercise-card",
            h2 { class: "exercise-question", "{instruction}" }
            p { class: "matching-hint", "Tap an item on the left, then tap its match on the right" }
            div { class: "matching-grid",
                div { class: "matching-column",
                    for item in vm.left.iter().cloned() {
                        button {
                            key: "left-{item.index}",
                            class: "{item.class}",
                            disabled: item.matched,
                            onclick: move |_| {
                                with_session(attempt, |session| {
                                    Some(session.as_matching_mut()?.select_left(item.index))
                                });
                            },
                            "{item.text}"
                        }
                    }
                }
                div { class: "matching-column",
                    for item in vm.right.iter().cloned() {
                        button {
                            key: "right-{item.index}",
                            class: "{item.class}",
                            disabled: item.matched,
                            onclick: move |_| on_right(item.index),
                            "{item.text}"
                        }
                    }
                }
            }
        }
    }
}

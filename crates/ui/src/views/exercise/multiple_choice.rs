use dioxus::prelude::*;
use services::ExerciseSession;
use services::exercises::{Advance, SHAKE_CLEAR_DELAY};

use super::{AnswerFeedback, AttemptSignal, StepBar, with_session};
use crate::vm::MultipleChoiceVm;

#[component]
pub(super) fn MultipleChoicePanel(
    attempt: AttemptSignal,
    instruction: String,
    on_finished: EventHandler,
) -> Element {
    let Some(vm) = attempt
        .read()
        .as_ref()
        .ok()
        .and_then(|current| match &current.session {
            ExerciseSession::MultipleChoice(session) => Some(MultipleChoiceVm::from(session)),
            _ => None,
        })
    else {
        return rsx! {};
    };

    let on_confirm = move |_: MouseEvent| {
        let feedback = with_session(attempt, |session| session.as_multiple_choice_mut()?.confirm())
            .and_then(|confirmation| confirmation.feedback);
        if let Some(token) = feedback {
            spawn(async move {
                tokio::time::sleep(SHAKE_CLEAR_DELAY).await;
                with_session(attempt, |session| {
                    Some(session.as_multiple_choice_mut()?.clear_shake(token))
                });
            });
        }
    };
    let on_next = move |_: MouseEvent| {
        let advance = with_session(attempt, |session| Some(session.as_multiple_choice_mut()?.advance()));
        if matches!(advance, Some(Advance::Finished(_))) {
            on_finished.call(());
        }
    };
    let options_class = if vm.shaking {
        "exercise-options animate-shake"
    } else {
        "exercise-options"
    };

    rsx! {
        StepBar { label: vm.position_label.clone(), percent: vm.percent }

        div { class: "exercise-card",
            p { class: "exercise-instruction", "{instruction}" }
            h2 { class: "exercise-question", "{vm.question}" }
            div { class: options_class,
                for option in vm.options.iter().cloned() {
                    button {
                        key: "{option.index}",
                        class: "{option.class}",
                        disabled: vm.confirmed.is_some(),
                        onclick: move |_| {
                            with_session(attempt, |session| {
                                Some(session.as_multiple_choice_mut()?.select(option.index))
                            });
                        },
                        span { class: "option-letter", "{option.letter}" }
                        span { class: "option-text", "{option.text}" }
                    }
                }
            }

            if let Some(correct) = vm.confirmed {
                AnswerFeedback {
                    correct,
                    correct_message: "✅ Correct! Great job!",
                    wrong_message: "Not quite. The answer is:",
                    answer: vm.correct_answer.clone(),
                }
            }

            div { class: "exercise-actions",
                if vm.confirmed.is_none() {
                    button { class: "btn btn-primary", disabled: !vm.can_confirm, onclick: on_confirm, "Check Answer" }
                } else {
                    button { class: "btn btn-accent", onclick: on_next, "{vm.next_label}" }
                }
            }
        }
    }
}

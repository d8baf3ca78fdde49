use dioxus::prelude::*;
use services::ExerciseSession;
use services::exercises::Advance;

use super::{AnswerFeedback, AttemptSignal, StepBar, with_session};
use crate::vm::FillBlankVm;

#[component]
pub(super) fn FillBlankPanel(
    attempt: AttemptSignal,
    instruction: String,
    on_finished: EventHandler,
) -> Element {
    let Some(vm) = attempt
        .read()
        .as_ref()
        .ok()
        .and_then(|current| match &current.session {
            ExerciseSession::FillBlank(session) => Some(FillBlankVm::from(session)),
            _ => None,
        })
    else {
        return rsx! {};
    };

    let finish_if_done = move |advance: Option<Advance>| {
        if matches!(advance, Some(Advance::Finished(_))) {
            on_finished.call(());
        }
    };
    let on_input = move |evt: FormEvent| {
        with_session(attempt, |session| {
            Some(session.as_fill_blank_mut()?.set_input(evt.value()))
        });
    };
    let on_key = move |evt: KeyboardEvent| {
        if evt.key() == Key::Enter {
            evt.prevent_default();
            finish_if_done(with_session(attempt, |session| {
                session.as_fill_blank_mut()?.submit()
            }));
        }
    };
    let on_confirm = move |_: MouseEvent| {
        with_session(attempt, |session| session.as_fill_blank_mut()?.confirm());
    };
    let on_next = move |_: MouseEvent| {
        finish_if_done(with_session(attempt, |session| {
            Some(session.as_fill_blank_mut()?.advance())
        }));
    };

    rsx! {
        StepBar { label: vm.position_label.clone(), percent: vm.percent }

        div { class: "exercise-card",
            h2 { class: "exercise-question", "{instruction}" }
            div { class: "fill-blank-sentence",
                span { "{vm.before}" }
                input {
                    class: vm.input_class,
                    r#type: "text",
                    value: "{vm.input}",
                    placeholder: "{vm.hint}",
                    disabled: vm.confirmed.is_some(),
                    autofocus: true,
                    oninput: on_input,
                    onkeydown: on_key,
                }
                span { "{vm.after}" }
            }

            if let Some(correct) = vm.confirmed {
                AnswerFeedback {
                    correct,
                    correct_message: "✅ Correct!",
                    wrong_message: "The answer is:",
                    answer: vm.answer.clone(),
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

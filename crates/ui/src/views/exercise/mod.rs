mod fill_blank;
mod matching;
mod multiple_choice;
mod results;

use belajar_core::model::{ExerciseCompletion, ExerciseId, ResultSummary, UnitId};
use dioxus::dioxus_core::spawn_forever;
use dioxus::prelude::*;
use dioxus_router::Link;
use services::{ExerciseAttempt, ExerciseSession};

use crate::context::{AppContext, use_progress};
use crate::routes::Route;
use crate::views::ViewError;

use fill_blank::FillBlankPanel;
use matching::MatchingPanel;
use multiple_choice::MultipleChoicePanel;
use results::ResultsPanel;

/// The running attempt, or why none could be started.
pub(crate) type AttemptSignal = Signal<Result<ExerciseAttempt, ViewError>>;

#[derive(Clone, Copy, Debug, PartialEq)]
enum Screen {
    Failed(ViewError),
    MultipleChoice,
    FillBlank,
    Matching,
    Results {
        summary: ResultSummary,
        xp_awarded: Option<u32>,
    },
}

impl Screen {
    fn of(attempt: &Result<ExerciseAttempt, ViewError>) -> Self {
        let current = match attempt {
            Ok(current) => current,
            Err(err) => return Self::Failed(*err),
        };
        if let Some(score) = current.session.final_score() {
            return Self::Results {
                summary: ResultSummary::from(score),
                xp_awarded: current.completion.map(|completion| completion.xp_awarded),
            };
        }
        match current.session {
            ExerciseSession::MultipleChoice(_) => Self::MultipleChoice,
            ExerciseSession::FillBlank(_) => Self::FillBlank,
            ExerciseSession::Matching(_) => Self::Matching,
        }
    }
}

/// Apply `f` to the running session, if there is one.
pub(crate) fn with_session<R>(
    mut attempt: AttemptSignal,
    f: impl FnOnce(&mut ExerciseSession) -> Option<R>,
) -> Option<R> {
    attempt
        .write()
        .as_mut()
        .ok()
        .and_then(|current| f(&mut current.session))
}

#[component]
pub fn ExerciseView(unit_id: u32, exercise_id: String) -> Element {
    let ctx = use_context::<AppContext>();
    let progress = use_progress();

    let start_attempt = {
        let exercises = ctx.exercises();
        use_callback(move |()| {
            exercises
                .start(UnitId::new(unit_id), &ExerciseId::new(exercise_id.as_str()))
                .map_err(ViewError::from)
        })
    };
    let mut attempt: AttemptSignal = use_signal(|| start_attempt.call(()));

    // The write is not tied to this view, so leaving the page cannot drop a taken report.
    let on_finished = {
        let exercises = ctx.exercises();
        let progress_service = ctx.progress();
        use_callback(move |()| {
            let Some(pending) = with_session(attempt, |session| exercises.take_completion(session))
            else {
                return;
            };
            let progress_service = progress_service.clone();
            let mut progress = progress;
            let mut attempt = attempt;
            spawn_forever(async move {
                let completion = pending.save().await;
                progress.refresh(&progress_service);
                if let Some(completion) = completion {
                    store_completion(&mut attempt, completion);
                }
            });
        })
    };

    let screen = Screen::of(&attempt.read());
    let instruction = attempt
        .read()
        .as_ref()
        .map(|current| current.exercise.instruction.clone())
        .unwrap_or_default();

    let body = match screen {
        Screen::Failed(err) => {
            return rsx! {
                div { class: "container",
                    p { "{err.message()}" }
                    Link { to: Route::Unit { unit_id }, "← Unit {unit_id}" }
                }
            };
        }
        Screen::Results { summary, xp_awarded } => {
            return rsx! {
                ResultsPanel {
                    summary,
                    xp_awarded,
                    unit_id,
                    on_retry: move |()| attempt.set(start_attempt.call(())),
                }
            };
        }
        Screen::MultipleChoice => rsx! {
            MultipleChoicePanel { attempt, instruction, on_finished }
        },
        Screen::FillBlank => rsx! {
            FillBlankPanel { attempt, instruction, on_finished }
        },
        Screen::Matching => rsx! {
            MatchingPanel { attempt, instruction, on_finished }
        },
    };

    rsx! {
        div { class: "exercise-view container",
            Link { class: "back-link", to: Route::Unit { unit_id }, "← Unit {unit_id}" }
            {body}
        }
    }
}

/// Attach a recorded completion to the attempt on screen, if it is still the finished one.
fn store_completion(attempt: &mut AttemptSignal, completion: ExerciseCompletion) {
    let Ok(mut current) = attempt.try_write() else {
        return;
    };
    if let Ok(current) = &mut *current {
        if current.session.is_finished() && current.completion.is_none() {
            current.completion = Some(completion);
        }
    }
}

#[component]
fn StepBar(label: String, percent: u32) -> Element {
    rsx! {
        div { class: "exercise-progress-bar",
            div { class: "progress-bar-container",
                div { class: "progress-bar-fill", style: "width: {percent}%" }
            }
            span { class: "exercise-progress-text", "{label}" }
        }
    }
}

#[component]
fn AnswerFeedback(
    correct: bool,
    correct_message: &'static str,
    wrong_message: &'static str,
    answer: String,
) -> Element {
    if correct {
        return rsx! {
            div { class: "exercise-feedback correct", span { "{correct_message}" } }
        };
    }
    rsx! {
        div { class: "exercise-feedback incorrect",
            span { "❌ {wrong_message} " strong { "{answer}" } }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::views::test_harness::test_services;

    fn answer_everything(attempt: &mut ExerciseAttempt) {
        let session = attempt.session.as_multiple_choice_mut().unwrap();
        for _ in 0..session.total() {
            session.select(0);
            session.confirm();
            session.advance();
        }
    }

    #[tokio::test(flavor = "current_thread")]
    async fn results_show_the_recorded_award() {
        let services = test_services().await;
        let exercises = services.exercises();
        let id = ExerciseId::new("ex-1-1");
        let summary = ResultSummary::new(2, 2);

        for expected_xp in [20, 0] {
            let mut current: Result<ExerciseAttempt, ViewError> =
                Ok(exercises.start(UnitId::new(1), &id).unwrap());
            answer_everything(current.as_mut().unwrap());
            assert_eq!(
                Screen::of(&current),
                Screen::Results {
                    summary,
                    xp_awarded: None
                }
            );

            let attempt = current.as_mut().unwrap();
            attempt.completion = exercises.record_completion(&mut attempt.session).await;
            assert_eq!(
                Screen::of(&current),
                Screen::Results {
                    summary,
                    xp_awarded: Some(expected_xp)
                }
            );
        }
    }
}

use services::exercises::{FillBlankSession, MatchingSession, MultipleChoiceSession, QuestionPhase};

/// Letter label for the option at `index`: `A`, `B`, `C`...
#[must_use]
pub fn option_letter(index: usize) -> char {
    u8::try_from(index)
        .ok()
        .and_then(|offset| b'A'.checked_add(offset))
        .filter(u8::is_ascii_uppercase)
        .map_or('?', char::from)
}

/// Progress-bar width for a session showing `done` of `total` steps.
#[must_use]
pub fn step_percent(done: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    (done.min(total) * 100 / total) as u32
}

/// Results line for the XP the progress store awarded; `None` while the write is pending.
#[must_use]
pub fn xp_earned_label(xp_awarded: Option<u32>) -> String {
    match xp_awarded {
        Some(xp) => format!("+{xp} XP earned"),
        None => "Saving progress…".to_string(),
    }
}

fn next_label(is_last: bool) -> &'static str {
    if is_last { "See Results" } else { "Next →" }
}

fn confirmed(phase: QuestionPhase) -> Option<bool> {
    match phase {
        QuestionPhase::Confirmed { correct } => Some(correct),
        QuestionPhase::Answering | QuestionPhase::Finished => None,
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChoiceOptionVm {
    pub index: usize,
    pub letter: char,
    pub text: String,
    pub class: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MultipleChoiceVm {
    pub position_label: String,
    pub percent: u32,
    pub question: String,
    pub options: Vec<ChoiceOptionVm>,
    pub shaking: bool,
    /// `Some(correct)` once the current answer is confirmed.
    pub confirmed: Option<bool>,
    pub can_confirm: bool,
    pub correct_answer: String,
    pub next_label: &'static str,
}

impl From<&MultipleChoiceSession> for MultipleChoiceVm {
    fn from(session: &MultipleChoiceSession) -> Self {
        let question = session.current_question();
        let confirmed = confirmed(session.phase());
        let selected = session.selected();
        let options = question
            .options
            .iter()
            .enumerate()
            .map(|(index, text)| {
                let state = match confirmed {
                    Some(_) if index == question.answer => " correct",
                    Some(_) if Some(index) == selected => " incorrect",
                    None if Some(index) == selected => " selected",
                    _ => "",
                };
                ChoiceOptionVm {
                    index,
                    letter: option_letter(index),
                    text: text.clone(),
                    class: format!("exercise-option{state}"),
                }
            })
            .collect();

        Self {
            position_label: format!("{}/{}", session.current_index() + 1, session.total()),
            percent: step_percent(session.current_index() + 1, session.total()),
            question: question.question.clone(),
            options,
            shaking: session.is_shaking(),
            confirmed,
            can_confirm: confirmed.is_none() && selected.is_some(),
            correct_answer: question.correct_option().unwrap_or_default().to_string(),
            next_label: next_label(session.is_last_question()),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FillBlankVm {
    pub position_label: String,
    pub percent: u32,
    /// Text before the input.
    pub before: String,
    /// Text after the input, rendered verbatim.
    pub after: String,
    pub input: String,
    pub hint: String,
    pub confirmed: Option<bool>,
    pub can_confirm: bool,
    pub answer: String,
    pub input_class: &'static str,
    pub next_label: &'static str,
}

impl From<&FillBlankSession> for FillBlankVm {
    fn from(session: &FillBlankSession) -> Self {
        let question = session.current_question();
        let (before, after) = question
            .blank_segments()
            .unwrap_or((question.sentence.as_str(), ""));
        let confirmed = confirmed(session.phase());

        Self {
            position_label: format!("{}/{}", session.current_index() + 1, session.total()),
            percent: step_percent(session.current_index() + 1, session.total()),
            before: before.to_string(),
            after: after.to_string(),
            input: session.input().to_string(),
            hint: question.hint.clone().unwrap_or_default(),
            confirmed,
            can_confirm: session.can_confirm(),
            answer: question.answer.clone(),
            input_class: match confirmed {
                Some(true) => "fill-blank-input correct",
                Some(false) => "fill-blank-input incorrect",
                None => "fill-blank-input",
            },
            next_label: next_label(session.is_last_question()),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MatchItemVm {
    /// Pair index addressing this item.
    pub index: usize,
    pub text: String,
    pub class: String,
    pub matched: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MatchingVm {
    pub position_label: String,
    pub percent: u32,
    pub left: Vec<MatchItemVm>,
    pub right: Vec<MatchItemVm>,
}

impl From<&MatchingSession> for MatchingVm {
    fn from(session: &MatchingSession) -> Self {
        let wrong = session.wrong_attempt();
        let left = session
            .pairs()
            .iter()
            .enumerate()
            .map(|(index, pair)| {
                let matched = session.is_left_matched(index);
                let mut class = String::from("matching-item");
                if matched {
                    class.push_str(" matched");
                } else if session.selected_left() == Some(index) {
                    class.push_str(" selected");
                }
                if wrong.is_some_and(|attempt| attempt.left == index) {
                    class.push_str(" wrong");
                }
                MatchItemVm {
                    index,
                    text: pair.left.clone(),
                    class,
                    matched,
                }
            })
            .collect();
        let right = session
            .right_items()
            .map(|(index, text)| {
                let matched = session.is_right_matched(index);
                let mut class = String::from("matching-item right");
                if matched {
                    class.push_str(" matched");
                }
                if wrong.is_some_and(|attempt| attempt.right == index) {
                    class.push_str(" wrong");
                }
                MatchItemVm {
                    index,
                    text: text.to_string(),
                    class,
                    matched,
                }
            })
            .collect();

        Self {
            position_label: format!("{}/{}", session.matched_count(), session.total()),
            percent: step_percent(session.matched_count(), session.total()),
            left,
            right,
        }
    }
}

use belajar_core::model::content::BlankQuestion;
use belajar_core::model::{ExerciseId, ScoreRecord};

use super::{Advance, Confirmation, QuestionPhase, ReportLatch, ScoredSession, count_u32};
use crate::error::ExerciseError;

/// Whether typed text matches the expected answer, ignoring case and surrounding whitespace.
#[must_use]
pub fn answers_match(input: &str, expected: &str) -> bool {
    input.trim().to_lowercase() == expected.trim().to_lowercase()
}

/// Steps through fill-in-the-blank questions: type, confirm, advance.
#[derive(Debug)]
pub struct FillBlankSession {
    exercise_id: ExerciseId,
    questions: Vec<BlankQuestion>,
    current: usize,
    input: String,
    phase: QuestionPhase,
    score: u32,
    latch: ReportLatch,
}

impl FillBlankSession {
    /// # Errors
    ///
    /// Returns `ExerciseError::Empty` if there are no questions.
    pub fn new(exercise_id: ExerciseId, questions: Vec<BlankQuestion>) -> Result<Self, ExerciseError> {
        if questions.is_empty() {
            return Err(ExerciseError::Empty(exercise_id));
        }
        Ok(Self {
            exercise_id,
            questions,
            current: 0,
            input: String::new(),
            phase: QuestionPhase::Answering,
            score: 0,
            latch: ReportLatch::default(),
        })
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.questions.len()
    }

    #[must_use]
    pub fn current_question(&self) -> &BlankQuestion {
        &self.questions[self.current]
    }

    #[must_use]
    pub fn is_last_question(&self) -> bool {
        self.current + 1 >= self.questions.len()
    }

    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }

    #[must_use]
    pub fn phase(&self) -> QuestionPhase {
        self.phase
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.phase == QuestionPhase::Finished
    }

    #[must_use]
    pub fn final_score(&self) -> Option<ScoreRecord> {
        self.latch.final_score()
    }

    /// True when the current input is non-blank and may be confirmed.
    #[must_use]
    pub fn can_confirm(&self) -> bool {
        self.phase == QuestionPhase::Answering && !self.input.trim().is_empty()
    }

    /// Replace the typed answer. Ignored once the answer is confirmed.
    pub fn set_input(&mut self, text: impl Into<String>) -> bool {
        if self.phase != QuestionPhase::Answering {
            return false;
        }
        self.input = text.into();
        true
    }

    /// Check the typed answer. Ignored when the input is blank.
    pub fn confirm(&mut self) -> Option<Confirmation> {
        if !self.can_confirm() {
            return None;
        }
        let correct = answers_match(&self.input, &self.current_question().answer);
        if correct {
            self.score += 1;
        }
        self.phase = QuestionPhase::Confirmed { correct };
        Some(Confirmation {
            correct,
            feedback: None,
        })
    }

    /// Move to the next question, or finish after the last one.
    pub fn advance(&mut self) -> Advance {
        if !matches!(self.phase, QuestionPhase::Confirmed { .. }) {
            return Advance::Ignored;
        }

        if self.is_last_question() {
            let record = ScoreRecord::new(self.score, count_u32(self.questions.len()));
            self.phase = QuestionPhase::Finished;
            self.latch.finish(record);
            return Advance::Finished(record);
        }

        self.current += 1;
        self.input.clear();
        self.phase = QuestionPhase::Answering;
        Advance::NextQuestion(self.current)
    }

    /// Enter key behaviour: confirm while answering, advance once confirmed.
    pub fn submit(&mut self) -> Option<Advance> {
        match self.phase {
            QuestionPhase::Answering => {
                self.confirm();
                None
            }
            QuestionPhase::Confirmed { .. } => Some(self.advance()),
            QuestionPhase::Finished => None,
        }
    }
}

impl ScoredSession for FillBlankSession {
    fn exercise_id(&self) -> &ExerciseId {
        &self.exercise_id
    }

    fn take_report(&mut self) -> Option<ScoreRecord> {
        self.latch.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question(answer: &str) -> BlankQuestion {
        BlankQuestion {
            sentence: "_____ kabar?".to_string(),
            answer: answer.to_string(),
            hint: Some("what".to_string()),
        }
    }

    fn session(answers: &[&str]) -> FillBlankSession {
        FillBlankSession::new(
            ExerciseId::new("ex-1-2"),
            answers.iter().map(|answer| question(answer)).collect(),
        )
        .unwrap()
    }

    #[test]
    fn answer_check_trims_and_folds_case() {
        assert!(answers_match("  Apa  ", "apa"));
        assert!(answers_match("APA", "Apa"));
        assert!(!answers_match("ap a", "apa"));
    }

    #[test]
    fn blank_input_cannot_be_confirmed() {
        let mut session = session(&["apa"]);
        session.set_input("   ");
        assert!(!session.can_confirm());
        assert_eq!(session.confirm(), None);
        assert_eq!(session.phase(), QuestionPhase::Answering);
    }

    #[test]
    fn correct_answer_scores() {
        let mut session = session(&["apa"]);
        session.set_input("  Apa  ");
        assert!(session.confirm().unwrap().correct);
        assert_eq!(session.score(), 1);
    }

    #[test]
    fn input_locked_after_confirm() {
        let mut session = session(&["apa", "siapa"]);
        session.set_input("apa");
        session.confirm();
        assert!(!session.set_input("other"));
        assert_eq!(session.input(), "apa");
    }

    #[test]
    fn advancing_clears_input() {
        let mut session = session(&["apa", "siapa"]);
        session.set_input("wrong");
        session.confirm();
        assert_eq!(session.advance(), Advance::NextQuestion(1));
        assert_eq!(session.input(), "");
        assert_eq!(session.phase(), QuestionPhase::Answering);
    }

    #[test]
    fn submit_confirms_then_advances() {
        let mut session = session(&["apa"]);
        session.set_input("apa");
        assert_eq!(session.submit(), None);
        assert_eq!(session.phase(), QuestionPhase::Confirmed { correct: true });
        assert_eq!(
            session.submit(),
            Some(Advance::Finished(ScoreRecord::new(1, 1)))
        );
        assert_eq!(session.take_report(), Some(ScoreRecord::new(1, 1)));
        assert_eq!(session.take_report(), None);
    }
}

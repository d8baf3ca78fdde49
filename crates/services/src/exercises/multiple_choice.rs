use belajar_core::model::content::ChoiceQuestion;
use belajar_core::model::{ExerciseId, ScoreRecord};

use super::feedback::{FeedbackToken, FeedbackTokens};
use super::{Advance, Confirmation, QuestionPhase, ReportLatch, ScoredSession, count_u32};
use crate::error::ExerciseError;

/// Steps through multiple-choice questions: select, confirm, advance.
#[derive(Debug)]
pub struct MultipleChoiceSession {
    exercise_id: ExerciseId,
    questions: Vec<ChoiceQuestion>,
    current: usize,
    selected: Option<usize>,
    phase: QuestionPhase,
    score: u32,
    shake: Option<FeedbackToken>,
    tokens: FeedbackTokens,
    latch: ReportLatch,
}

impl MultipleChoiceSession {
    /// # Errors
    ///
    /// Returns `ExerciseError::Empty` if there are no questions.
    pub fn new(
        exercise_id: ExerciseId,
        questions: Vec<ChoiceQuestion>,
    ) -> Result<Self, ExerciseError> {
        if questions.is_empty() {
            return Err(ExerciseError::Empty(exercise_id));
        }
        Ok(Self {
            exercise_id,
            questions,
            current: 0,
            selected: None,
            phase: QuestionPhase::Answering,
            score: 0,
            shake: None,
            tokens: FeedbackTokens::default(),
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
    pub fn current_question(&self) -> &ChoiceQuestion {
        &self.questions[self.current]
    }

    #[must_use]
    pub fn is_last_question(&self) -> bool {
        self.current + 1 >= self.questions.len()
    }

    #[must_use]
    pub fn selected(&self) -> Option<usize> {
        self.selected
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
    pub fn is_shaking(&self) -> bool {
        self.shake.is_some()
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.phase == QuestionPhase::Finished
    }

    #[must_use]
    pub fn final_score(&self) -> Option<ScoreRecord> {
        self.latch.final_score()
    }

    /// Choose an option for the current question. Replaces any earlier choice.
    ///
    /// Ignored once the answer is confirmed or if `index` is not an option.
    pub fn select(&mut self, index: usize) -> bool {
        if self.phase != QuestionPhase::Answering
            || index >= self.current_question().options.len()
        {
            return false;
        }
        self.selected = Some(index);
        true
    }

    /// Lock in the selected option. Ignored when nothing is selected.
    pub fn confirm(&mut self) -> Option<Confirmation> {
        if self.phase != QuestionPhase::Answering {
            return None;
        }
        let selected = self.selected?;
        let correct = selected == self.current_question().answer;

        let feedback = if correct {
            self.score += 1;
            None
        } else {
            let token = self.tokens.issue();
            self.shake = Some(token);
            Some(token)
        };
        self.phase = QuestionPhase::Confirmed { correct };
        Some(Confirmation { correct, feedback })
    }

    /// Stop the wrong-answer shake raised with `token`.
    pub fn clear_shake(&mut self, token: FeedbackToken) -> bool {
        if self.shake != Some(token) {
            return false;
        }
        self.shake = None;
        true
    }

    /// Move to the next question, or finish after the last one.
    pub fn advance(&mut self) -> Advance {
        if !matches!(self.phase, QuestionPhase::Confirmed { .. }) {
            return Advance::Ignored;
        }
        self.shake = None;

        if self.is_last_question() {
            let record = ScoreRecord::new(self.score, count_u32(self.questions.len()));
            self.phase = QuestionPhase::Finished;
            self.latch.finish(record);
            return Advance::Finished(record);
        }

        self.current += 1;
        self.selected = None;
        self.phase = QuestionPhase::Answering;
        Advance::NextQuestion(self.current)
    }
}

impl ScoredSession for MultipleChoiceSession {
    fn exercise_id(&self) -> &ExerciseId {
        &self.exercise_id
    }

    fn take_report(&mut self) -> Option<ScoreRecord> {
        self.latch.take()
    }
}

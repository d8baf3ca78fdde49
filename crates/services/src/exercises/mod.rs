//! Per-attempt exercise sessions.
//!
//! Each session is a small state machine driven by user input. A session
//! produces its final score once; `ExerciseLoopService` forwards it to the
//! progress store.

mod feedback;
mod fill_blank;
mod matching;
mod multiple_choice;
mod session;
mod workflow;

use belajar_core::model::{ExerciseId, ScoreRecord};

pub use feedback::{FeedbackToken, SHAKE_CLEAR_DELAY, WRONG_ATTEMPT_CLEAR_DELAY};
pub use fill_blank::{FillBlankSession, answers_match};
pub use matching::{MatchOutcome, MatchedPair, MatchingSession, WrongAttempt};
pub use multiple_choice::MultipleChoiceSession;
pub use session::ExerciseSession;
pub use workflow::{ExerciseAttempt, ExerciseLoopService, PendingCompletion};

/// A session that ends with a score to report.
pub trait ScoredSession {
    fn exercise_id(&self) -> &ExerciseId;

    /// The final score, handed out exactly once after the session finishes.
    fn take_report(&mut self) -> Option<ScoreRecord>;
}

/// Where a question-based session stands on its current question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuestionPhase {
    Answering,
    Confirmed { correct: bool },
    Finished,
}

/// Result of confirming an answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Confirmation {
    pub correct: bool,
    /// Set when the view should show transient wrong-answer feedback.
    pub feedback: Option<FeedbackToken>,
}

/// Result of moving past a confirmed question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    NextQuestion(usize),
    Finished(ScoreRecord),
    /// The current question has not been confirmed yet.
    Ignored,
}

/// Holds the final score until it has been reported.
#[derive(Debug, Default)]
pub(crate) struct ReportLatch {
    final_score: Option<ScoreRecord>,
    reported: bool,
}

impl ReportLatch {
    pub(crate) fn finish(&mut self, score: ScoreRecord) {
        if self.final_score.is_none() {
            self.final_score = Some(score);
        }
    }

    pub(crate) fn final_score(&self) -> Option<ScoreRecord> {
        self.final_score
    }

    pub(crate) fn take(&mut self) -> Option<ScoreRecord> {
        if self.reported {
            return None;
        }
        let score = self.final_score?;
        self.reported = true;
        Some(score)
    }
}

pub(crate) fn count_u32(len: usize) -> u32 {
    u32::try_from(len).unwrap_or(u32::MAX)
}

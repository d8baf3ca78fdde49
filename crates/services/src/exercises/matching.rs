use rand::Rng;
use rand::seq::SliceRandom;

use belajar_core::model::content::MatchPair;
use belajar_core::model::{ExerciseId, ScoreRecord};

use super::feedback::{FeedbackToken, FeedbackTokens};
use super::{ReportLatch, ScoredSession, count_u32};
use crate::error::ExerciseError;

/// A confirmed match, by pair index on each side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchedPair {
    pub left: usize,
    pub right: usize,
}

/// A rejected attempt, highlighted until its token is cleared.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WrongAttempt {
    pub left: usize,
    pub right: usize,
    pub token: FeedbackToken,
}

/// Result of picking a right-hand item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchOutcome {
    Matched,
    /// The last pair was matched; the session is finished.
    Completed(ScoreRecord),
    Wrong(FeedbackToken),
    Ignored,
}

/// Pair left-hand items with right-hand items shown in a shuffled order.
///
/// Items on both sides are addressed by their index in the exercise's pair list.
#[derive(Debug)]
pub struct MatchingSession {
    exercise_id: ExerciseId,
    pairs: Vec<MatchPair>,
    right_order: Vec<usize>,
    matched: Vec<MatchedPair>,
    selected_left: Option<usize>,
    wrong: Option<WrongAttempt>,
    tokens: FeedbackTokens,
    latch: ReportLatch,
}

impl MatchingSession {
    /// Start a session, shuffling the right-hand column once with `rng`.
    ///
    /// # Errors
    ///
    /// Returns `ExerciseError::Empty` if there are no pairs.
    pub fn new<R: Rng + ?Sized>(
        exercise_id: ExerciseId,
        pairs: Vec<MatchPair>,
        rng: &mut R,
    ) -> Result<Self, ExerciseError> {
        if pairs.is_empty() {
            return Err(ExerciseError::Empty(exercise_id));
        }
        let mut right_order: Vec<usize> = (0..pairs.len()).collect();
        right_order.shuffle(rng);

        Ok(Self {
            exercise_id,
            pairs,
            right_order,
            matched: Vec::new(),
            selected_left: None,
            wrong: None,
            tokens: FeedbackTokens::default(),
            latch: ReportLatch::default(),
        })
    }

    #[must_use]
    pub fn pairs(&self) -> &[MatchPair] {
        &self.pairs
    }

    /// Right-hand items in display order, with the pair index that addresses each.
    pub fn right_items(&self) -> impl Iterator<Item = (usize, &str)> + '_ {
        self.right_order
            .iter()
            .map(|&index| (index, self.pairs[index].right.as_str()))
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.pairs.len()
    }

    #[must_use]
    pub fn matched(&self) -> &[MatchedPair] {
        &self.matched
    }

    #[must_use]
    pub fn matched_count(&self) -> usize {
        self.matched.len()
    }

    #[must_use]
    pub fn selected_left(&self) -> Option<usize> {
        self.selected_left
    }

    #[must_use]
    pub fn wrong_attempt(&self) -> Option<WrongAttempt> {
        self.wrong
    }

    #[must_use]
    pub fn is_left_matched(&self, left: usize) -> bool {
        self.matched.iter().any(|pair| pair.left == left)
    }

    #[must_use]
    pub fn is_right_matched(&self, right: usize) -> bool {
        self.matched.iter().any(|pair| pair.right == right)
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.latch.final_score().is_some()
    }

    #[must_use]
    pub fn final_score(&self) -> Option<ScoreRecord> {
        self.latch.final_score()
    }

    /// Make `left` the pending selection and drop any wrong-attempt highlight.
    ///
    /// Ignored for matched or unknown items.
    pub fn select_left(&mut self, left: usize) -> bool {
        if self.is_finished() || left >= self.pairs.len() || self.is_left_matched(left) {
            return false;
        }
        self.selected_left = Some(left);
        self.wrong = None;
        true
    }

    /// Try to pair the pending left selection with `right`.
    pub fn select_right(&mut self, right: usize) -> MatchOutcome {
        let Some(left) = self.selected_left else {
            return MatchOutcome::Ignored;
        };
        if right >= self.pairs.len() || self.is_right_matched(right) {
            return MatchOutcome::Ignored;
        }

        if self.pairs[left].right != self.pairs[right].right {
            let token = self.tokens.issue();
            self.wrong = Some(WrongAttempt { left, right, token });
            return MatchOutcome::Wrong(token);
        }

        self.matched.push(MatchedPair { left, right });
        self.selected_left = None;
        self.wrong = None;

        if self.matched.len() == self.pairs.len() {
            let total = count_u32(self.pairs.len());
            let record = ScoreRecord::new(total, total);
            self.latch.finish(record);
            return MatchOutcome::Completed(record);
        }
        MatchOutcome::Matched
    }

    /// Drop the wrong-attempt highlight and the pending selection it belongs to.
    ///
    /// Ignored if `token` is not the current wrong attempt.
    pub fn clear_wrong_attempt(&mut self, token: FeedbackToken) -> bool {
        match self.wrong {
            Some(wrong) if wrong.token == token => {
                self.wrong = None;
                self.selected_left = None;
                true
            }
            _ => false,
        }
    }
}

impl ScoredSession for MatchingSession {
    fn exercise_id(&self) -> &ExerciseId {
        &self.exercise_id
    }

    fn take_report(&mut self) -> Option<ScoreRecord> {
        self.latch.take()
    }
}

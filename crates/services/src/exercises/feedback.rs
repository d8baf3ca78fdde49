//! Transient wrong-answer feedback.
//!
//! Sessions hand out a token whenever they raise a feedback marker. The caller
//! schedules a clear after the matching delay; clearing with a token that is no
//! longer current does nothing, so a late timer never undoes newer input.

use std::time::Duration;

/// How long the multiple-choice options shake after a wrong confirmation.
pub const SHAKE_CLEAR_DELAY: Duration = Duration::from_millis(500);

/// How long a wrong matching attempt stays highlighted.
pub const WRONG_ATTEMPT_CLEAR_DELAY: Duration = Duration::from_millis(800);

/// Identifies one raised feedback marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FeedbackToken(u64);

#[derive(Debug, Default)]
pub(crate) struct FeedbackTokens {
    issued: u64,
}

impl FeedbackTokens {
    pub(crate) fn issue(&mut self) -> FeedbackToken {
        self.issued += 1;
        FeedbackToken(self.issued)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokens_are_unique() {
        let mut tokens = FeedbackTokens::default();
        let first = tokens.issue();
        let second = tokens.issue();
        assert_ne!(first, second);
    }
}

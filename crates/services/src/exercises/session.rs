use rand::Rng;

use belajar_core::model::content::{Exercise, ExerciseKind};
use belajar_core::model::{ExerciseId, ScoreRecord};

use super::{FillBlankSession, MatchingSession, MultipleChoiceSession, ScoredSession};
use crate::error::ExerciseError;

/// A running attempt at one exercise, by kind.
#[derive(Debug)]
pub enum ExerciseSession {
    MultipleChoice(MultipleChoiceSession),
    FillBlank(FillBlankSession),
    Matching(MatchingSession),
}

impl ExerciseSession {
    /// Start a fresh session for `exercise`.
    ///
    /// # Errors
    ///
    /// Returns `ExerciseError::UnknownType` for kinds this build cannot run and
    /// `ExerciseError::Empty` for exercises without questions or pairs.
    pub fn start<R: Rng + ?Sized>(exercise: &Exercise, rng: &mut R) -> Result<Self, ExerciseError> {
        let id = exercise.id.clone();
        match &exercise.kind {
            ExerciseKind::MultipleChoice(questions) => Ok(Self::MultipleChoice(
                MultipleChoiceSession::new(id, questions.clone())?,
            )),
            ExerciseKind::FillBlank(questions) => Ok(Self::FillBlank(FillBlankSession::new(
                id,
                questions.clone(),
            )?)),
            ExerciseKind::Matching(pairs) => Ok(Self::Matching(MatchingSession::new(
                id,
                pairs.clone(),
                rng,
            )?)),
            ExerciseKind::Unknown(kind) => Err(ExerciseError::UnknownType { kind: kind.clone() }),
        }
    }

    #[must_use]
    pub fn final_score(&self) -> Option<ScoreRecord> {
        match self {
            Self::MultipleChoice(session) => session.final_score(),
            Self::FillBlank(session) => session.final_score(),
            Self::Matching(session) => session.final_score(),
        }
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.final_score().is_some()
    }

    #[must_use]
    pub fn as_multiple_choice_mut(&mut self) -> Option<&mut MultipleChoiceSession> {
        match self {
            Self::MultipleChoice(session) => Some(session),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_fill_blank_mut(&mut self) -> Option<&mut FillBlankSession> {
        match self {
            Self::FillBlank(session) => Some(session),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_matching_mut(&mut self) -> Option<&mut MatchingSession> {
        match self {
            Self::Matching(session) => Some(session),
            _ => None,
        }
    }
}

impl ScoredSession for ExerciseSession {
    fn exercise_id(&self) -> &ExerciseId {
        match self {
            Self::MultipleChoice(session) => session.exercise_id(),
            Self::FillBlank(session) => session.exercise_id(),
            Self::Matching(session) => session.exercise_id(),
        }
    }

    fn take_report(&mut self) -> Option<ScoreRecord> {
        match self {
            Self::MultipleChoice(session) => session.take_report(),
            Self::FillBlank(session) => session.take_report(),
            Self::Matching(session) => session.take_report(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use belajar_core::model::content::MatchPair;

    fn exercise(kind: ExerciseKind) -> Exercise {
        Exercise {
            id: ExerciseId::new("ex-1-1"),
            instruction: "Try".to_string(),
            kind,
        }
    }

    #[test]
    fn dispatches_on_kind() {
        let pairs = vec![MatchPair {
            left: "satu".to_string(),
            right: "one".to_string(),
        }];
        let session = ExerciseSession::start(&exercise(ExerciseKind::Matching(pairs)), &mut rand::rng())
            .unwrap();
        assert!(matches!(session, ExerciseSession::Matching(_)));
        assert!(!session.is_finished());
    }

    #[test]
    fn typed_access_matches_variant() {
        let pairs = vec![MatchPair {
            left: "satu".to_string(),
            right: "one".to_string(),
        }];
        let mut session =
            ExerciseSession::start(&exercise(ExerciseKind::Matching(pairs)), &mut rand::rng())
                .unwrap();
        assert!(session.as_multiple_choice_mut().is_none());
        assert!(session.as_fill_blank_mut().is_none());

        let matching = session.as_matching_mut().unwrap();
        matching.select_left(0);
        matching.select_right(0);
        assert_eq!(session.final_score(), Some(ScoreRecord::new(1, 1)));
    }

    #[test]
    fn unknown_kind_is_an_error_not_a_panic() {
        let result = ExerciseSession::start(
            &exercise(ExerciseKind::Unknown("listening".to_string())),
            &mut rand::rng(),
        );
        assert_eq!(
            result.unwrap_err(),
            ExerciseError::UnknownType {
                kind: "listening".to_string()
            }
        );
    }

    #[test]
    fn empty_payload_is_rejected() {
        let result = ExerciseSession::start(
            &exercise(ExerciseKind::FillBlank(Vec::new())),
            &mut rand::rng(),
        );
        assert!(matches!(result, Err(ExerciseError::Empty(_))));
    }
}

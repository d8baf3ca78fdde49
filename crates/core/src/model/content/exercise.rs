use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::model::ExerciseId;

/// Marker for the gap in a fill-in-the-blank sentence.
pub const BLANK_MARKER: &str = "_____";

#[derive(Debug, Error)]
#[error("exercise {id} has a malformed {kind} payload: {source}")]
pub struct ExerciseDecodeError {
    id: String,
    kind: String,
    #[source]
    source: serde_json::Error,
}

/// One multiple-choice question; `answer` indexes into `options`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChoiceQuestion {
    pub question: String,
    pub options: Vec<String>,
    pub answer: usize,
}

impl ChoiceQuestion {
    #[must_use]
    pub fn correct_option(&self) -> Option<&str> {
        self.options.get(self.answer).map(String::as_str)
    }
}

/// One fill-in-the-blank question; `sentence` contains [`BLANK_MARKER`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlankQuestion {
    pub sentence: String,
    pub answer: String,
    #[serde(default)]
    pub hint: Option<String>,
}

impl BlankQuestion {
    /// Text before and after the first blank. Later markers stay in `after` verbatim.
    ///
    /// Returns `None` if the sentence has no blank.
    #[must_use]
    pub fn blank_segments(&self) -> Option<(&str, &str)> {
        self.sentence.split_once(BLANK_MARKER)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchPair {
    pub left: String,
    pub right: String,
}

/// Type-specific payload of an exercise.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExerciseKind {
    MultipleChoice(Vec<ChoiceQuestion>),
    FillBlank(Vec<BlankQuestion>),
    Matching(Vec<MatchPair>),
    /// A `type` tag this build does not know how to run.
    Unknown(String),
}

impl ExerciseKind {
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::MultipleChoice(_) => "Multiple Choice",
            Self::FillBlank(_) => "Fill in the Blank",
            Self::Matching(_) => "Matching",
            Self::Unknown(kind) => kind,
        }
    }

    /// Number of scored items (questions or pairs).
    #[must_use]
    pub fn item_count(&self) -> usize {
        match self {
            Self::MultipleChoice(questions) => questions.len(),
            Self::FillBlank(questions) => questions.len(),
            Self::Matching(pairs) => pairs.len(),
            Self::Unknown(_) => 0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "RawExercise")]
pub struct Exercise {
    pub id: ExerciseId,
    pub instruction: String,
    pub kind: ExerciseKind,
}

#[derive(Deserialize)]
struct RawExercise {
    id: ExerciseId,
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    instruction: String,
    #[serde(default)]
    questions: Value,
    #[serde(default)]
    pairs: Value,
}

impl TryFrom<RawExercise> for Exercise {
    type Error = ExerciseDecodeError;

    fn try_from(raw: RawExercise) -> Result<Self, Self::Error> {
        let decode_err = |source| ExerciseDecodeError {
            id: raw.id.to_string(),
            kind: raw.kind.clone(),
            source,
        };
        let kind = match raw.kind.as_str() {
            "multiple_choice" => {
                ExerciseKind::MultipleChoice(payload(raw.questions).map_err(decode_err)?)
            }
            "fill_blank" => {
                ExerciseKind::FillBlank(payload(raw.questions).map_err(decode_err)?)
            }
            "matching" => ExerciseKind::Matching(payload(raw.pairs).map_err(decode_err)?),
            other => ExerciseKind::Unknown(other.to_string()),
        };

        Ok(Self {
            id: raw.id,
            instruction: raw.instruction,
            kind,
        })
    }
}

fn payload<T: serde::de::DeserializeOwned>(value: Value) -> Result<Vec<T>, serde_json::Error> {
    if value.is_null() {
        return Ok(Vec::new());
    }
    serde_json::from_value(value)
}

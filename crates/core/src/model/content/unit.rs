use serde::{Deserialize, Serialize};

use crate::model::content::{Exercise, Section};
use crate::model::{ExerciseId, LessonId, UnitId};

/// Entry of the unit index shown on the map.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnitSummary {
    pub id: UnitId,
    pub title: String,
    #[serde(default)]
    pub subtitle: String,
    #[serde(default)]
    pub icon: Option<String>,
}

/// A word and its meaning.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VocabItem {
    pub word: String,
    pub meaning: String,
}

/// Full content of one unit.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Unit {
    pub id: UnitId,
    pub title: String,
    #[serde(default)]
    pub subtitle: String,
    #[serde(default)]
    pub sections: Vec<Section>,
    #[serde(default)]
    pub exercises: Vec<Exercise>,
    #[serde(default)]
    pub end_of_unit_vocabulary: Vec<VocabItem>,
}

impl Unit {
    #[must_use]
    pub fn section(&self, id: &LessonId) -> Option<&Section> {
        self.sections.iter().find(|section| &section.id == id)
    }

    #[must_use]
    pub fn exercise(&self, id: &ExerciseId) -> Option<&Exercise> {
        self.exercises.iter().find(|exercise| &exercise.id == id)
    }

    /// The first `limit` end-of-unit words and how many were left out.
    #[must_use]
    pub fn vocabulary_preview(&self, limit: usize) -> (&[VocabItem], usize) {
        let shown = self.end_of_unit_vocabulary.len().min(limit);
        (
            &self.end_of_unit_vocabulary[..shown],
            self.end_of_unit_vocabulary.len() - shown,
        )
    }
}

use belajar_core::model::content::{Unit, VocabItem};
use belajar_core::model::{ExerciseId, LessonId, Progress};

/// End-of-unit words shown on the overview before collapsing the rest into a count.
pub const VOCAB_PREVIEW_LIMIT: usize = 20;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LessonRowVm {
    pub id: LessonId,
    /// `✓` once completed, otherwise the section id.
    pub badge: String,
    pub title: String,
    pub title_en: String,
    pub has_audio: bool,
    pub completed: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExerciseRowVm {
    pub id: ExerciseId,
    pub instruction: String,
    pub type_label: String,
    pub completed: bool,
    pub score_label: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VocabPreviewVm {
    pub items: Vec<VocabItem>,
    pub more_label: Option<String>,
}

#[must_use]
pub fn map_lesson_rows(unit: &Unit, progress: &Progress) -> Vec<LessonRowVm> {
    unit.sections
        .iter()
        .map(|section| {
            let completed = progress.is_lesson_completed(&section.id);
            LessonRowVm {
                id: section.id.clone(),
                badge: if completed {
                    "✓".to_string()
                } else {
                    section.id.to_string()
                },
                title: section.title.clone(),
                title_en: section.title_en.clone(),
                has_audio: section.audio.is_some(),
                completed,
            }
        })
        .collect()
}

#[must_use]
pub fn map_exercise_rows(unit: &Unit, progress: &Progress) -> Vec<ExerciseRowVm> {
    unit.exercises
        .iter()
        .map(|exercise| ExerciseRowVm {
            id: exercise.id.clone(),
            instruction: exercise.instruction.clone(),
            type_label: exercise.kind.label().to_string(),
            completed: progress.is_exercise_completed(&exercise.id),
            score_label: progress
                .exercise_score(&exercise.id)
                .map(|record| format!("Score: {}/{}", record.score, record.total)),
        })
        .collect()
}

#[must_use]
pub fn map_vocab_preview(unit: &Unit) -> VocabPreviewVm {
    let (items, hidden) = unit.vocabulary_preview(VOCAB_PREVIEW_LIMIT);
    VocabPreviewVm {
        items: items.to_vec(),
        more_label: (hidden > 0).then(|| format!("+{hidden} more words")),
    }
}

use std::collections::{BTreeMap, HashSet};
use std::hash::Hash;

use chrono::NaiveDate;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::Error;
use crate::model::{ExerciseId, LessonId, UnitId, WordId};
use crate::unlock::{self, UnitProgress};

/// XP awarded for the first completion of a lesson.
pub const LESSON_XP: u32 = 10;
/// XP awarded for mastering a vocabulary item.
pub const VOCAB_XP: u32 = 2;
/// XP awarded for a perfect first completion of an exercise.
pub const EXERCISE_MAX_XP: u32 = 20;

/// XP earned for an exercise result, proportional to `score / total`.
///
/// Returns 0 when `total` is zero.
#[must_use]
pub fn exercise_xp(score: u32, total: u32) -> u32 {
    if total == 0 {
        return 0;
    }
    let ratio = f64::from(score) / f64::from(total);
    // Bounded by EXERCISE_MAX_XP * score / total, which fits in u32 for any sane score.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let xp = (ratio * f64::from(EXERCISE_MAX_XP)).round() as u32;
    xp
}

/// Next streak value for an activity on `today`, given the previous activity day.
///
/// Consecutive days extend the streak, the same day keeps it, any gap restarts at 1.
#[must_use]
pub fn next_streak(streak: u32, last_activity: Option<NaiveDate>, today: NaiveDate) -> u32 {
    match last_activity {
        Some(last) if last == today => streak,
        Some(last) if today.pred_opt() == Some(last) => streak.saturating_add(1),
        _ => 1,
    }
}

/// Last recorded result of an exercise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreRecord {
    pub score: u32,
    pub total: u32,
}

impl ScoreRecord {
    #[must_use]
    pub fn new(score: u32, total: u32) -> Self {
        Self { score, total }
    }
}

/// Outcome of recording an exercise result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExerciseCompletion {
    pub record: ScoreRecord,
    pub first_completion: bool,
    pub xp_awarded: u32,
}

/// The learner's persisted progress.
///
/// Collections behave as insertion-ordered sets; mutations never introduce duplicates.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Progress {
    xp: u32,
    streak: u32,
    last_activity_date: Option<NaiveDate>,
    completed_lessons: Vec<LessonId>,
    completed_exercises: Vec<ExerciseId>,
    vocab_mastered: Vec<WordId>,
    unit_scores: BTreeMap<ExerciseId, ScoreRecord>,
}

impl Progress {
    /// Rebuild progress from a stored JSON blob.
    ///
    /// Each known top-level key present in the blob replaces the default value
    /// for that key; missing, unknown or mistyped keys leave the default in place.
    ///
    /// # Errors
    ///
    /// Returns `Error::ProgressJson` if the blob is not JSON and
    /// `Error::ProgressShape` if it is not a JSON object.
    pub fn from_stored_json(raw: &str) -> Result<Self, Error> {
        let value: Value = serde_json::from_str(raw)?;
        let Value::Object(stored) = value else {
            return Err(Error::ProgressShape);
        };

        let mut progress = Self::default();
        overlay(&stored, "xp", &mut progress.xp);
        overlay(&stored, "streak", &mut progress.streak);
        overlay(&stored, "lastActivityDate", &mut progress.last_activity_date);
        overlay(&stored, "completedLessons", &mut progress.completed_lessons);
        overlay(&stored, "completedExercises", &mut progress.completed_exercises);
        overlay(&stored, "vocabMastered", &mut progress.vocab_mastered);
        overlay(&stored, "unitScores", &mut progress.unit_scores);

        dedup_in_order(&mut progress.completed_lessons);
        dedup_in_order(&mut progress.completed_exercises);
        dedup_in_order(&mut progress.vocab_mastered);
        Ok(progress)
    }

    /// Serialize to the stored JSON blob.
    ///
    /// # Errors
    ///
    /// Returns `Error::ProgressJson` if serialization fails.
    pub fn to_stored_json(&self) -> Result<String, Error> {
        Ok(serde_json::to_string(self)?)
    }

    #[must_use]
    pub fn xp(&self) -> u32 {
        self.xp
    }

    #[must_use]
    pub fn streak(&self) -> u32 {
        self.streak
    }

    #[must_use]
    pub fn last_activity_date(&self) -> Option<NaiveDate> {
        self.last_activity_date
    }

    #[must_use]
    pub fn completed_lessons(&self) -> &[LessonId] {
        &self.completed_lessons
    }

    #[must_use]
    pub fn completed_exercises(&self) -> &[ExerciseId] {
        &self.completed_exercises
    }

    #[must_use]
    pub fn vocab_mastered(&self) -> &[WordId] {
        &self.vocab_mastered
    }

    #[must_use]
    pub fn unit_scores(&self) -> &BTreeMap<ExerciseId, ScoreRecord> {
        &self.unit_scores
    }

    #[must_use]
    pub fn exercise_score(&self, id: &ExerciseId) -> Option<ScoreRecord> {
        self.unit_scores.get(id).copied()
    }

    #[must_use]
    pub fn is_lesson_completed(&self, id: &LessonId) -> bool {
        self.completed_lessons.contains(id)
    }

    #[must_use]
    pub fn is_exercise_completed(&self, id: &ExerciseId) -> bool {
        self.completed_exercises.contains(id)
    }

    #[must_use]
    pub fn is_vocab_mastered(&self, id: &WordId) -> bool {
        self.vocab_mastered.contains(id)
    }

    /// Mark a lesson completed on `today`.
    ///
    /// Returns `false` (and changes nothing) if the lesson was already completed.
    pub fn complete_lesson(&mut self, id: LessonId, today: NaiveDate) -> bool {
        if self.is_lesson_completed(&id) {
            return false;
        }
        self.record_activity(today);
        self.completed_lessons.push(id);
        self.xp = self.xp.saturating_add(LESSON_XP);
        true
    }

    /// Record an exercise result on `today`.
    ///
    /// The score record is always overwritten and the streak always updated, but
    /// XP is only awarded the first time an exercise is completed. Returns `None`
    /// without touching anything when `total` is zero.
    pub fn complete_exercise(
        &mut self,
        id: ExerciseId,
        score: u32,
        total: u32,
        today: NaiveDate,
    ) -> Option<ExerciseCompletion> {
        if total == 0 {
            return None;
        }

        self.record_activity(today);
        let record = ScoreRecord::new(score, total);
        let first_completion = !self.is_exercise_completed(&id);
        let xp_awarded = if first_completion {
            exercise_xp(score, total)
        } else {
            0
        };

        self.xp = self.xp.saturating_add(xp_awarded);
        self.unit_scores.insert(id.clone(), record);
        if first_completion {
            self.completed_exercises.push(id);
        }

        Some(ExerciseCompletion {
            record,
            first_completion,
            xp_awarded,
        })
    }

    /// Mark a vocabulary item mastered. Does not count towards the streak.
    ///
    /// Returns `false` if it was already mastered.
    pub fn master_vocab(&mut self, id: WordId) -> bool {
        if self.is_vocab_mastered(&id) {
            return false;
        }
        self.vocab_mastered.push(id);
        self.xp = self.xp.saturating_add(VOCAB_XP);
        true
    }

    /// Completed lesson and exercise counts for a unit, by id prefix.
    #[must_use]
    pub fn unit_progress(&self, unit: UnitId) -> UnitProgress {
        UnitProgress {
            lessons: self
                .completed_lessons
                .iter()
                .filter(|id| id.belongs_to(unit))
                .count(),
            exercises: self
                .completed_exercises
                .iter()
                .filter(|id| id.belongs_to(unit))
                .count(),
        }
    }

    #[must_use]
    pub fn is_unit_unlocked(&self, unit: UnitId) -> bool {
        unlock::is_unit_unlocked(unit, |previous| self.unit_progress(previous))
    }

    fn record_activity(&mut self, today: NaiveDate) {
        self.streak = next_streak(self.streak, self.last_activity_date, today);
        self.last_activity_date = Some(today);
    }
}

fn overlay<T: DeserializeOwned>(stored: &Map<String, Value>, key: &str, slot: &mut T) {
    if let Some(Ok(parsed)) = stored.get(key).map(|value| T::deserialize(value)) {
        *slot = parsed;
    }
}

fn dedup_in_order<T: Eq + Hash + Clone>(items: &mut Vec<T>) {
    let mut seen = HashSet::with_capacity(items.len());
    items.retain(|item| seen.insert(item.clone()));
}

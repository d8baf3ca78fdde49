//! Read-only course content, as bundled per unit in static JSON.

mod exercise;
mod lesson;
mod unit;

pub use exercise::{
    BLANK_MARKER, BlankQuestion, ChoiceQuestion, Exercise, ExerciseDecodeError, ExerciseKind,
    MatchPair,
};
pub use lesson::{
    DialogueLine, GrammarExample, GrammarNote, LessonContent, Section, Sentence, ZodiacEntry,
};
pub use unit::{Unit, UnitSummary, VocabItem};

mod exercise_vm;
mod unit_map_vm;
mod unit_overview_vm;

pub use exercise_vm::{
    ChoiceOptionVm, FillBlankVm, MatchItemVm, MatchingVm, MultipleChoiceVm, option_letter,
    step_percent, xp_earned_label,
};
pub use unit_map_vm::{MapStatsVm, UnitCardState, UnitCardVm, map_unit_cards, progress_percent};
pub use unit_overview_vm::{
    ExerciseRowVm, LessonRowVm, VOCAB_PREVIEW_LIMIT, VocabPreviewVm, map_exercise_rows,
    map_lesson_rows, map_vocab_preview,
};

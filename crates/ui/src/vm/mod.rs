mod quiz_vm;

pub use quiz_vm::{
    CompletionVm, LevelCardVm, QuestionScreenVm, VerdictVm, format_elapsed, level_subtitle,
    map_completion, map_level_cards, map_question_screen,
};

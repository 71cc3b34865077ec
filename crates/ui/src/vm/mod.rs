mod quiz_vm;

pub use quiz_vm::{
    ChoiceVm, EMPTY_SELECTION_MESSAGE, MainVm, QuestionVm, QuizScreenVm, RevealVm, map_quiz_view,
    position_label, score_label, shortcut_action,
};

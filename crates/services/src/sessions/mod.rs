mod controller;
mod count;
mod machine;
mod state;
mod view;

// Public API of the quiz session subsystem.
pub use crate::error::SessionError;
pub use controller::QuizController;
pub use count::QuestionCount;
pub use machine::{QuizAction, QuizMachine, QuizPhase};
pub use state::{AnswerReveal, SessionState, Tally};
pub use view::{
    ChoiceMark, ChoiceView, MainView, PositionView, QuestionView, QuizView, RevealView, ScoreView,
    SelectorView,
};

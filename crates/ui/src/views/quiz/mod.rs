mod components;
mod screen;

pub use components::{CompletionPanel, ExitedPanel, QuestionPanel, SelectorPanel};
pub use screen::{QuizBoard, QuizBoardProps, QuizScreen};

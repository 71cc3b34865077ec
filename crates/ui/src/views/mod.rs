mod quiz;
mod state;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use quiz::{
    CompletionPanel, ExitedPanel, QuestionPanel, QuizBoard, QuizBoardProps, QuizScreen,
    SelectorPanel,
};
pub use state::{ViewError, ViewState, view_state_from_resource};

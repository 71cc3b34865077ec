use quiz_core::model::QuestionBank;

use super::machine::QuizMachine;
use super::state::{AnswerReveal, SessionState, Tally};
use crate::error::SessionError;

/// Presentation-agnostic projection of the quiz state.
///
/// This is intentionally **not** a UI view-model:
/// - no pre-formatted strings
/// - no styling decisions
///
/// Each field corresponds to one screen region; `None` means the region is hidden.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizView {
    pub selector: Option<SelectorView>,
    pub score: Option<ScoreView>,
    pub position: Option<PositionView>,
    pub main: MainView,
}

/// Topic and count selection shown on the home screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectorView {
    pub topics: Vec<String>,
}

impl SelectorView {
    /// Topic preselected in the picker.
    #[must_use]
    pub fn default_topic(&self) -> Option<&str> {
        self.topics.first().map(String::as_str)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreView {
    pub correct: u32,
    pub wrong: u32,
}

/// 1-based question position within the run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PositionView {
    pub current: usize,
    pub total: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MainView {
    Home { notice: Option<SessionError> },
    Question(QuestionView),
    Finished(ScoreView),
    Exited,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionView {
    pub prompt: String,
    pub choices: Vec<ChoiceView>,
    pub reveal: Option<RevealView>,
}

impl QuestionView {
    #[must_use]
    pub fn is_answered(&self) -> bool {
        self.reveal.is_some()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChoiceView {
    pub index: usize,
    pub label: String,
    pub mark: ChoiceMark,
}

/// How a choice should be highlighted once the answer is revealed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChoiceMark {
    Neutral,
    Correct,
    Wrong,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevealView {
    pub was_correct: bool,
    pub correct_choice: String,
    pub explanation: Option<String>,
}

impl QuizMachine {
    /// Project the current state into screen regions.
    #[must_use]
    pub fn view(&self, bank: &QuestionBank) -> QuizView {
        match self {
            QuizMachine::Home { notice } => QuizView {
                selector: Some(SelectorView {
                    topics: bank.topics(),
                }),
                score: None,
                position: None,
                main: MainView::Home {
                    notice: notice.clone(),
                },
            },
            QuizMachine::InQuestion(session) => running_view(session, None),
            QuizMachine::AnswerRevealed { session, reveal } => running_view(session, Some(*reveal)),
            QuizMachine::Finished(tally) => QuizView {
                selector: None,
                score: Some(score(*tally)),
                position: Some(PositionView {
                    current: tally.total,
                    total: tally.total,
                }),
                main: MainView::Finished(score(*tally)),
            },
            QuizMachine::Exited => QuizView {
                selector: None,
                score: None,
                position: None,
                main: MainView::Exited,
            },
        }
    }
}

fn score(tally: Tally) -> ScoreView {
    ScoreView {
        correct: tally.correct,
        wrong: tally.wrong,
    }
}

fn running_view(session: &SessionState, reveal: Option<AnswerReveal>) -> QuizView {
    let total = session.total();
    let position = PositionView {
        current: (session.position() + 1).min(total),
        total,
    };

    let main = match session.current() {
        Some(question) => {
            let choices = question
                .choices()
                .iter()
                .enumerate()
                .map(|(index, label)| ChoiceView {
                    index,
                    label: label.clone(),
                    mark: choice_mark(index, reveal),
                })
                .collect();
            let reveal = reveal.map(|r| RevealView {
                was_correct: r.is_correct(),
                correct_choice: question.correct_choice().to_string(),
                explanation: question.explanation().map(str::to_string),
            });
            MainView::Question(QuestionView {
                prompt: question.prompt().to_string(),
                choices,
                reveal,
            })
        }
        None => MainView::Finished(score(session.tally())),
    };

    QuizView {
        selector: None,
        score: Some(score(session.tally())),
        position: Some(position),
        main,
    }
}

fn choice_mark(index: usize, reveal: Option<AnswerReveal>) -> ChoiceMark {
    match reveal {
        Some(r) if index == r.correct_index => ChoiceMark::Correct,
        Some(r) if index == r.chosen => ChoiceMark::Wrong,
        _ => ChoiceMark::Neutral,
    }
}

use quiz_core::model::QuestionBank;

use super::count::QuestionCount;
use super::state::{AnswerReveal, SessionState, Tally};
use crate::error::SessionError;

/// User actions understood by the quiz state machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuizAction {
    StartQuiz { topic: String, count: QuestionCount },
    Choose(usize),
    Next,
    Exit,
    ReturnHome,
}

/// Discriminant of [`QuizMachine`], handy for logging and assertions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizPhase {
    Home,
    InQuestion,
    AnswerRevealed,
    Finished,
    Exited,
}

/// The quiz flow as an explicit value.
///
/// Every transition consumes the machine and returns the next one. Actions
/// that do not apply to the current state return it unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuizMachine {
    Home { notice: Option<SessionError> },
    InQuestion(SessionState),
    AnswerRevealed {
        session: SessionState,
        reveal: AnswerReveal,
    },
    Finished(Tally),
    Exited,
}

impl Default for QuizMachine {
    fn default() -> Self {
        Self::Home { notice: None }
    }
}

impl QuizMachine {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn phase(&self) -> QuizPhase {
        match self {
            QuizMachine::Home { .. } => QuizPhase::Home,
            QuizMachine::InQuestion(_) => QuizPhase::InQuestion,
            QuizMachine::AnswerRevealed { .. } => QuizPhase::AnswerRevealed,
            QuizMachine::Finished(_) => QuizPhase::Finished,
            QuizMachine::Exited => QuizPhase::Exited,
        }
    }

    /// The active run, if any.
    #[must_use]
    pub fn session(&self) -> Option<&SessionState> {
        match self {
            QuizMachine::InQuestion(session) | QuizMachine::AnswerRevealed { session, .. } => {
                Some(session)
            }
            _ => None,
        }
    }

    #[must_use]
    pub fn apply(self, bank: &QuestionBank, action: QuizAction) -> Self {
        match action {
            QuizAction::StartQuiz { topic, count } => self.start_quiz(bank, &topic, count),
            QuizAction::Choose(index) => self.choose(index),
            QuizAction::Next => self.next(),
            QuizAction::Exit => self.exit(),
            QuizAction::ReturnHome => self.return_home(),
        }
    }

    /// Begin a run over the first `count` questions of `topic`.
    ///
    /// An unknown or empty topic keeps the machine at home with an
    /// `EmptySelection` notice.
    #[must_use]
    pub fn start_quiz(self, bank: &QuestionBank, topic: &str, count: QuestionCount) -> Self {
        if !matches!(self, QuizMachine::Home { .. }) {
            tracing::trace!(phase = ?self.phase(), "start ignored outside home");
            return self;
        }

        let mut pool = bank.questions_for(topic);
        let effective = count.resolve(pool.len());
        pool.truncate(effective);

        match SessionState::start(topic, pool) {
            Ok(session) => {
                tracing::debug!(topic, total = session.total(), "quiz started");
                QuizMachine::InQuestion(session)
            }
            Err(err) => {
                tracing::debug!(topic, "no questions for topic");
                QuizMachine::Home { notice: Some(err) }
            }
        }
    }

    #[must_use]
    pub fn choose(self, choice_index: usize) -> Self {
        match self {
            QuizMachine::InQuestion(mut session) => match session.choose(choice_index) {
                Some(reveal) => {
                    tracing::debug!(
                        position = session.position(),
                        chosen = reveal.chosen,
                        correct = reveal.is_correct(),
                        "answer recorded"
                    );
                    QuizMachine::AnswerRevealed { session, reveal }
                }
                None => {
                    tracing::trace!(choice_index, "choice ignored");
                    QuizMachine::InQuestion(session)
                }
            },
            other => {
                tracing::trace!(phase = ?other.phase(), choice_index, "choice ignored");
                other
            }
        }
    }

    #[must_use]
    pub fn next(self) -> Self {
        match self {
            QuizMachine::AnswerRevealed { mut session, .. } => {
                if session.advance() {
                    tracing::debug!(position = session.position(), "next question");
                    QuizMachine::InQuestion(session)
                } else {
                    let tally = session.tally();
                    tracing::debug!(correct = tally.correct, wrong = tally.wrong, "quiz finished");
                    QuizMachine::Finished(tally)
                }
            }
            other => {
                tracing::trace!(phase = ?other.phase(), "next ignored");
                other
            }
        }
    }

    #[must_use]
    pub fn exit(self) -> Self {
        match self {
            QuizMachine::InQuestion(_) | QuizMachine::AnswerRevealed { .. } => {
                tracing::debug!("quiz exited");
                QuizMachine::Exited
            }
            other => {
                tracing::trace!(phase = ?other.phase(), "exit ignored");
                other
            }
        }
    }

    #[must_use]
    pub fn return_home(self) -> Self {
        match self {
            QuizMachine::Finished(_) | QuizMachine::Exited => QuizMachine::default(),
            other => {
                tracing::trace!(phase = ?other.phase(), "return home ignored");
                other
            }
        }
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

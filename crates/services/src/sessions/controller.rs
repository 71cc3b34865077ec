use std::mem;
use std::sync::Arc;

use quiz_core::model::QuestionBank;

use super::machine::{QuizAction, QuizMachine, QuizPhase};
use super::view::QuizView;

/// Owns the loaded bank and the current machine state for one window.
///
/// Cloning is cheap; the bank is shared.
#[derive(Debug, Clone, PartialEq)]
pub struct QuizController {
    bank: Arc<QuestionBank>,
    machine: QuizMachine,
}

impl QuizController {
    #[must_use]
    pub fn new(bank: QuestionBank) -> Self {
        Self {
            bank: Arc::new(bank),
            machine: QuizMachine::new(),
        }
    }

    #[must_use]
    pub fn bank(&self) -> &QuestionBank {
        &self.bank
    }

    #[must_use]
    pub fn machine(&self) -> &QuizMachine {
        &self.machine
    }

    #[must_use]
    pub fn phase(&self) -> QuizPhase {
        self.machine.phase()
    }

    /// Apply `action` and return the resulting phase.
    pub fn dispatch(&mut self, action: QuizAction) -> QuizPhase {
        let machine = mem::take(&mut self.machine);
        self.machine = machine.apply(&self.bank, action);
        self.machine.phase()
    }

    #[must_use]
    pub fn view(&self) -> QuizView {
        self.machine.view(&self.bank)
    }
}

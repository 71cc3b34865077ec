use std::sync::Arc;

use quiz_core::model::QuestionRecord;
use storage::{BankLocation, Storage};

use crate::bank_service::QuestionBankService;

/// Assembles app-facing services over a configured storage backend.
#[derive(Clone)]
pub struct AppServices {
    bank_service: Arc<QuestionBankService>,
}

impl AppServices {
    #[must_use]
    pub fn new(storage: &Storage) -> Self {
        Self {
            bank_service: Arc::new(QuestionBankService::new(Arc::clone(&storage.bank))),
        }
    }

    /// Build services that read the spreadsheet at `location`.
    #[must_use]
    pub fn from_location(location: BankLocation) -> Self {
        Self::new(&Storage::xlsx(location))
    }

    /// Build services over a fixed list of questions.
    #[must_use]
    pub fn in_memory(questions: Vec<QuestionRecord>) -> Self {
        Self::new(&Storage::in_memory(questions))
    }

    #[must_use]
    pub fn bank_service(&self) -> Arc<QuestionBankService> {
        Arc::clone(&self.bank_service)
    }
}

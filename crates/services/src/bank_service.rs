use std::sync::Arc;

use quiz_core::model::QuestionBank;
use storage::QuestionBankSource;

use crate::error::BankError;

/// Loads the question bank once at startup.
#[derive(Clone)]
pub struct QuestionBankService {
    source: Arc<dyn QuestionBankSource>,
}

impl QuestionBankService {
    #[must_use]
    pub fn new(source: Arc<dyn QuestionBankSource>) -> Self {
        Self { source }
    }

    /// Fetch and normalize every question from the configured source.
    ///
    /// # Errors
    ///
    /// Returns `BankError::LoadFailure` if the source cannot be read or parsed.
    pub async fn load_bank(&self) -> Result<QuestionBank, BankError> {
        let source = self.source.describe();
        tracing::info!(%source, "loading question bank");

        match self.source.load_questions().await {
            Ok(questions) => {
                let bank = QuestionBank::new(questions);
                tracing::info!(
                    %source,
                    questions = bank.len(),
                    topics = bank.topics().len(),
                    "question bank loaded"
                );
                Ok(bank)
            }
            Err(err) => {
                tracing::error!(%source, error = %err, "failed to load question bank");
                Err(BankError::LoadFailure(err))
            }
        }
    }
}

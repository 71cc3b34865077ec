use async_trait::async_trait;
use quiz_core::model::QuestionRecord;
use std::sync::Arc;
use thiserror::Error;

use crate::xlsx::{BankLocation, XlsxBank};

/// Errors surfaced by question bank sources.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("failed to read question bank: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to fetch question bank: {0}")]
    Http(#[from] reqwest::Error),

    #[error("question bank request failed with status {0}")]
    HttpStatus(reqwest::StatusCode),

    #[error("unreadable workbook: {0}")]
    Workbook(String),

    #[error("workbook has no worksheets")]
    NoWorksheet,
}

/// Source contract for the question bank.
///
/// A source is read once at startup. Implementations return the complete
/// normalized list or an error; partial results are never surfaced.
#[async_trait]
pub trait QuestionBankSource: Send + Sync {
    /// Load every question in source order.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the source cannot be fetched or parsed.
    async fn load_questions(&self) -> Result<Vec<QuestionRecord>, StorageError>;

    /// Human-readable description used in logs.
    fn describe(&self) -> String;
}

/// Fixed in-memory bank for testing and prototyping.
#[derive(Clone, Default)]
pub struct InMemoryBank {
    questions: Arc<[QuestionRecord]>,
}

impl InMemoryBank {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_questions(questions: Vec<QuestionRecord>) -> Self {
        Self {
            questions: questions.into(),
        }
    }
}

#[async_trait]
impl QuestionBankSource for InMemoryBank {
    async fn load_questions(&self) -> Result<Vec<QuestionRecord>, StorageError> {
        Ok(self.questions.to_vec())
    }

    fn describe(&self) -> String {
        "in-memory bank".to_string()
    }
}

/// Aggregates the bank source behind a trait object.
#[derive(Clone)]
pub struct Storage {
    pub bank: Arc<dyn QuestionBankSource>,
}

impl Storage {
    #[must_use]
    pub fn in_memory(questions: Vec<QuestionRecord>) -> Self {
        Self {
            bank: Arc::new(InMemoryBank::with_questions(questions)),
        }
    }

    /// Storage reading a spreadsheet from a file path or URL.
    #[must_use]
    pub fn xlsx(location: BankLocation) -> Self {
        Self {
            bank: Arc::new(XlsxBank::new(location)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question(prompt: &str) -> QuestionRecord {
        QuestionRecord::new(
            Some("Math".into()),
            prompt,
            ["1".into(), "2".into(), "3".into(), "4".into()],
            1,
            None,
        )
    }

    #[tokio::test]
    async fn in_memory_bank_returns_questions_in_order() {
        let bank = InMemoryBank::with_questions(vec![question("q1"), question("q2")]);

        let loaded = bank.load_questions().await.unwrap();
        let prompts: Vec<_> = loaded.iter().map(QuestionRecord::prompt).collect();
        assert_eq!(prompts, vec!["q1", "q2"]);
    }

    #[tokio::test]
    async fn default_in_memory_bank_is_empty() {
        let loaded = InMemoryBank::new().load_questions().await.unwrap();
        assert!(loaded.is_empty());
    }

    #[tokio::test]
    async fn storage_in_memory_exposes_bank() {
        let storage = Storage::in_memory(vec![question("q1")]);
        let loaded = storage.bank.load_questions().await.unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(storage.bank.describe(), "in-memory bank");
    }
}

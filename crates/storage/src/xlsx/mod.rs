use std::io::Cursor;

use async_trait::async_trait;
use calamine::{Reader, open_workbook_auto_from_rs};
use quiz_core::model::QuestionRecord;

use crate::repository::{QuestionBankSource, StorageError};

mod location;
mod mapping;

pub use location::{BankLocation, DEFAULT_BANK_PATH};
pub use mapping::rows_to_questions;

/// Question bank backed by a spreadsheet (xlsx, xls, xlsb or ods).
///
/// Only the first worksheet is read; its first row names the columns.
#[derive(Debug, Clone)]
pub struct XlsxBank {
    location: BankLocation,
}

impl XlsxBank {
    #[must_use]
    pub fn new(location: BankLocation) -> Self {
        Self { location }
    }

    #[must_use]
    pub fn location(&self) -> &BankLocation {
        &self.location
    }
}

#[async_trait]
impl QuestionBankSource for XlsxBank {
    async fn load_questions(&self) -> Result<Vec<QuestionRecord>, StorageError> {
        let bytes = self.location.read_bytes().await?;
        tracing::debug!(location = %self.location, bytes = bytes.len(), "read workbook");
        parse_workbook(bytes)
    }

    fn describe(&self) -> String {
        self.location.to_string()
    }
}

/// Parse workbook bytes into normalized questions.
///
/// # Errors
///
/// Returns `StorageError::Workbook` if the format cannot be detected or the
/// sheet cannot be decoded, and `StorageError::NoWorksheet` for workbooks
/// without sheets.
pub fn parse_workbook(bytes: Vec<u8>) -> Result<Vec<QuestionRecord>, StorageError> {
    let mut workbook = open_workbook_auto_from_rs(Cursor::new(bytes))
        .map_err(|e| StorageError::Workbook(e.to_string()))?;
    let range = workbook
        .worksheet_range_at(0)
        .ok_or(StorageError::NoWorksheet)?
        .map_err(|e| StorageError::Workbook(e.to_string()))?;
    Ok(rows_to_questions(&range))
}

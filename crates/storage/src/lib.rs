#![forbid(unsafe_code)]

pub mod repository;
pub mod xlsx;

pub use repository::{InMemoryBank, QuestionBankSource, Storage, StorageError};
pub use xlsx::{BankLocation, DEFAULT_BANK_PATH, XlsxBank};

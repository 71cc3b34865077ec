mod bank;
mod cell;
mod question;

pub use bank::QuestionBank;
pub use cell::CellValue;
pub(crate) use cell::bool_text;
pub use question::{CHOICE_COUNT, QuestionRecord};

#![forbid(unsafe_code)]

pub mod model;
pub mod normalize;

pub use model::{CHOICE_COUNT, CellValue, QuestionBank, QuestionRecord};
pub use normalize::{ClockParseError, ClockTime, QuestionRow};

//! Normalization rules that turn raw spreadsheet cells into display-ready
//! question data.

mod answer;
mod choice;
mod clock;
mod row;


pub use answer::{coerce_number, to_answer_index};
pub use choice::{MAX_FRACTION_DIGITS, format_choice, format_number};
pub use clock::{ClockParseError, ClockTime, Meridiem};
pub use row::QuestionRow;

use crate::model::{CHOICE_COUNT, CellValue, QuestionRecord};
use crate::normalize::{format_choice, to_answer_index};

/// Raw cells for one question, as read from a bank source.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QuestionRow {
    pub topic: CellValue,
    pub prompt: CellValue,
    pub choices: [CellValue; CHOICE_COUNT],
    pub answer_key: CellValue,
    pub explanation: CellValue,
}

impl QuestionRow {
    /// True when every cell in the row is blank.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.topic.is_blank()
            && self.prompt.is_blank()
            && self.choices.iter().all(CellValue::is_blank)
            && self.answer_key.is_blank()
            && self.explanation.is_blank()
    }

    /// Apply the normalization rules and build an immutable record.
    #[must_use]
    pub fn normalize(&self) -> QuestionRecord {
        let choices = std::array::from_fn(|i| format_choice(&self.choices[i]));
        QuestionRecord::new(
            self.topic.display_text(),
            self.prompt.display_text().unwrap_or_default(),
            choices,
            to_answer_index(&self.answer_key),
            self.explanation.display_text(),
        )
    }
}

use std::collections::HashSet;

use crate::model::QuestionRecord;

/// The full question list loaded at startup.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuestionBank {
    questions: Vec<QuestionRecord>,
}

impl QuestionBank {
    #[must_use]
    pub fn new(questions: Vec<QuestionRecord>) -> Self {
        Self { questions }
    }

    #[must_use]
    pub fn questions(&self) -> &[QuestionRecord] {
        &self.questions
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Distinct non-empty topics in first-seen order.
    #[must_use]
    pub fn topics(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        self.questions
            .iter()
            .filter_map(QuestionRecord::topic)
            .filter(|topic| seen.insert(*topic))
            .map(str::to_string)
            .collect()
    }

    /// Questions whose topic matches `topic` exactly, in bank order.
    #[must_use]
    pub fn questions_for(&self, topic: &str) -> Vec<QuestionRecord> {
        self.questions
            .iter()
            .filter(|q| q.topic() == Some(topic))
            .cloned()
            .collect()
    }
}

impl From<Vec<QuestionRecord>> for QuestionBank {
    fn from(questions: Vec<QuestionRecord>) -> Self {
        Self::new(questions)
    }
}

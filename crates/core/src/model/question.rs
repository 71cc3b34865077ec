/// Every question offers exactly this many options.
pub const CHOICE_COUNT: usize = 4;

//
// ─── QUESTION RECORD ───────────────────────────────────────────────────────────
//

/// One normalized multiple-choice question.
///
/// Records are immutable once built. `correct_index` always points at an
/// existing entry in `choices`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionRecord {
    topic: Option<String>,
    prompt: String,
    choices: [String; CHOICE_COUNT],
    correct_index: usize,
    explanation: Option<String>,
}

impl QuestionRecord {
    /// Build a record, clamping `correct_index` into the choice range.
    ///
    /// Empty topics and explanations are stored as absent.
    #[must_use]
    pub fn new(
        topic: Option<String>,
        prompt: impl Into<String>,
        choices: [String; CHOICE_COUNT],
        correct_index: usize,
        explanation: Option<String>,
    ) -> Self {
        Self {
            topic: topic.filter(|t| !t.is_empty()),
            prompt: prompt.into(),
            choices,
            correct_index: correct_index.min(CHOICE_COUNT - 1),
            explanation: explanation.filter(|e| !e.is_empty()),
        }
    }

    #[must_use]
    pub fn topic(&self) -> Option<&str> {
        self.topic.as_deref()
    }

    #[must_use]
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    #[must_use]
    pub fn choices(&self) -> &[String; CHOICE_COUNT] {
        &self.choices
    }

    #[must_use]
    pub fn choice_count(&self) -> usize {
        self.choices.len()
    }

    #[must_use]
    pub fn correct_index(&self) -> usize {
        self.correct_index
    }

    /// Text of the correct option.
    #[must_use]
    pub fn correct_choice(&self) -> &str {
        &self.choices[self.correct_index]
    }

    #[must_use]
    pub fn explanation(&self) -> Option<&str> {
        self.explanation.as_deref()
    }

    #[must_use]
    pub fn is_correct(&self, choice_index: usize) -> bool {
        choice_index == self.correct_index
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

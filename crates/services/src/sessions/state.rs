use std::fmt;

use quiz_core::model::QuestionRecord;

use crate::error::SessionError;

//
// ─── ANSWER OUTCOME ────────────────────────────────────────────────────────────
//

/// What happened when the user picked a choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnswerReveal {
    pub chosen: usize,
    pub correct_index: usize,
}

impl AnswerReveal {
    #[must_use]
    pub fn is_correct(&self) -> bool {
        self.chosen == self.correct_index
    }
}

/// Final or running score for one run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tally {
    pub correct: u32,
    pub wrong: u32,
    pub total: usize,
}

impl Tally {
    #[must_use]
    pub fn answered(&self) -> u32 {
        self.correct.saturating_add(self.wrong)
    }
}

//
// ─── SESSION STATE ─────────────────────────────────────────────────────────────
//

/// Mutable state of a single quiz run.
///
/// Created on start, discarded on exit or return home. Tallies only grow and
/// `answer_locked` guards against scoring the same question twice.
#[derive(Clone, PartialEq, Eq)]
pub struct SessionState {
    topic: String,
    pool: Vec<QuestionRecord>,
    position: usize,
    correct_count: u32,
    wrong_count: u32,
    answer_locked: bool,
}

impl SessionState {
    /// Start a run over `pool`.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::EmptySelection` when `pool` is empty.
    pub fn start(topic: impl Into<String>, pool: Vec<QuestionRecord>) -> Result<Self, SessionError> {
        let topic = topic.into();
        if pool.is_empty() {
            return Err(SessionError::EmptySelection { topic });
        }

        Ok(Self {
            topic,
            pool,
            position: 0,
            correct_count: 0,
            wrong_count: 0,
            answer_locked: false,
        })
    }

    #[must_use]
    pub fn topic(&self) -> &str {
        &self.topic
    }

    #[must_use]
    pub fn pool(&self) -> &[QuestionRecord] {
        &self.pool
    }

    #[must_use]
    pub fn position(&self) -> usize {
        self.position
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.pool.len()
    }

    #[must_use]
    pub fn correct_count(&self) -> u32 {
        self.correct_count
    }

    #[must_use]
    pub fn wrong_count(&self) -> u32 {
        self.wrong_count
    }

    #[must_use]
    pub fn is_answer_locked(&self) -> bool {
        self.answer_locked
    }

    #[must_use]
    pub fn current(&self) -> Option<&QuestionRecord> {
        self.pool.get(self.position)
    }

    #[must_use]
    pub fn tally(&self) -> Tally {
        Tally {
            correct: self.correct_count,
            wrong: self.wrong_count,
            total: self.pool.len(),
        }
    }

    /// Score `choice_index` against the current question.
    ///
    /// Returns `None` without touching state when the answer is already
    /// locked or the index is outside the question's choices.
    pub(crate) fn choose(&mut self, choice_index: usize) -> Option<AnswerReveal> {
        if self.answer_locked {
            return None;
        }
        let question = self.current()?;
        if choice_index >= question.choice_count() {
            return None;
        }

        let reveal = AnswerReveal {
            chosen: choice_index,
            correct_index: question.correct_index(),
        };
        self.answer_locked = true;
        if reveal.is_correct() {
            self.correct_count = self.correct_count.saturating_add(1);
        } else {
            self.wrong_count = self.wrong_count.saturating_add(1);
        }
        Some(reveal)
    }

    /// Move past the current question.
    ///
    /// Returns `true` when another question is available; the lock is
    /// released in that case.
    pub(crate) fn advance(&mut self) -> bool {
        self.position = self.position.saturating_add(1);
        if self.position < self.pool.len() {
            self.answer_locked = false;
            true
        } else {
            false
        }
    }
}

impl fmt::Debug for SessionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionState")
            .field("topic", &self.topic)
            .field("pool_len", &self.pool.len())
            .field("position", &self.position)
            .field("correct_count", &self.correct_count)
            .field("wrong_count", &self.wrong_count)
            .field("answer_locked", &self.answer_locked)
            .finish()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

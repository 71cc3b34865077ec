use std::num::NonZeroUsize;

/// How many questions the user asked for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum QuestionCount {
    /// Use every question in the topic.
    #[default]
    All,
    /// Use at most this many questions.
    AtMost(NonZeroUsize),
}

impl QuestionCount {
    /// Read the count field the way a browser `parseInt` would.
    ///
    /// Leading whitespace and a sign are accepted and anything after the
    /// leading digits is ignored. Blank, non-numeric, zero and negative input
    /// all mean [`QuestionCount::All`].
    #[must_use]
    pub fn parse(input: &str) -> Self {
        let s = input.trim_start();
        let (negative, digits) = match s.as_bytes().first() {
            Some(b'-') => (true, &s[1..]),
            Some(b'+') => (false, &s[1..]),
            _ => (false, s),
        };

        let digits: Vec<u8> = digits
            .bytes()
            .take_while(u8::is_ascii_digit)
            .map(|b| b - b'0')
            .collect();
        if digits.is_empty() || negative {
            return Self::All;
        }

        let value = digits.iter().fold(0_usize, |acc, d| {
            acc.saturating_mul(10).saturating_add(usize::from(*d))
        });
        NonZeroUsize::new(value).map_or(Self::All, Self::AtMost)
    }

    /// Effective pool size given how many questions match the topic.
    #[must_use]
    pub fn resolve(self, available: usize) -> usize {
        match self {
            QuestionCount::All => available,
            QuestionCount::AtMost(limit) => limit.get().min(available),
        }
    }
}

impl From<usize> for QuestionCount {
    fn from(value: usize) -> Self {
        NonZeroUsize::new(value).map_or(Self::All, Self::AtMost)
    }
}

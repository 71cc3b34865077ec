use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Twelve-hour clock suffix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Meridiem {
    Am,
    Pm,
}

impl Meridiem {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Meridiem::Am => "AM",
            Meridiem::Pm => "PM",
        }
    }

    fn parse(raw: &str) -> Option<Self> {
        if raw.eq_ignore_ascii_case("am") {
            Some(Meridiem::Am)
        } else if raw.eq_ignore_ascii_case("pm") {
            Some(Meridiem::Pm)
        } else {
            None
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ClockParseError {
    #[error("hour must be one or two digits")]
    InvalidHour,

    #[error("expected ':' after the hour")]
    MissingSeparator,

    #[error("minute must be exactly two digits")]
    InvalidMinute,

    #[error("second must be exactly two digits")]
    InvalidSecond,

    #[error("unexpected trailing text {0:?}")]
    UnexpectedSuffix(String),
}

/// A clock reading such as `7:05`, `07:30:00` or `1:55:00 pm`.
///
/// Spreadsheets tend to serialize time-of-day cells with seconds attached.
/// Displaying a `ClockTime` drops the seconds, keeps the hour exactly as
/// written (including a leading zero) and upper-cases any meridiem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClockTime {
    hour: u8,
    hour_padded: bool,
    minute: u8,
    second: Option<u8>,
    meridiem: Option<Meridiem>,
}

impl ClockTime {
    /// Parse `H:MM` or `H:MM:SS`, optionally followed by whitespace and `AM`/`PM`.
    ///
    /// The input must not carry leading or trailing whitespace.
    ///
    /// # Errors
    ///
    /// Returns `ClockParseError` describing the first component that does not fit.
    pub fn parse(input: &str) -> Result<Self, ClockParseError> {
        let hour_len = leading_digits(input);
        if hour_len == 0 || hour_len > 2 {
            return Err(ClockParseError::InvalidHour);
        }
        let (hour_raw, rest) = input.split_at(hour_len);
        let rest = rest
            .strip_prefix(':')
            .ok_or(ClockParseError::MissingSeparator)?;

        let (minute, rest) = two_digits(rest).ok_or(ClockParseError::InvalidMinute)?;

        let (second, rest) = match rest.strip_prefix(':') {
            Some(after) => {
                let (second, rest) = two_digits(after).ok_or(ClockParseError::InvalidSecond)?;
                (Some(second), rest)
            }
            None => (None, rest),
        };

        let suffix = rest.trim_start();
        let meridiem = if suffix.is_empty() {
            None
        } else {
            Some(
                Meridiem::parse(suffix)
                    .ok_or_else(|| ClockParseError::UnexpectedSuffix(suffix.to_string()))?,
            )
        };

        Ok(Self {
            hour: parse_digits(hour_raw),
            hour_padded: hour_len == 2,
            minute,
            second,
            meridiem,
        })
    }

    #[must_use]
    pub fn hour(&self) -> u8 {
        self.hour
    }

    #[must_use]
    pub fn minute(&self) -> u8 {
        self.minute
    }

    #[must_use]
    pub fn second(&self) -> Option<u8> {
        self.second
    }

    #[must_use]
    pub fn meridiem(&self) -> Option<Meridiem> {
        self.meridiem
    }
}

impl FromStr for ClockTime {
    type Err = ClockParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.hour_padded {
            write!(f, "{:02}:{:02}", self.hour, self.minute)?;
        } else {
            write!(f, "{}:{:02}", self.hour, self.minute)?;
        }
        if let Some(meridiem) = self.meridiem {
            write!(f, " {}", meridiem.as_str())?;
        }
        Ok(())
    }
}

fn leading_digits(s: &str) -> usize {
    s.bytes().take_while(u8::is_ascii_digit).count()
}

fn two_digits(s: &str) -> Option<(u8, &str)> {
    if leading_digits(s) < 2 {
        return None;
    }
    let (digits, rest) = s.split_at(2);
    Some((parse_digits(digits), rest))
}

// Callers guarantee one or two ASCII digits.
fn parse_digits(digits: &str) -> u8 {
    digits
        .bytes()
        .fold(0_u8, |acc, b| acc * 10 + (b - b'0'))
}

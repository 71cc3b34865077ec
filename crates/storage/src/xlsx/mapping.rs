use calamine::{Data, ExcelDateTime, Range};
use chrono::NaiveTime;
use quiz_core::model::{CHOICE_COUNT, CellValue, QuestionRecord};
use quiz_core::normalize::{QuestionRow, format_number};

pub(crate) const TOPIC: &str = "Topic";
pub(crate) const QUESTION_TEXT: &str = "Question_Text";
pub(crate) const CHOICES: [&str; CHOICE_COUNT] = ["choice_1", "choice_2", "choice_3", "choice_4"];
pub(crate) const ANSWER_KEY: &str = "answer_key";
pub(crate) const SOLUTION: &str = "Solution";

const SECONDS_PER_DAY: f64 = 86_400.0;

/// Column positions resolved from the header row.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct ColumnMap {
    topic: Option<usize>,
    prompt: Option<usize>,
    choices: [Option<usize>; CHOICE_COUNT],
    answer_key: Option<usize>,
    explanation: Option<usize>,
}

impl ColumnMap {
    fn from_header(header: &[Data]) -> Self {
        let names: Vec<Option<String>> = header
            .iter()
            .map(|cell| cell_value(cell).display_text())
            .collect();
        // First occurrence wins when a header is repeated.
        let find = |name: &str| names.iter().position(|n| n.as_deref() == Some(name));

        Self {
            topic: find(TOPIC),
            prompt: find(QUESTION_TEXT),
            choices: CHOICES.map(find),
            answer_key: find(ANSWER_KEY),
            explanation: find(SOLUTION),
        }
    }

    fn missing(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        let singles = [
            (TOPIC, self.topic),
            (QUESTION_TEXT, self.prompt),
            (ANSWER_KEY, self.answer_key),
            (SOLUTION, self.explanation),
        ];
        for (name, column) in singles {
            if column.is_none() {
                missing.push(name);
            }
        }
        for (name, column) in CHOICES.iter().zip(self.choices) {
            if column.is_none() {
                missing.push(*name);
            }
        }
        missing
    }

    fn row(&self, cells: &[Data]) -> QuestionRow {
        let at = |column: Option<usize>| {
            column
                .and_then(|idx| cells.get(idx))
                .map(cell_value)
                .unwrap_or_default()
        };

        QuestionRow {
            topic: at(self.topic),
            prompt: at(self.prompt),
            choices: self.choices.map(at),
            answer_key: at(self.answer_key),
            explanation: at(self.explanation),
        }
    }
}

/// Map a calamine cell into the source-neutral cell type.
pub(crate) fn cell_value(cell: &Data) -> CellValue {
    match cell {
        Data::Empty => CellValue::Empty,
        Data::Int(i) => CellValue::Number(*i as f64),
        Data::Float(f) => CellValue::Number(*f),
        Data::String(s) | Data::DateTimeIso(s) | Data::DurationIso(s) => CellValue::Text(s.clone()),
        Data::Bool(b) => CellValue::Bool(*b),
        Data::DateTime(dt) => datetime_cell(dt),
        Data::Error(err) => CellValue::Text(err.to_string()),
    }
}

// Spreadsheets store times as day fractions. The cell's display format is
// not available, so times of day render as a neutral 24-hour `HH:MM:SS`
// reading that clock normalization then trims.
fn datetime_cell(dt: &ExcelDateTime) -> CellValue {
    let serial = dt.as_f64();
    if dt.is_duration() {
        return CellValue::Text(clock_text(serial, false));
    }
    if (0.0..1.0).contains(&serial) {
        return CellValue::Text(clock_text(serial, true));
    }

    match dt.as_datetime() {
        Some(when) if when.time() == NaiveTime::MIN => {
            CellValue::Text(when.format("%Y-%m-%d").to_string())
        }
        Some(when) => CellValue::Text(when.format("%Y-%m-%d %H:%M").to_string()),
        None => CellValue::Text(format_number(serial)),
    }
}

fn clock_text(serial: f64, time_of_day: bool) -> String {
    let total = (serial.abs() * SECONDS_PER_DAY).round() as u64;
    let (hours, minutes, seconds) = (total / 3600, (total / 60) % 60, total % 60);

    if time_of_day {
        format!("{:02}:{minutes:02}:{seconds:02}", hours % 24)
    } else {
        format!("{hours}:{minutes:02}:{seconds:02}")
    }
}

/// Convert the first worksheet's used range into normalized questions.
///
/// The first row is the header. Rows with no content are skipped.
pub fn rows_to_questions(range: &Range<Data>) -> Vec<QuestionRecord> {
    let mut rows = range.rows();
    let Some(header) = rows.next() else {
        tracing::warn!("question sheet is empty");
        return Vec::new();
    };

    let columns = ColumnMap::from_header(header);
    let missing = columns.missing();
    if !missing.is_empty() {
        tracing::warn!(?missing, "question sheet is missing columns; cells will be empty");
    }

    let mut skipped = 0_usize;
    let questions: Vec<QuestionRecord> = rows
        .map(|cells| columns.row(cells))
        .filter(|row| {
            let blank = row.is_blank();
            if blank {
                skipped += 1;
            }
            !blank
        })
        .map(|row| row.normalize())
        .collect();

    if skipped > 0 {
        tracing::debug!(skipped, "skipped blank rows");
    }
    questions
}

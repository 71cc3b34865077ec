use crate::model::CellValue;

/// Numeric reading of a cell, following spreadsheet coercion rules.
///
/// Blank text reads as zero, booleans as one or zero, and empty cells or
/// unparseable text as `None`.
#[must_use]
pub fn coerce_number(cell: &CellValue) -> Option<f64> {
    match cell {
        CellValue::Empty => None,
        CellValue::Number(n) => Some(*n),
        CellValue::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
        CellValue::Text(text) => {
            let trimmed = text.trim();
            if trimmed.is_empty() {
                Some(0.0)
            } else {
                trimmed.parse::<f64>().ok()
            }
        }
    }
}

/// Convert a 1-based answer key into a 0-based choice index.
///
/// Computes `max(0, floor(key) - 1)`. Missing, non-numeric and non-finite
/// keys map to `0`.
#[must_use]
pub fn to_answer_index(cell: &CellValue) -> usize {
    match coerce_number(cell) {
        Some(n) if n.is_finite() => {
            let index = n.floor() - 1.0;
            if index <= 0.0 {
                0
            } else {
                // Float to int casts saturate.
                index as usize
            }
        }
        _ => 0,
    }
}

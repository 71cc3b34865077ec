use crate::normalize::format_number;

/// A single spreadsheet cell, detached from any workbook library.
///
/// Storage adapters map their native cell types into this shape so the
/// normalization rules in [`crate::normalize`] stay pure.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum CellValue {
    #[default]
    Empty,
    Number(f64),
    Text(String),
    Bool(bool),
}

impl CellValue {
    #[must_use]
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    /// True for absent cells and cells holding only whitespace.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        match self {
            CellValue::Empty => true,
            CellValue::Text(text) => text.trim().is_empty(),
            CellValue::Number(_) | CellValue::Bool(_) => false,
        }
    }

    /// Renders the cell as display text without trimming.
    ///
    /// Returns `None` for empty cells and empty strings.
    #[must_use]
    pub fn display_text(&self) -> Option<String> {
        let text = match self {
            CellValue::Empty => return None,
            CellValue::Number(n) => format_number(*n),
            CellValue::Text(text) => text.clone(),
            CellValue::Bool(b) => bool_text(*b).to_string(),
        };
        if text.is_empty() { None } else { Some(text) }
    }
}

pub(crate) fn bool_text(value: bool) -> &'static str {
    if value { "TRUE" } else { "FALSE" }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<bool> for CellValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

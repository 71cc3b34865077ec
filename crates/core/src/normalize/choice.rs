use crate::model::{CellValue, bool_text};
use crate::normalize::ClockTime;

/// Maximum fractional digits kept when a number is rendered as text.
pub const MAX_FRACTION_DIGITS: usize = 6;

/// Render a number the way a spreadsheet user expects to read it.
///
/// Integral values have no decimal point. Other values are rounded to
/// [`MAX_FRACTION_DIGITS`] places and trailing zeros are stripped. A value
/// exactly halfway between two roundings goes away from zero.
#[must_use]
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value.is_sign_positive() { "Infinity" } else { "-Infinity" }.to_string();
    }

    let rendered = if value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        let fixed = halfway_fixed(value)
            .unwrap_or_else(|| format!("{value:.prec$}", prec = MAX_FRACTION_DIGITS));
        fixed.trim_end_matches('0').trim_end_matches('.').to_string()
    };

    // Rounding tiny negatives (and -0.0 itself) must not leave a sign behind.
    if rendered == "-0" { "0".to_string() } else { rendered }
}

/// Fixed-point text for values that sit exactly on a rounding tie.
///
/// `{:.6}` breaks ties to even; ties here must round away from zero.
/// Returns `None` when `value` is not an exact tie at the seventh place.
fn halfway_fixed(value: f64) -> Option<String> {
    const DOUBLED_SCALE: f64 = 2_000_000.0;
    const EXACT_LIMIT: f64 = 9_007_199_254_740_992.0; // 2^53

    let doubled = value * DOUBLED_SCALE;
    // The fused form recovers the product's rounding error exactly.
    let exact = value.mul_add(DOUBLED_SCALE, -doubled) == 0.0;
    if !exact || doubled.abs() >= EXACT_LIMIT || doubled.fract() != 0.0 || doubled % 2.0 == 0.0 {
        return None;
    }

    let scaled = (doubled / 2.0).round();
    let digits = format!("{:0>width$.0}", scaled.abs(), width = MAX_FRACTION_DIGITS + 1);
    let (whole, fraction) = digits.split_at(digits.len() - MAX_FRACTION_DIGITS);
    let sign = if scaled < 0.0 { "-" } else { "" };
    Some(format!("{sign}{whole}.{fraction}"))
}

/// Normalize one answer-option cell into display text.
///
/// Text is trimmed, and clock readings lose their seconds (`"1:05:00 PM"`
/// becomes `"1:05 PM"`). Absent cells become the empty string.
#[must_use]
pub fn format_choice(cell: &CellValue) -> String {
    match cell {
        CellValue::Empty => String::new(),
        CellValue::Number(n) => format_number(*n),
        CellValue::Text(text) => {
            let trimmed = text.trim();
            match ClockTime::parse(trimmed) {
                Ok(time) => time.to_string(),
                Err(_) => trimmed.to_string(),
            }
        }
        CellValue::Bool(b) => bool_text(*b).to_string(),
    }
}

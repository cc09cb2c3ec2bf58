use crate::calibration::{evaluate_line, CalibrationError, TokenSet};
use crate::input::load_input;
use std::path::Path;

/// Sums the calibration values of every line in `text`.
///
/// Stops at the first line that fails; no partial total is returned.
pub fn sum_lines(text: &str, set: TokenSet) -> Result<u64, CalibrationError> {
    let mut total: u64 = 0;

    for (index, line) in split_lines(text).enumerate() {
        let value = evaluate_line(line, set).map_err(|source| CalibrationError::Line {
            line_number: index + 1,
            source,
        })?;
        log::debug!("line {}: {}", index + 1, value);
        total += u64::from(value);
    }

    Ok(total)
}

/// Splits `text` on `\n`, `\r\n` and lone `\r`.
///
/// A final line break does not start an extra empty line.
fn split_lines(text: &str) -> impl Iterator<Item = &str> {
    let mut rest = text;
    std::iter::from_fn(move || {
        if rest.is_empty() {
            return None;
        }
        match rest.find(|c: char| c == '\n' || c == '\r') {
            Some(end) => {
                let line = &rest[..end];
                let skip = if rest[end..].starts_with("\r\n") { 2 } else { 1 };
                rest = &rest[end + skip..];
                Some(line)
            }
            None => Some(std::mem::take(&mut rest)),
        }
    })
}

/// Loads the input at `path` and sums it with digits and digit words.
pub fn run(path: impl AsRef<Path>) -> Result<u64, CalibrationError> {
    let content = load_input(path)?;
    sum_lines(&content, TokenSet::DigitsAndWords)
}

pub fn format_sum(total: u64) -> String {
    format!("The sum is {}", total)
}

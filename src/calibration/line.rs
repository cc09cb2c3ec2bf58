use super::scanner::{scan_line, TokenSet};
use super::LineError;

/// Calibration value of one line: first token * 10 + last token.
///
/// A single token counts as both first and last ("treb7uchet" -> 77).
/// A trailing carriage return is ignored. The driver never passes one, since
/// it already splits on `\r`; this only matters for direct callers.
pub fn evaluate_line(line: &str, set: TokenSet) -> Result<u32, LineError> {
    let line = line.strip_suffix('\r').unwrap_or(line);
    let tokens = scan_line(line, set);

    let (first, last) = match (tokens.first(), tokens.last()) {
        (Some(first), Some(last)) => (first, last),
        _ => return Err(LineError::MalformedLine(line.to_string())),
    };

    log::trace!("{:?}: tokens {:?}", line, tokens);

    Ok(first.value()? * 10 + last.value()?)
}

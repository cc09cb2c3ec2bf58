use super::LineError;

/// Digit words and the values they stand for.
pub const DIGIT_WORDS: [(&str, u32); 9] = [
    ("one", 1),
    ("two", 2),
    ("three", 3),
    ("four", 4),
    ("five", 5),
    ("six", 6),
    ("seven", 7),
    ("eight", 8),
    ("nine", 9),
];

/// A numeric token matched inside a line.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct Token<'a> {
    pub text: &'a str,
    /// Byte offset of the match within the line.
    pub start: usize,
}

impl Token<'_> {
    pub fn value(&self) -> Result<u32, LineError> {
        parse_token(self.text)
    }
}

/// Converts a digit literal or a digit word to its value.
///
/// Digit literals are parsed as integers without a range check, so "0" or
/// "10" are accepted here even though the scanner never produces them.
pub fn parse_token(text: &str) -> Result<u32, LineError> {
    if !text.is_empty() && text.bytes().all(|b| b.is_ascii_digit()) {
        return text
            .parse()
            .map_err(|_| LineError::InvalidToken(text.to_string()));
    }

    DIGIT_WORDS
        .iter()
        .find(|(word, _)| *word == text)
        .map(|&(_, value)| value)
        .ok_or_else(|| LineError::InvalidToken(text.to_string()))
}

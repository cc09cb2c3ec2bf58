use super::token::{Token, DIGIT_WORDS};

/// Which patterns the scanner recognises.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TokenSet {
    /// Only the digits `1`-`9`.
    Digits,
    /// Digits plus the words `one` through `nine`.
    #[default]
    DigitsAndWords,
}

impl TokenSet {
    fn includes_words(self) -> bool {
        matches!(self, TokenSet::DigitsAndWords)
    }
}

/// Returns every token in `line`, ordered by start position.
///
/// Matching restarts at each byte, so overlapping tokens are all reported:
/// "oneight" yields `one` then `eight`.
pub fn scan_line(line: &str, set: TokenSet) -> Vec<Token<'_>> {
    let bytes = line.as_bytes();
    let mut tokens = Vec::new();

    for start in 0..bytes.len() {
        if let Some(len) = match_at(&bytes[start..], set) {
            // Patterns are ASCII, so both ends sit on char boundaries.
            tokens.push(Token {
                text: &line[start..start + len],
                start,
            });
        }
    }

    tokens
}

/// Length of the token starting at the head of `rest`, if any.
fn match_at(rest: &[u8], set: TokenSet) -> Option<usize> {
    match rest.first() {
        Some(b'1'..=b'9') => Some(1),
        Some(_) if set.includes_words() => DIGIT_WORDS
            .iter()
            .map(|(word, _)| word.as_bytes())
            .filter(|word| rest.starts_with(word))
            .map(<[u8]>::len)
            .max(),
        _ => None,
    }
}

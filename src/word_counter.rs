// WHY: every page budget decision goes through this count, so it must be pure
// and identical for the same input regardless of where it is called from

use anyhow::Result;
use regex_automata::meta::Regex;
use serde::Serialize;
use tracing::debug;

/// Token classes counted as words. Anything else is a separator.
/// Covers CJK Unified Ideographs, Extension A and the compatibility block.
const WORD_PATTERN: &str =
    r"[\x{3400}-\x{4DBF}\x{4E00}-\x{9FFF}\x{F900}-\x{FAFF}]|[A-Za-z]+|[0-9]+";

/// Per-script breakdown of a word count
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct WordBreakdown {
    /// One per CJK ideograph
    pub cjk: usize,
    /// One per maximal run of ASCII letters
    pub latin: usize,
    /// One per maximal run of ASCII digits
    pub numeric: usize,
}

impl WordBreakdown {
    pub fn total(&self) -> usize {
        self.cjk + self.latin + self.numeric
    }
}

/// Counts semantic words in mixed-script text
///
/// A letter run directly followed by a digit run ("abc123") is two words:
/// the classes are disjoint, so the match stops where the class changes.
#[derive(Debug, Clone)]
pub struct WordCounter {
    tokens: Regex,
}

impl WordCounter {
    /// Compile the token pattern
    pub fn new() -> Result<Self> {
        let tokens = Regex::new(WORD_PATTERN)?;
        debug!("Compiled word token pattern: {}", WORD_PATTERN);
        Ok(Self { tokens })
    }

    /// Total number of words in `text`
    pub fn count(&self, text: &str) -> usize {
        self.tokens.find_iter(text).count()
    }

    /// Word count split by token class
    pub fn breakdown(&self, text: &str) -> WordBreakdown {
        let mut breakdown = WordBreakdown::default();
        for token in self.tokens.find_iter(text) {
            match text[token.range()].chars().next() {
                Some(c) if c.is_ascii_alphabetic() => breakdown.latin += 1,
                Some(c) if c.is_ascii_digit() => breakdown.numeric += 1,
                Some(_) => breakdown.cjk += 1,
                None => {}
            }
        }
        breakdown
    }
}

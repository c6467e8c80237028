// WHY: the paginator needs paragraph and sentence units it can pack without
// cutting through a token; this module produces both from LF-normalized text

use anyhow::Result;
use regex_automata::meta::Regex;
use tracing::debug;

pub mod normalization;

pub use normalization::{collapse_whitespace, collapse_whitespace_into, normalize_line_endings};

/// Characters that terminate a sentence
pub const TERMINATORS: &[char] = &['.', '!', '?', '。', '！', '？'];

/// Closing quotes and brackets that stay with the terminator they follow
const CLOSERS: &[char] = &['"', '\'', '\u{201D}', '\u{2019}', ')', '）', '」', '』'];

/// A blank line, possibly holding other whitespace, separates paragraphs
const PARAGRAPH_BREAK: &str = r"\n\s*\n";

/// Full-width terminators cut with or without following whitespace.
/// ASCII terminators only cut when whitespace follows, so "3.14" stays whole.
const SENTENCE_BREAK: &str =
    r#"[。！？]+[”’"')）」』]*\s*|[.!?]+[”’"')）」』]*\s+"#;

/// A sentence borrowed from its paragraph, trimmed but otherwise untouched
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sentence<'a> {
    pub index: usize,
    pub raw_content: &'a str,
}

impl<'a> Sentence<'a> {
    /// Trimmed source text, exactly as it appears in the document
    pub fn raw(&self) -> &'a str {
        self.raw_content
    }

    /// Whether the sentence already ends in a terminator, ignoring closers
    pub fn is_terminated(&self) -> bool {
        ends_with_terminator(self.raw_content)
    }

    /// Single-line form with a guaranteed terminal mark
    pub fn normalized(&self) -> String {
        let mut buffer = String::new();
        self.normalize_into(&mut buffer);
        buffer
    }

    /// Same as [`Sentence::normalized`] but reuses the supplied buffer
    pub fn normalize_into(&self, buffer: &mut String) {
        collapse_whitespace_into(self.raw_content, buffer);
        if !self.is_terminated() {
            buffer.push('.');
        }
    }
}

/// Splits documents into paragraphs and paragraphs into sentences
#[derive(Debug, Clone)]
pub struct SentenceSplitter {
    paragraph_break: Regex,
    sentence_break: Regex,
}

impl SentenceSplitter {
    pub fn new() -> Result<Self> {
        let paragraph_break = Regex::new(PARAGRAPH_BREAK)?;
        let sentence_break = Regex::new(SENTENCE_BREAK)?;
        debug!("Compiled paragraph and sentence break patterns");
        Ok(Self {
            paragraph_break,
            sentence_break,
        })
    }

    /// Split LF-normalized text on blank lines, dropping empty paragraphs
    pub fn paragraphs<'a>(&self, document: &'a str) -> Vec<&'a str> {
        cut(&self.paragraph_break, document)
    }

    /// Split one paragraph into trimmed, non-empty sentences in source order
    pub fn sentences<'a>(&self, paragraph: &'a str) -> Vec<Sentence<'a>> {
        cut(&self.sentence_break, paragraph)
            .into_iter()
            .enumerate()
            .map(|(index, raw_content)| Sentence { index, raw_content })
            .collect()
    }

    /// Normalized sentences of one paragraph
    pub fn split(&self, paragraph: &str) -> Vec<String> {
        let mut buffer = String::new();
        self.sentences(paragraph)
            .iter()
            .map(|sentence| {
                sentence.normalize_into(&mut buffer);
                buffer.clone()
            })
            .collect()
    }

    /// Reform a paragraph from normalized sentences
    pub fn join(sentences: &[String]) -> String {
        sentences.join(" ")
    }
}

/// Cut `text` after each match of `pattern`, returning trimmed non-empty pieces.
/// The match itself ends the preceding piece, so terminators stay attached
/// and trailing whitespace is trimmed away.
fn cut<'a>(pattern: &Regex, text: &'a str) -> Vec<&'a str> {
    let mut pieces = Vec::new();
    let mut start = 0;
    for found in pattern.find_iter(text) {
        push_trimmed(&mut pieces, &text[start..found.end()]);
        start = found.end();
    }
    push_trimmed(&mut pieces, &text[start..]);
    pieces
}

fn push_trimmed<'a>(pieces: &mut Vec<&'a str>, piece: &'a str) {
    let piece = piece.trim();
    if !piece.is_empty() {
        pieces.push(piece);
    }
}

/// Whether `text` ends in a terminator once trailing closers are ignored
pub fn ends_with_terminator(text: &str) -> bool {
    text.trim_end()
        .trim_end_matches(CLOSERS)
        .ends_with(TERMINATORS)
}

/// Whether `text` ends in a full-width terminator once closers are ignored
pub fn ends_with_full_width_terminator(text: &str) -> bool {
    text.trim_end()
        .trim_end_matches(CLOSERS)
        .ends_with(['。', '！', '？'])
}

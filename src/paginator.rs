// WHY: paragraph-first greedy packing; a paragraph only falls back to
// sentence-level packing when it alone exceeds the budget, and a sentence is
// never cut, so an oversized sentence becomes an oversized page

use anyhow::Result;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::config::WordsPerSection;
use crate::sentence_splitter::{ends_with_full_width_terminator, normalize_line_endings, SentenceSplitter};
use crate::word_counter::WordCounter;

/// Separator between whole paragraphs on a page
const PARAGRAPH_SEPARATOR: &str = "\n\n";

/// One paginated unit of display content
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page {
    /// 0-based position in the page list
    pub index: usize,
    pub content: String,
    pub word_count: usize,
    /// Set when a single paragraph or sentence pushed the page past the budget
    pub oversized: bool,
}

impl Page {
    /// 1-based page number for display
    pub fn number(&self) -> usize {
        self.index + 1
    }
}

/// Aggregate figures for one pagination run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationSummary {
    pub words_per_section: usize,
    pub total_words: usize,
    pub page_count: usize,
    pub oversized_pages: usize,
    pub page_word_counts: Vec<usize>,
}

impl PaginationSummary {
    pub fn from_pages(pages: &[Page], words_per_section: WordsPerSection) -> Self {
        let page_word_counts: Vec<usize> = pages.iter().map(|p| p.word_count).collect();
        Self {
            words_per_section: words_per_section.get(),
            total_words: page_word_counts.iter().sum(),
            page_count: pages.len(),
            oversized_pages: pages.iter().filter(|p| p.oversized).count(),
            page_word_counts,
        }
    }
}

/// Accumulates content for the page being filled
struct PageBuilder<'c> {
    counter: &'c WordCounter,
    budget: usize,
    content: String,
    words: usize,
    separator: &'static str,
    pages: Vec<Page>,
}

impl<'c> PageBuilder<'c> {
    fn new(counter: &'c WordCounter, budget: usize) -> Self {
        Self {
            counter,
            budget,
            content: String::new(),
            words: 0,
            separator: "",
            pages: Vec::new(),
        }
    }

    fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// Close the current page first if `words` more would exceed the budget.
    /// An empty page always accepts, which is how oversized units get placed.
    fn make_room(&mut self, words: usize) {
        if !self.is_empty() && self.words + words > self.budget {
            self.flush();
        }
    }

    fn push(&mut self, text: &str, words: usize) {
        if !self.is_empty() {
            self.content.push_str(self.separator);
        }
        self.content.push_str(text);
        self.words += words;
    }

    fn push_paragraph(&mut self, paragraph: &str, words: usize) {
        self.push(paragraph, words);
        self.separator = PARAGRAPH_SEPARATOR;
    }

    fn push_sentence(&mut self, sentence: &str, words: usize) {
        self.push(sentence, words);
        // CJK prose has no space between sentences
        self.separator = if ends_with_full_width_terminator(sentence) { "" } else { " " };
    }

    /// The next sentence starts a new paragraph
    fn break_paragraph(&mut self) {
        self.separator = PARAGRAPH_SEPARATOR;
    }

    fn flush(&mut self) {
        let content = std::mem::take(&mut self.content);
        self.words = 0;
        self.separator = "";

        let content = content.trim();
        if content.is_empty() {
            return;
        }

        let word_count = self.counter.count(content);
        let page = Page {
            index: self.pages.len(),
            content: content.to_string(),
            word_count,
            oversized: word_count > self.budget,
        };
        debug!(
            page = page.number(),
            words = page.word_count,
            oversized = page.oversized,
            "Closed page"
        );
        self.pages.push(page);
    }

    fn finish(mut self) -> Vec<Page> {
        self.flush();
        self.pages
    }
}

/// Converts a document into an ordered page list under a word budget
#[derive(Debug, Clone)]
pub struct Paginator {
    counter: WordCounter,
    splitter: SentenceSplitter,
}

impl Paginator {
    pub fn new() -> Result<Self> {
        Ok(Self {
            counter: WordCounter::new()?,
            splitter: SentenceSplitter::new()?,
        })
    }

    pub fn word_counter(&self) -> &WordCounter {
        &self.counter
    }

    pub fn splitter(&self) -> &SentenceSplitter {
        &self.splitter
    }

    /// Paginate the whole document. Always a full recompute.
    ///
    /// 1. Split into paragraphs on blank lines.
    /// 2. Close the current page when the next whole paragraph would exceed the budget.
    /// 3. A paragraph larger than the budget by itself is packed sentence by
    ///    sentence, closing pages the same way.
    /// 4. Anything left over becomes the last page.
    pub fn paginate(&self, document: &str, words_per_section: WordsPerSection) -> Vec<Page> {
        let budget = words_per_section.get();
        let document = normalize_line_endings(document);
        let mut builder = PageBuilder::new(&self.counter, budget);

        for paragraph in self.splitter.paragraphs(document.trim()) {
            let paragraph_words = self.counter.count(paragraph);
            builder.make_room(paragraph_words);

            if paragraph_words > budget {
                debug!(words = paragraph_words, budget, "Paragraph exceeds budget, packing by sentence");
                builder.break_paragraph();
                for sentence in self.splitter.sentences(paragraph) {
                    let sentence_words = self.counter.count(sentence.raw());
                    builder.make_room(sentence_words);
                    builder.push_sentence(sentence.raw(), sentence_words);
                }
                builder.break_paragraph();
            } else {
                builder.push_paragraph(paragraph, paragraph_words);
            }
        }

        let pages = builder.finish();
        info!(
            pages = pages.len(),
            total_words = pages.iter().map(|p| p.word_count).sum::<usize>(),
            budget,
            "Pagination complete"
        );
        pages
    }
}

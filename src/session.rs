// WHY: all state for one reader lives in an explicitly constructed session;
// every host event becomes a synchronous call returning the new display state

use anyhow::Result;
use tracing::info;

use crate::config::{ConfigNotice, PaginationConfig, WordsPerSection};
use crate::navigator::{DisplayState, NavKey, PageNavigator, ScrollDirection};
use crate::paginator::{Page, PaginationSummary, Paginator};

/// A host input event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Replace the document with freshly read text
    Load(String),
    /// Raw budget input as typed by the user
    SetWordsPerSection(String),
    Next,
    Previous,
    /// 0-based index, as produced by clicking a page
    GoTo(i64),
    /// 1-based page number, as typed by the user
    JumpTo(String),
    Key(NavKey),
    Scroll(ScrollDirection),
}

/// Result of dispatching a command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub display: DisplayState,
    /// Set when a budget request had to be adjusted
    pub notice: Option<ConfigNotice>,
}

/// One loaded document, its pages and the reader's position
#[derive(Debug, Clone)]
pub struct PaginationSession {
    paginator: Paginator,
    config: PaginationConfig,
    document: String,
    navigator: PageNavigator,
}

impl PaginationSession {
    /// Create an empty session. A budget outside the configured range is clamped.
    pub fn new(mut config: PaginationConfig) -> Result<Self> {
        config.set_words_per_section(config.words_per_section.get() as i64);
        Ok(Self {
            paginator: Paginator::new()?,
            config,
            document: String::new(),
            navigator: PageNavigator::default(),
        })
    }

    pub fn config(&self) -> &PaginationConfig {
        &self.config
    }

    pub fn words_per_section(&self) -> WordsPerSection {
        self.config.words_per_section
    }

    pub fn document(&self) -> &str {
        &self.document
    }

    pub fn pages(&self) -> &[Page] {
        self.navigator.pages()
    }

    pub fn navigator(&self) -> &PageNavigator {
        &self.navigator
    }

    pub fn paginator(&self) -> &Paginator {
        &self.paginator
    }

    pub fn summary(&self) -> PaginationSummary {
        PaginationSummary::from_pages(self.pages(), self.config.words_per_section)
    }

    /// Replace the document and paginate it from scratch
    pub fn load_document(&mut self, raw_text: impl Into<String>) -> &[Page] {
        self.document = raw_text.into();
        info!(bytes = self.document.len(), "Loaded document");
        self.repaginate();
        self.pages()
    }

    /// Clamp and apply a new budget, then paginate from scratch
    pub fn set_words_per_section(&mut self, requested: i64) -> Option<ConfigNotice> {
        let notice = self.config.set_words_per_section(requested);
        self.repaginate();
        notice
    }

    /// Same as [`PaginationSession::set_words_per_section`] for raw text input
    pub fn set_words_per_section_input(&mut self, input: &str) -> Option<ConfigNotice> {
        let notice = self.config.set_words_per_section_input(input);
        self.repaginate();
        notice
    }

    fn repaginate(&mut self) {
        let pages = self.paginator.paginate(&self.document, self.config.words_per_section);
        self.navigator.replace_pages(pages);
    }

    pub fn go_to(&mut self, index: i64) -> DisplayState {
        self.navigator.go_to(index);
        self.display()
    }

    pub fn next(&mut self) -> DisplayState {
        self.navigator.next();
        self.display()
    }

    pub fn previous(&mut self) -> DisplayState {
        self.navigator.previous();
        self.display()
    }

    pub fn jump_to(&mut self, page_number: &str) -> DisplayState {
        self.navigator.jump_to(page_number);
        self.display()
    }

    pub fn current_page(&self) -> Option<&Page> {
        self.navigator.current_page()
    }

    pub fn display(&self) -> DisplayState {
        self.navigator.display()
    }

    /// Apply one host event
    pub fn dispatch(&mut self, command: Command) -> Outcome {
        let notice = match command {
            Command::Load(text) => {
                self.load_document(text);
                None
            }
            Command::SetWordsPerSection(input) => self.set_words_per_section_input(&input),
            Command::Next => {
                self.navigator.next();
                None
            }
            Command::Previous => {
                self.navigator.previous();
                None
            }
            Command::GoTo(index) => {
                self.navigator.go_to(index);
                None
            }
            Command::JumpTo(page_number) => {
                self.navigator.jump_to(&page_number);
                None
            }
            Command::Key(key) => {
                self.navigator.handle_key(key);
                None
            }
            Command::Scroll(direction) => {
                self.navigator.handle_scroll(direction);
                None
            }
        };
        Outcome {
            display: self.display(),
            notice,
        }
    }
}

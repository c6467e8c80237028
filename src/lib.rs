pub mod config;
pub mod navigator;
pub mod paginator;
pub mod reader;
pub mod sentence_splitter;
pub mod session;
pub mod word_counter;

// Re-export main types for convenient access
pub use config::{ConfigNotice, PaginationConfig, WordsPerSection};
pub use navigator::{DisplayState, NavKey, PageNavigator, ScrollDirection};
pub use paginator::{Page, PaginationSummary, Paginator};
pub use sentence_splitter::{Sentence, SentenceSplitter};
pub use session::{Command, Outcome, PaginationSession};
pub use word_counter::{WordBreakdown, WordCounter};

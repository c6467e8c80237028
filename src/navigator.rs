// WHY: out-of-range navigation is a no-op, never an error, and never wraps

use serde::Serialize;
use tracing::debug;

use crate::paginator::Page;

/// Keys the reader responds to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavKey {
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    Other,
}

impl NavKey {
    /// Parse a key name as reported by the host ("ArrowUp", "left", ...)
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "arrowup" | "up" => NavKey::ArrowUp,
            "arrowdown" | "down" => NavKey::ArrowDown,
            "arrowleft" | "left" => NavKey::ArrowLeft,
            "arrowright" | "right" => NavKey::ArrowRight,
            _ => NavKey::Other,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollDirection {
    Up,
    Down,
}

/// What the host needs to render the current state
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayState {
    /// `None` when there are no pages
    pub current_index: Option<usize>,
    pub content: String,
    pub word_count: usize,
    pub total_pages: usize,
    pub can_go_previous: bool,
    pub can_go_next: bool,
}

impl DisplayState {
    /// "n / total", or "0 / 0" for an empty page list
    pub fn page_label(&self) -> String {
        match self.current_index {
            Some(index) => format!("{} / {}", index + 1, self.total_pages),
            None => "0 / 0".to_string(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.total_pages == 0
    }
}

/// Current position over a computed page list
#[derive(Debug, Clone, Default)]
pub struct PageNavigator {
    pages: Vec<Page>,
    current: usize,
}

impl PageNavigator {
    pub fn new(pages: Vec<Page>) -> Self {
        Self { pages, current: 0 }
    }

    /// Swap in a freshly paginated list and return to the first page
    pub fn replace_pages(&mut self, pages: Vec<Page>) {
        self.pages = pages;
        self.current = 0;
    }

    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// Current index, or `None` for an empty page list
    pub fn current_index(&self) -> Option<usize> {
        if self.pages.is_empty() {
            None
        } else {
            Some(self.current)
        }
    }

    pub fn current_page(&self) -> Option<&Page> {
        self.pages.get(self.current)
    }

    /// Move to `index` if it is inside the page list; returns whether it moved
    pub fn go_to(&mut self, index: i64) -> bool {
        match usize::try_from(index) {
            Ok(index) if index < self.pages.len() => {
                debug!(from = self.current, to = index, "Moving to page");
                self.current = index;
                true
            }
            _ => {
                debug!(index, pages = self.pages.len(), "Ignoring out-of-range page index");
                false
            }
        }
    }

    pub fn next(&mut self) -> bool {
        if self.current + 1 < self.pages.len() {
            self.current += 1;
            true
        } else {
            false
        }
    }

    pub fn previous(&mut self) -> bool {
        if self.current > 0 && !self.pages.is_empty() {
            self.current -= 1;
            true
        } else {
            false
        }
    }

    /// Jump to a 1-based page number typed by the user
    pub fn jump_to(&mut self, page_number: &str) -> bool {
        match page_number.trim().parse::<i64>() {
            Ok(number) if number >= 1 => self.go_to(number - 1),
            _ => {
                debug!(input = page_number, "Ignoring invalid page number");
                false
            }
        }
    }

    pub fn handle_key(&mut self, key: NavKey) -> bool {
        if self.pages.is_empty() {
            return false;
        }
        match key {
            NavKey::ArrowUp | NavKey::ArrowLeft => self.previous(),
            NavKey::ArrowDown | NavKey::ArrowRight => self.next(),
            NavKey::Other => false,
        }
    }

    pub fn handle_scroll(&mut self, direction: ScrollDirection) -> bool {
        match direction {
            ScrollDirection::Up => self.previous(),
            ScrollDirection::Down => self.next(),
        }
    }

    pub fn display(&self) -> DisplayState {
        match self.current_page() {
            Some(page) => DisplayState {
                current_index: Some(self.current),
                content: page.content.clone(),
                word_count: page.word_count,
                total_pages: self.pages.len(),
                can_go_previous: self.current > 0,
                can_go_next: self.current + 1 < self.pages.len(),
            },
            None => DisplayState {
                current_index: None,
                content: String::new(),
                word_count: 0,
                total_pages: 0,
                can_go_previous: false,
                can_go_next: false,
            },
        }
    }
}

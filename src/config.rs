// WHY: invalid budgets are recovered here and reported as notices, so nothing
// downstream ever sees a budget outside the accepted range

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::warn;

/// Word budget for a single page
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "usize", into = "usize")]
pub struct WordsPerSection(usize);

impl WordsPerSection {
    /// Hard floor, always enforced
    pub const MIN: usize = 100;
    /// Used when the host input is not a number
    pub const DEFAULT: usize = 500;
    /// Default ceiling; see [`PaginationConfig::ceiling`]
    pub const MAX: usize = 2000;

    pub fn get(self) -> usize {
        self.0
    }
}

impl Default for WordsPerSection {
    fn default() -> Self {
        Self(Self::DEFAULT)
    }
}

/// Values below the floor are raised to it; the ceiling is a session concern
impl From<usize> for WordsPerSection {
    fn from(value: usize) -> Self {
        Self(value.max(Self::MIN))
    }
}

impl From<WordsPerSection> for usize {
    fn from(value: WordsPerSection) -> Self {
        value.0
    }
}

impl fmt::Display for WordsPerSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Why a requested budget was replaced
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ConfigNotice {
    BelowMinimum { requested: i64, applied: usize },
    AboveMaximum { requested: i64, applied: usize },
    NotANumber { input: String, applied: usize },
}

impl ConfigNotice {
    pub fn applied(&self) -> usize {
        match self {
            ConfigNotice::BelowMinimum { applied, .. }
            | ConfigNotice::AboveMaximum { applied, .. }
            | ConfigNotice::NotANumber { applied, .. } => *applied,
        }
    }
}

impl fmt::Display for ConfigNotice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigNotice::BelowMinimum { applied, .. } => {
                write!(f, "At least {applied} words per page are required")
            }
            ConfigNotice::AboveMaximum { applied, .. } => {
                write!(f, "At most {applied} words per page are allowed")
            }
            ConfigNotice::NotANumber { input, applied } => {
                write!(f, "'{input}' is not a number, using {applied} words per page")
            }
        }
    }
}

/// Pagination settings owned by a session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaginationConfig {
    pub words_per_section: WordsPerSection,
    /// Upper bound on the budget; `None` accepts any value above the floor
    pub ceiling: Option<usize>,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            words_per_section: WordsPerSection::default(),
            ceiling: Some(WordsPerSection::MAX),
        }
    }
}

impl PaginationConfig {
    /// Config with no upper bound on the budget
    pub fn without_ceiling() -> Self {
        Self {
            ceiling: None,
            ..Self::default()
        }
    }

    /// Clamp a requested budget into the accepted range
    pub fn resolve(&self, requested: i64) -> (WordsPerSection, Option<ConfigNotice>) {
        let floor = WordsPerSection::MIN;
        // A ceiling below the floor would make the range empty
        let ceiling = self.ceiling.map(|c| c.max(floor));

        if requested < floor as i64 {
            let notice = ConfigNotice::BelowMinimum { requested, applied: floor };
            warn!(requested, applied = floor, "Words per section below minimum");
            return (WordsPerSection(floor), Some(notice));
        }

        let requested_words = usize::try_from(requested).unwrap_or(usize::MAX);
        match ceiling {
            Some(ceiling) if requested_words > ceiling => {
                let notice = ConfigNotice::AboveMaximum { requested, applied: ceiling };
                warn!(requested, applied = ceiling, "Words per section above maximum");
                (WordsPerSection(ceiling), Some(notice))
            }
            _ => (WordsPerSection(requested_words), None),
        }
    }

    /// Parse and clamp raw host input
    pub fn resolve_input(&self, input: &str) -> (WordsPerSection, Option<ConfigNotice>) {
        let trimmed = input.trim();
        match trimmed.parse::<i64>() {
            Ok(requested) => self.resolve(requested),
            Err(_) => {
                let applied = self.resolve(WordsPerSection::DEFAULT as i64).0;
                warn!(input = trimmed, applied = applied.get(), "Words per section is not a number");
                let notice = ConfigNotice::NotANumber {
                    input: trimmed.to_string(),
                    applied: applied.get(),
                };
                (applied, Some(notice))
            }
        }
    }

    /// Clamp `requested` and store it, returning the notice if one applied
    pub fn set_words_per_section(&mut self, requested: i64) -> Option<ConfigNotice> {
        let (words, notice) = self.resolve(requested);
        self.words_per_section = words;
        notice
    }

    /// Parse, clamp and store raw host input
    pub fn set_words_per_section_input(&mut self, input: &str) -> Option<ConfigNotice> {
        let (words, notice) = self.resolve_input(input);
        self.words_per_section = words;
        notice
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = PaginationConfig::default();
        assert_eq!(config.words_per_section.get(), 500);
        assert_eq!(config.ceiling, Some(2000));
    }

    #[test]
    fn test_below_floor_clamps_up() {
        let config = PaginationConfig::default();
        let (words, notice) = config.resolve(50);
        assert_eq!(words.get(), 100);
        assert_eq!(notice, Some(ConfigNotice::BelowMinimum { requested: 50, applied: 100 }));

        let (words, _) = config.resolve(-7);
        assert_eq!(words.get(), 100);
    }

    #[test]
    fn test_above_ceiling_clamps_down() {
        let config = PaginationConfig::default();
        let (words, notice) = config.resolve(5000);
        assert_eq!(words.get(), 2000);
        assert_eq!(notice.map(|n| n.applied()), Some(2000));
    }

    #[test]
    fn test_no_ceiling_accepts_large_values() {
        let config = PaginationConfig::without_ceiling();
        let (words, notice) = config.resolve(5000);
        assert_eq!(words.get(), 5000);
        assert!(notice.is_none());
    }

    #[test]
    fn test_bounds_are_inclusive() {
        let config = PaginationConfig::default();
        assert_eq!(config.resolve(100), (WordsPerSection(100), None));
        assert_eq!(config.resolve(2000), (WordsPerSection(2000), None));
    }

    #[test]
    fn test_non_numeric_input_resets_to_default() {
        let config = PaginationConfig::default();
        let (words, notice) = config.resolve_input("lots");
        assert_eq!(words.get(), 500);
        assert!(matches!(notice, Some(ConfigNotice::NotANumber { .. })));

        let (words, notice) = config.resolve_input(" 750 ");
        assert_eq!(words.get(), 750);
        assert!(notice.is_none());
    }

    #[test]
    fn test_set_stores_clamped_value() {
        let mut config = PaginationConfig::default();
        let notice = config.set_words_per_section(50);
        assert!(notice.is_some());
        assert_eq!(config.words_per_section.get(), 100);

        assert!(config.set_words_per_section_input("300").is_none());
        assert_eq!(config.words_per_section.get(), 300);
    }

    #[test]
    fn test_config_deserializes_with_defaults() {
        let config: PaginationConfig = serde_json::from_str(r#"{"words_per_section": 800}"#).unwrap();
        assert_eq!(config.words_per_section.get(), 800);
        assert_eq!(config.ceiling, Some(2000));
    }

    #[test]
    fn test_deserialized_budget_respects_floor() {
        let config: PaginationConfig = serde_json::from_str(r#"{"words_per_section": 20}"#).unwrap();
        assert_eq!(config.words_per_section.get(), 100);
    }

    #[test]
    fn test_notice_messages() {
        let notice = ConfigNotice::BelowMinimum { requested: 10, applied: 100 };
        assert_eq!(notice.to_string(), "At least 100 words per page are required");
    }
}

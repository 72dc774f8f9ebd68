//! Core data model types for lexiquiz.
//!
//! These are the types shared by the parser, the quiz engine, and the
//! flat-file stores.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// One phrase group and its translation group, loaded from a single record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationEntry {
    /// Source-language variants of the phrase. Never empty.
    pub phrases: Vec<String>,
    /// Acceptable target-language answers. Never empty.
    pub translations: Vec<String>,
}

impl TranslationEntry {
    /// Build an entry, returning `None` if either group is empty.
    pub fn new(phrases: Vec<String>, translations: Vec<String>) -> Option<Self> {
        if phrases.is_empty() || translations.is_empty() {
            return None;
        }
        Some(Self {
            phrases,
            translations,
        })
    }

    /// The group prompts are drawn from in the given direction.
    pub fn prompts(&self, direction: Direction) -> &[String] {
        match direction {
            Direction::SourceToTarget => &self.phrases,
            Direction::TargetToSource => &self.translations,
        }
    }

    /// The group accepted answers come from in the given direction.
    pub fn answers(&self, direction: Direction) -> &[String] {
        match direction {
            Direction::SourceToTarget => &self.translations,
            Direction::TargetToSource => &self.phrases,
        }
    }
}

/// Which group a prompt is drawn from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    /// Prompt with a source phrase, expect a translation.
    SourceToTarget,
    /// Prompt with a translation, expect a source phrase.
    TargetToSource,
}

impl Direction {
    /// The menu digit that selects this direction.
    pub fn menu_choice(self) -> &'static str {
        match self {
            Direction::SourceToTarget => "1",
            Direction::TargetToSource => "2",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::SourceToTarget => write!(f, "source-to-target"),
            Direction::TargetToSource => write!(f, "target-to-source"),
        }
    }
}

impl FromStr for Direction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "1" | "source-to-target" | "forward" => Ok(Direction::SourceToTarget),
            "2" | "target-to-source" | "reverse" => Ok(Direction::TargetToSource),
            other => Err(format!("unknown direction: {other}")),
        }
    }
}

/// A prompt together with the answers that count as correct for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    /// The canonical word shown to the user. Also the progress key.
    pub prompt: String,
    /// Answers accepted for this prompt, in source order.
    pub accepted: Vec<String>,
}

/// Per-user incorrect-attempt counts, keyed by canonical word.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProgressRecord {
    counts: BTreeMap<String, u32>,
}

impl ProgressRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count stored for `word`, zero if absent.
    pub fn count(&self, word: &str) -> u32 {
        self.counts.get(word).copied().unwrap_or(0)
    }

    /// Increment the count for `word` and return the new value.
    pub fn increment(&mut self, word: &str) -> u32 {
        let count = self.counts.entry(word.to_string()).or_insert(0);
        *count = count.saturating_add(1);
        *count
    }

    /// Add `count` to whatever is already stored for `word`.
    ///
    /// Used when loading a file that lists the same word more than once.
    pub fn merge(&mut self, word: &str, count: u32) {
        let slot = self.counts.entry(word.to_string()).or_insert(0);
        *slot = slot.saturating_add(count);
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Iterate words in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.counts.iter().map(|(w, c)| (w.as_str(), *c))
    }

    /// Sum of all counts.
    pub fn total(&self) -> u64 {
        self.counts.values().map(|&c| u64::from(c)).sum()
    }

    /// Words ordered by count descending, ties broken alphabetically.
    pub fn most_missed(&self, n: usize) -> Vec<(&str, u32)> {
        let mut words: Vec<(&str, u32)> = self.iter().collect();
        words.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        words.truncate(n);
        words
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry() -> TranslationEntry {
        TranslationEntry::new(
            vec!["cat".into(), "feline".into()],
            vec!["chat".into(), "félin".into()],
        )
        .unwrap()
    }

    #[test]
    fn entry_rejects_empty_groups() {
        assert!(TranslationEntry::new(vec![], vec!["chat".into()]).is_none());
        assert!(TranslationEntry::new(vec!["cat".into()], vec![]).is_none());
    }

    #[test]
    fn entry_groups_follow_direction() {
        let e = entry();
        assert_eq!(e.prompts(Direction::SourceToTarget), ["cat", "feline"]);
        assert_eq!(e.answers(Direction::SourceToTarget), ["chat", "félin"]);
        assert_eq!(e.prompts(Direction::TargetToSource), ["chat", "félin"]);
        assert_eq!(e.answers(Direction::TargetToSource), ["cat", "feline"]);
    }

    #[test]
    fn direction_display_and_parse() {
        assert_eq!(Direction::SourceToTarget.to_string(), "source-to-target");
        assert_eq!("1".parse::<Direction>().unwrap(), Direction::SourceToTarget);
        assert_eq!(" 2 ".parse::<Direction>().unwrap(), Direction::TargetToSource);
        assert_eq!(
            "Reverse".parse::<Direction>().unwrap(),
            Direction::TargetToSource
        );
        assert!("3".parse::<Direction>().is_err());
        assert_eq!(Direction::TargetToSource.menu_choice(), "2");
        assert_eq!(
            Direction::TargetToSource.menu_choice().parse::<Direction>().unwrap(),
            Direction::TargetToSource
        );
    }

    #[test]
    fn progress_increment_and_merge() {
        let mut record = ProgressRecord::new();
        assert_eq!(record.increment("chat"), 1);
        assert_eq!(record.increment("chat"), 2);
        record.merge("chien", 4);
        record.merge("chien", 1);
        assert_eq!(record.count("chat"), 2);
        assert_eq!(record.count("chien"), 5);
        assert_eq!(record.count("oiseau"), 0);
        assert_eq!(record.total(), 7);
        assert_eq!(record.len(), 2);
    }

    #[test]
    fn most_missed_orders_by_count_then_word() {
        let mut record = ProgressRecord::new();
        record.merge("b", 2);
        record.merge("a", 2);
        record.merge("c", 5);
        record.merge("d", 1);
        assert_eq!(record.most_missed(3), vec![("c", 5), ("a", 2), ("b", 2)]);
    }

    #[test]
    fn progress_serializes_as_plain_map() {
        let mut record = ProgressRecord::new();
        record.merge("chat", 3);
        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(json, r#"{"chat":3}"#);
    }
}

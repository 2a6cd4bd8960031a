//! Conversion history and theme preference.
//!
//! The converters never read or write these; a UI layer records each
//! successful conversion through a [`HistoryStore`] and persists its theme
//! through a [`ThemeStore`]. Both are traits so the host decides where the
//! data lives. [`BoundedHistory`] and [`MemoryThemeStore`] keep it in memory.
//!
//! ```rust
//! use chrono::Utc;
//! use convkit::history::{BoundedHistory, HistoryEntry, HistoryStore};
//!
//! let mut history = BoundedHistory::default();
//! history.push(HistoryEntry::new("CSV", "JSON", Utc::now()));
//! history.push(HistoryEntry::new("Text", "Binary", Utc::now()).with_details("UTF16"));
//!
//! let entries = history.entries();
//! assert_eq!(entries[0].to_string(), "Text → Binary (UTF16)");
//! assert_eq!(entries[1].to_string(), "CSV → JSON");
//! ```

use crate::{Error, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::fmt;
use std::str::FromStr;

/// Entries kept by [`BoundedHistory`] unless told otherwise.
pub const MAX_HISTORY: usize = 10;

/// Storage key hosts use for the serialized history list.
pub const HISTORY_KEY: &str = "conversionHistory";
/// Storage key hosts use for the theme name.
pub const THEME_KEY: &str = "theme";

/// One successful conversion.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub from: String,
    pub to: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    pub timestamp: DateTime<Utc>,
}

impl HistoryEntry {
    pub fn new(from: impl Into<String>, to: impl Into<String>, timestamp: DateTime<Utc>) -> Self {
        HistoryEntry {
            from: from.into(),
            to: to.into(),
            details: None,
            timestamp,
        }
    }

    #[must_use]
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }
}

impl fmt::Display for HistoryEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} → {}", self.from, self.to)?;
        if let Some(details) = &self.details {
            write!(f, " ({})", details)?;
        }
        Ok(())
    }
}

/// Where conversion history lives.
pub trait HistoryStore {
    /// Entries, most recent first.
    fn entries(&self) -> Vec<HistoryEntry>;

    /// Records `entry` as the most recent one.
    fn push(&mut self, entry: HistoryEntry);

    fn clear(&mut self);
}

/// In-memory history that forgets the oldest entry once full.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BoundedHistory {
    entries: VecDeque<HistoryEntry>,
    capacity: usize,
}

impl Default for BoundedHistory {
    fn default() -> Self {
        BoundedHistory::with_capacity(MAX_HISTORY)
    }
}

impl BoundedHistory {
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        BoundedHistory {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Rebuilds a history from previously stored entries (most recent
    /// first), dropping any beyond `capacity`.
    #[must_use]
    pub fn restore(entries: Vec<HistoryEntry>, capacity: usize) -> Self {
        let mut entries = VecDeque::from(entries);
        entries.truncate(capacity);
        BoundedHistory { entries, capacity }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter()
    }
}

impl HistoryStore for BoundedHistory {
    fn entries(&self) -> Vec<HistoryEntry> {
        self.entries.iter().cloned().collect()
    }

    fn push(&mut self, entry: HistoryEntry) {
        if self.capacity == 0 {
            return;
        }
        self.entries.push_front(entry);
        self.entries.truncate(self.capacity);
    }

    fn clear(&mut self) {
        self.entries.clear();
    }
}

/// UI color scheme.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    #[must_use]
    pub const fn toggle(self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(Error::unsupported_option(format!("theme '{}'", other))),
        }
    }
}

/// Where the theme preference lives.
pub trait ThemeStore {
    /// The saved theme, or [`Theme::Light`] when nothing is saved.
    fn load(&self) -> Theme;

    fn save(&mut self, theme: Theme);

    /// Flips the saved theme and returns the new one.
    fn toggle(&mut self) -> Theme {
        let next = self.load().toggle();
        self.save(next);
        next
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MemoryThemeStore {
    theme: Option<Theme>,
}

impl ThemeStore for MemoryThemeStore {
    fn load(&self) -> Theme {
        self.theme.unwrap_or_default()
    }

    fn save(&mut self, theme: Theme) {
        self.theme = Some(theme);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn entry(n: i64) -> HistoryEntry {
        HistoryEntry::new(format!("in{n}"), format!("out{n}"), Utc.timestamp_opt(n, 0).unwrap())
    }

    #[test]
    fn test_most_recent_first() {
        let mut history = BoundedHistory::default();
        history.push(entry(1));
        history.push(entry(2));
        let froms: Vec<String> = history.entries().into_iter().map(|e| e.from).collect();
        assert_eq!(froms, vec!["in2", "in1"]);
    }

    #[test]
    fn test_bounded() {
        let mut history = BoundedHistory::default();
        for n in 0..25 {
            history.push(entry(n));
        }
        assert_eq!(history.len(), MAX_HISTORY);
        assert_eq!(history.entries()[0], entry(24));
        assert_eq!(history.entries()[MAX_HISTORY - 1], entry(15));
    }

    #[test]
    fn test_zero_capacity() {
        let mut history = BoundedHistory::with_capacity(0);
        history.push(entry(1));
        assert!(history.is_empty());
    }

    #[test]
    fn test_clear() {
        let mut history = BoundedHistory::default();
        history.push(entry(1));
        history.clear();
        assert!(history.entries().is_empty());
    }

    #[test]
    fn test_restore_truncates() {
        let stored: Vec<HistoryEntry> = (0..12).map(entry).collect();
        let history = BoundedHistory::restore(stored, MAX_HISTORY);
        assert_eq!(history.len(), MAX_HISTORY);
        assert_eq!(history.iter().next(), Some(&entry(0)));
    }

    #[test]
    fn test_theme_toggle() {
        let mut store = MemoryThemeStore::default();
        assert_eq!(store.load(), Theme::Light);
        assert_eq!(store.toggle(), Theme::Dark);
        assert_eq!(store.load(), Theme::Dark);
        assert_eq!(store.toggle(), Theme::Light);
    }

    #[test]
    fn test_theme_parse() {
        assert_eq!("dark".parse::<Theme>().unwrap(), Theme::Dark);
        assert!("sepia".parse::<Theme>().is_err());
        assert_eq!(Theme::Dark.to_string(), "dark");
    }
}

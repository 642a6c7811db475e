//! Bounded log of completed evaluations.
//!
//! Every successful equals press records the expression and its result.
//! The log is capped so a long session never grows without bound.

use crate::core::format_number;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// A single completed evaluation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// The expression as typed, without the trailing equals
    pub expression: String,
    /// The numeric result
    pub result: f64,
    /// When the evaluation happened (Unix epoch millis)
    pub timestamp: u64,
}

impl HistoryEntry {
    /// Creates a new entry stamped with the current time
    #[must_use]
    pub fn new(expression: String, result: f64) -> Self {
        Self {
            expression,
            result,
            timestamp: Self::current_timestamp(),
        }
    }

    /// Creates an entry with an explicit timestamp (for testing)
    #[must_use]
    pub fn with_timestamp(expression: String, result: f64, timestamp: u64) -> Self {
        Self {
            expression,
            result,
            timestamp,
        }
    }

    fn current_timestamp() -> u64 {
        use std::time::{SystemTime, UNIX_EPOCH};
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0)
    }

    /// Renders the entry as `expression = result`, with the result
    /// formatted the same way the output line formats it
    #[must_use]
    pub fn display(&self) -> String {
        format!("{} = {}", self.expression, format_number(self.result))
    }
}

/// Bounded queue of past evaluations, oldest first
#[derive(Debug, Clone)]
pub struct History {
    entries: VecDeque<HistoryEntry>,
    max_entries: usize,
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}

impl History {
    /// Default maximum number of retained entries
    pub const DEFAULT_MAX_ENTRIES: usize = 100;

    /// Creates an empty history with the default cap
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: VecDeque::new(),
            max_entries: Self::DEFAULT_MAX_ENTRIES,
        }
    }

    /// Creates an empty history with a custom cap
    #[must_use]
    pub fn with_capacity(max_entries: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(max_entries),
            max_entries,
        }
    }

    /// Appends an entry, evicting the oldest when at capacity
    pub fn push(&mut self, entry: HistoryEntry) {
        if self.entries.len() >= self.max_entries {
            self.entries.pop_front();
        }
        self.entries.push_back(entry);
    }

    /// Records a completed evaluation
    pub fn record(&mut self, expression: &str, result: f64) {
        self.push(HistoryEntry::new(expression.to_string(), result));
    }

    /// Returns the number of retained entries
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if nothing has been recorded
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the retention cap
    #[must_use]
    pub fn max_entries(&self) -> usize {
        self.max_entries
    }

    /// Discards all entries
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Iterates oldest first
    pub fn iter(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter()
    }

    /// Iterates newest first, the order the history panel renders in
    pub fn iter_rev(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter().rev()
    }

    /// Returns the most recent entry
    #[must_use]
    pub fn last(&self) -> Option<&HistoryEntry> {
        self.entries.back()
    }

    /// Returns the oldest retained entry
    #[must_use]
    pub fn first(&self) -> Option<&HistoryEntry> {
        self.entries.front()
    }

    /// Returns the entry at the given index (0 = oldest)
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&HistoryEntry> {
        self.entries.get(index)
    }

    /// Serializes the entries to JSON
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.entries.iter().collect::<Vec<_>>())
    }

    /// Restores a history from JSON produced by [`Self::to_json`]
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let entries: Vec<HistoryEntry> = serde_json::from_str(json)?;
        let mut history = Self::new();
        for entry in entries {
            history.push(entry);
        }
        Ok(history)
    }
}

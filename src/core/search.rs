//! Substring search over stall names.
//!
//! [`contains`] is a Boyer-Moore search using only the bad-character rule.
//! The table is rebuilt on every call and nothing is cached between calls.
//!
//! An empty text or an empty pattern never matches. A search box that wants
//! "empty query shows everything" has to handle that before calling in here.

use crate::domain::model::{Collection, Record};
use std::collections::HashMap;

/// How far the window may jump when a character causes a mismatch, measured
/// from the end of the pattern.
#[derive(Debug, Clone)]
pub struct BadCharacterTable {
    skips: HashMap<char, usize>,
    pattern_len: usize,
}

impl BadCharacterTable {
    pub fn new(pattern: &[char]) -> Self {
        let pattern_len = pattern.len();
        let mut skips = HashMap::with_capacity(pattern_len);
        // Later occurrences overwrite earlier ones.
        for (index, &ch) in pattern.iter().enumerate() {
            skips.insert(ch, pattern_len - index - 1);
        }
        Self { skips, pattern_len }
    }

    /// Distance from the last occurrence of `ch` to the end of the pattern,
    /// or the full pattern length when `ch` does not occur.
    pub fn skip(&self, ch: char) -> usize {
        self.skips.get(&ch).copied().unwrap_or(self.pattern_len)
    }
}

pub fn contains(text: &str, pattern: &str) -> bool {
    if text.is_empty() || pattern.is_empty() {
        return false;
    }

    let text: Vec<char> = text.chars().collect();
    let pattern: Vec<char> = pattern.chars().collect();
    let (n, m) = (text.len(), pattern.len());
    if m > n {
        return false;
    }

    let table = BadCharacterTable::new(&pattern);
    let mut start = 0;

    while start <= n - m {
        let mut j = m;
        while j > 0 && pattern[j - 1] == text[start + j - 1] {
            j -= 1;
        }
        if j == 0 {
            return true;
        }

        // Mismatch at pattern index j - 1. Line the last occurrence of the
        // offending text character up under it, moving at least one step.
        let mismatched = j - 1;
        let already_matched = m - 1 - mismatched;
        let shift = table
            .skip(text[start + mismatched])
            .saturating_sub(already_matched)
            .max(1);
        start += shift;
    }

    false
}

/// Case-insensitive [`contains`] against one string field. Missing and
/// non-text fields do not match.
pub fn field_contains(record: &Record, field: &str, lowered_pattern: &str) -> bool {
    record
        .get_str(field)
        .is_some_and(|value| contains(&value.to_lowercase(), lowered_pattern))
}

/// Keeps the records whose `field` contains `pattern`, ignoring case, in
/// their original order.
pub fn filter_by_substring(records: &[Record], field: &str, pattern: &str) -> Collection {
    let pattern = pattern.to_lowercase();
    let matched: Collection = records
        .iter()
        .filter(|record| field_contains(record, field, &pattern))
        .cloned()
        .collect();

    tracing::debug!(
        "Search '{}' on '{}' kept {} of {} records",
        pattern,
        field,
        matched.len(),
        records.len()
    );
    matched
}

/// Distinct values of `field` matching `query`, in first-seen order, for an
/// autocomplete search box.
pub fn suggest(records: &[Record], field: &str, query: &str, limit: usize) -> Vec<String> {
    let query = query.trim().to_lowercase();
    let mut suggestions: Vec<String> = Vec::new();

    for record in records {
        if suggestions.len() >= limit {
            break;
        }
        let Some(value) = record.get_str(field) else {
            continue;
        };
        if contains(&value.to_lowercase(), &query) && !suggestions.iter().any(|s| s == value) {
            suggestions.push(value.to_string());
        }
    }

    suggestions
}

//! Participant roster normalization.
//!
//! Raw input is whatever the user typed: padded whitespace, blank rows,
//! case-variant duplicates ("Ann" next to "ann"). Normalization is a pure
//! pass over that input, recomputed on every draw.

use serde::{Deserialize, Serialize};

/// Result of normalizing a raw participant list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Normalization {
    /// Trimmed, non-blank entries in input order, original casing kept.
    pub trimmed: Vec<String>,
    /// Subsequence of `trimmed` with at most one entry per case-insensitive
    /// identity, keeping the first occurrence.
    pub unique: Vec<String>,
}

impl Normalization {
    /// How many entries were discarded as case-insensitive duplicates.
    pub fn duplicates_removed(&self) -> usize {
        self.trimmed.len() - self.unique.len()
    }
}

/// Normalize a raw participant list: trim, drop blanks, then de-duplicate
/// case-insensitively keeping the first occurrence's casing and position.
///
/// Total over any input; no error conditions.
pub fn normalize<I, S>(names: I) -> Normalization
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let trimmed: Vec<String> = names
        .into_iter()
        .map(|name| name.as_ref().trim().to_string())
        .filter(|name| !name.is_empty())
        .collect();

    let mut unique = Vec::new();
    let mut seen = std::collections::HashSet::new();

    for name in &trimmed {
        let key = name.to_lowercase();
        if seen.insert(key) {
            unique.push(name.clone());
        }
    }

    Normalization { trimmed, unique }
}

/// Split a free-text roster blob into candidate names.
///
/// Entries are separated by newlines or commas; runs of inner whitespace
/// collapse to a single space. Blank chunks are dropped. The output still
/// goes through [`normalize`] for de-duplication.
pub fn split_roster(raw: &str) -> Vec<String> {
    raw.split(['\n', ','])
        .map(|chunk| chunk.split_whitespace().collect::<Vec<_>>().join(" "))
        .filter(|name| !name.is_empty())
        .collect()
}

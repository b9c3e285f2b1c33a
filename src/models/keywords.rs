//! Normalized keyword sets.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// A set of normalized keyword strings.
///
/// Every entry is trimmed and lowercased; empty strings are dropped and
/// duplicates collapse. Iteration order is sorted but carries no meaning.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KeywordSet(BTreeSet<String>);

impl KeywordSet {
    /// Creates an empty keyword set.
    #[must_use]
    pub const fn new() -> Self {
        Self(BTreeSet::new())
    }

    /// Inserts a keyword after normalizing it.
    ///
    /// Returns `true` if the keyword was not already present.
    pub fn insert(&mut self, keyword: &str) -> bool {
        let normalized = keyword.trim().to_lowercase();
        if normalized.is_empty() {
            return false;
        }
        self.0.insert(normalized)
    }

    /// Returns true if the (already normalized) keyword is present.
    #[must_use]
    pub fn contains(&self, keyword: &str) -> bool {
        self.0.contains(keyword)
    }

    /// Number of distinct keywords.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the set holds no keywords.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over the keywords.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// Splits every keyword on whitespace and returns the distinct words.
    #[must_use]
    pub fn words(&self) -> BTreeSet<&str> {
        self.0.iter().flat_map(|k| k.split_whitespace()).collect()
    }
}

impl<'a> FromIterator<&'a str> for KeywordSet {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let mut set = Self::new();
        for keyword in iter {
            set.insert(keyword);
        }
        set
    }
}

impl FromIterator<String> for KeywordSet {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        let mut set = Self::new();
        for keyword in iter {
            set.insert(&keyword);
        }
        set
    }
}

impl Extend<String> for KeywordSet {
    fn extend<I: IntoIterator<Item = String>>(&mut self, iter: I) {
        for keyword in iter {
            self.insert(&keyword);
        }
    }
}

impl<'a> IntoIterator for &'a KeywordSet {
    type Item = &'a String;
    type IntoIter = std::collections::btree_set::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalizes_and_dedupes() {
        let set: KeywordSet = ["Landlord", " landlord ", "DEPOSIT", "", "   "]
            .into_iter()
            .collect();
        assert_eq!(set.len(), 2);
        assert!(set.contains("landlord"));
        assert!(set.contains("deposit"));
    }

    #[test]
    fn test_words_splits_phrases() {
        let set: KeywordSet = ["security deposit", "return deposit", "landlord"]
            .into_iter()
            .collect();
        let words: Vec<&str> = set.words().into_iter().collect();
        assert_eq!(words, vec!["deposit", "landlord", "return", "security"]);
    }

    #[test]
    fn test_insert_reports_new_entries() {
        let mut set = KeywordSet::new();
        assert!(set.insert("Wage"));
        assert!(!set.insert("wage"));
        assert!(!set.insert(""));
        assert_eq!(set.iter().collect::<Vec<_>>(), vec!["wage"]);
    }
}

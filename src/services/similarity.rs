//! Three-tier keyword similarity.
//!
//! ```text
//! similarity = (5 * exact + 2 * partial + overlap) / (5 * max(|Q|, |R|))
//! ```
//!
//! - `exact`: keyword pairs that are equal
//! - `partial`: keyword pairs where either contains the other (exact pairs
//!   count here too)
//! - `overlap`: distinct whitespace-separated words shared by both sets
//!
//! The result is clamped to 1.0.

// Keyword counts are tiny; f64 represents them exactly.
#![allow(clippy::cast_precision_loss)]

use crate::models::KeywordSet;

/// Weight of an exact keyword match.
pub const EXACT_WEIGHT: f64 = 5.0;

/// Weight of a substring match in either direction.
pub const PARTIAL_WEIGHT: f64 = 2.0;

/// Weight of each shared word.
pub const OVERLAP_WEIGHT: f64 = 1.0;

/// Raw match counts behind a similarity score.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MatchCounts {
    /// Equal keyword pairs.
    pub exact: usize,
    /// Keyword pairs where one contains the other (includes exact pairs).
    pub partial: usize,
    /// Distinct words present in both sets.
    pub overlap: usize,
}

impl MatchCounts {
    /// Counts the matches between a query set and a rule set.
    #[must_use]
    pub fn between(query: &KeywordSet, rule: &KeywordSet) -> Self {
        let mut counts = Self::default();
        for q in query {
            for r in rule {
                if q == r {
                    counts.exact += 1;
                }
                if q.contains(r.as_str()) || r.contains(q.as_str()) {
                    counts.partial += 1;
                }
            }
        }
        counts.overlap = query.words().intersection(&rule.words()).count();
        counts
    }

    /// Weighted sum of the counts.
    #[must_use]
    pub fn weighted(&self) -> f64 {
        (self.exact as f64).mul_add(
            EXACT_WEIGHT,
            (self.partial as f64).mul_add(PARTIAL_WEIGHT, self.overlap as f64 * OVERLAP_WEIGHT),
        )
    }
}

/// Scores how well `rule` keywords match `query` keywords, in `[0.0, 1.0]`.
///
/// Returns 0.0 if either set is empty. Symmetric in its arguments.
///
/// # Examples
///
/// ```rust
/// use legalaid::KeywordSet;
/// use legalaid::services::similarity::score;
///
/// let set: KeywordSet = ["landlord", "deposit"].into_iter().collect();
/// assert!((score(&set, &set) - 1.0).abs() < f64::EPSILON);
/// assert!(score(&set, &KeywordSet::new()).abs() < f64::EPSILON);
/// ```
#[must_use]
pub fn score(query: &KeywordSet, rule: &KeywordSet) -> f64 {
    if query.is_empty() || rule.is_empty() {
        return 0.0;
    }

    let counts = MatchCounts::between(query, rule);
    let max_possible = EXACT_WEIGHT * query.len().max(rule.len()) as f64;
    (counts.weighted() / max_possible).min(1.0)
}

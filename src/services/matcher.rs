//! Best-rule selection.

use crate::Result;
use crate::models::Rule;
use crate::services::KeywordExtractor;
use crate::services::similarity::score;
use crate::storage::RuleSet;
use std::sync::Arc;
use tracing::instrument;

/// A rule must score strictly above this to be returned.
pub const MATCH_THRESHOLD: f64 = 0.3;

/// The best rule for a query and its score.
#[derive(Debug, Clone, Copy)]
pub struct MatchResult<'a> {
    /// The winning rule.
    pub rule: &'a Rule,
    /// Its similarity score, in `(MATCH_THRESHOLD, 1.0]`.
    pub score: f64,
}

/// Finds the best-scoring rule within a category.
#[derive(Debug, Clone)]
pub struct RuleMatcher {
    rules: Arc<RuleSet>,
    extractor: KeywordExtractor,
    threshold: f64,
}

impl RuleMatcher {
    /// Creates a matcher over `rules`.
    #[must_use]
    pub const fn new(rules: Arc<RuleSet>, extractor: KeywordExtractor) -> Self {
        Self {
            rules,
            extractor,
            threshold: MATCH_THRESHOLD,
        }
    }

    /// Overrides the match threshold.
    #[must_use]
    pub const fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    /// Returns the rule set.
    #[must_use]
    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    /// Returns the keyword extractor.
    #[must_use]
    pub const fn extractor(&self) -> &KeywordExtractor {
        &self.extractor
    }

    /// Returns the best rule in `category` for `query`, or `None` if no rule
    /// scores above the threshold.
    ///
    /// # Errors
    ///
    /// Propagates keyword extraction failures.
    pub fn find_best(&self, query: &str, category: &str) -> Result<Option<&Rule>> {
        Ok(self.find_best_match(query, category)?.map(|m| m.rule))
    }

    /// Like [`find_best`](Self::find_best) but also returns the score.
    ///
    /// Rules outside `category` (case-insensitive) are never considered. A
    /// candidate replaces the current best only if it scores strictly higher,
    /// so the earliest rule wins ties.
    ///
    /// # Errors
    ///
    /// Propagates keyword extraction failures.
    #[instrument(skip(self, query, category), fields(operation = "find_best_match", category = %category))]
    pub fn find_best_match(&self, query: &str, category: &str) -> Result<Option<MatchResult<'_>>> {
        let query_keywords = self.extractor.extract(query)?;

        let mut best: Option<MatchResult<'_>> = None;
        let mut best_score = 0.0_f64;
        let mut considered = 0_usize;

        for entry in self.rules.in_category(category) {
            considered += 1;
            let candidate = score(&query_keywords, entry.keywords());
            tracing::trace!(
                rule_id = %entry.rule().rule_id,
                score = candidate,
                "Scored rule"
            );
            if candidate > best_score && candidate > self.threshold {
                best_score = candidate;
                best = Some(MatchResult {
                    rule: entry.rule(),
                    score: candidate,
                });
            }
        }

        tracing::debug!(
            considered,
            matched = best.map(|m| m.rule.rule_id.as_str()),
            score = best_score,
            "Rule matching complete"
        );
        Ok(best)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RuleId;
    use crate::nlp::RuleBasedTagger;

    fn rule(id: &str, category: &str, keywords: &[&str]) -> Rule {
        Rule {
            rule_id: RuleId::new(id),
            category: category.to_string(),
            keywords: keywords.iter().map(ToString::to_string).collect(),
            answer: format!("answer {id}"),
            suggestion: String::new(),
            reasoning: String::new(),
            applicable_laws: Vec::new(),
            action_plan: Vec::new(),
            scenarios: None,
        }
    }

    fn matcher(rules: Vec<Rule>) -> RuleMatcher {
        let set = RuleSet::from_rules(rules).unwrap();
        RuleMatcher::new(
            Arc::new(set),
            KeywordExtractor::new(Arc::new(RuleBasedTagger::new())),
        )
    }

    const DEPOSIT_KEYWORDS: &[&str] = &[
        "security deposit",
        "deposit",
        "landlord",
        "return deposit",
        "refund",
        "move out",
        "withhold",
    ];

    #[test]
    fn test_selects_deposit_rule() {
        let m = matcher(vec![
            rule("housing-repairs", "Housing", &["repairs", "mold", "heat", "habitability"]),
            rule("housing-deposit", "Housing", DEPOSIT_KEYWORDS),
        ]);
        let result = m
            .find_best_match("my landlord won't return my security deposit", "housing")
            .unwrap()
            .unwrap();
        assert_eq!(result.rule.rule_id.as_str(), "housing-deposit");
        assert!((result.score - 32.0 / 35.0).abs() < 1e-9);
    }

    #[test]
    fn test_match_outlives_category_label() {
        let m = matcher(vec![rule("housing-deposit", "Housing", &["eviction"])]);
        let best = {
            let label = String::from("HOUSING");
            m.find_best_match("eviction", &label).unwrap()
        };
        assert_eq!(best.unwrap().rule.rule_id.as_str(), "housing-deposit");
    }

    #[test]
    fn test_never_crosses_category() {
        let m = matcher(vec![rule("housing-deposit", "Housing", DEPOSIT_KEYWORDS)]);
        let result = m
            .find_best("my landlord won't return my security deposit", "Employment")
            .unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn test_below_threshold_is_none() {
        let m = matcher(vec![rule(
            "housing-deposit",
            "Housing",
            &[
                "deposit", "eviction", "lease", "rent", "mold", "heat", "repairs", "notice",
                "tenant", "lockout",
            ],
        )]);
        // One exact, one partial and one shared word: 8 out of 50.
        assert!(m.find_best("deposit", "Housing").unwrap().is_none());
    }

    #[test]
    fn test_first_rule_wins_ties() {
        let m = matcher(vec![
            rule("first", "Housing", &["eviction"]),
            rule("second", "Housing", &["eviction"]),
        ]);
        let best = m.find_best("eviction", "Housing").unwrap().unwrap();
        assert_eq!(best.rule_id.as_str(), "first");
    }

    #[test]
    fn test_threshold_is_strict() {
        // A perfect score equal to the threshold is not enough.
        let m = matcher(vec![rule("r", "Housing", &["eviction"])]).with_threshold(1.0);
        assert!(m.find_best("eviction", "Housing").unwrap().is_none());
    }

    #[test]
    fn test_empty_query_keywords_match_nothing() {
        let m = matcher(vec![rule("r", "Housing", &["eviction"])]);
        assert!(m.find_best("the", "Housing").unwrap().is_none());
    }
}

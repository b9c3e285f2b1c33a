//! Validated, immutable rule collection.

use crate::models::{KeywordSet, Record, Rule, ScenariosByCategory};
use crate::storage::traits::RuleSource;
use crate::{Error, Result};
use std::collections::{BTreeSet, HashSet};

/// A rule together with its normalized keyword set.
#[derive(Debug, Clone)]
pub struct IndexedRule {
    rule: Rule,
    keywords: KeywordSet,
}

impl IndexedRule {
    fn new(rule: Rule) -> Self {
        let keywords = rule.keywords.iter().map(String::as_str).collect();
        Self { rule, keywords }
    }

    /// The rule as loaded.
    #[must_use]
    pub const fn rule(&self) -> &Rule {
        &self.rule
    }

    /// The rule's keywords, lowercased and deduplicated.
    #[must_use]
    pub const fn keywords(&self) -> &KeywordSet {
        &self.keywords
    }
}

/// Ordered, validated collection of rules.
///
/// Built once at startup and shared read-only (typically as `Arc<RuleSet>`).
/// Storage order is preserved; matching ties resolve to the earlier rule.
#[derive(Debug, Clone, Default)]
pub struct RuleSet {
    entries: Vec<IndexedRule>,
}

impl RuleSet {
    /// Loads and validates every rule from `source`.
    ///
    /// # Errors
    ///
    /// Returns an error if the source fails or any rule is invalid.
    pub fn load(source: &dyn RuleSource) -> Result<Self> {
        let rules = source.load_rules()?;
        let set = Self::from_rules(rules)?;
        tracing::info!(
            source = %source.describe(),
            rules = set.len(),
            categories = set.categories().len(),
            "Rule set loaded"
        );
        Ok(set)
    }

    /// Validates `rules` and builds a rule set.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidRule`] if a rule has an empty id, an empty
    /// category, or an id already used by an earlier rule.
    pub fn from_rules(rules: Vec<Rule>) -> Result<Self> {
        {
            let mut seen = HashSet::with_capacity(rules.len());
            for rule in &rules {
                validate(rule)?;
                if !seen.insert(rule.rule_id.as_str()) {
                    return Err(Error::InvalidRule {
                        rule_id: rule.rule_id.to_string(),
                        reason: "duplicate rule_id".to_string(),
                    });
                }
            }
        }

        Ok(Self {
            entries: rules.into_iter().map(IndexedRule::new).collect(),
        })
    }

    /// Creates an empty rule set.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Number of rules.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if there are no rules.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over all rules in storage order.
    pub fn iter(&self) -> impl Iterator<Item = &IndexedRule> {
        self.entries.iter()
    }

    /// Iterates over the rules whose category equals `category`, ignoring case.
    pub fn in_category<'a, 'c>(
        &'a self,
        category: &'c str,
    ) -> impl Iterator<Item = &'a IndexedRule> + use<'a, 'c> {
        self.entries
            .iter()
            .filter(move |entry| entry.rule.in_category(category))
    }

    /// Distinct rule categories, sorted.
    #[must_use]
    pub fn categories(&self) -> Vec<String> {
        self.entries
            .iter()
            .map(|entry| entry.rule.category.clone())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Scenarios of every rule in `category`, in storage order.
    #[must_use]
    pub fn scenarios_for(&self, category: &str) -> Vec<Record> {
        self.in_category(category)
            .flat_map(|entry| entry.rule.scenarios.iter().flatten().cloned())
            .collect()
    }

    /// Scenarios of every rule, in storage order.
    #[must_use]
    pub fn all_scenarios(&self) -> Vec<Record> {
        self.entries
            .iter()
            .flat_map(|entry| entry.rule.scenarios.iter().flatten().cloned())
            .collect()
    }

    /// Scenarios grouped by rule category. Only rules that carry a
    /// `scenarios` field contribute a category entry.
    #[must_use]
    pub fn scenarios_by_category(&self) -> ScenariosByCategory {
        let mut grouped = ScenariosByCategory::new();
        for entry in &self.entries {
            if let Some(scenarios) = &entry.rule.scenarios {
                grouped
                    .entry(entry.rule.category.clone())
                    .or_default()
                    .extend(scenarios.iter().cloned());
            }
        }
        grouped
    }
}

fn validate(rule: &Rule) -> Result<()> {
    if rule.rule_id.as_str().trim().is_empty() {
        return Err(Error::InvalidRule {
            rule_id: rule.rule_id.to_string(),
            reason: "rule_id must not be empty".to_string(),
        });
    }
    if rule.category.trim().is_empty() {
        return Err(Error::InvalidRule {
            rule_id: rule.rule_id.to_string(),
            reason: "category must not be empty".to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RuleId;
    use crate::storage::StaticRuleSource;
    use serde_json::json;

    fn rule(id: &str, category: &str, keywords: &[&str], scenarios: Option<&[&str]>) -> Rule {
        Rule {
            rule_id: RuleId::new(id),
            category: category.to_string(),
            keywords: keywords.iter().map(ToString::to_string).collect(),
            answer: format!("answer {id}"),
            suggestion: String::new(),
            reasoning: String::new(),
            applicable_laws: Vec::new(),
            action_plan: Vec::new(),
            scenarios: scenarios.map(|titles| {
                titles
                    .iter()
                    .map(|title| {
                        json!({ "title": title, "query": title })
                            .as_object()
                            .cloned()
                            .unwrap()
                    })
                    .collect()
            }),
        }
    }

    #[test]
    fn test_keywords_normalized() {
        let set = RuleSet::from_rules(vec![rule(
            "h1",
            "Housing",
            &["Security Deposit", " landlord ", "landlord"],
            None,
        )])
        .unwrap();
        let entry = set.iter().next().unwrap();
        assert_eq!(entry.keywords().len(), 2);
        assert!(entry.keywords().contains("security deposit"));
        assert!(entry.keywords().contains("landlord"));
    }

    #[test]
    fn test_rejects_empty_category() {
        let err = RuleSet::from_rules(vec![rule("h1", " ", &[], None)]).unwrap_err();
        assert!(matches!(err, Error::InvalidRule { .. }));
    }

    #[test]
    fn test_rejects_empty_id() {
        let err = RuleSet::from_rules(vec![rule("", "Housing", &[], None)]).unwrap_err();
        assert!(err.to_string().contains("rule_id must not be empty"));
    }

    #[test]
    fn test_rejects_duplicate_id() {
        let err = RuleSet::from_rules(vec![
            rule("h1", "Housing", &[], None),
            rule("h1", "Employment", &[], None),
        ])
        .unwrap_err();
        assert!(err.to_string().contains("duplicate rule_id"));
    }

    #[test]
    fn test_in_category_ignores_case() {
        let set = RuleSet::from_rules(vec![
            rule("h1", "Housing", &[], None),
            rule("e1", "Employment", &[], None),
            rule("h2", "housing", &[], None),
        ])
        .unwrap();
        let ids: Vec<_> = set
            .in_category("HOUSING")
            .map(|entry| entry.rule().rule_id.as_str())
            .collect();
        assert_eq!(ids, vec!["h1", "h2"]);
    }

    #[test]
    fn test_categories_sorted_and_distinct() {
        let set = RuleSet::from_rules(vec![
            rule("h1", "Housing", &[], None),
            rule("e1", "Employment", &[], None),
            rule("h2", "Housing", &[], None),
        ])
        .unwrap();
        assert_eq!(set.categories(), vec!["Employment", "Housing"]);
    }

    #[test]
    fn test_scenarios() {
        let set = RuleSet::load(&StaticRuleSource::new(vec![
            rule("h1", "Housing", &[], Some(&["deposit"])),
            rule("e1", "Employment", &[], Some(&["overtime", "fired"])),
            rule("h2", "Housing", &[], None),
        ]))
        .unwrap();

        assert_eq!(set.len(), 3);
        assert_eq!(set.scenarios_for("housing").len(), 1);
        assert_eq!(set.scenarios_for("Family").len(), 0);
        assert_eq!(set.all_scenarios().len(), 3);

        let grouped = set.scenarios_by_category();
        assert_eq!(grouped["Employment"].len(), 2);
        assert_eq!(grouped["Housing"][0]["title"], "deposit");
    }

    #[test]
    fn test_empty() {
        let set = RuleSet::empty();
        assert!(set.is_empty());
        assert!(set.categories().is_empty());
        assert!(set.scenarios_by_category().is_empty());
    }
}

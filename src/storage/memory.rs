//! In-memory rule source.

use crate::Result;
use crate::models::Rule;
use crate::storage::traits::RuleSource;

/// Rule source backed by a vector held in memory.
///
/// Useful for tests and for embedding a fixed rule set in another program.
#[derive(Debug, Clone, Default)]
pub struct StaticRuleSource {
    rules: Vec<Rule>,
}

impl StaticRuleSource {
    /// Creates a source that yields `rules` in the given order.
    #[must_use]
    pub const fn new(rules: Vec<Rule>) -> Self {
        Self { rules }
    }
}

impl RuleSource for StaticRuleSource {
    fn load_rules(&self) -> Result<Vec<Rule>> {
        Ok(self.rules.clone())
    }

    fn describe(&self) -> String {
        format!("in-memory ({} rules)", self.rules.len())
    }
}

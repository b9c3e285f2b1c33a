//! Storage backend traits.

use crate::Result;
use crate::models::Rule;

/// Trait for rule sources.
///
/// A source yields the raw rules in storage order; validation and keyword
/// indexing happen in [`RuleSet::load`](super::RuleSet::load). Sources are
/// consulted once at startup.
pub trait RuleSource: Send + Sync {
    /// Loads every rule in storage order.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store exists but cannot be read or
    /// parsed.
    fn load_rules(&self) -> Result<Vec<Rule>>;

    /// Human-readable description of where rules come from.
    fn describe(&self) -> String {
        "rules".to_string()
    }
}

//! Rule records and identifiers.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// An arbitrary key/value record (applicable laws, scenarios).
pub type Record = Map<String, Value>;

/// Unique identifier for a rule.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RuleId(String);

impl RuleId {
    /// Creates a new rule ID.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the ID as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for RuleId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for RuleId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// A hand-authored legal rule.
///
/// Rules are immutable once loaded. Field names match the on-disk rule file
/// format exactly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rule {
    /// Unique identifier.
    pub rule_id: RuleId,
    /// Category label, compared case-insensitively.
    pub category: String,
    /// Keywords describing the situation this rule covers.
    pub keywords: Vec<String>,
    /// Canned answer text.
    pub answer: String,
    /// Suggested next step.
    pub suggestion: String,
    /// Why the answer applies.
    pub reasoning: String,
    /// Applicable laws, each an arbitrary record (typically name/section/description).
    #[serde(default)]
    pub applicable_laws: Vec<Record>,
    /// Ordered action-plan steps.
    #[serde(default)]
    pub action_plan: Vec<String>,
    /// Example scenarios offered to users browsing this category.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scenarios: Option<Vec<Record>>,
}

impl Rule {
    /// Returns true if this rule belongs to `category` (case-insensitive).
    #[must_use]
    pub fn in_category(&self, category: &str) -> bool {
        self.category.to_lowercase() == category.to_lowercase()
    }
}

//! Request and response shapes for the advice API.

use super::{Record, Rule};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A legal question in a category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryRequest {
    /// Category label as sent by the client (may be an alias such as "landlord").
    pub category: String,
    /// Free-text question.
    pub query: String,
}

/// Advice returned for a query.
///
/// Field names are part of the public API contract. `matched_rule` is
/// serialized as `null` when the answer is a fallback.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdviceResponse {
    /// Answer text.
    pub answer: String,
    /// Suggested next step.
    pub suggestion: String,
    /// Reasoning behind the answer.
    pub reasoning: String,
    /// Applicable laws (empty for fallbacks).
    pub applicable_laws: Vec<Record>,
    /// Ordered action plan.
    pub action_plan: Vec<String>,
    /// Identifier of the matched rule, if any.
    pub matched_rule: Option<String>,
}

impl AdviceResponse {
    /// Builds a response from a matched rule, copying its texts verbatim.
    #[must_use]
    pub fn from_rule(rule: &Rule) -> Self {
        Self {
            answer: rule.answer.clone(),
            suggestion: rule.suggestion.clone(),
            reasoning: rule.reasoning.clone(),
            applicable_laws: rule.applicable_laws.clone(),
            action_plan: rule.action_plan.clone(),
            matched_rule: Some(rule.rule_id.as_str().to_string()),
        }
    }

    /// Builds a canned response that matched no rule.
    #[must_use]
    pub fn canned(answer: &str, suggestion: &str, reasoning: &str, action_plan: &[&str]) -> Self {
        Self {
            answer: answer.to_string(),
            suggestion: suggestion.to_string(),
            reasoning: reasoning.to_string(),
            applicable_laws: Vec::new(),
            action_plan: action_plan.iter().map(ToString::to_string).collect(),
            matched_rule: None,
        }
    }
}

/// Request for the example scenarios of a category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScenarioRequest {
    /// Category label (aliases accepted).
    pub category: String,
}

/// Example scenarios.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScenarioResponse {
    /// Scenario records.
    pub scenarios: Vec<Record>,
}

/// Scenarios grouped by rule category.
pub type ScenariosByCategory = BTreeMap<String, Vec<Record>>;

//! Advice service: request orchestration and response assembly.

// Rule counts fit comfortably in an f64 gauge.
#![allow(clippy::cast_precision_loss)]

use crate::models::{AdviceResponse, QueryRequest, Record, ScenariosByCategory};
use crate::nlp::Tokenizer;
use crate::observability::current_request_id;
use crate::services::gatekeeper::fallback_response;
use crate::services::{DomainGatekeeper, KeywordExtractor, RuleMatcher};
use crate::storage::RuleSet;
use crate::{Error, Result};
use std::sync::Arc;
use std::time::Instant;
use tracing::instrument;

/// How a query was answered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryOutcome {
    /// A rule scored above the threshold.
    Matched,
    /// The query hit an excluded domain.
    Excluded,
    /// No rule scored above the threshold.
    Fallback,
    /// The request was invalid or processing failed.
    Rejected,
}

impl QueryOutcome {
    /// Returns the outcome as a metric label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Matched => "matched",
            Self::Excluded => "excluded",
            Self::Fallback => "fallback",
            Self::Rejected => "rejected",
        }
    }
}

/// Answers legal questions against a rule set.
///
/// Cheap to clone; all state is shared and read-only.
#[derive(Debug, Clone)]
pub struct AdviceService {
    matcher: RuleMatcher,
    gatekeeper: DomainGatekeeper,
}

impl AdviceService {
    /// Creates a service over `rules` using `tokenizer` for keyword extraction.
    #[must_use]
    pub fn new(rules: Arc<RuleSet>, tokenizer: Arc<dyn Tokenizer>) -> Self {
        let rules_loaded = rules.len();
        metrics::gauge!("legalaid_rules_loaded").set(rules_loaded as f64);
        Self {
            matcher: RuleMatcher::new(rules, KeywordExtractor::new(tokenizer)),
            gatekeeper: DomainGatekeeper::new(),
        }
    }

    /// Returns the rule set.
    #[must_use]
    pub fn rules(&self) -> &RuleSet {
        self.matcher.rules()
    }

    /// Returns the keyword extractor.
    #[must_use]
    pub const fn extractor(&self) -> &KeywordExtractor {
        self.matcher.extractor()
    }

    /// Answers a question.
    ///
    /// Excluded domains are screened before the category alias is applied or
    /// any rule is scored.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] if the query is empty or whitespace,
    /// and propagates keyword extraction failures.
    #[instrument(
        skip(self, request),
        fields(
            request_id = tracing::field::Empty,
            operation = "answer",
            category = %request.category
        )
    )]
    pub fn answer(&self, request: &QueryRequest) -> Result<AdviceResponse> {
        let start = Instant::now();
        if let Some(request_id) = current_request_id() {
            tracing::Span::current().record("request_id", request_id.as_str());
        }
        let result = self.answer_inner(request);

        let outcome = match &result {
            Ok((outcome, _)) => *outcome,
            Err(_) => QueryOutcome::Rejected,
        };
        metrics::counter!("legalaid_queries_total", "outcome" => outcome.as_str()).increment(1);
        metrics::histogram!("legalaid_query_duration_ms", "outcome" => outcome.as_str())
            .record(start.elapsed().as_secs_f64() * 1000.0);

        result.map(|(_, response)| response)
    }

    fn answer_inner(&self, request: &QueryRequest) -> Result<(QueryOutcome, AdviceResponse)> {
        if request.query.trim().is_empty() {
            return Err(Error::InvalidInput("Query cannot be empty".to_string()));
        }

        if let Some(domain) = self.gatekeeper.screen(&request.query) {
            tracing::info!(domain = %domain.kind, "Query falls in an excluded domain");
            return Ok((QueryOutcome::Excluded, domain.response()));
        }

        let category = self.gatekeeper.resolve_category(&request.category);
        match self.matcher.find_best_match(&request.query, category)? {
            Some(found) => {
                tracing::info!(
                    rule_id = %found.rule.rule_id,
                    score = found.score,
                    category,
                    "Matched rule"
                );
                metrics::histogram!("legalaid_match_score").record(found.score);
                Ok((QueryOutcome::Matched, AdviceResponse::from_rule(found.rule)))
            },
            None => {
                tracing::info!(category, "No rule above threshold, returning fallback");
                Ok((QueryOutcome::Fallback, fallback_response()))
            },
        }
    }

    /// Distinct rule categories, sorted.
    #[must_use]
    pub fn categories(&self) -> Vec<String> {
        self.rules().categories()
    }

    /// Scenarios for a category label (aliases accepted). Falls back to the
    /// scenarios of every rule when the category has none.
    #[must_use]
    pub fn scenarios(&self, label: &str) -> Vec<Record> {
        let category = self.gatekeeper.resolve_category(label);
        let scenarios = self.rules().scenarios_for(category);
        if scenarios.is_empty() {
            tracing::debug!(category, "No scenarios for category, returning all");
            return self.rules().all_scenarios();
        }
        scenarios
    }

    /// Scenarios grouped by category.
    #[must_use]
    pub fn scenarios_by_category(&self) -> ScenariosByCategory {
        self.rules().scenarios_by_category()
    }

    /// Number of loaded rules.
    #[must_use]
    pub fn rules_loaded(&self) -> usize {
        self.rules().len()
    }
}

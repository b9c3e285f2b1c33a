//! # Legalaid
//!
//! A rule-matching legal aid expert system.
//!
//! Legalaid takes a free-text legal question and a category, extracts keywords
//! from the question, scores them against a static set of hand-authored rules,
//! and answers with the best-matching rule's canned advice (or a fallback when
//! nothing matches well enough).
//!
//! ## Features
//!
//! - Keyword extraction over a pluggable [`Tokenizer`] (lemmas, noun chunks, literals)
//! - Three-tier weighted overlap scoring with a fixed match threshold
//! - Data-driven category aliasing and excluded-domain screening
//! - Immutable rule set loaded once from JSON or YAML
//! - HTTP API (axum) with CORS and request correlation IDs
//!
//! ## Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use legalaid::{AdviceService, QueryRequest, RuleSet};
//! use legalaid::nlp::RuleBasedTagger;
//! use legalaid::storage::FileRuleSource;
//!
//! let rules = RuleSet::load(&FileRuleSource::new("rules.json"))?;
//! let service = AdviceService::new(Arc::new(rules), Arc::new(RuleBasedTagger::new()));
//! let response = service.answer(&QueryRequest {
//!     category: "landlord".to_string(),
//!     query: "my landlord won't return my security deposit".to_string(),
//! })?;
//! println!("{}", response.answer);
//! ```

#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![warn(missing_docs)]
#![forbid(unsafe_code)]
// multiple_crate_versions is inherently crate-level (detects duplicate transitive dependencies).
#![allow(clippy::multiple_crate_versions)]

use thiserror::Error as ThisError;

// Module declarations
pub mod config;
pub mod http;
pub mod models;
pub mod nlp;
pub mod observability;
pub mod services;
pub mod storage;

// Re-exports for convenience
pub use config::LegalAidConfig;
pub use models::{AdviceResponse, KeywordSet, QueryRequest, Rule, RuleId};
pub use nlp::Tokenizer;
pub use services::{AdviceService, DomainGatekeeper, KeywordExtractor, RuleMatcher};
pub use storage::{RuleSet, RuleSource};

/// Error type for legalaid operations.
///
/// | Variant | Raised When |
/// |---------|-------------|
/// | `InvalidInput` | Empty or whitespace-only query, unparseable log filter |
/// | `InvalidRule` | A loaded rule breaks a rule-set invariant (empty category, duplicate id) |
/// | `OperationFailed` | Rule file I/O or parsing fails, tokenizer fails, server fails to bind |
#[derive(Debug, ThisError)]
pub enum Error {
    /// Invalid input was provided.
    ///
    /// Raised when:
    /// - The query string is empty or whitespace-only
    /// - The log filter directive cannot be parsed
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A rule violates a rule-set invariant.
    #[error("invalid rule '{rule_id}': {reason}")]
    InvalidRule {
        /// Identifier of the offending rule (may be empty).
        rule_id: String,
        /// What is wrong with it.
        reason: String,
    },

    /// An operation failed.
    ///
    /// Raised when:
    /// - The rule file exists but cannot be read or parsed
    /// - The tokenizer fails on a request
    /// - The HTTP listener cannot bind or serve
    /// - Observability initialization fails
    #[error("operation '{operation}' failed: {cause}")]
    OperationFailed {
        /// The operation that failed.
        operation: String,
        /// The underlying cause.
        cause: String,
    },
}

/// Result type alias for legalaid operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::InvalidInput("Query cannot be empty".to_string());
        assert_eq!(err.to_string(), "invalid input: Query cannot be empty");

        let err = Error::OperationFailed {
            operation: "load_rules".to_string(),
            cause: "permission denied".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "operation 'load_rules' failed: permission denied"
        );

        let err = Error::InvalidRule {
            rule_id: "housing-001".to_string(),
            reason: "category must not be empty".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "invalid rule 'housing-001': category must not be empty"
        );
    }
}

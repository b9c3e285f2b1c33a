//! Business logic services.
//!
//! Keyword extraction and similarity scoring feed the rule matcher; the
//! gatekeeper and advice service wrap it into the full question-answering
//! flow.

mod advice;
pub mod gatekeeper;
mod keyword_extraction;
mod matcher;
pub mod similarity;

pub use advice::{AdviceService, QueryOutcome};
pub use gatekeeper::{DomainGatekeeper, DomainKind, ExcludedDomain};
pub use keyword_extraction::KeywordExtractor;
pub use matcher::{MATCH_THRESHOLD, MatchResult, RuleMatcher};

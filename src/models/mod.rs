//! Data models for legalaid.
//!
//! This module contains the core data structures used throughout the system:
//! the static [`Rule`] records, the normalized [`KeywordSet`], and the
//! request/response shapes of the advice API.

mod advice;
mod keywords;
mod rule;

pub use advice::{
    AdviceResponse, QueryRequest, ScenarioRequest, ScenarioResponse, ScenariosByCategory,
};
pub use keywords::KeywordSet;
pub use rule::{Record, Rule, RuleId};

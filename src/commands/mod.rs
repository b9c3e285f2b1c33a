//! Command handlers module.
//!
//! - `serve.rs`: HTTP server
//! - `ask.rs`: one-shot query and keyword inspection
//! - `rules.rs`: rule-set inspection (categories, scenarios, status)

mod ask;
mod rules;
mod serve;

use anyhow::Context;
use legalaid::config::LegalAidConfig;
use legalaid::nlp::RuleBasedTagger;
use legalaid::storage::FileRuleSource;
use legalaid::{AdviceService, RuleSet};
use std::sync::Arc;

pub use ask::{cmd_ask, cmd_keywords};
pub use rules::{cmd_categories, cmd_scenarios, cmd_status};
pub use serve::cmd_serve;

/// Loads the configured rule file.
fn load_rules(config: &LegalAidConfig) -> anyhow::Result<RuleSet> {
    let source = FileRuleSource::new(&config.rules_path);
    RuleSet::load(&source)
        .with_context(|| format!("loading rules from {}", config.rules_path.display()))
}

/// Builds the advice service over the configured rules and the built-in tagger.
fn build_service(config: &LegalAidConfig) -> anyhow::Result<AdviceService> {
    let rules = load_rules(config)?;
    Ok(AdviceService::new(
        Arc::new(rules),
        Arc::new(RuleBasedTagger::new()),
    ))
}

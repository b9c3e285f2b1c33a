//! Ask and keywords commands.

use super::build_service;
use legalaid::config::LegalAidConfig;
use legalaid::nlp::RuleBasedTagger;
use legalaid::observability::{RequestContext, enter_request_context};
use legalaid::{KeywordExtractor, QueryRequest};
use std::sync::Arc;

/// Ask command.
pub fn cmd_ask(config: &LegalAidConfig, category: String, query: String) -> anyhow::Result<()> {
    let service = build_service(config)?;
    let _context = enter_request_context(RequestContext::new());

    let response = service.answer(&QueryRequest { category, query })?;
    println!("{}", serde_json::to_string_pretty(&response)?);
    Ok(())
}

/// Keywords command.
pub fn cmd_keywords(text: &str) -> anyhow::Result<()> {
    let extractor = KeywordExtractor::new(Arc::new(RuleBasedTagger::new()));
    for keyword in extractor.extract(text)?.iter() {
        println!("{keyword}");
    }
    Ok(())
}

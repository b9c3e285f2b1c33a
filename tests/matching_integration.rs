//! End-to-end matching over the bundled rule file.
//!
//! Exercises the full pipeline (rule loading, keyword extraction with the
//! built-in tagger, screening, aliasing, scoring) the way the HTTP API and
//! CLI use it.

// Integration tests use expect/unwrap for simplicity - panics are acceptable in tests
#![allow(clippy::expect_used, clippy::unwrap_used)]

use legalaid::nlp::RuleBasedTagger;
use legalaid::services::DomainKind;
use legalaid::services::gatekeeper::EXCLUDED_DOMAINS;
use legalaid::storage::FileRuleSource;
use legalaid::{
    AdviceResponse, AdviceService, Error, KeywordExtractor, QueryRequest, RuleMatcher, RuleSet,
};
use std::path::Path;
use std::sync::Arc;
use test_case::test_case;

// ============================================================================
// Test Helpers
// ============================================================================

fn bundled_rules() -> Arc<RuleSet> {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("rules.json");
    Arc::new(RuleSet::load(&FileRuleSource::new(path)).unwrap())
}

fn service() -> AdviceService {
    AdviceService::new(bundled_rules(), Arc::new(RuleBasedTagger::new()))
}

fn ask(category: &str, query: &str) -> Option<String> {
    service()
        .answer(&QueryRequest {
            category: category.to_string(),
            query: query.to_string(),
        })
        .unwrap()
        .matched_rule
}

// ============================================================================
// Rule selection
// ============================================================================

#[test_case("landlord", "My landlord won't return my security deposit", "housing-001" ; "deposit via alias")]
#[test_case("Housing", "My landlord won't return my security deposit", "housing-001" ; "deposit via category")]
#[test_case("work", "My employer doesn't pay overtime when I work more than 40 hours", "employment-001" ; "overtime")]
#[test_case("product", "The store refuses to refund a defective product I bought last week", "consumer-001" ; "defective product")]
fn test_selects_expected_rule(category: &str, query: &str, expected: &str) {
    assert_eq!(ask(category, query).as_deref(), Some(expected));
}

#[test]
fn test_never_crosses_category() {
    // A strong housing question asked under Employment must not pick a housing rule
    let matched = ask("Employment", "My landlord won't return my security deposit");
    assert_eq!(matched, None);
}

#[test]
fn test_non_ascii_words_do_not_match() {
    // Dotted capital I lowercases to "i" plus a combining dot
    assert_eq!(ask("Employment", "İstanbul ÆØÅ 日本語 ﬁx"), None);
}

#[test]
fn test_deposit_rule_outscores_repairs_rule() {
    let rules = bundled_rules();
    let extractor = KeywordExtractor::new(Arc::new(RuleBasedTagger::new()));
    let matcher = RuleMatcher::new(Arc::clone(&rules), extractor);

    let found = matcher
        .find_best_match("my landlord won't return my security deposit", "Housing")
        .unwrap()
        .unwrap();
    assert_eq!(found.rule.rule_id.as_str(), "housing-001");
    assert!(found.score > 0.3);
}

// ============================================================================
// Screening and errors
// ============================================================================

#[test_case("My ex-spouse is violating our custody agreement", DomainKind::Family ; "custody")]
#[test_case("My business partner is in breach of contract", DomainKind::Contract ; "contract")]
#[test_case("I was hurt in a car accident and want compensation", DomainKind::PersonalInjury ; "accident")]
fn test_excluded_domains_bypass_rules(query: &str, kind: DomainKind) {
    let response = service()
        .answer(&QueryRequest {
            category: "Housing".to_string(),
            query: query.to_string(),
        })
        .unwrap();

    assert_eq!(response, referral_for(kind));
    assert!(response.matched_rule.is_none());
    assert!(response.applicable_laws.is_empty());
}

fn referral_for(kind: DomainKind) -> AdviceResponse {
    EXCLUDED_DOMAINS
        .iter()
        .find(|domain| domain.kind == kind)
        .unwrap()
        .response()
}

#[test]
fn test_blank_query_rejected() {
    let err = service()
        .answer(&QueryRequest {
            category: "Housing".to_string(),
            query: "\t \n".to_string(),
        })
        .unwrap_err();
    assert!(matches!(err, Error::InvalidInput(_)));
}

#[test]
fn test_empty_rule_set_always_falls_back() {
    let svc = AdviceService::new(Arc::new(RuleSet::empty()), Arc::new(RuleBasedTagger::new()));

    let response = svc
        .answer(&QueryRequest {
            category: "Housing".to_string(),
            query: "My landlord won't return my security deposit".to_string(),
        })
        .unwrap();
    assert!(response.matched_rule.is_none());
    assert_eq!(svc.rules_loaded(), 0);
}

#[test]
fn test_missing_rule_file_loads_empty() {
    let dir = tempfile::TempDir::new().unwrap();
    let rules = RuleSet::load(&FileRuleSource::new(dir.path().join("absent.json"))).unwrap();
    assert!(rules.is_empty());
}

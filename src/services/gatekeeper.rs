//! Category aliasing and excluded-domain screening.
//!
//! Both tables are plain data. Screening runs before any rule matching and
//! short-circuits to a fixed referral response.

use crate::models::AdviceResponse;
use std::fmt;

/// Client category labels mapped to canonical rule categories.
pub const CATEGORY_ALIASES: &[(&str, &str)] = &[
    ("landlord", "Housing"),
    ("housing", "Housing"),
    ("rental", "Housing"),
    ("tenant", "Housing"),
    ("employment", "Employment"),
    ("work", "Employment"),
    ("job", "Employment"),
    ("consumer", "Consumer"),
    ("product", "Consumer"),
    ("purchase", "Consumer"),
];

/// Areas of law the rule base deliberately does not cover.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DomainKind {
    /// Custody, divorce and other family matters.
    Family,
    /// Business contracts and agreements.
    Contract,
    /// Accidents, injuries and insurance claims.
    PersonalInjury,
}

impl DomainKind {
    /// Returns the domain as a metric/log label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Family => "family",
            Self::Contract => "contract",
            Self::PersonalInjury => "personal_injury",
        }
    }
}

impl fmt::Display for DomainKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// An excluded domain: its trigger keywords and canned referral.
#[derive(Debug, Clone, Copy)]
pub struct ExcludedDomain {
    /// Which domain this is.
    pub kind: DomainKind,
    /// Lowercase substrings that trigger the exclusion.
    pub keywords: &'static [&'static str],
    /// Referral answer.
    pub answer: &'static str,
    /// Referral suggestion.
    pub suggestion: &'static str,
    /// Why the question is out of scope.
    pub reasoning: &'static str,
    /// Five-step referral plan.
    pub action_plan: &'static [&'static str],
}

impl ExcludedDomain {
    /// Returns true if any trigger keyword occurs in `lowered_query`.
    #[must_use]
    pub fn matches(&self, lowered_query: &str) -> bool {
        self.keywords.iter().any(|k| lowered_query.contains(k))
    }

    /// Builds the referral response.
    #[must_use]
    pub fn response(&self) -> AdviceResponse {
        AdviceResponse::canned(self.answer, self.suggestion, self.reasoning, self.action_plan)
    }
}

/// Excluded domains in screening order; the first hit wins.
pub const EXCLUDED_DOMAINS: &[ExcludedDomain] = &[
    ExcludedDomain {
        kind: DomainKind::Family,
        keywords: &[
            "custody",
            "divorce",
            "spouse",
            "ex-spouse",
            "child",
            "parenting",
            "visitation",
            "alimony",
        ],
        answer: "I apologize, but I don't have sufficient legal knowledge or specific rules in our database to provide a comprehensive analysis of your family law situation. Family law matters like custody agreements, divorce, and parenting arrangements require specialized legal expertise.",
        suggestion: "I strongly recommend consulting with a qualified family law attorney who can provide personalized legal advice based on your specific circumstances and the family laws applicable in your jurisdiction.",
        reasoning: "Family law queries fall outside our current scope of expertise. This area requires specialized legal knowledge and jurisdiction-specific guidance.",
        action_plan: &[
            "Schedule a consultation with a qualified family law attorney",
            "Gather all custody agreements and court documents",
            "Document all violations of the custody agreement",
            "Research local family law legal aid services",
            "Consider seeking referrals from family law bar associations",
        ],
    },
    ExcludedDomain {
        kind: DomainKind::Contract,
        keywords: &[
            "business contract",
            "breach of contract",
            "contract violation",
            "agreement",
        ],
        answer: "I apologize, but I don't have sufficient legal knowledge or specific rules in our database to provide a comprehensive analysis of your contract law situation. Contract disputes and business law matters require specialized legal expertise.",
        suggestion: "I strongly recommend consulting with a qualified business law attorney who can provide personalized legal advice based on your specific circumstances and the contract laws applicable in your jurisdiction.",
        reasoning: "Contract law queries fall outside our current scope of expertise. This area requires specialized legal knowledge and jurisdiction-specific guidance.",
        action_plan: &[
            "Schedule a consultation with a qualified business law attorney",
            "Gather all contract documents and communications",
            "Document all breaches and damages",
            "Research local business law legal aid services",
            "Consider seeking referrals from business law bar associations",
        ],
    },
    ExcludedDomain {
        kind: DomainKind::PersonalInjury,
        keywords: &[
            "car accident",
            "injury",
            "damages",
            "compensation",
            "insurance",
        ],
        answer: "I apologize, but I don't have sufficient legal knowledge or specific rules in our database to provide a comprehensive analysis of your personal injury situation. Personal injury and accident cases require specialized legal expertise.",
        suggestion: "I strongly recommend consulting with a qualified personal injury attorney who can provide personalized legal advice based on your specific circumstances and the personal injury laws applicable in your jurisdiction.",
        reasoning: "Personal injury law queries fall outside our current scope of expertise. This area requires specialized legal knowledge and jurisdiction-specific guidance.",
        action_plan: &[
            "Schedule a consultation with a qualified personal injury attorney",
            "Gather all medical records and accident documentation",
            "Document all injuries and damages",
            "Research local personal injury legal aid services",
            "Consider seeking referrals from personal injury bar associations",
        ],
    },
];

/// Answer returned when no rule scores above the match threshold.
pub const FALLBACK_ANSWER: &str = "I apologize, but I don't have sufficient legal knowledge or specific rules in our database to provide a comprehensive analysis of your situation. This area of law may be outside our current scope or may require specialized legal expertise.";

/// Suggestion returned with the generic fallback.
pub const FALLBACK_SUGGESTION: &str = "I strongly recommend consulting with a qualified lawyer who specializes in this area of law. They can provide personalized legal advice based on your specific circumstances and the laws applicable in your jurisdiction.";

/// Reasoning returned with the generic fallback.
pub const FALLBACK_REASONING: &str = "No matching rule found in our knowledge base for the given category and keywords. This indicates the query falls outside our current areas of expertise.";

/// Action plan returned with the generic fallback.
pub const FALLBACK_ACTION_PLAN: &[&str] = &[
    "Schedule a consultation with a qualified legal professional",
    "Gather all relevant documentation and evidence",
    "Research local legal aid services if cost is a concern",
    "Document all communications and events related to your case",
    "Consider seeking referrals from local bar associations",
];

/// Builds the generic no-match response.
#[must_use]
pub fn fallback_response() -> AdviceResponse {
    AdviceResponse::canned(
        FALLBACK_ANSWER,
        FALLBACK_SUGGESTION,
        FALLBACK_REASONING,
        FALLBACK_ACTION_PLAN,
    )
}

/// Applies the alias and exclusion tables.
#[derive(Debug, Clone, Copy)]
pub struct DomainGatekeeper {
    aliases: &'static [(&'static str, &'static str)],
    excluded: &'static [ExcludedDomain],
}

impl DomainGatekeeper {
    /// Creates a gatekeeper over the built-in tables.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            aliases: CATEGORY_ALIASES,
            excluded: EXCLUDED_DOMAINS,
        }
    }

    /// Creates a gatekeeper over custom tables.
    #[must_use]
    pub const fn with_tables(
        aliases: &'static [(&'static str, &'static str)],
        excluded: &'static [ExcludedDomain],
    ) -> Self {
        Self { aliases, excluded }
    }

    /// Maps a client label to its canonical category. Lookup is
    /// case-insensitive; unknown labels are returned unchanged.
    #[must_use]
    pub fn resolve_category<'a>(&self, label: &'a str) -> &'a str {
        let lowered = label.to_lowercase();
        self.aliases
            .iter()
            .find(|(alias, _)| *alias == lowered)
            .map_or(label, |(_, canonical)| *canonical)
    }

    /// Returns the first excluded domain whose keywords occur in `query`.
    #[must_use]
    pub fn screen(&self, query: &str) -> Option<&'static ExcludedDomain> {
        let lowered = query.to_lowercase();
        self.excluded.iter().find(|domain| domain.matches(&lowered))
    }
}

impl Default for DomainGatekeeper {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("landlord", "Housing" ; "landlord alias")]
    #[test_case("Tenant", "Housing" ; "alias case insensitive")]
    #[test_case("rental", "Housing" ; "rental alias")]
    #[test_case("work", "Employment" ; "work alias")]
    #[test_case("JOB", "Employment" ; "job alias upper")]
    #[test_case("purchase", "Consumer" ; "purchase alias")]
    #[test_case("Housing", "Housing" ; "canonical label")]
    #[test_case("Immigration", "Immigration" ; "unknown passes through")]
    fn test_resolve_category(label: &str, expected: &str) {
        assert_eq!(DomainGatekeeper::new().resolve_category(label), expected);
    }

    #[test_case("my ex-spouse is violating our custody agreement", DomainKind::Family ; "family beats contract")]
    #[test_case("Divorce papers", DomainKind::Family ; "case insensitive")]
    #[test_case("they broke our business contract", DomainKind::Contract ; "contract")]
    #[test_case("we signed an agreement", DomainKind::Contract ; "agreement")]
    #[test_case("I was hurt in a car accident", DomainKind::PersonalInjury ; "accident")]
    #[test_case("my insurance denied the claim", DomainKind::PersonalInjury ; "insurance")]
    fn test_screen_hits(query: &str, expected: DomainKind) {
        let hit = DomainGatekeeper::new().screen(query).unwrap();
        assert_eq!(hit.kind, expected);
    }

    #[test_case("my landlord won't return my security deposit" ; "housing")]
    #[test_case("my boss owes me overtime" ; "employment")]
    #[test_case("" ; "empty")]
    fn test_screen_misses(query: &str) {
        assert!(DomainGatekeeper::new().screen(query).is_none());
    }

    #[test]
    fn test_substring_matching_is_not_word_bounded() {
        // "children" contains "child"
        let hit = DomainGatekeeper::new().screen("my children live here").unwrap();
        assert_eq!(hit.kind, DomainKind::Family);
    }

    #[test]
    fn test_referral_response_shape() {
        for domain in EXCLUDED_DOMAINS {
            let response = domain.response();
            assert!(response.matched_rule.is_none());
            assert!(response.applicable_laws.is_empty());
            assert_eq!(response.action_plan.len(), 5);
            assert!(response.answer.starts_with("I apologize"));
        }
    }

    #[test]
    fn test_fallback_response() {
        let response = fallback_response();
        assert_eq!(response.answer, FALLBACK_ANSWER);
        assert_eq!(response.action_plan.len(), 5);
        assert!(response.matched_rule.is_none());
    }

    #[test]
    fn test_custom_tables() {
        static ALIASES: &[(&str, &str)] = &[("flat", "Housing")];
        let gatekeeper = DomainGatekeeper::with_tables(ALIASES, &[]);
        assert_eq!(gatekeeper.resolve_category("flat"), "Housing");
        assert_eq!(gatekeeper.resolve_category("landlord"), "landlord");
        assert!(gatekeeper.screen("custody").is_none());
    }

    #[test]
    fn test_domain_labels() {
        assert_eq!(DomainKind::PersonalInjury.to_string(), "personal_injury");
    }
}

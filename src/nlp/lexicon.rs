//! Static English lexicon used by the rule-based tagger.
//!
//! Closed word classes are listed exhaustively; open classes (verbs,
//! adjectives, nouns that look like adjectives) are seeded with general
//! vocabulary plus the tenancy, employment and consumer terms that show up in
//! legal-aid questions. Anything unknown falls back to suffix heuristics.

use super::PartOfSpeech;
use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

/// Stop words (function words carrying no topical signal).
pub static STOP_WORDS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "a", "about", "above", "after", "again", "against", "all", "also", "am", "an", "and",
        "any", "are", "as", "at", "be", "because", "been", "before", "being", "below",
        "between", "both", "but", "by", "can", "could", "did", "do", "does", "doing", "down",
        "during", "each", "either", "else", "even", "ever", "every", "few", "for", "from",
        "further", "had", "has", "have", "having", "he", "her", "here", "hers", "herself",
        "him", "himself", "his", "how", "however", "i", "if", "in", "into", "is", "it", "its",
        "itself", "just", "may", "me", "might", "more", "most", "must", "my", "myself",
        "neither", "never", "no", "nor", "not", "now", "of", "off", "often", "on", "once",
        "only", "or", "other", "our", "ours", "ourselves", "out", "over", "own", "same",
        "shall", "she", "should", "so", "some", "such", "than", "that", "the", "their",
        "theirs", "them", "themselves", "then", "there", "these", "they", "this", "those",
        "though", "through", "thus", "to", "too", "under", "until", "up", "upon", "us",
        "very", "was", "we", "were", "what", "whatever", "when", "where", "whether", "which",
        "while", "who", "whom", "whose", "why", "will", "with", "within", "without", "would",
        "yet", "you", "your", "yours", "yourself", "yourselves", "n't", "'s", "'re", "'ve",
        "'ll", "'d", "'m", "wo", "ca", "sha", "quite", "rather", "really", "already", "still",
        "anyway", "somehow", "please", "since", "although", "unless", "whereas", "whenever",
        "wherever", "anyone", "anything", "everyone", "everything", "someone", "something",
        "nobody", "nothing", "none", "another", "several", "many", "much", "cannot",
    ]
    .into_iter()
    .collect()
});

/// Returns true if `word` (lowercase) is a stop word.
#[must_use]
pub fn is_stop_word(word: &str) -> bool {
    STOP_WORDS.contains(word)
}

/// Closed-class words with a fixed tag.
static CLOSED_CLASS: LazyLock<HashMap<&'static str, PartOfSpeech>> = LazyLock::new(|| {
    let mut map = HashMap::new();
    let groups: [(&[&'static str], PartOfSpeech); 8] = [
        (
            &[
                "a", "an", "the", "this", "that", "these", "those", "my", "your", "his", "her",
                "its", "our", "their", "some", "any", "no", "every", "each", "all", "another",
                "either", "neither", "whose", "which", "what", "several", "many", "much", "few",
                "both",
            ],
            PartOfSpeech::Determiner,
        ),
        (
            &[
                "i", "me", "you", "he", "him", "she", "it", "we", "us", "they", "them",
                "myself", "yourself", "himself", "herself", "itself", "ourselves",
                "yourselves", "themselves", "mine", "yours", "hers", "ours", "theirs", "who",
                "whom", "whoever", "whatever", "someone", "something", "anyone", "anything",
                "everyone", "everything", "nobody", "nothing", "none",
            ],
            PartOfSpeech::Pronoun,
        ),
        (
            &[
                "am", "is", "are", "was", "were", "be", "been", "being", "have", "has", "had",
                "having", "do", "does", "did", "will", "would", "shall", "should", "can",
                "could", "may", "might", "must", "wo", "ca", "sha", "'m", "'re", "'ve", "'ll",
                "'d", "cannot",
            ],
            PartOfSpeech::Auxiliary,
        ),
        (
            &[
                "in", "on", "at", "for", "of", "with", "by", "from", "about", "into", "onto",
                "over", "under", "after", "before", "between", "through", "during", "without",
                "within", "against", "since", "until", "upon", "across", "behind", "beyond",
                "despite", "except", "toward", "towards", "via", "per", "regarding",
                "concerning", "among", "around", "along", "like",
            ],
            PartOfSpeech::Adposition,
        ),
        (
            &[
                "and", "or", "but", "nor", "yet", "so", "if", "because", "although", "though",
                "while", "unless", "whether", "whereas", "than", "once", "as",
            ],
            PartOfSpeech::Conjunction,
        ),
        (&["not", "n't", "to", "'s"], PartOfSpeech::Particle),
        (
            &[
                "very", "too", "also", "just", "still", "already", "now", "then", "here",
                "there", "when", "where", "why", "how", "never", "always", "often", "again",
                "even", "only", "back", "away", "up", "down", "out", "off", "soon", "ever",
                "really", "almost", "quite", "rather", "anyway", "somehow", "however", "thus",
                "further", "more", "most", "less", "least", "ago", "later", "recently",
                "yesterday", "today", "tomorrow", "else", "instead", "together", "please",
                "whenever", "wherever", "once",
            ],
            PartOfSpeech::Adverb,
        ),
        (
            &[
                "one", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten",
                "eleven", "twelve", "twenty", "thirty", "forty", "fifty", "hundred",
                "thousand", "million",
            ],
            PartOfSpeech::Numeral,
        ),
    ];
    for (words, pos) in groups {
        for word in words {
            map.entry(*word).or_insert(pos);
        }
    }
    map
});

/// Returns the fixed tag of a closed-class word.
pub(super) fn closed_class(word: &str) -> Option<PartOfSpeech> {
    CLOSED_CLASS.get(word).copied()
}

/// Verb base forms.
pub(super) static VERBS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        // general
        "accept", "add", "allow", "answer", "apply", "arrive", "ask", "become", "begin",
        "believe", "borrow", "break", "bring", "buy", "call", "cancel", "carry", "cause",
        "change", "charge", "check", "choose", "clean", "close", "come", "complain",
        "contact", "continue", "cost", "cover", "cut", "decide", "delay", "deliver", "deny",
        "die", "do", "drive", "drop", "eat", "email", "end", "enter", "expect", "explain",
        "fail", "fall", "feel", "fill", "find", "finish", "fix", "follow", "force", "forget",
        "get", "give", "go", "happen", "hear", "help", "hold", "hurt", "ignore", "include",
        "keep", "know", "learn", "leave", "let", "lie", "like", "live", "look", "lose",
        "love", "make", "mean", "meet", "miss", "move", "need", "offer", "open", "order",
        "owe", "pay", "pick", "plan", "promise", "prove", "provide", "put", "quit", "raise",
        "reach", "read", "receive", "recover", "refuse", "remove", "repair", "replace",
        "reply", "require", "respond", "return", "run", "say", "see", "seem", "sell", "send",
        "show", "sign", "sit", "spend", "start", "stay", "steal", "stop", "suffer", "take",
        "talk", "tell", "think", "threaten", "try", "turn", "understand", "use", "wait",
        "want", "warn", "win", "work", "write",
        // tenancy
        "evict", "lease", "rent", "sublet", "withhold", "inspect", "lock", "relocate",
        "renew", "vacate", "occupy", "sue", "deduct", "refund", "exterminate", "mold",
        "leak", "flood", "heat",
        // employment
        "fire", "hire", "lay", "terminate", "dismiss", "discriminate", "harass", "retaliate",
        "promote", "demote", "discipline", "underpay", "overwork", "resign", "earn",
        "accrue", "schedule", "report", "file", "claim", "misclassify", "classify",
        // consumer
        "purchase", "ship", "exchange", "overcharge", "bill", "scam", "defraud", "mislead",
        "advertise", "guarantee", "warrant", "malfunction", "expire", "subscribe",
        "unsubscribe", "dispute", "notify", "violate", "damage", "break", "recall",
        "misrepresent", "agree", "sign", "breach",
    ]
    .into_iter()
    .collect()
});

/// Irregular verb forms mapped to their base form.
pub(super) static IRREGULAR_VERBS: LazyLock<HashMap<&'static str, &'static str>> =
    LazyLock::new(|| {
        [
            ("am", "be"), ("is", "be"), ("are", "be"), ("was", "be"), ("were", "be"),
            ("been", "be"), ("being", "be"), ("'m", "be"), ("'re", "be"), ("has", "have"),
            ("had", "have"), ("'ve", "have"), ("does", "do"), ("did", "do"), ("done", "do"),
            ("wo", "will"), ("'ll", "will"), ("ca", "can"), ("sha", "shall"),
            ("'d", "would"), ("n't", "not"), ("paid", "pay"), ("went", "go"), ("gone", "go"),
            ("got", "get"), ("gotten", "get"), ("gave", "give"), ("given", "give"),
            ("took", "take"), ("taken", "take"), ("left", "leave"), ("said", "say"),
            ("told", "tell"), ("sold", "sell"), ("bought", "buy"), ("broke", "break"),
            ("broken", "break"), ("kept", "keep"), ("lost", "lose"), ("made", "make"),
            ("sent", "send"), ("came", "come"), ("saw", "see"), ("seen", "see"),
            ("stole", "steal"), ("stolen", "steal"), ("withheld", "withhold"),
            ("spent", "spend"), ("wrote", "write"), ("written", "write"), ("knew", "know"),
            ("known", "know"), ("thought", "think"), ("brought", "bring"),
            ("found", "find"), ("felt", "feel"), ("held", "hold"), ("meant", "mean"),
            ("began", "begin"), ("begun", "begin"), ("became", "become"),
            ("understood", "understand"), ("ran", "run"), ("fell", "fall"),
            ("fallen", "fall"), ("chose", "choose"), ("chosen", "choose"),
            ("forgot", "forget"), ("forgotten", "forget"), ("heard", "hear"),
            ("laid", "lay"), ("met", "meet"), ("read", "read"), ("drove", "drive"),
            ("driven", "drive"), ("ate", "eat"), ("eaten", "eat"), ("sat", "sit"),
            ("won", "win"), ("lent", "lend"), ("dealt", "deal"), ("rang", "ring"),
            ("misled", "mislead"), ("overpaid", "overpay"), ("underpaid", "underpay"),
            ("sublet", "sublet"), ("quit", "quit"), ("let", "let"), ("put", "put"),
            ("cut", "cut"), ("cost", "cost"), ("hurt", "hurt"), ("shut", "shut"),
        ]
        .into_iter()
        .collect()
    });

/// Irregular plural nouns mapped to their singular form.
pub(super) static IRREGULAR_NOUNS: LazyLock<HashMap<&'static str, &'static str>> =
    LazyLock::new(|| {
        [
            ("children", "child"), ("men", "man"), ("women", "woman"), ("people", "person"),
            ("feet", "foot"), ("teeth", "tooth"), ("mice", "mouse"), ("wives", "wife"),
            ("lives", "life"), ("knives", "knife"), ("shelves", "shelf"), ("halves", "half"),
            ("thieves", "thief"), ("landladies", "landlady"), ("criteria", "criterion"),
            ("data", "datum"),
        ]
        .into_iter()
        .collect()
    });

/// Nouns that never lose a trailing "s" when lemmatized.
pub(super) static INVARIANT_NOUNS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "news", "series", "species", "means", "premises", "physics", "economics", "lens",
        "bus", "gas", "bonus", "status", "virus", "census", "basis", "crisis", "analysis",
        "diagnosis", "thesis", "bias", "alias", "atlas", "canvas", "campus", "chassis",
        "process", "business", "address", "access", "witness", "harassment", "illness",
        "always", "this", "is", "was", "has", "does", "yes", "less", "unless", "its",
    ]
    .into_iter()
    .collect()
});

/// Adjectives that suffix rules would miss.
pub(super) static ADJECTIVES: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "bad", "big", "broken", "due", "early", "false", "free", "full", "good", "great",
        "hard", "high", "hot", "cold", "late", "long", "low", "new", "old", "overdue",
        "past", "poor", "real", "right", "safe", "short", "sick", "small", "true", "unfair",
        "unpaid", "unsafe", "unlawful", "illegal", "legal", "wrong", "wrongful", "faulty",
        "defective", "damaged", "dangerous", "moldy", "dirty", "former", "previous",
        "current", "final", "last", "first", "next", "monthly", "weekly", "yearly", "daily",
        "annual", "minimum", "maximum", "extra", "hidden", "excessive", "reasonable",
        "hostile", "pregnant", "disabled", "written", "verbal", "expired", "refundable",
        "nonrefundable", "non-refundable", "misleading", "deceptive", "fraudulent",
        "habitable", "uninhabitable", "late", "partial", "total", "fair", "own", "same",
        "other", "different", "certain", "whole", "entire", "able", "unable", "sexual",
        "racial", "medical", "federal", "local", "private", "public", "full-time",
        "part-time", "overtime", "sure",
    ]
    .into_iter()
    .collect()
});

/// Nouns whose spelling looks adjectival or adverbial ("rental", "family").
pub(super) static NOUNS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "rental", "refusal", "approval", "removal", "arrival", "proposal", "dismissal",
        "disposal", "renewal", "withdrawal", "trial", "manual", "animal", "hospital",
        "capital", "signal", "terminal", "rival", "individual", "professional", "official",
        "criminal", "referral", "family", "supply", "reply", "ally", "assembly", "belly",
        "bully", "monopoly", "anomaly", "employee", "employer", "landlord", "landlady",
        "tenant", "lease", "rent", "deposit", "security", "apartment", "house", "home",
        "unit", "property", "repair", "repairs", "mold", "heat", "water", "notice",
        "eviction", "court", "wage", "wages", "salary", "pay", "paycheck", "overtime",
        "boss", "manager", "job", "work", "shift", "break", "leave", "claim", "report",
        "complaint", "product", "refund", "warranty", "receipt", "store", "seller",
        "company", "order", "charge", "fee", "bill", "contract", "agreement", "return",
        "damage", "damages", "lawyer", "attorney", "money", "month", "week", "year", "day",
        "time", "car", "phone", "item", "purchase", "subscription", "card", "bank",
    ]
    .into_iter()
    .collect()
});

/// Adjective-forming suffixes.
pub(super) const ADJECTIVE_SUFFIXES: &[&str] = &[
    "ous", "ful", "ive", "able", "ible", "al", "ic", "less", "ish", "ary", "ent", "ant",
];

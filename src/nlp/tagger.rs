//! Deterministic lexicon-and-suffix part-of-speech tagger.
// Allow expect() on static regex patterns - these are guaranteed to compile
#![allow(clippy::expect_used)]

use super::chunker::noun_chunks;
use super::lemmatizer::{known_verb_base, lemmatize, noun_lemma};
use super::lexicon::{ADJECTIVE_SUFFIXES, ADJECTIVES, NOUNS, closed_class, is_stop_word};
use super::{PartOfSpeech, Token, Tokenizer};
use crate::Result;
use regex::Regex;
use std::sync::LazyLock;

/// Words (with internal hyphens/apostrophes and combining marks) or single
/// punctuation marks.
static TOKEN_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[\p{L}\p{M}\p{N}]+(?:[-'][\p{L}\p{M}\p{N}]+)*|[^\s\p{L}\p{M}\p{N}]")
        .expect("static regex: token pattern")
});

/// Clitics split off the end of a word, longest first.
const CLITICS: &[&str] = &["n't", "'s", "'re", "'ve", "'ll", "'d", "'m"];

/// Rule-based English tagger.
///
/// Tags closed-class words from a fixed lexicon and open-class words from a
/// seeded vocabulary, suffix heuristics and the tag of the preceding token.
/// It never fails and always produces the same output for the same input.
#[derive(Debug, Clone, Copy, Default)]
pub struct RuleBasedTagger;

impl RuleBasedTagger {
    /// Creates a new tagger.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Splits text into surface tokens, separating clitics ("won't" -> "wo", "n't").
    #[must_use]
    pub fn tokenize(text: &str) -> Vec<String> {
        let normalized = text.replace('\u{2019}', "'");
        let mut tokens = Vec::new();
        for found in TOKEN_PATTERN.find_iter(&normalized) {
            split_clitic(found.as_str(), &mut tokens);
        }
        tokens
    }

    /// Tags a sequence of surface tokens left to right.
    fn tag_tokens(words: Vec<String>) -> Vec<Token> {
        let mut tokens: Vec<Token> = Vec::with_capacity(words.len());
        for word in words {
            let lower = word.to_lowercase();
            let previous = tokens.last().map(|t| t.pos);
            let pos = classify(&lower, previous);
            let lemma = lemmatize(&lower, pos);
            let is_stop = is_stop_word(&lower);
            tokens.push(Token {
                text: word,
                lemma,
                pos,
                is_stop,
            });
        }
        tokens
    }
}

impl Tokenizer for RuleBasedTagger {
    fn tag(&self, text: &str) -> Result<Vec<Token>> {
        Ok(Self::tag_tokens(Self::tokenize(text)))
    }

    fn noun_chunks(&self, text: &str) -> Result<Vec<String>> {
        let tokens = self.tag(text)?;
        Ok(noun_chunks(&tokens))
    }
}

fn split_clitic(word: &str, out: &mut Vec<String>) {
    for clitic in CLITICS {
        if word.len() <= clitic.len() {
            continue;
        }
        let split_at = word.len() - clitic.len();
        if word.is_char_boundary(split_at) && word[split_at..].eq_ignore_ascii_case(clitic) {
            out.push(word[..split_at].to_string());
            out.push(word[split_at..].to_string());
            return;
        }
    }
    out.push(word.to_string());
}

/// Chooses a tag for a lowercase word given the previous token's tag.
fn classify(word: &str, previous: Option<PartOfSpeech>) -> PartOfSpeech {
    if !word.chars().any(char::is_alphanumeric) {
        return PartOfSpeech::Punctuation;
    }
    if word.chars().all(|c| c.is_ascii_digit() || c == ',' || c == '.') {
        return PartOfSpeech::Numeral;
    }
    if let Some(pos) = closed_class(word) {
        return pos;
    }

    let noun_known = NOUNS.contains(word) || NOUNS.contains(noun_lemma(word).as_str());
    let verb_form = known_verb_base(word).is_some();
    let adjective = ADJECTIVES.contains(word)
        || (!noun_known && ADJECTIVE_SUFFIXES.iter().any(|s| has_suffix(word, s)));

    match previous {
        Some(
            PartOfSpeech::Determiner
            | PartOfSpeech::Adjective
            | PartOfSpeech::Adposition
            | PartOfSpeech::Numeral,
        ) => {
            let participle = verb_form && (word.ends_with("ed") || word.ends_with("ing"));
            if adjective || (participle && !noun_known) {
                PartOfSpeech::Adjective
            } else {
                PartOfSpeech::Noun
            }
        },
        Some(PartOfSpeech::Pronoun | PartOfSpeech::Auxiliary | PartOfSpeech::Particle) => {
            if verb_form {
                PartOfSpeech::Verb
            } else if adjective {
                PartOfSpeech::Adjective
            } else if has_suffix(word, "ly") && !noun_known {
                PartOfSpeech::Adverb
            } else {
                PartOfSpeech::Noun
            }
        },
        _ => {
            if adjective {
                PartOfSpeech::Adjective
            } else if verb_form && !noun_known {
                PartOfSpeech::Verb
            } else if has_suffix(word, "ly") && !noun_known {
                PartOfSpeech::Adverb
            } else {
                PartOfSpeech::Noun
            }
        },
    }
}

/// Suffix match that leaves a stem of at least three characters.
fn has_suffix(word: &str, suffix: &str) -> bool {
    word.len() >= suffix.len() + 3 && word.ends_with(suffix)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tags(text: &str) -> Vec<(String, PartOfSpeech)> {
        RuleBasedTagger::new()
            .tag(text)
            .unwrap()
            .into_iter()
            .map(|t| (t.text, t.pos))
            .collect()
    }

    #[test]
    fn test_tokenize_splits_clitics() {
        let tokens = RuleBasedTagger::tokenize("my landlord won't return my landlord's key.");
        assert_eq!(
            tokens,
            vec![
                "my", "landlord", "wo", "n't", "return", "my", "landlord", "'s", "key", "."
            ]
        );
    }

    #[test]
    fn test_tokenize_keeps_hyphenated_words() {
        let tokens = RuleBasedTagger::tokenize("my ex-spouse");
        assert_eq!(tokens, vec!["my", "ex-spouse"]);
    }

    #[test]
    fn test_tokenize_keeps_combining_marks() {
        let tokens = RuleBasedTagger::tokenize("cafe\u{301} i\u{307}stanbul");
        assert_eq!(tokens, vec!["cafe\u{301}", "i\u{307}stanbul"]);
    }

    #[test]
    fn test_tokenize_curly_apostrophe() {
        let tokens = RuleBasedTagger::tokenize("don\u{2019}t");
        assert_eq!(tokens, vec!["do", "n't"]);
    }

    #[test]
    fn test_tag_deposit_question() {
        let tagged = tags("my landlord won't return my security deposit");
        let expected = [
            ("my", PartOfSpeech::Determiner),
            ("landlord", PartOfSpeech::Noun),
            ("wo", PartOfSpeech::Auxiliary),
            ("n't", PartOfSpeech::Particle),
            ("return", PartOfSpeech::Verb),
            ("my", PartOfSpeech::Determiner),
            ("security", PartOfSpeech::Noun),
            ("deposit", PartOfSpeech::Noun),
        ];
        assert_eq!(tagged.len(), expected.len());
        for ((text, pos), (want_text, want_pos)) in tagged.iter().zip(expected) {
            assert_eq!(text, want_text);
            assert_eq!(*pos, want_pos, "tag of {text}");
        }
    }

    #[test]
    fn test_tag_adjective_before_noun() {
        let tagged = tags("i have unpaid overtime wages");
        assert_eq!(tagged[2].1, PartOfSpeech::Adjective);
        assert_eq!(tagged[4].1, PartOfSpeech::Noun);
    }

    #[test]
    fn test_tag_verb_after_pronoun() {
        let tagged = tags("they fired me");
        assert_eq!(tagged[1].1, PartOfSpeech::Verb);
        let token = &RuleBasedTagger::new().tag("they fired me").unwrap()[1];
        assert_eq!(token.lemma, "fire");
    }

    #[test]
    fn test_punctuation_and_numbers() {
        let tagged = tags("paid $500 today!");
        assert!(tagged.iter().any(|(t, p)| t == "500" && *p == PartOfSpeech::Numeral));
        assert!(tagged.iter().any(|(t, p)| t == "!" && *p == PartOfSpeech::Punctuation));
    }

    #[test]
    fn test_stop_flags() {
        let tokens = RuleBasedTagger::new().tag("the landlord").unwrap();
        assert!(tokens[0].is_stop);
        assert!(!tokens[1].is_stop);
    }

    #[test]
    fn test_empty_text() {
        assert!(RuleBasedTagger::new().tag("").unwrap().is_empty());
        assert!(RuleBasedTagger::new().noun_chunks("").unwrap().is_empty());
    }
}

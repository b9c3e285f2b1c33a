//! Tokenization, part-of-speech tagging and noun-chunk detection.
//!
//! Keyword extraction depends only on the narrow [`Tokenizer`] trait, so the
//! matching core can run against any tagger: the bundled
//! [`RuleBasedTagger`], a statistical model behind an adapter, or a
//! deterministic stub in tests.
//!
//! # Example
//!
//! ```rust
//! use legalaid::nlp::{PartOfSpeech, RuleBasedTagger, Tokenizer};
//!
//! let tagger = RuleBasedTagger::new();
//! let tokens = tagger.tag("my landlord kept the deposit").unwrap();
//! assert_eq!(tokens[1].pos, PartOfSpeech::Noun);
//! assert_eq!(tagger.noun_chunks("my landlord kept the deposit").unwrap(),
//!            vec!["my landlord".to_string(), "the deposit".to_string()]);
//! ```

mod chunker;
mod lemmatizer;
mod lexicon;
mod tagger;

pub use chunker::noun_chunks;
pub use lemmatizer::lemmatize;
pub use lexicon::{STOP_WORDS, is_stop_word};
pub use tagger::RuleBasedTagger;

use crate::Result;
use serde::{Deserialize, Serialize};

/// Coarse universal part-of-speech tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PartOfSpeech {
    /// Common noun.
    Noun,
    /// Proper noun.
    #[serde(rename = "PROPN")]
    ProperNoun,
    /// Main verb.
    Verb,
    /// Auxiliary or modal verb.
    #[serde(rename = "AUX")]
    Auxiliary,
    /// Adjective.
    #[serde(rename = "ADJ")]
    Adjective,
    /// Adverb.
    #[serde(rename = "ADV")]
    Adverb,
    /// Pronoun.
    #[serde(rename = "PRON")]
    Pronoun,
    /// Determiner (including possessive determiners).
    #[serde(rename = "DET")]
    Determiner,
    /// Preposition or postposition.
    #[serde(rename = "ADP")]
    Adposition,
    /// Coordinating or subordinating conjunction.
    #[serde(rename = "CONJ")]
    Conjunction,
    /// Particle ("not", "n't", infinitival "to").
    #[serde(rename = "PART")]
    Particle,
    /// Numeral.
    #[serde(rename = "NUM")]
    Numeral,
    /// Punctuation.
    #[serde(rename = "PUNCT")]
    Punctuation,
}

impl PartOfSpeech {
    /// Returns true for the content-word tags that contribute lemmas to a
    /// keyword set (noun, verb, adjective).
    #[must_use]
    pub const fn is_content_word(self) -> bool {
        matches!(self, Self::Noun | Self::Verb | Self::Adjective)
    }

    /// Returns true for noun-like heads of a noun chunk.
    #[must_use]
    pub const fn is_nominal(self) -> bool {
        matches!(self, Self::Noun | Self::ProperNoun)
    }
}

/// A tagged token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// Surface text as it appeared in the input.
    pub text: String,
    /// Dictionary form.
    pub lemma: String,
    /// Part-of-speech tag.
    pub pos: PartOfSpeech,
    /// Whether the token is a stop word.
    pub is_stop: bool,
}

/// Tokenizer/tagger capability consumed by keyword extraction.
///
/// Implementations must be deterministic for a fixed model and safe to share
/// across request tasks.
pub trait Tokenizer: Send + Sync {
    /// Splits `text` into tagged tokens.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying toolkit fails; callers treat this as
    /// fatal for the current request.
    fn tag(&self, text: &str) -> Result<Vec<Token>>;

    /// Returns the text of every noun-phrase chunk in `text`, in order.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying toolkit fails.
    fn noun_chunks(&self, text: &str) -> Result<Vec<String>>;
}

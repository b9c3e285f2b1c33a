//! Base noun-phrase chunking over tagged tokens.

use super::{PartOfSpeech, Token};

/// Personal pronouns that form a noun chunk on their own.
const PRONOUN_CHUNKS: &[&str] = &[
    "i", "me", "you", "he", "him", "she", "it", "we", "us", "they", "them",
];

/// Returns the text of every base noun phrase in `tokens`, in order.
///
/// A chunk is a maximal run of determiners, numerals, adjectives and nouns
/// that ends in a noun; modifiers after the last noun are dropped. A
/// determiner, numeral or adjective that follows a noun starts a new chunk.
/// Personal pronouns are chunks by themselves.
#[must_use]
pub fn noun_chunks(tokens: &[Token]) -> Vec<String> {
    let mut chunks = Vec::new();
    let mut span: Vec<&Token> = Vec::new();

    for token in tokens {
        match token.pos {
            PartOfSpeech::Noun | PartOfSpeech::ProperNoun => span.push(token),
            PartOfSpeech::Determiner | PartOfSpeech::Numeral | PartOfSpeech::Adjective => {
                if span.iter().any(|t| t.pos.is_nominal()) {
                    flush(&mut span, &mut chunks);
                }
                span.push(token);
            },
            PartOfSpeech::Pronoun => {
                flush(&mut span, &mut chunks);
                let lower = token.text.to_lowercase();
                if PRONOUN_CHUNKS.contains(&lower.as_str()) {
                    chunks.push(token.text.clone());
                }
            },
            _ => flush(&mut span, &mut chunks),
        }
    }
    flush(&mut span, &mut chunks);
    chunks
}

/// Emits the current span up to its last nominal token, then clears it.
fn flush(span: &mut Vec<&Token>, chunks: &mut Vec<String>) {
    if let Some(last_noun) = span.iter().rposition(|t| t.pos.is_nominal()) {
        let text = span[..=last_noun]
            .iter()
            .map(|t| t.text.as_str())
            .collect::<Vec<_>>()
            .join(" ");
        chunks.push(text);
    }
    span.clear();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nlp::{RuleBasedTagger, Tokenizer};

    fn token(text: &str, pos: PartOfSpeech) -> Token {
        Token {
            text: text.to_string(),
            lemma: text.to_string(),
            pos,
            is_stop: false,
        }
    }

    #[test]
    fn test_chunks_from_tagged_question() {
        let tagger = RuleBasedTagger::new();
        let chunks = tagger
            .noun_chunks("my landlord won't return my security deposit")
            .unwrap();
        assert_eq!(chunks, vec!["my landlord", "my security deposit"]);
    }

    #[test]
    fn test_trailing_modifiers_dropped() {
        let tokens = vec![
            token("the", PartOfSpeech::Determiner),
            token("rent", PartOfSpeech::Noun),
            token("is", PartOfSpeech::Auxiliary),
            token("the", PartOfSpeech::Determiner),
            token("late", PartOfSpeech::Adjective),
        ];
        assert_eq!(noun_chunks(&tokens), vec!["the rent"]);
    }

    #[test]
    fn test_determiner_after_noun_splits() {
        let tokens = vec![
            token("landlord", PartOfSpeech::Noun),
            token("the", PartOfSpeech::Determiner),
            token("deposit", PartOfSpeech::Noun),
        ];
        assert_eq!(noun_chunks(&tokens), vec!["landlord", "the deposit"]);
    }

    #[test]
    fn test_pronoun_chunks() {
        let tokens = vec![
            token("they", PartOfSpeech::Pronoun),
            token("fired", PartOfSpeech::Verb),
            token("me", PartOfSpeech::Pronoun),
            token("myself", PartOfSpeech::Pronoun),
        ];
        assert_eq!(noun_chunks(&tokens), vec!["they", "me"]);
    }

    #[test]
    fn test_no_nouns() {
        let tokens = vec![
            token("very", PartOfSpeech::Adverb),
            token("bad", PartOfSpeech::Adjective),
        ];
        assert!(noun_chunks(&tokens).is_empty());
    }
}

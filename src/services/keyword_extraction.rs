//! Keyword extraction from free text.

use crate::Result;
use crate::models::KeywordSet;
use crate::nlp::Tokenizer;
use std::sync::Arc;
use tracing::instrument;

/// Minimum length (in characters) a literal token must exceed to be kept.
const MIN_LITERAL_CHARS: usize = 2;

/// Extracts normalized keywords from a question.
///
/// The keyword set is the union of:
/// - lemmas of non-stop-word nouns, verbs and adjectives
/// - the full text of every noun chunk
/// - the literal text of every non-stop-word token longer than two characters
///
/// Everything is lowercased before tagging.
#[derive(Clone)]
pub struct KeywordExtractor {
    tokenizer: Arc<dyn Tokenizer>,
}

impl KeywordExtractor {
    /// Creates an extractor over `tokenizer`.
    #[must_use]
    pub fn new(tokenizer: Arc<dyn Tokenizer>) -> Self {
        Self { tokenizer }
    }

    /// Extracts the keyword set of `text`. Empty text yields an empty set.
    ///
    /// # Errors
    ///
    /// Propagates tokenizer failures unchanged.
    #[instrument(skip(self, text), fields(operation = "extract_keywords", text_len = text.len()))]
    pub fn extract(&self, text: &str) -> Result<KeywordSet> {
        let lowered = text.to_lowercase();
        let mut keywords = KeywordSet::new();
        if lowered.trim().is_empty() {
            return Ok(keywords);
        }

        let tokens = self.tokenizer.tag(&lowered)?;

        // Lemmas of content words
        for token in tokens.iter().filter(|t| t.pos.is_content_word() && !t.is_stop) {
            keywords.insert(&token.lemma);
        }

        // Noun phrases
        for chunk in self.tokenizer.noun_chunks(&lowered)? {
            keywords.insert(&chunk);
        }

        // Literal tokens
        for token in tokens
            .iter()
            .filter(|t| !t.is_stop && t.text.chars().count() > MIN_LITERAL_CHARS)
        {
            keywords.insert(&token.text);
        }

        tracing::debug!(keywords = keywords.len(), "Extracted keywords");
        Ok(keywords)
    }
}

impl std::fmt::Debug for KeywordExtractor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KeywordExtractor").finish_non_exhaustive()
    }
}

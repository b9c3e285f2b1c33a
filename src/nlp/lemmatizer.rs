//! Suffix-rule lemmatizer.

use super::PartOfSpeech;
use super::lexicon::{INVARIANT_NOUNS, IRREGULAR_NOUNS, IRREGULAR_VERBS, VERBS};

/// Returns the dictionary form of a lowercase `word` given its tag.
///
/// Nouns lose plural endings, verbs and auxiliaries lose inflection, every
/// other tag is returned unchanged.
///
/// # Examples
///
/// ```rust
/// use legalaid::nlp::{PartOfSpeech, lemmatize};
///
/// assert_eq!(lemmatize("deposits", PartOfSpeech::Noun), "deposit");
/// assert_eq!(lemmatize("evicted", PartOfSpeech::Verb), "evict");
/// assert_eq!(lemmatize("paid", PartOfSpeech::Verb), "pay");
/// ```
#[must_use]
pub fn lemmatize(word: &str, pos: PartOfSpeech) -> String {
    match pos {
        PartOfSpeech::Noun => noun_lemma(word),
        PartOfSpeech::Verb | PartOfSpeech::Auxiliary => verb_lemma(word),
        _ => word.to_string(),
    }
}

/// Singularizes a noun.
pub(super) fn noun_lemma(word: &str) -> String {
    if let Some(singular) = IRREGULAR_NOUNS.get(word) {
        return (*singular).to_string();
    }
    if INVARIANT_NOUNS.contains(word) || word.chars().count() <= 3 {
        return word.to_string();
    }
    if let Some(stem) = word.strip_suffix("ies") {
        return format!("{stem}y");
    }
    if word.ends_with("sses") {
        return word[..word.len() - 2].to_string();
    }
    for suffix in ["xes", "ches", "shes", "zzes"] {
        if word.ends_with(suffix) {
            return word[..word.len() - 2].to_string();
        }
    }
    if word.ends_with("ss") || word.ends_with("us") || word.ends_with("is") {
        return word.to_string();
    }
    word.strip_suffix('s').unwrap_or(word).to_string()
}

/// Reduces an inflected verb to its base form.
pub(super) fn verb_lemma(word: &str) -> String {
    if let Some(base) = IRREGULAR_VERBS.get(word) {
        return (*base).to_string();
    }
    if VERBS.contains(word) {
        return word.to_string();
    }
    known_verb_base(word).unwrap_or_else(|| guess_verb_base(word))
}

/// Returns the base form if `word` is an inflection of a known verb.
pub(super) fn known_verb_base(word: &str) -> Option<String> {
    if let Some(base) = IRREGULAR_VERBS.get(word) {
        return Some((*base).to_string());
    }
    if VERBS.contains(word) {
        return Some(word.to_string());
    }
    candidate_bases(word)
        .into_iter()
        .find(|candidate| VERBS.contains(candidate.as_str()))
}

/// Strips an inflectional ending without consulting the lexicon.
fn guess_verb_base(word: &str) -> String {
    for suffix in ["ing", "ed"] {
        if let Some(stem) = word.strip_suffix(suffix) {
            if stem.chars().count() < 3 {
                break;
            }
            if let Some(undoubled) = undouble(stem) {
                return undoubled;
            }
            return stem.to_string();
        }
    }
    if let Some(stem) = word.strip_suffix("ies") {
        return format!("{stem}y");
    }
    if word.ends_with("ss") || word.chars().count() <= 3 {
        return word.to_string();
    }
    word.strip_suffix('s').unwrap_or(word).to_string()
}

/// Every plausible base form for an inflected verb, most specific first.
fn candidate_bases(word: &str) -> Vec<String> {
    let mut candidates = Vec::new();
    if let Some(stem) = word.strip_suffix("ied").or_else(|| word.strip_suffix("ies")) {
        candidates.push(format!("{stem}y"));
    }
    for suffix in ["ing", "ed"] {
        if let Some(stem) = word.strip_suffix(suffix) {
            candidates.push(stem.to_string());
            candidates.push(format!("{stem}e"));
            if let Some(undoubled) = undouble(stem) {
                candidates.push(undoubled);
            }
        }
    }
    if let Some(stem) = word.strip_suffix("es") {
        candidates.push(stem.to_string());
    }
    if let Some(stem) = word.strip_suffix('s') {
        candidates.push(stem.to_string());
    }
    candidates
}

/// "stopp" -> "stop", "omitt" -> "omit".
fn undouble(stem: &str) -> Option<String> {
    let mut chars = stem.chars().rev();
    let last = chars.next()?;
    let previous = chars.next()?;
    if last == previous && !matches!(last, 'l' | 's' | 'z' | 'e' | 'o') && !last.is_ascii_digit()
    {
        let mut undoubled = stem.to_string();
        undoubled.pop();
        return Some(undoubled);
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("deposits", "deposit" ; "regular plural")]
    #[test_case("parties", "party" ; "ies plural")]
    #[test_case("addresses", "address" ; "sses plural")]
    #[test_case("boxes", "box" ; "xes plural")]
    #[test_case("children", "child" ; "irregular plural")]
    #[test_case("premises", "premises" ; "invariant")]
    #[test_case("status", "status" ; "us ending")]
    #[test_case("landlord", "landlord" ; "singular")]
    fn test_noun_lemma(word: &str, expected: &str) {
        assert_eq!(lemmatize(word, PartOfSpeech::Noun), expected);
    }

    #[test_case("evicted", "evict" ; "regular past")]
    #[test_case("charging", "charge" ; "e restored")]
    #[test_case("stopped", "stop" ; "doubled consonant")]
    #[test_case("applies", "apply" ; "ies present")]
    #[test_case("paid", "pay" ; "irregular")]
    #[test_case("returns", "return" ; "third person")]
    #[test_case("wo", "will" ; "contraction stem")]
    #[test_case("violating", "violate" ; "progressive")]
    #[test_case("blorked", "blork" ; "unknown verb")]
    fn test_verb_lemma(word: &str, expected: &str) {
        assert_eq!(lemmatize(word, PartOfSpeech::Verb), expected);
    }

    #[test]
    fn test_other_tags_unchanged() {
        assert_eq!(lemmatize("unpaid", PartOfSpeech::Adjective), "unpaid");
        assert_eq!(lemmatize("quickly", PartOfSpeech::Adverb), "quickly");
    }

    #[test]
    fn test_known_verb_base() {
        assert_eq!(known_verb_base("refused").as_deref(), Some("refuse"));
        assert_eq!(known_verb_base("landlord"), None);
    }
}

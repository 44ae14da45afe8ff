// Text normalization — raw user text to a clean token string.
//
// The pipeline is a fixed-order chain of pure rules. Order matters: the
// rules interact (mentions before URLs, entities before symbol stripping),
// so reordering them changes the output.
//
// The function is total: any string in, a valid (possibly empty) string out.
// Empty input, pure punctuation, and stopword-only input all yield "".

pub mod lemma;
pub mod rules;
pub mod stopwords;

use lemma::lemmatize_verb;
use rules::{replace_mentions, strip_entities, strip_symbols, strip_urls};
use stopwords::is_stopword;

/// Normalize raw text into a space-joined string of lowercase, lemmatized,
/// stopword-free alphabetic tokens — the form the classifier's vocabulary
/// was built against.
pub fn normalize(text: &str) -> String {
    let text = replace_mentions(text);
    let text = strip_entities(&text);
    let text = strip_urls(&text);
    let text = strip_symbols(&text);

    // After symbol stripping only word characters and whitespace remain, so
    // whitespace splitting is exactly word tokenization here.
    let tokens: Vec<String> = text
        .split_whitespace()
        .map(str::to_lowercase)
        .filter(|t| !is_stopword(t) && t.chars().all(char::is_alphabetic))
        .map(|t| lemmatize_verb(&t))
        .collect();

    tokens.join(" ")
}

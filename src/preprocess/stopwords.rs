// The stopword set used by the normalizer.
//
// The list comes from the stop-words crate's NLTK corpus — the same list the
// model's training pipeline filtered against — plus "rt", which dominates
// retweeted social-media text without carrying any signal.

use std::collections::HashSet;
use std::sync::LazyLock;

use stop_words::{get, LANGUAGE};

static STOPWORDS: LazyLock<HashSet<String>> = LazyLock::new(|| {
    let mut words: HashSet<String> = get(LANGUAGE::English).into_iter().collect();
    words.insert("rt".to_string());
    words
});

/// Whether a (lowercased) token is a stopword.
pub fn is_stopword(token: &str) -> bool {
    STOPWORDS.contains(token)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_common_stopwords() {
        for word in ["the", "a", "an", "is", "out", "now"] {
            assert!(is_stopword(word), "{word} should be a stopword");
        }
    }

    #[test]
    fn test_rt_is_a_stopword() {
        assert!(is_stopword("rt"));
    }

    #[test]
    fn test_content_words_are_not_stopwords() {
        for word in ["check", "user", "hate", "love"] {
            assert!(!is_stopword(word), "{word} should not be a stopword");
        }
    }
}

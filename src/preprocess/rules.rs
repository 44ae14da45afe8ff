// The ordered string-transform rules that make up the normalizer.
//
// Each rule is a pure function so it can be tested on its own. Order matters
// when the rules are composed: mentions are rewritten before URL stripping
// (so `@user http://...` doesn't leave a dangling `@`), and entities go
// before symbol stripping (so `&amp;` is removed whole rather than decaying
// into the bare token `amp`).

use std::sync::LazyLock;

use regex_lite::Regex;

static MENTION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"@[^ ]+").expect("mention pattern is valid"));

static ENTITY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"&[^\s;]+;").expect("entity pattern is valid"));

static URL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"http\S+|www\S+|https\S+").expect("url pattern is valid"));

/// Rule 1: replace every `@mention` (the `@` plus the following non-space
/// run) with the literal placeholder `user`.
pub fn replace_mentions(text: &str) -> String {
    MENTION.replace_all(text, "user").into_owned()
}

/// Rule 2: strip HTML/XML character entity references such as `&amp;` or
/// `&#x27;` — anything of the form `&<non-space-non-semicolon-run>;`.
pub fn strip_entities(text: &str) -> String {
    ENTITY.replace_all(text, "").into_owned()
}

/// Rule 3: strip URLs — any non-whitespace run starting with `http`, `https`
/// or `www`.
pub fn strip_urls(text: &str) -> String {
    URL.replace_all(text, "").into_owned()
}

/// Rule 4: strip everything that is neither a word character nor whitespace.
///
/// This is a char filter rather than a regex because the word-character class
/// here is Unicode-aware (accented letters survive, emoji and punctuation do
/// not), matching how the model's training data was cleaned.
pub fn strip_symbols(text: &str) -> String {
    text.chars()
        .filter(|c| c.is_alphanumeric() || *c == '_' || c.is_whitespace())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replace_mentions_basic() {
        assert_eq!(replace_mentions("@john hello"), "user hello");
    }

    #[test]
    fn test_replace_mentions_stops_at_space() {
        // The match runs to the next space, not to the end of the string
        assert_eq!(replace_mentions("@a.b.c said hi"), "user said hi");
    }

    #[test]
    fn test_replace_mentions_multiple() {
        assert_eq!(replace_mentions("@a and @b"), "user and user");
    }

    #[test]
    fn test_replace_mentions_mid_token() {
        // An @ inside a token still triggers the rewrite, as in the original
        // training pipeline
        assert_eq!(replace_mentions("email@example.com x"), "emailuser x");
    }

    #[test]
    fn test_strip_entities() {
        assert_eq!(strip_entities("a &amp; b &#x27;c"), "a  b c");
    }

    #[test]
    fn test_strip_entities_requires_semicolon() {
        // A bare ampersand is not an entity; rule 4 removes it later
        assert_eq!(strip_entities("a & b"), "a & b");
    }

    #[test]
    fn test_strip_urls() {
        assert_eq!(strip_urls("see http://x.com/a?b=1 now"), "see  now");
        assert_eq!(strip_urls("see www.example.com now"), "see  now");
        assert_eq!(strip_urls("see https://x.com now"), "see  now");
    }

    #[test]
    fn test_strip_symbols_punctuation() {
        assert_eq!(strip_symbols("wow!!! really?!"), "wow really");
    }

    #[test]
    fn test_strip_symbols_keeps_unicode_letters() {
        assert_eq!(strip_symbols("café naïve"), "café naïve");
    }

    #[test]
    fn test_strip_symbols_drops_emoji() {
        assert_eq!(strip_symbols("fine 👍 ok"), "fine  ok");
    }

    #[test]
    fn test_strip_symbols_keeps_underscore_and_digits() {
        assert_eq!(strip_symbols("snake_case 42"), "snake_case 42");
    }
}

// Verb lemmatization — reduce inflected verb forms to their base form.
//
// Modeled on WordNet's morphy for the verb part of speech: an exception
// table is consulted first (irregular verbs, plus doubled-consonant
// inflections like "running", which suffix rules alone cannot undo), then
// ordered suffix-detachment rules handle the regular inflections. Nouns and
// adjectives that don't carry a verb suffix pass through unchanged.
//
// Without WordNet's lexicon to validate candidates against, the rules use a
// short-stem heuristic to decide when a trailing "e" was dropped by the
// inflection ("mak" -> "make") versus not ("want" -> "want").

use std::collections::HashMap;
use std::sync::LazyLock;

/// Irregular and doubled-consonant verb forms, keyed by inflected form.
///
/// A high-frequency slice of WordNet's verb exception list. Forms that are
/// themselves stopwords ("was", "is", "being", ...) never reach the
/// lemmatizer, but are kept here so the function is correct on its own.
const EXCEPTIONS: &[(&str, &str)] = &[
    // be / have / do
    ("am", "be"),
    ("is", "be"),
    ("are", "be"),
    ("was", "be"),
    ("were", "be"),
    ("been", "be"),
    ("being", "be"),
    ("has", "have"),
    ("had", "have"),
    ("having", "have"),
    ("does", "do"),
    ("did", "do"),
    ("done", "do"),
    // common irregular pasts and participles
    ("went", "go"),
    ("gone", "go"),
    ("said", "say"),
    ("made", "make"),
    ("took", "take"),
    ("taken", "take"),
    ("came", "come"),
    ("saw", "see"),
    ("seen", "see"),
    ("seeing", "see"),
    ("got", "get"),
    ("gotten", "get"),
    ("gave", "give"),
    ("given", "give"),
    ("knew", "know"),
    ("known", "know"),
    ("thought", "think"),
    ("found", "find"),
    ("told", "tell"),
    ("became", "become"),
    ("left", "leave"),
    ("felt", "feel"),
    ("brought", "bring"),
    ("began", "begin"),
    ("begun", "begin"),
    ("kept", "keep"),
    ("held", "hold"),
    ("wrote", "write"),
    ("written", "write"),
    ("stood", "stand"),
    ("heard", "hear"),
    ("meant", "mean"),
    ("met", "meet"),
    ("ran", "run"),
    ("paid", "pay"),
    ("sat", "sit"),
    ("spoke", "speak"),
    ("spoken", "speak"),
    ("lost", "lose"),
    ("led", "lead"),
    ("grew", "grow"),
    ("grown", "grow"),
    ("fell", "fall"),
    ("fallen", "fall"),
    ("sent", "send"),
    ("built", "build"),
    ("understood", "understand"),
    ("drew", "draw"),
    ("drawn", "draw"),
    ("broke", "break"),
    ("broken", "break"),
    ("spent", "spend"),
    ("rose", "rise"),
    ("risen", "rise"),
    ("drove", "drive"),
    ("driven", "drive"),
    ("bought", "buy"),
    ("wore", "wear"),
    ("worn", "wear"),
    ("chose", "choose"),
    ("chosen", "choose"),
    ("ate", "eat"),
    ("eaten", "eat"),
    ("sang", "sing"),
    ("sung", "sing"),
    ("flew", "fly"),
    ("flown", "fly"),
    ("threw", "throw"),
    ("thrown", "throw"),
    ("caught", "catch"),
    ("taught", "teach"),
    ("fought", "fight"),
    ("sought", "seek"),
    ("slept", "sleep"),
    ("won", "win"),
    ("swam", "swim"),
    ("swum", "swim"),
    ("died", "die"),
    ("lied", "lie"),
    ("lying", "lie"),
    ("dying", "die"),
    ("tying", "tie"),
    // doubled-consonant inflections (rules cannot undouble safely)
    ("running", "run"),
    ("getting", "get"),
    ("putting", "put"),
    ("sitting", "sit"),
    ("hitting", "hit"),
    ("letting", "let"),
    ("setting", "set"),
    ("cutting", "cut"),
    ("quitting", "quit"),
    ("shutting", "shut"),
    ("stopped", "stop"),
    ("stopping", "stop"),
    ("planned", "plan"),
    ("planning", "plan"),
    ("winning", "win"),
    ("beginning", "begin"),
    ("swimming", "swim"),
    ("shopping", "shop"),
    ("shopped", "shop"),
    ("chatting", "chat"),
    ("grabbed", "grab"),
    ("grabbing", "grab"),
    ("dropped", "drop"),
    ("dropping", "drop"),
    ("banned", "ban"),
    ("banning", "ban"),
    ("begged", "beg"),
    ("begging", "beg"),
    ("hugged", "hug"),
    ("hugging", "hug"),
    ("slapped", "slap"),
    ("slapping", "slap"),
    ("robbed", "rob"),
    ("robbing", "rob"),
    ("stabbed", "stab"),
    ("stabbing", "stab"),
    // regular forms the suffix rules get wrong
    ("opened", "open"),
    ("opening", "open"),
    ("agreed", "agree"),
    ("freed", "free"),
];

static EXCEPTION_MAP: LazyLock<HashMap<&'static str, &'static str>> =
    LazyLock::new(|| EXCEPTIONS.iter().copied().collect());

/// Lemmatize a single lowercase token with the verb part-of-speech rule.
///
/// Tokens that carry no recognized verb inflection come back unchanged, so
/// the function is safe to apply to every surviving token in the pipeline.
pub fn lemmatize_verb(token: &str) -> String {
    if let Some(base) = EXCEPTION_MAP.get(token) {
        return (*base).to_string();
    }

    // "studies" -> "study", "studied" -> "study"
    if token.len() > 4 {
        if let Some(stem) = token.strip_suffix("ies") {
            return format!("{stem}y");
        }
        if let Some(stem) = token.strip_suffix("ied") {
            return format!("{stem}y");
        }
    }

    // "making" -> "make", "playing" -> "play". The stem must still hold a
    // vowel, or "thing"/"bring"/"string" would be mangled.
    if token.len() >= 5 {
        if let Some(stem) = token.strip_suffix("ing") {
            if has_vowel(stem) {
                return restore_e(stem);
            }
            return token.to_string();
        }
    }

    // "hated" -> "hate", "wanted" -> "want". Words ending "eed" ("need",
    // "feed", "speed") are bases, not inflections.
    if token.len() >= 4 && !token.ends_with("eed") {
        if let Some(stem) = token.strip_suffix("ed") {
            if has_vowel(stem) {
                return restore_e(stem);
            }
            return token.to_string();
        }
    }

    // "watches" -> "watch", "passes" -> "pass", "goes" -> "go"
    if let Some(stem) = token.strip_suffix("es") {
        if stem.ends_with("ss")
            || stem.ends_with(['x', 'z', 'o'])
            || stem.ends_with("ch")
            || stem.ends_with("sh")
        {
            return stem.to_string();
        }
        // otherwise the base kept its "e": "makes" -> "make" via the s-rule
    }

    // "runs" -> "run", "houses" -> "house"
    if token.len() > 3 && token.ends_with('s') && !token.ends_with("ss") {
        return token[..token.len() - 1].to_string();
    }

    token.to_string()
}

fn is_vowel(c: char) -> bool {
    matches!(c, 'a' | 'e' | 'i' | 'o' | 'u')
}

fn has_vowel(stem: &str) -> bool {
    stem.chars().any(|c| is_vowel(c) || c == 'y')
}

/// Decide whether a detached stem lost a trailing "e" to the inflection.
///
/// Short stems ending consonant-after-vowel almost always did ("mak", "us",
/// "stat"); longer stems almost never did ("visit", "want").
fn restore_e(stem: &str) -> String {
    let chars: Vec<char> = stem.chars().collect();
    let n = chars.len();

    let ends_cvc = n >= 3
        && !is_vowel(chars[n - 3])
        && is_vowel(chars[n - 2])
        && !is_vowel(chars[n - 1])
        && !matches!(chars[n - 1], 'w' | 'x' | 'y');
    let short_vc = n == 2 && is_vowel(chars[0]) && !is_vowel(chars[1]);

    if n <= 4 && (ends_cvc || short_vc) {
        format!("{stem}e")
    } else {
        stem.to_string()
    }
}

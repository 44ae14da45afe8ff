// Fixed-length sequence encoding.
//
// Normalized text is split on whitespace, mapped through the vocabulary
// (unknown tokens dropped), then padded or truncated to exactly
// `max_length` ids. The convention matches the model's training pipeline:
// pad on the LEFT with id 0, and on overflow truncate from the FRONT,
// keeping the last `max_length` ids. A mismatch here wouldn't error — it
// would silently degrade accuracy — so both sides are pinned down and
// tested.

use anyhow::Result;

use super::traits::Vocabulary;

/// Reserved id used to fill sequences up to `max_length`.
pub const PADDING_ID: i64 = 0;

/// Encode normalized text into exactly `max_length` integer ids.
pub fn encode_sequence(normalized: &str, vocab: &dyn Vocabulary, max_length: usize) -> Vec<i64> {
    let ids: Vec<i64> = normalized
        .split_whitespace()
        .filter_map(|token| vocab.encode(token))
        .collect();

    if ids.len() >= max_length {
        // Keep the tail — the training pipeline truncated from the front
        ids[ids.len() - max_length..].to_vec()
    } else {
        let mut padded = vec![PADDING_ID; max_length - ids.len()];
        padded.extend_from_slice(&ids);
        padded
    }
}

/// Encode and verify the length invariant.
///
/// The length check guards against an internal bug, not bad input; if it
/// ever trips, the submission fails recoverably instead of handing the
/// model a malformed tensor.
pub fn encode_checked(
    normalized: &str,
    vocab: &dyn Vocabulary,
    max_length: usize,
) -> Result<Vec<i64>> {
    let sequence = encode_sequence(normalized, vocab, max_length);
    if sequence.len() != max_length {
        anyhow::bail!(
            "Encoded sequence has length {}, expected {max_length}",
            sequence.len()
        );
    }
    Ok(sequence)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::vocab::WordIndex;

    fn vocab() -> WordIndex {
        WordIndex::from_pairs([
            ("a".to_string(), 1),
            ("b".to_string(), 2),
            ("c".to_string(), 3),
        ])
    }

    #[test]
    fn test_left_padding() {
        let seq = encode_sequence("a b", &vocab(), 5);
        assert_eq!(seq, vec![0, 0, 0, 1, 2]);
    }

    #[test]
    fn test_truncation_keeps_tail() {
        let seq = encode_sequence("a b c", &vocab(), 2);
        assert_eq!(seq, vec![2, 3]);
    }

    #[test]
    fn test_exact_fit() {
        let seq = encode_sequence("a b c", &vocab(), 3);
        assert_eq!(seq, vec![1, 2, 3]);
    }

    #[test]
    fn test_unknown_tokens_dropped_before_padding() {
        let seq = encode_sequence("a zebra b", &vocab(), 4);
        assert_eq!(seq, vec![0, 0, 1, 2]);
    }

    #[test]
    fn test_empty_input_is_all_padding() {
        let seq = encode_sequence("", &vocab(), 4);
        assert_eq!(seq, vec![0, 0, 0, 0]);
    }

    #[test]
    fn test_checked_length_invariant() {
        for text in ["", "a", "a b c a b c a b c"] {
            let seq = encode_checked(text, &vocab(), 6).unwrap();
            assert_eq!(seq.len(), 6);
        }
    }
}

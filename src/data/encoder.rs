// ============================================================
// Layer 4 — Dataset Encoder
// ============================================================
// Turns a token stream into vocabulary ids.
//
// Tokens missing from the vocabulary (words that only occur in
// the validation or test split) are dropped rather than mapped
// to an unknown id, so an encoded split can be shorter than its
// token stream.

use crate::domain::vocabulary::Vocabulary;

/// Encode tokens to ids, skipping out-of-vocabulary tokens.
pub fn encode<S: AsRef<str>>(tokens: &[S], vocab: &Vocabulary) -> Vec<usize> {
    let ids: Vec<usize> = tokens
        .iter()
        .filter_map(|t| vocab.id(t.as_ref()))
        .collect();

    let dropped = tokens.len() - ids.len();
    if dropped > 0 {
        tracing::debug!("Dropped {} out-of-vocabulary tokens of {}", dropped, tokens.len());
    }
    ids
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encodes_in_order() {
        let vocab = Vocabulary::build(&["a", "a", "b", "c"]);
        assert_eq!(encode(&["c", "a", "b", "a"], &vocab), vec![2, 0, 1, 0]);
    }

    #[test]
    fn test_absent_tokens_are_dropped() {
        let vocab   = Vocabulary::build(&["a", "a", "b", "c"]);
        let tokens  = ["x", "a", "y", "c", "z", "b"];
        let encoded = encode(&tokens, &vocab);

        let expected: Vec<usize> = tokens
            .iter()
            .filter_map(|t| vocab.id(t))
            .collect();
        assert_eq!(encoded, expected);
        assert_eq!(encoded, vec![0, 2, 1]);
    }

    #[test]
    fn test_all_absent_gives_empty() {
        let vocab = Vocabulary::build(&["a"]);
        assert!(encode(&["q", "r"], &vocab).is_empty());
    }
}

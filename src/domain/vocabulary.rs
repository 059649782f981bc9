// ============================================================
// Layer 3 — Vocabulary
// ============================================================
// A word-level vocabulary built from the training corpus.
//
// Id assignment:
//   1. Count how often every distinct token occurs
//   2. Sort by count descending, breaking ties by the token
//      text ascending, so the ranking never depends on hash
//      iteration order
//   3. Hand out ids 0..N-1 in that order
//
// The most frequent token therefore always gets id 0, and the
// ids are dense: every value in 0..len() maps back to a token.
//
// Reference: Rust Book §8 (HashMap), §13 (Iterators)

use std::collections::HashMap;

/// Forward (token → id) and reverse (id → token) lookup tables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vocabulary {
    word_to_id: HashMap<String, usize>,
    id_to_word: Vec<String>,
}

impl Vocabulary {
    /// Build the vocabulary from a token stream.
    pub fn build<S: AsRef<str>>(tokens: &[S]) -> Self {
        let mut freq: HashMap<&str, usize> = HashMap::new();
        for token in tokens {
            *freq.entry(token.as_ref()).or_insert(0) += 1;
        }

        let mut ranked: Vec<(&str, usize)> = freq.into_iter().collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));

        let id_to_word: Vec<String> = ranked
            .into_iter()
            .map(|(word, _)| word.to_string())
            .collect();
        let word_to_id = id_to_word
            .iter()
            .enumerate()
            .map(|(id, word)| (word.clone(), id))
            .collect();

        Self { word_to_id, id_to_word }
    }

    /// Id of a token, or None if it never appeared in the training corpus
    pub fn id(&self, token: &str) -> Option<usize> {
        self.word_to_id.get(token).copied()
    }

    /// Token for an id, or None if the id is out of range
    pub fn token(&self, id: usize) -> Option<&str> {
        self.id_to_word.get(id).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.id_to_word.len()
    }

    /// Map ids back to tokens. Unknown ids are skipped.
    pub fn decode(&self, ids: &[usize]) -> Vec<&str> {
        ids.iter().filter_map(|&id| self.token(id)).collect()
    }
}

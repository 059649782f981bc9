// ============================================================
// Layer 3 — Corpus Domain Type
// ============================================================
// A corpus is the token stream of a single text file.
// Newlines have already been replaced by the end-of-sequence
// marker, so sentence boundaries survive as ordinary tokens.
//
// Reference: Rust Book §5 (Structs and Methods)

/// The synthetic token that stands in for every newline.
pub const EOS_TOKEN: &str = "<eos>";

/// An immutable token stream loaded from disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Corpus {
    /// The file name the tokens were read from
    pub source: String,

    /// Whitespace-delimited tokens in file order
    pub tokens: Vec<String>,
}

impl Corpus {
    /// Create a new Corpus from a source name and its tokens.
    pub fn new(source: impl Into<String>, tokens: Vec<String>) -> Self {
        Self {
            source: source.into(),
            tokens,
        }
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Number of sentence boundaries in the stream
    pub fn sentence_count(&self) -> usize {
        self.tokens.iter().filter(|t| t.as_str() == EOS_TOKEN).count()
    }
}

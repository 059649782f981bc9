// ============================================================
// Layer 4 — Corpus Loader
// ============================================================
// Reads a Penn Treebank style text file into a token stream.
//
// The PTB files hold one sentence per line, already lower-cased
// and space separated, e.g.
//
//   " no it was n't black monday \n"
//
// Every '\n' is replaced by the literal "<eos>" marker and the
// result is split on whitespace:
//
//   ["no", "it", "was", "n't", "black", "monday", "<eos>"]
//
// The replacement happens before splitting, so a newline with
// no surrounding whitespace glues the marker onto its neighbours
// ("a\nb" → ["a<eos>b"]). The PTB files pad every line with
// spaces, so this never happens on the real data.
//
// Reference: Rust Book §9 (Error Handling)
//            Rust Book §12 (Reading a File)

use anyhow::{Context, Result};
use std::{fs, path::{Path, PathBuf}};

use crate::domain::corpus::{Corpus, EOS_TOKEN};
use crate::domain::traits::CorpusSource;

/// Loads one whitespace-tokenised text file.
/// Implements the CorpusSource trait from Layer 3.
pub struct PtbFileLoader {
    path: PathBuf,
}

impl PtbFileLoader {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl CorpusSource for PtbFileLoader {
    fn load(&self) -> Result<Corpus> {
        let tokens = read_words(&self.path)?;

        let source = self
            .path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("unknown")
            .to_string();

        let corpus = Corpus::new(source, tokens);
        tracing::debug!(
            "Loaded {} tokens in {} sentences from '{}'",
            corpus.len(),
            corpus.sentence_count(),
            self.path.display()
        );
        Ok(corpus)
    }
}

/// Read a file and split it into tokens, substituting the
/// end-of-sequence marker for every newline.
pub fn read_words(path: &Path) -> Result<Vec<String>> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Cannot read corpus file '{}'", path.display()))?;
    Ok(tokenize(&text))
}

/// Tokenise raw text the same way `read_words` does.
pub fn tokenize(text: &str) -> Vec<String> {
    text.replace('\n', EOS_TOKEN)
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_newlines_become_eos() {
        let tokens = tokenize(" the cat \n sat down \n");
        assert_eq!(tokens, vec!["the", "cat", "<eos>", "sat", "down", "<eos>"]);
    }

    #[test]
    fn test_marker_is_substituted_before_splitting() {
        assert_eq!(tokenize("a\nb"), vec!["a<eos>b"]);
    }

    #[test]
    fn test_collapses_runs_of_whitespace() {
        assert_eq!(tokenize("  a \t b   c  "), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, " no it was n't black monday \n but while \n").unwrap();

        let corpus = PtbFileLoader::new(file.path()).load().unwrap();
        assert_eq!(corpus.len(), 9);
        assert_eq!(corpus.tokens[6], "<eos>");
        assert_eq!(corpus.sentence_count(), 2);
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let dir  = tempfile::tempdir().unwrap();
        let path = dir.path().join("ptb.nope.txt");
        let err  = PtbFileLoader::new(&path).load().unwrap_err();
        assert!(format!("{err:#}").contains("ptb.nope.txt"));
    }
}

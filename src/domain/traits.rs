// ============================================================
// Layer 3 — Core Traits (Abstractions)
// ============================================================
// The application layer asks for a corpus through this trait
// and never touches file handling directly. PtbFileLoader is
// the only implementation today; a test can hand in an
// in-memory source instead.
//
// Reference: Rust Book §10 (Traits: Defining Shared Behaviour)

use anyhow::Result;
use crate::domain::corpus::Corpus;

// ─── CorpusSource ─────────────────────────────────────────────────────────────
/// Any component that can produce a tokenised corpus.
pub trait CorpusSource {
    /// Read the full token stream.
    fn load(&self) -> Result<Corpus>;
}

/// An already-tokenised corpus is trivially its own source.
impl CorpusSource for Corpus {
    fn load(&self) -> Result<Corpus> {
        Ok(self.clone())
    }
}

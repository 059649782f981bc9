use anyhow::{ensure, Result};
use std::path::Path;

use crate::data::{encoder::encode, loader::PtbFileLoader};
use crate::domain::traits::CorpusSource;
use crate::domain::vocabulary::Vocabulary;

pub const TRAIN_FILE: &str = "ptb.train.txt";
pub const VALID_FILE: &str = "ptb.valid.txt";
pub const TEST_FILE:  &str = "ptb.test.txt";

/// The three encoded PTB splits plus the vocabulary built from
/// the training split.
#[derive(Debug, Clone)]
pub struct PtbDataset {
    pub vocab: Vocabulary,
    pub train: Vec<usize>,
    pub valid: Vec<usize>,
    pub test:  Vec<usize>,
}

impl PtbDataset {
    /// Load `ptb.{train,valid,test}.txt` from a data directory.
    pub fn load(data_path: impl AsRef<Path>) -> Result<Self> {
        let dir = data_path.as_ref();
        Self::from_sources(
            &PtbFileLoader::new(dir.join(TRAIN_FILE)),
            &PtbFileLoader::new(dir.join(VALID_FILE)),
            &PtbFileLoader::new(dir.join(TEST_FILE)),
        )
    }

    /// Build the vocabulary from `train` only, then encode all three splits.
    pub fn from_sources(
        train: &dyn CorpusSource,
        valid: &dyn CorpusSource,
        test:  &dyn CorpusSource,
    ) -> Result<Self> {
        let train_corpus = train.load()?;
        ensure!(
            !train_corpus.is_empty(),
            "Training corpus '{}' contains no tokens",
            train_corpus.source
        );

        let vocab = Vocabulary::build(&train_corpus.tokens);
        let train = encode(&train_corpus.tokens, &vocab);
        let valid = encode(&valid.load()?.tokens, &vocab);
        let test  = encode(&test.load()?.tokens, &vocab);

        let dataset = Self { vocab, train, valid, test };
        dataset.log_preview();
        Ok(dataset)
    }

    pub fn vocab_size(&self) -> usize {
        self.vocab.len()
    }

    fn log_preview(&self) {
        let head: Vec<usize> = self.train.iter().take(5).copied().collect();
        tracing::info!("First training ids: {:?}", head);
        tracing::info!("Vocabulary size: {}", self.vocab_size());
        tracing::info!(
            "First training words: {}",
            self.vocab.decode(&self.train[..self.train.len().min(10)]).join(" ")
        );
        tracing::info!(
            "Split sizes: train={} valid={} test={}",
            self.train.len(),
            self.valid.len(),
            self.test.len()
        );
    }
}

// ============================================================
// Layer 5 — Inferencer
// ============================================================
use anyhow::{ensure, Result};
use burn::{data::dataloader::batcher::Batcher, prelude::*};

use crate::application::train_use_case::TrainConfig;
use crate::data::{batcher::LmBatcher, generator::{BatchGenerator, WindowBatch}};
use crate::domain::vocabulary::Vocabulary;
use crate::infra::checkpoint::CheckpointManager;
use crate::ml::model::{LstmLanguageModel, LstmLmConfig};

pub type InferBackend = burn::backend::Wgpu;

/// Side-by-side actual and predicted next words for one split.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PredictionSample {
    pub actual:    Vec<String>,
    pub predicted: Vec<String>,
}

impl PredictionSample {
    /// Fraction of positions where the prediction matched
    pub fn accuracy(&self) -> f64 {
        if self.actual.is_empty() {
            return 0.0;
        }
        let hits = self.actual.iter().zip(&self.predicted).filter(|(a, p)| a == p).count();
        hits as f64 / self.actual.len() as f64
    }
}

pub struct Predictor<B: Backend> {
    model:     LstmLanguageModel<B>,
    batcher:   LmBatcher<B>,
    num_steps: usize,
}

impl<B: Backend> Predictor<B> {
    pub fn new(model: LstmLanguageModel<B>, device: B::Device, num_steps: usize) -> Self {
        Self { model, batcher: LmBatcher::new(device), num_steps }
    }

    /// Rebuild the architecture from the saved config and load the
    /// weights of one epoch. The vocabulary rebuilt from the corpus
    /// must have the size the model was trained with.
    pub fn from_checkpoint(
        ckpt_manager: &CheckpointManager,
        cfg:          &TrainConfig,
        vocab_size:   usize,
        epoch:        usize,
        device:       &B::Device,
    ) -> Result<Self> {
        ensure!(
            cfg.vocab_size == vocab_size,
            "Vocabulary mismatch: model was trained with {} tokens, corpus gives {}",
            cfg.vocab_size,
            vocab_size
        );
        let model: LstmLanguageModel<B> =
            LstmLmConfig::from_train_config(cfg, vocab_size).init(device);
        let model = ckpt_manager.load_epoch(model, epoch, device)?;
        tracing::info!("Model loaded from checkpoint");
        Ok(Self::new(model, device.clone(), cfg.num_steps))
    }

    /// Most probable next id for every row: argmax over the vocabulary
    /// at the final time step.
    pub fn next_ids(&self, window: WindowBatch) -> Vec<usize> {
        let (b, s, v) = (window.batch_size, window.num_steps, window.vocab_size);
        let batch = self.batcher.batch(vec![window]);
        let probs = self.model.predict(batch.inputs);

        probs
            .slice([0..b, s - 1..s, 0..v])
            .argmax(2)
            .reshape([b])
            .into_data()
            .iter::<i64>()
            .map(|id| id as usize)
            .collect()
    }

    /// Walk a single-row, skip-one generator over `data`: discard
    /// `skip` windows, then predict the word after each of the next
    /// `count` windows.
    ///
    /// The actual word is read at `offset + num_steps` of the window
    /// that was fed in, so a cursor wrap cannot misalign the pair.
    pub fn sample(
        &self,
        data:  &[usize],
        vocab: &Vocabulary,
        skip:  usize,
        count: usize,
    ) -> Result<PredictionSample> {
        let mut windows = BatchGenerator::new(data, self.num_steps, 1, vocab.len(), 1)?;
        windows.by_ref().take(skip).for_each(drop);

        let mut sample = PredictionSample::default();
        for window in windows.take(count) {
            let next_pos  = window.offsets[0] + self.num_steps;
            let predicted = self.next_ids(window)[0];

            sample.actual.push(word(vocab, data[next_pos]));
            sample.predicted.push(word(vocab, predicted));
        }

        tracing::debug!("Sample accuracy {:.1}%", sample.accuracy() * 100.0);
        Ok(sample)
    }
}

fn word(vocab: &Vocabulary, id: usize) -> String {
    vocab.token(id).unwrap_or("<unk>").to_string()
}

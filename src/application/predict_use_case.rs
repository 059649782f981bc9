// ============================================================
// Layer 2 — PredictUseCase
// ============================================================
// Reloads a checkpoint and produces side-by-side actual and
// predicted words for a training sample and a test sample.
//
//   Step 1: Load the PTB splits, rebuild the vocabulary
//   Step 2: Read train_config.json to rebuild the architecture
//   Step 3: Load the weights saved for the requested epoch
//   Step 4: For train and test: skip DUMMY_ITERS windows, then
//           predict the next word for NUM_PREDICT windows

use anyhow::Result;
use burn::prelude::Backend;
use std::path::PathBuf;

use crate::data::dataset::PtbDataset;
use crate::infra::checkpoint::CheckpointManager;
use crate::ml::inferencer::{InferBackend, PredictionSample, Predictor};

/// Windows skipped before the first prediction
pub const DUMMY_ITERS: usize = 40;
/// Predictions printed per split
pub const NUM_PREDICT: usize = 10;

/// Predictions for both splits.
#[derive(Debug, Clone)]
pub struct PredictionReport {
    pub train: PredictionSample,
    pub test:  PredictionSample,
}

pub struct PredictUseCase {
    data_path:        PathBuf,
    checkpoint_epoch: usize,
}

impl PredictUseCase {
    pub fn new(data_path: impl Into<PathBuf>, checkpoint_epoch: usize) -> Self {
        Self { data_path: data_path.into(), checkpoint_epoch }
    }

    pub fn execute(&self) -> Result<PredictionReport> {
        let device = burn::backend::wgpu::WgpuDevice::default();
        self.execute_on::<InferBackend>(&device)
    }

    pub fn execute_on<B: Backend>(&self, device: &B::Device) -> Result<PredictionReport> {
        let dataset      = PtbDataset::load(&self.data_path)?;
        let ckpt_manager = CheckpointManager::new(&self.data_path)?;
        let cfg          = ckpt_manager.load_config()?;

        let predictor = Predictor::<B>::from_checkpoint(
            &ckpt_manager,
            &cfg,
            dataset.vocab_size(),
            self.checkpoint_epoch,
            device,
        )?;

        let train = predictor.sample(&dataset.train, &dataset.vocab, DUMMY_ITERS, NUM_PREDICT)?;
        let test  = predictor.sample(&dataset.test,  &dataset.vocab, DUMMY_ITERS, NUM_PREDICT)?;

        tracing::info!(
            "Sample accuracy: train {:.0}%, test {:.0}%",
            train.accuracy() * 100.0,
            test.accuracy() * 100.0
        );
        Ok(PredictionReport { train, test })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::train_use_case::TrainConfig;
    use crate::data::dataset::{TEST_FILE, TRAIN_FILE, VALID_FILE};
    use crate::ml::model::LstmLmConfig;
    use std::fs;

    type TestBackend = burn::backend::NdArray;

    fn write_corpus(dir: &std::path::Path) {
        fs::write(dir.join(TRAIN_FILE), " the cat sat on the mat \n the dog sat on the log \n").unwrap();
        fs::write(dir.join(VALID_FILE), " the cat sat \n").unwrap();
        fs::write(dir.join(TEST_FILE),  " a dog sat on the mat \n").unwrap();
    }

    #[test]
    fn test_predicts_from_saved_checkpoint() {
        let dir = tempfile::tempdir().unwrap();
        write_corpus(dir.path());

        let dataset = PtbDataset::load(dir.path()).unwrap();
        let cfg = TrainConfig {
            data_path:   dir.path().display().to_string(),
            num_steps:   4,
            hidden_size: 6,
            vocab_size:  dataset.vocab_size(),
            ..TrainConfig::default()
        };
        let device = Default::default();
        let ckpt   = CheckpointManager::new(dir.path()).unwrap();
        ckpt.save_config(&cfg).unwrap();
        let model = LstmLmConfig::from_train_config(&cfg, cfg.vocab_size).init::<TestBackend>(&device);
        ckpt.save_epoch(&model, 40).unwrap();

        let report = PredictUseCase::new(dir.path(), 40)
            .execute_on::<TestBackend>(&device)
            .unwrap();
        assert_eq!(report.train.actual.len(),    NUM_PREDICT);
        assert_eq!(report.train.predicted.len(), NUM_PREDICT);
        assert_eq!(report.test.actual.len(),     NUM_PREDICT);
    }

    #[test]
    fn test_missing_checkpoint_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        write_corpus(dir.path());
        let dataset = PtbDataset::load(dir.path()).unwrap();
        let cfg = TrainConfig { vocab_size: dataset.vocab_size(), ..TrainConfig::default() };
        CheckpointManager::new(dir.path()).unwrap().save_config(&cfg).unwrap();

        let res = PredictUseCase::new(dir.path(), 40).execute_on::<TestBackend>(&Default::default());
        assert!(res.is_err());
    }
}

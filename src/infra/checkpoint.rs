// ============================================================
// Layer 6 — Checkpoint Manager
// ============================================================
// Saves and restores model weights using Burn's CompactRecorder.
//
// What gets written to the data directory:
//   model-01.mpk.gz ... model-50.mpk.gz   ← weights after each epoch
//   final_model.mpk.gz                    ← weights after the last epoch
//   latest_epoch.json                     ← number of the last epoch saved
//   train_config.json                     ← hyperparameters + vocab size
//
// The config is saved separately because the inference path
// must rebuild the exact architecture (hidden size, vocabulary
// size) before the weights can be loaded into it.
//
// CompactRecorder serialises to MessagePack, gzips it, and
// appends the .mpk.gz extension itself, so paths here carry no
// extension. Loading fails if the architecture does not match.
//
// Reference: Burn Book §5 (Records and Checkpointing)

use anyhow::{Context, Result};
use std::{fs, path::{Path, PathBuf}};
use burn::{
    prelude::*,
    record::{CompactRecorder, Recorder},
};

use crate::application::train_use_case::TrainConfig;
use crate::ml::model::LstmLanguageModel;

const FINAL_MODEL:  &str = "final_model";
const LATEST_EPOCH: &str = "latest_epoch.json";
const TRAIN_CONFIG: &str = "train_config.json";

/// Manages saving and loading of model checkpoints.
pub struct CheckpointManager {
    dir: PathBuf,
}

impl CheckpointManager {
    /// Create a new CheckpointManager, creating the directory if needed.
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)
            .with_context(|| format!("Cannot create checkpoint directory '{}'", dir.display()))?;
        Ok(Self { dir })
    }

    /// `{dir}/model-{epoch:02}` (the recorder adds `.mpk.gz`)
    pub fn epoch_path(&self, epoch: usize) -> PathBuf {
        self.dir.join(format!("model-{epoch:02}"))
    }

    pub fn final_path(&self) -> PathBuf {
        self.dir.join(FINAL_MODEL)
    }

    /// Save model weights for a given epoch and move the latest-epoch pointer.
    pub fn save_epoch<B: Backend>(&self, model: &LstmLanguageModel<B>, epoch: usize) -> Result<()> {
        let path = self.epoch_path(epoch);
        record(model, &path)?;

        let latest_path = self.dir.join(LATEST_EPOCH);
        fs::write(&latest_path, serde_json::to_string(&epoch)?)
            .with_context(|| format!("Failed to write '{}'", latest_path.display()))?;

        tracing::info!("Epoch {:02}: saving model to '{}'", epoch, path.display());
        Ok(())
    }

    /// Save the model produced by the complete training run.
    pub fn save_final<B: Backend>(&self, model: &LstmLanguageModel<B>) -> Result<()> {
        let path = self.final_path();
        record(model, &path)?;
        tracing::info!("Saved final model to '{}'", path.display());
        Ok(())
    }

    /// Load the weights written for `epoch` into `model`.
    pub fn load_epoch<B: Backend>(
        &self,
        model:  LstmLanguageModel<B>,
        epoch:  usize,
        device: &B::Device,
    ) -> Result<LstmLanguageModel<B>> {
        let path = self.epoch_path(epoch);
        tracing::info!("Loading checkpoint from epoch {}", epoch);
        load(model, &path, device)
    }

    /// Save the training configuration to JSON.
    pub fn save_config(&self, cfg: &TrainConfig) -> Result<()> {
        let path = self.dir.join(TRAIN_CONFIG);
        let json = serde_json::to_string_pretty(cfg)?;
        fs::write(&path, json)
            .with_context(|| format!("Cannot write config to '{}'", path.display()))?;

        tracing::debug!("Saved training config to '{}'", path.display());
        Ok(())
    }

    /// Load the training configuration saved before training.
    pub fn load_config(&self) -> Result<TrainConfig> {
        let path = self.dir.join(TRAIN_CONFIG);
        let json = fs::read_to_string(&path).with_context(|| {
            format!(
                "Cannot read config from '{}'. Make sure you have run training (run_opt 1) first.",
                path.display()
            )
        })?;
        serde_json::from_str(&json)
            .with_context(|| format!("Malformed config '{}'", path.display()))
    }
}

fn record<B: Backend>(model: &LstmLanguageModel<B>, path: &Path) -> Result<()> {
    CompactRecorder::new()
        .record(model.clone().into_record(), path.to_path_buf())
        .with_context(|| format!("Failed to save checkpoint to '{}'", path.display()))
}

fn load<B: Backend>(
    model:  LstmLanguageModel<B>,
    path:   &Path,
    device: &B::Device,
) -> Result<LstmLanguageModel<B>> {
    let record = CompactRecorder::new()
        .load(path.to_path_buf(), device)
        .with_context(|| format!("Cannot load checkpoint '{}'", path.display()))?;
    Ok(model.load_record(record))
}

// ============================================================
// Layer 2 — TrainUseCase
// ============================================================
// Orchestrates the full training pipeline in order:
//
//   Step 1: Load the three PTB splits   (Layer 4 - data)
//   Step 2: Build vocabulary + encode   (Layer 3/4)
//   Step 3: Save config                 (Layer 6 - infra)
//   Step 4: Run training loop           (Layer 5 - ml)
//
// Reference: Burn Book §5 (Training)

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::data::dataset::PtbDataset;
use crate::infra::{checkpoint::CheckpointManager, metrics::MetricsLogger};
use crate::ml::trainer::run_training;

// ─── Training Configuration ──────────────────────────────────────────────────
// All hyperparameters for a training run. Saved next to the
// checkpoints so the prediction path can rebuild the model.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainConfig {
    pub data_path:   String,
    pub num_steps:   usize,
    pub batch_size:  usize,
    pub hidden_size: usize,
    pub epochs:      usize,
    pub dropout:     f64,
    pub use_dropout: bool,
    pub lr:          f64,
    /// Filled in from the training corpus before the config is saved
    #[serde(default)]
    pub vocab_size:  usize,
}

impl Default for TrainConfig {
    fn default() -> Self {
        Self {
            data_path:   "tutorial_data".to_string(),
            num_steps:   30,
            batch_size:  20,
            hidden_size: 500,
            epochs:      50,
            dropout:     0.5,
            use_dropout: true,
            lr:          1e-3,
            vocab_size:  0,
        }
    }
}

// ─── TrainUseCase ─────────────────────────────────────────────────────────────
pub struct TrainUseCase {
    config: TrainConfig,
}

impl TrainUseCase {
    pub fn new(config: TrainConfig) -> Self {
        Self { config }
    }

    /// Execute the full training pipeline end to end
    pub fn execute(&self) -> Result<()> {
        // ── Steps 1-2: load, build vocabulary, encode ─────────────────────────
        tracing::info!("Loading PTB data from '{}'", self.config.data_path);
        let dataset = PtbDataset::load(&self.config.data_path)?;

        let cfg = TrainConfig {
            vocab_size: dataset.vocab_size(),
            ..self.config.clone()
        };

        // ── Step 3: save config for the prediction path ───────────────────────
        let ckpt_manager = CheckpointManager::new(&cfg.data_path)?;
        ckpt_manager.save_config(&cfg)?;
        let metrics = MetricsLogger::new(&cfg.data_path)?;

        // ── Step 4: training loop (Layer 5) ───────────────────────────────────
        run_training(&cfg, &dataset, &ckpt_manager, &metrics)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_tutorial_settings() {
        let cfg = TrainConfig::default();
        assert_eq!(cfg.data_path,   "tutorial_data");
        assert_eq!(cfg.num_steps,   30);
        assert_eq!(cfg.batch_size,  20);
        assert_eq!(cfg.hidden_size, 500);
        assert_eq!(cfg.epochs,      50);
        assert!(cfg.use_dropout);
    }

    #[test]
    fn test_missing_data_directory_fails_before_training() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = TrainConfig {
            data_path: dir.path().join("absent").display().to_string(),
            ..TrainConfig::default()
        };
        assert!(TrainUseCase::new(cfg).execute().is_err());
    }
}

// ============================================================
// Layer 5 — Training Loop
// ============================================================
// Epoch loop over the endless batch generators with Adam and
// categorical cross-entropy.
//
//   - Training runs on an AutodiffBackend (Autodiff<Wgpu>)
//   - model.valid() returns the model on the inner backend with
//     dropout switched off; validation batches are built there
//   - One epoch is len(split) / (batch_size * num_steps) steps;
//     the generators keep their cursors across epochs
//   - Weights are checkpointed after every epoch and once more
//     as the final model
//
// Reference: Burn Book §5 (Custom Training Loop)
//            Kingma & Ba (2015) Adam

use anyhow::Result;
use burn::{
    data::dataloader::batcher::Batcher,
    module::AutodiffModule,
    optim::{AdamConfig, GradientsParams, Optimizer},
    prelude::*,
    tensor::{backend::AutodiffBackend, ElementConversion},
};

use crate::application::train_use_case::TrainConfig;
use crate::data::{batcher::LmBatcher, dataset::PtbDataset, generator::BatchGenerator};
use crate::infra::{
    checkpoint::CheckpointManager,
    metrics::{EpochMetrics, MetricsLogger},
};
use crate::ml::model::{categorical_cross_entropy, categorical_hits, LstmLanguageModel, LstmLmConfig};

type MyBackend = burn::backend::Autodiff<burn::backend::Wgpu>;

pub fn run_training(
    cfg:          &TrainConfig,
    dataset:      &PtbDataset,
    ckpt_manager: &CheckpointManager,
    metrics:      &MetricsLogger,
) -> Result<()> {
    let device = burn::backend::wgpu::WgpuDevice::default();
    tracing::info!("Using WGPU device: {:?}", device);
    train_loop::<MyBackend>(cfg, dataset, ckpt_manager, metrics, &device)?;
    Ok(())
}

/// Number of batches that make up one pass over `len` ids.
pub fn steps_per_epoch(len: usize, cfg: &TrainConfig) -> usize {
    (len / (cfg.batch_size * cfg.num_steps)).max(1)
}

pub fn train_loop<B: AutodiffBackend>(
    cfg:          &TrainConfig,
    dataset:      &PtbDataset,
    ckpt_manager: &CheckpointManager,
    metrics:      &MetricsLogger,
    device:       &B::Device,
) -> Result<LstmLanguageModel<B>> {
    let vocab_size = dataset.vocab_size();

    // ── Build model ───────────────────────────────────────────────────────────
    let model_cfg = LstmLmConfig::from_train_config(cfg, vocab_size);
    let mut model: LstmLanguageModel<B> = model_cfg.init(device);
    tracing::info!(
        "Model ready: vocab={} hidden={} dropout={} ({} parameters)",
        vocab_size,
        cfg.hidden_size,
        model_cfg.dropout_prob(),
        model.num_params()
    );

    let mut optim = AdamConfig::new().init();

    // ── Generators: skip_step == num_steps, so windows do not overlap ────────
    let mut train_windows = BatchGenerator::new(
        &dataset.train, cfg.num_steps, cfg.batch_size, vocab_size, cfg.num_steps,
    )?;
    let mut valid_windows = BatchGenerator::new(
        &dataset.valid, cfg.num_steps, cfg.batch_size, vocab_size, cfg.num_steps,
    )?;
    let train_steps = steps_per_epoch(dataset.train.len(), cfg);
    let valid_steps = steps_per_epoch(dataset.valid.len(), cfg);
    tracing::info!("{} training steps and {} validation steps per epoch", train_steps, valid_steps);

    let train_batcher = LmBatcher::<B>::new(device.clone());
    let valid_batcher = LmBatcher::<B::InnerBackend>::new(device.clone());
    let positions     = (cfg.batch_size * cfg.num_steps) as f64;
    let mut best_val_loss = f64::INFINITY;
    let mut best_epoch    = 0usize;

    // ── Epoch loop ────────────────────────────────────────────────────────────
    for epoch in 1..=cfg.epochs {
        let mut train_loss_sum = 0.0f64;
        let mut train_hits     = 0usize;

        for window in train_windows.by_ref().take(train_steps) {
            let batch  = train_batcher.batch(vec![window]);
            let logits = model.forward(batch.inputs);
            let loss   = categorical_cross_entropy(logits.clone(), batch.target_ids.clone());

            train_loss_sum += loss.clone().into_scalar().elem::<f64>();
            train_hits     += categorical_hits(logits, batch.target_ids);

            let grads = loss.backward();
            let grads = GradientsParams::from_grads(grads, &model);
            model = optim.step(cfg.lr, model, grads);
        }

        // ── Validation phase (dropout disabled) ───────────────────────────────
        let model_valid = model.valid();
        let mut val_loss_sum = 0.0f64;
        let mut val_hits     = 0usize;

        for window in valid_windows.by_ref().take(valid_steps) {
            let batch  = valid_batcher.batch(vec![window]);
            let logits = model_valid.forward(batch.inputs);
            val_loss_sum += categorical_cross_entropy(logits.clone(), batch.target_ids.clone())
                .into_scalar()
                .elem::<f64>();
            val_hits += categorical_hits(logits, batch.target_ids);
        }

        let m = EpochMetrics::new(
            epoch,
            train_loss_sum / train_steps as f64,
            val_loss_sum / valid_steps as f64,
            train_hits as f64 / (train_steps as f64 * positions),
            val_hits as f64 / (valid_steps as f64 * positions),
        );

        println!(
            "Epoch {:>3}/{} | loss={:.4} | acc={:.1}% | val_loss={:.4} | val_acc={:.1}%",
            epoch, cfg.epochs, m.train_loss, m.train_acc * 100.0,
            m.val_loss, m.val_acc * 100.0,
        );
        if m.is_improvement(best_val_loss) {
            tracing::info!("New best val_loss {:.4} at epoch {}", m.val_loss, epoch);
            best_val_loss = m.val_loss;
            best_epoch    = epoch;
        }

        metrics.log(&m)?;
        ckpt_manager.save_epoch(&model, epoch)?;
    }

    ckpt_manager.save_final(&model)?;
    if best_epoch > 0 {
        tracing::info!(
            "Best val_loss {:.4} was checkpointed as {}",
            best_val_loss,
            ckpt_manager.epoch_path(best_epoch).display()
        );
    }
    tracing::info!("Training complete! Metrics in '{}'", metrics.csv_path().display());
    Ok(model)
}

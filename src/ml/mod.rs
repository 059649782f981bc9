// ============================================================
// Layer 5 — ML / Model Layer (Burn)
// ============================================================
// The Burn-specific model code:
//
//   model.rs      — embedding → LSTM → LSTM → dropout →
//                   per-step dense → softmax, plus the
//                   categorical cross-entropy and accuracy
//                   helpers shared by training and validation
//
//   trainer.rs    — epoch loop: forward, loss, backward, Adam
//                   step, validation, metrics, checkpointing
//
//   inferencer.rs — loads a checkpoint and predicts the word
//                   that follows each input window
//
// Reference: Burn Book §3 (Building Blocks)
//            Burn Book §5 (Training)
//            Hochreiter & Schmidhuber (1997) LSTM

/// Two-layer LSTM language model
pub mod model;

/// Full training loop with validation and checkpointing
pub mod trainer;

/// Checkpoint loading and next-word prediction
pub mod inferencer;

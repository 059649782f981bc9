// ============================================================
// Layer 4 — Data Pipeline
// ============================================================
// Everything between the raw PTB text files and the tensors
// fed to the model:
//
//   ptb.*.txt
//       │
//       ▼
//   PtbFileLoader     → reads a file, newlines become <eos>
//       │
//       ▼
//   Vocabulary        → built from the training split (Layer 3)
//       │
//       ▼
//   encoder           → token stream → ids, unknown words dropped
//       │
//       ▼
//   PtbDataset        → train / valid / test id sequences
//       │
//       ▼
//   BatchGenerator    → endless (input, one-hot target) windows
//       │
//       ▼
//   LmBatcher         → Burn tensors on the training device
//
// Reference: Burn Book §4 (Datasets and Dataloaders)
//            Rust Book §13 (Iterators and Closures)

/// Reads whitespace-tokenised text files
pub mod loader;

/// Maps tokens to vocabulary ids
pub mod encoder;

/// The three encoded PTB splits and their vocabulary
pub mod dataset;

/// Endless sliding-window batch iterator
pub mod generator;

/// Turns window batches into Burn tensors
pub mod batcher;

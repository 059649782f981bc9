// ============================================================
// Layer 6 — Infrastructure Layer
// ============================================================
// Cross-cutting persistence concerns:
//
//   checkpoint.rs — model weights via Burn's CompactRecorder,
//                   plus the TrainConfig JSON that lets the
//                   inference path rebuild the architecture
//
//   metrics.rs    — per-epoch loss/accuracy rows in a CSV file
//
// Reference: Rust Book §7 (Modules)
//            Burn Book §5 (Checkpointing)

/// Model checkpoint saving and loading
pub mod checkpoint;

/// Training metrics CSV logger
pub mod metrics;

// ============================================================
// Layer 2 — Application / Use Cases
// ============================================================
// Orchestrates the other layers to accomplish one goal:
// training the model, or printing sample predictions from a
// saved checkpoint.
//
// Rules for this layer:
//   - No ML math or model code here
//   - No printing here (that's Layer 1)
//   - Only workflow coordination
//
// Reference: Clean Architecture pattern
//            Rust Book §7 (Module System)

// The training workflow (run_opt 1)
pub mod train_use_case;

// The checkpoint prediction workflow (run_opt 2)
pub mod predict_use_case;

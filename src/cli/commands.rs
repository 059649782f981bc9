// ============================================================
// Layer 1 — CLI Arguments
// ============================================================
// The positional run_opt selects the mode, the flags carry the
// data location and the hyperparameters. Every default is the
// value the tutorial trains with.
//
// Flag names keep underscores (--data_path, --num_steps) rather
// than clap's kebab-case default.
//
// Reference: Rust Book §12 (Building a CLI Program)

use clap::Args;
use crate::application::train_use_case::TrainConfig;

/// What the positional `run_opt` asks for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunMode {
    /// 1: train and checkpoint every epoch
    Train,
    /// 2: load a checkpoint and print sample predictions
    Test,
}

/// Parse `1` / `2` into a RunMode; clap reports anything else.
pub fn parse_run_opt(s: &str) -> Result<RunMode, String> {
    match s.trim().parse::<u8>() {
        Ok(1) => Ok(RunMode::Train),
        Ok(2) => Ok(RunMode::Test),
        _     => Err(format!("expected 1 (train) or 2 (test), got '{s}'")),
    }
}

/// Parse a dropout probability; Burn only accepts values in [0, 1].
pub fn parse_dropout(s: &str) -> Result<f64, String> {
    let p: f64 = s.trim().parse().map_err(|_| format!("'{s}' is not a number"))?;
    if (0.0..=1.0).contains(&p) {
        Ok(p)
    } else {
        Err(format!("dropout must be between 0 and 1, got {p}"))
    }
}

/// Data location and hyperparameters shared by both modes.
#[derive(Args, Debug, Clone)]
pub struct RunArgs {
    /// The path of the training data
    #[arg(long = "data_path", default_value = "tutorial_data")]
    pub data_path: String,

    /// Window length fed to the model per row
    #[arg(long = "num_steps", default_value_t = 30)]
    pub num_steps: usize,

    /// Rows per training batch
    #[arg(long = "batch_size", default_value_t = 20)]
    pub batch_size: usize,

    /// Embedding and LSTM width
    #[arg(long = "hidden_size", default_value_t = 500)]
    pub hidden_size: usize,

    /// Number of full passes through the training data
    #[arg(long, default_value_t = 50)]
    pub epochs: usize,

    /// Dropout probability after the second LSTM
    #[arg(long, default_value_t = 0.5, value_parser = parse_dropout)]
    pub dropout: f64,

    /// Disable the dropout layer
    #[arg(long = "no_dropout")]
    pub no_dropout: bool,

    /// Adam learning rate
    #[arg(long, default_value_t = 1e-3)]
    pub lr: f64,

    /// Which epoch's checkpoint the test mode loads
    #[arg(long = "checkpoint_epoch", default_value_t = 40)]
    pub checkpoint_epoch: usize,
}

/// Convert CLI args into the application-layer TrainConfig.
/// The application layer never sees clap types.
impl From<&RunArgs> for TrainConfig {
    fn from(a: &RunArgs) -> Self {
        TrainConfig {
            data_path:   a.data_path.clone(),
            num_steps:   a.num_steps,
            batch_size:  a.batch_size,
            hidden_size: a.hidden_size,
            epochs:      a.epochs,
            dropout:     a.dropout,
            use_dropout: !a.no_dropout,
            lr:          a.lr,
            vocab_size:  0,
        }
    }
}

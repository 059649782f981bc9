// ============================================================
// Layer 1 — CLI / Presentation Layer
// ============================================================
// Parses the command line with clap and hands off to Layer 2.
//
//   word-lstm 1 [--data_path DIR] [...]   — train
//   word-lstm 2 [--data_path DIR] [...]   — print predictions
//
// Reference: Rust Book §7 (Modules), §12 (CLI programs)

pub mod commands;

use anyhow::Result;
use clap::Parser;
use commands::{parse_run_opt, RunArgs, RunMode};

use crate::ml::inferencer::PredictionSample;

#[derive(Parser, Debug)]
#[command(
    name = "word-lstm",
    version,
    about = "Train a two-layer LSTM next-word model on PTB text, or print predictions from a checkpoint."
)]
pub struct Cli {
    /// An integer: 1 to train, 2 to test
    #[arg(value_parser = parse_run_opt)]
    pub run_opt: RunMode,

    #[command(flatten)]
    pub args: RunArgs,
}

impl Cli {
    /// Dispatch to the use case matching run_opt.
    pub fn run(self) -> Result<()> {
        match self.run_opt {
            RunMode::Train => self.run_train(),
            RunMode::Test  => self.run_test(),
        }
    }

    fn run_train(&self) -> Result<()> {
        use crate::application::train_use_case::TrainUseCase;

        tracing::info!("Starting training on data in: {}", self.args.data_path);
        TrainUseCase::new((&self.args).into()).execute()?;

        println!("Training complete. Checkpoints saved in '{}'.", self.args.data_path);
        Ok(())
    }

    fn run_test(&self) -> Result<()> {
        use crate::application::predict_use_case::PredictUseCase;

        let report = PredictUseCase::new(&self.args.data_path, self.args.checkpoint_epoch)
            .execute()?;

        println!("Training data:");
        print_sample(&report.train);
        println!("Test data:");
        print_sample(&report.test);
        Ok(())
    }
}

fn print_sample(sample: &PredictionSample) {
    println!("Actual words: {}", sample.actual.join(" "));
    println!("Predicted words: {}", sample.predicted.join(" "));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::train_use_case::TrainConfig;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["word-lstm", "1"]).unwrap();
        assert_eq!(cli.run_opt, RunMode::Train);
        assert_eq!(cli.args.data_path, "tutorial_data");
        assert_eq!(cli.args.checkpoint_epoch, 40);

        let cfg = TrainConfig::from(&cli.args);
        assert_eq!(cfg.num_steps, 30);
        assert_eq!(cfg.batch_size, 20);
        assert!(cfg.use_dropout);
    }

    #[test]
    fn test_underscore_flags() {
        let cli = Cli::try_parse_from([
            "word-lstm", "2", "--data_path", "/tmp/ptb", "--num_steps", "5", "--no_dropout",
        ])
        .unwrap();
        assert_eq!(cli.run_opt, RunMode::Test);
        assert_eq!(cli.args.data_path, "/tmp/ptb");

        let cfg = TrainConfig::from(&cli.args);
        assert_eq!(cfg.num_steps, 5);
        assert!(!cfg.use_dropout);
    }

    #[test]
    fn test_run_opt_is_required_and_checked() {
        assert!(Cli::try_parse_from(["word-lstm"]).is_err());
        assert!(Cli::try_parse_from(["word-lstm", "3"]).is_err());
        assert!(Cli::try_parse_from(["word-lstm", "train"]).is_err());
    }

    #[test]
    fn test_dropout_must_be_a_probability() {
        let cli = Cli::try_parse_from(["word-lstm", "1", "--dropout", "0.2"]).unwrap();
        assert_eq!(cli.args.dropout, 0.2);
        assert!(Cli::try_parse_from(["word-lstm", "1", "--dropout", "1.5"]).is_err());
        assert!(Cli::try_parse_from(["word-lstm", "1", "--dropout=-0.1"]).is_err());
        assert!(Cli::try_parse_from(["word-lstm", "1", "--dropout", "half"]).is_err());
    }
}

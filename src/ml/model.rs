use burn::{
    nn::{
        loss::CrossEntropyLossConfig,
        Dropout, DropoutConfig,
        Embedding, EmbeddingConfig,
        Linear, LinearConfig,
        Lstm, LstmConfig,
    },
    prelude::*,
    tensor::{activation::softmax, ElementConversion},
};

use crate::application::train_use_case::TrainConfig;

// NOTE: #[derive(Config)] already generates Clone and Serialize/Deserialize.
#[derive(Config, Debug)]
pub struct LstmLmConfig {
    pub vocab_size:  usize,
    pub hidden_size: usize,
    #[config(default = 0.5)]
    pub dropout:     f64,
    #[config(default = true)]
    pub use_dropout: bool,
}

impl LstmLmConfig {
    pub fn from_train_config(cfg: &TrainConfig, vocab_size: usize) -> Self {
        Self::new(vocab_size, cfg.hidden_size)
            .with_dropout(cfg.dropout)
            .with_use_dropout(cfg.use_dropout)
    }

    /// Dropout probability actually applied after the recurrent layers
    pub fn dropout_prob(&self) -> f64 {
        if self.use_dropout { self.dropout } else { 0.0 }
    }

    pub fn init<B: Backend>(&self, device: &B::Device) -> LstmLanguageModel<B> {
        let embedding = EmbeddingConfig::new(self.vocab_size, self.hidden_size).init(device);
        let lstm1     = LstmConfig::new(self.hidden_size, self.hidden_size, true).init(device);
        let lstm2     = LstmConfig::new(self.hidden_size, self.hidden_size, true).init(device);
        let dropout   = DropoutConfig::new(self.dropout_prob()).init();
        let projection = LinearConfig::new(self.hidden_size, self.vocab_size).init(device);
        LstmLanguageModel { embedding, lstm1, lstm2, dropout, projection }
    }
}

/// embedding → LSTM → LSTM → dropout → per-step dense → softmax
#[derive(Module, Debug)]
pub struct LstmLanguageModel<B: Backend> {
    pub embedding:  Embedding<B>,
    pub lstm1:      Lstm<B>,
    pub lstm2:      Lstm<B>,
    pub dropout:    Dropout,
    pub projection: Linear<B>,
}

impl<B: Backend> LstmLanguageModel<B> {
    /// inputs: [batch, steps] → logits: [batch, steps, vocab]
    pub fn forward(&self, inputs: Tensor<B, 2, Int>) -> Tensor<B, 3> {
        let x = self.embedding.forward(inputs);

        // Both recurrent layers return the full output sequence so every
        // step contributes to the loss, not only the last one.
        let (x, _) = self.lstm1.forward(x, None);
        let (x, _) = self.lstm2.forward(x, None);

        let x = self.dropout.forward(x);
        self.projection.forward(x)
    }

    /// Softmax probabilities over the vocabulary at every step.
    pub fn predict(&self, inputs: Tensor<B, 2, Int>) -> Tensor<B, 3> {
        softmax(self.forward(inputs), 2)
    }
}

/// Categorical cross-entropy of logits against target ids, averaged
/// over every (row, step) position. Steps are flattened into rows so
/// Burn's loss sees `[rows * steps, vocab]` against `[rows * steps]`.
pub fn categorical_cross_entropy<B: Backend>(
    logits:     Tensor<B, 3>,
    target_ids: Tensor<B, 2, Int>,
) -> Tensor<B, 1> {
    let [batch, steps, vocab] = logits.dims();
    CrossEntropyLossConfig::new()
        .init(&logits.device())
        .forward(logits.reshape([batch * steps, vocab]), target_ids.reshape([batch * steps]))
}

/// Number of positions whose argmax matches the target id.
pub fn categorical_hits<B: Backend>(
    logits:     Tensor<B, 3>,
    target_ids: Tensor<B, 2, Int>,
) -> usize {
    let [batch, steps, _] = logits.dims();
    let predicted = logits.argmax(2).reshape([batch, steps]);
    let hits: i64 = predicted
        .equal(target_ids)
        .int()
        .sum()
        .into_scalar()
        .elem();
    hits as usize
}

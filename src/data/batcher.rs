// ============================================================
// Layer 4 — Tensor Batcher
// ============================================================
// Implements Burn's Batcher trait to turn WindowBatches (plain
// Vecs) into tensors on a chosen device.
//
// Shapes:
//   inputs      [rows, steps]   Int
//   target_ids  [rows, steps]   Int   (class ids for the loss)
//
// The generator already groups rows into a WindowBatch, so the
// usual call is batcher.batch(vec![window]). Several windows
// are stacked along the row axis; they must share num_steps.
//
// Reference: Burn Book §4 (Batcher)

use burn::{
    data::dataloader::batcher::Batcher,
    prelude::*,
    tensor::TensorData,
};

use crate::data::generator::WindowBatch;

/// A batch of language-model windows ready for the forward pass.
#[derive(Debug, Clone)]
pub struct LmBatch<B: Backend> {
    pub inputs:     Tensor<B, 2, Int>,
    pub target_ids: Tensor<B, 2, Int>,
}

// ─── LmBatcher ────────────────────────────────────────────────────────────────
/// Holds the target device so tensors are created on the right GPU/CPU.
#[derive(Clone, Debug)]
pub struct LmBatcher<B: Backend> {
    pub device: B::Device,
}

impl<B: Backend> LmBatcher<B> {
    pub fn new(device: B::Device) -> Self {
        Self { device }
    }
}

impl<B: Backend> Batcher<WindowBatch, LmBatch<B>> for LmBatcher<B> {
    fn batch(&self, items: Vec<WindowBatch>) -> LmBatch<B> {
        let steps = items[0].num_steps;
        let rows: usize = items.iter().map(|w| w.batch_size).sum();

        // One-hot targets collapse back to ids; Burn's loss takes classes
        let target_ids: Vec<i64> = items
            .iter()
            .flat_map(|w| w.target_ids())
            .map(|id| id as i64)
            .collect();
        let inputs: Vec<i64> = items
            .into_iter()
            .flat_map(|w| w.inputs)
            .map(|id| id as i64)
            .collect();

        let inputs = Tensor::<B, 2, Int>::from_data(TensorData::new(inputs, [rows, steps]), &self.device);
        let target_ids =
            Tensor::<B, 2, Int>::from_data(TensorData::new(target_ids, [rows, steps]), &self.device);

        LmBatch { inputs, target_ids }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::generator::BatchGenerator;

    type TestBackend = burn::backend::NdArray;

    #[test]
    fn test_tensor_shapes_and_values() {
        let data        = [5usize, 2, 2, 7, 9, 1, 5];
        let mut windows = BatchGenerator::new(&data, 3, 2, 10, 3).unwrap();
        let batcher     = LmBatcher::<TestBackend>::new(Default::default());

        let batch = batcher.batch(vec![windows.next_batch()]);
        assert_eq!(batch.inputs.dims(),     [2, 3]);
        assert_eq!(batch.target_ids.dims(), [2, 3]);

        let inputs: Vec<i64> = batch.inputs.into_data().iter::<i64>().collect();
        assert_eq!(inputs, vec![5, 2, 2, 7, 9, 1]);

        let ids: Vec<i64> = batch.target_ids.into_data().iter::<i64>().collect();
        assert_eq!(ids, vec![2, 7, 9, 9, 1, 5]);
    }

    #[test]
    fn test_stacks_several_windows() {
        let data        = [5usize, 2, 2, 7, 9, 1, 5];
        let mut windows = BatchGenerator::new(&data, 3, 1, 10, 3).unwrap();
        let batcher     = LmBatcher::<TestBackend>::new(Default::default());

        let items: Vec<WindowBatch> = windows.by_ref().take(3).collect();
        let batch = batcher.batch(items);
        assert_eq!(batch.inputs.dims(), [3, 3]);

        // third window wrapped back to the start
        let inputs: Vec<i64> = batch.inputs.into_data().iter::<i64>().collect();
        assert_eq!(inputs, vec![5, 2, 2, 7, 9, 1, 5, 2, 2]);
    }
}

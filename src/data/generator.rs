// ============================================================
// Layer 4 — Batch Generator
// ============================================================
// Produces an endless stream of (input, target) windows over an
// encoded split.
//
// For each row of a batch:
//
//   if cursor + num_steps >= len(data):  cursor = 0
//   input  = data[cursor     .. cursor + num_steps]
//   target = data[cursor + 1 .. cursor + num_steps + 1]   (one-hot)
//   cursor += skip_step
//
// Example: data = [5,2,2,7,9,1,5], num_steps = 3, skip_step = 3
//
//   row 0: cursor 0 → input [5,2,2]  target [2,7,9]
//   row 1: cursor 3 → input [7,9,1]  target [9,1,5]
//   row 2: cursor 6 → 6+3 >= 7, wrap → input [5,2,2] ...
//
// The tail after the last full window is skipped, and a wrap
// looks exactly like ordinary advancement to the caller.
//
// The generator is an Iterator whose next() never returns None.
// Callers bound it themselves, usually with by_ref().take(n),
// and the cursor keeps its position between those calls.
//
// Reference: Rust Book §13 (Iterators)

use anyhow::{ensure, Result};

// ─── WindowBatch ──────────────────────────────────────────────────────────────
/// One batch of training windows, stored row-major.
#[derive(Debug, Clone, PartialEq)]
pub struct WindowBatch {
    pub batch_size: usize,
    pub num_steps:  usize,
    pub vocab_size: usize,

    /// Input ids, logical shape [batch_size, num_steps]
    pub inputs: Vec<usize>,

    /// One-hot targets, logical shape [batch_size, num_steps, vocab_size]
    pub targets: Vec<f32>,

    /// Start position of each row in the source sequence
    pub offsets: Vec<usize>,
}

impl WindowBatch {
    /// Recover target ids from the one-hot block, row-major
    pub fn target_ids(&self) -> Vec<usize> {
        self.targets
            .chunks(self.vocab_size)
            .map(|one_hot| one_hot.iter().position(|&v| v == 1.0).unwrap_or(0))
            .collect()
    }
}

// ─── BatchGenerator ───────────────────────────────────────────────────────────
/// Endless, stateful window producer over one encoded split.
#[derive(Debug, Clone)]
pub struct BatchGenerator<'a> {
    data:       &'a [usize],
    num_steps:  usize,
    batch_size: usize,
    vocab_size: usize,
    skip_step:  usize,
    cursor:     usize,
}

impl<'a> BatchGenerator<'a> {
    pub fn new(
        data:       &'a [usize],
        num_steps:  usize,
        batch_size: usize,
        vocab_size: usize,
        skip_step:  usize,
    ) -> Result<Self> {
        ensure!(num_steps  > 0, "num_steps must be positive");
        ensure!(batch_size > 0, "batch_size must be positive");
        ensure!(vocab_size > 0, "vocab_size must be positive");
        ensure!(skip_step  > 0, "skip_step must be positive");
        // At least one window plus its shifted target must fit
        ensure!(
            data.len() > num_steps,
            "Sequence of {} ids is too short for windows of {} steps",
            data.len(),
            num_steps
        );

        Ok(Self { data, num_steps, batch_size, vocab_size, skip_step, cursor: 0 })
    }

    /// Assemble the next batch and advance the cursor.
    pub fn next_batch(&mut self) -> WindowBatch {
        let (n, v) = (self.num_steps, self.vocab_size);
        let mut inputs  = Vec::with_capacity(self.batch_size * n);
        let mut targets = vec![0.0f32; self.batch_size * n * v];
        let mut offsets = Vec::with_capacity(self.batch_size);

        for row in 0..self.batch_size {
            if self.cursor + n >= self.data.len() {
                self.cursor = 0;
            }
            let start = self.cursor;
            offsets.push(start);
            inputs.extend_from_slice(&self.data[start..start + n]);

            for (step, &id) in self.data[start + 1..start + n + 1].iter().enumerate() {
                targets[(row * n + step) * v + id] = 1.0;
            }

            self.cursor += self.skip_step;
        }

        WindowBatch {
            batch_size: self.batch_size,
            num_steps:  n,
            vocab_size: v,
            inputs,
            targets,
            offsets,
        }
    }
}

impl Iterator for BatchGenerator<'_> {
    type Item = WindowBatch;

    fn next(&mut self) -> Option<WindowBatch> {
        Some(self.next_batch())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    impl WindowBatch {
        fn input_row(&self, row: usize) -> &[usize] {
            &self.inputs[row * self.num_steps..(row + 1) * self.num_steps]
        }

        fn target_row(&self, row: usize) -> &[f32] {
            let width = self.num_steps * self.vocab_size;
            &self.targets[row * width..(row + 1) * width]
        }
    }

    impl BatchGenerator<'_> {
        /// Position the next row will start from, before any wrap check
        fn cursor(&self) -> usize {
            self.cursor
        }
    }

    const DATA: [usize; 7] = [5, 2, 2, 7, 9, 1, 5];

    fn one_hot(ids: &[usize], vocab_size: usize) -> Vec<f32> {
        let mut out = vec![0.0; ids.len() * vocab_size];
        for (i, &id) in ids.iter().enumerate() {
            out[i * vocab_size + id] = 1.0;
        }
        out
    }

    #[test]
    fn test_walkthrough_example() {
        let mut generator = BatchGenerator::new(&DATA, 3, 1, 10, 3).unwrap();

        let b1 = generator.next().unwrap();
        assert_eq!(b1.inputs,      vec![5, 2, 2]);
        assert_eq!(b1.target_ids(), vec![2, 7, 9]);
        assert_eq!(generator.cursor(), 3);

        let b2 = generator.next().unwrap();
        assert_eq!(b2.inputs,      vec![7, 9, 1]);
        assert_eq!(b2.target_ids(), vec![9, 1, 5]);
        assert_eq!(generator.cursor(), 6);

        // 6 + 3 >= 7: the third row starts over at 0
        let b3 = generator.next().unwrap();
        assert_eq!(b3.offsets, vec![0]);
        assert_eq!(b3.inputs,  vec![5, 2, 2]);
    }

    #[test]
    fn test_rows_within_one_batch() {
        let mut generator = BatchGenerator::new(&DATA, 3, 3, 10, 3).unwrap();
        let batch   = generator.next_batch();

        assert_eq!(batch.offsets, vec![0, 3, 0]);
        assert_eq!(batch.input_row(0), &[5, 2, 2]);
        assert_eq!(batch.input_row(1), &[7, 9, 1]);
        assert_eq!(batch.input_row(2), &[5, 2, 2]);
        assert_eq!(generator.cursor(), 3);
    }

    #[test]
    fn test_targets_are_one_hot_of_shifted_window() {
        let mut generator = BatchGenerator::new(&DATA, 3, 2, 10, 1).unwrap();
        let batch   = generator.next_batch();

        for (row, &start) in batch.offsets.iter().enumerate() {
            assert_eq!(batch.input_row(row), &DATA[start..start + 3]);
            assert_eq!(batch.target_row(row), one_hot(&DATA[start + 1..start + 4], 10).as_slice());
        }
        assert_eq!(batch.targets.len(), 2 * 3 * 10);
        assert_eq!(batch.targets.iter().sum::<f32>(), 6.0);
    }

    #[test]
    fn test_wrap_uses_greater_or_equal_bound() {
        // skip 1 over 7 ids with 3 steps: starts 0,1,2,3 then 4+3 >= 7 wraps
        let generator = BatchGenerator::new(&DATA, 3, 1, 10, 1).unwrap();
        let starts: Vec<usize> = generator.take(6).map(|b| b.offsets[0]).collect();
        assert_eq!(starts, vec![0, 1, 2, 3, 0, 1]);
    }

    #[test]
    fn test_never_runs_out() {
        let generator = BatchGenerator::new(&DATA, 3, 4, 10, 2).unwrap();
        assert_eq!(generator.take(1000).count(), 1000);
    }

    #[test]
    fn test_state_carries_across_take() {
        let mut generator = BatchGenerator::new(&DATA, 2, 1, 10, 1).unwrap();
        let _ = generator.by_ref().take(2).count();
        assert_eq!(generator.next().unwrap().offsets, vec![2]);
    }

    #[test]
    fn test_rejects_short_sequences() {
        assert!(BatchGenerator::new(&[1, 2, 3], 3, 1, 4, 1).is_err());
        assert!(BatchGenerator::new(&[1, 2, 3, 0], 3, 1, 4, 1).is_ok());
    }

    #[test]
    fn test_rejects_zero_parameters() {
        assert!(BatchGenerator::new(&DATA, 0, 1, 10, 1).is_err());
        assert!(BatchGenerator::new(&DATA, 3, 0, 10, 1).is_err());
        assert!(BatchGenerator::new(&DATA, 3, 1, 0, 1).is_err());
        assert!(BatchGenerator::new(&DATA, 3, 1, 10, 0).is_err());
    }
}

//! Unit tests for the concept embedding wrapper.

mod selector;

use std::sync::Arc;

use candle_core::{Device, Tensor};

use crate::table::FrozenEmbedding;
use crate::wrapper::ConceptEmbedding;

/// Deterministic `(vocab, dim)` table: entry `(i, j)` is `(i * dim + j) * 0.25`,
/// so every row is distinct and easy to assert against.
pub(crate) fn test_table(vocab: usize, dim: usize) -> Arc<FrozenEmbedding> {
    let data: Vec<f32> = (0..vocab * dim).map(|i| i as f32 * 0.25).collect();
    let weights = Tensor::from_vec(data, (vocab, dim), &Device::Cpu).unwrap();
    Arc::new(FrozenEmbedding::new(weights).unwrap())
}

pub(crate) fn test_wrapper(vocab: usize, dim: usize, num_concepts: usize) -> ConceptEmbedding {
    ConceptEmbedding::new(test_table(vocab, dim), num_concepts).unwrap()
}

/// Row `i` of a rank-2 tensor as a plain vec.
pub(crate) fn row(tensor: &Tensor, i: usize) -> Vec<f32> {
    tensor.get(i).unwrap().to_vec1().unwrap()
}

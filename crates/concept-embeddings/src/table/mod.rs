//! Frozen base embedding table.
//!
//! Wraps `candle_nn::Embedding` as a read-only collaborator: the weights are
//! detached at construction and every lookup result is detached again, so no
//! gradient can reach the table even when the caller is inside a
//! gradient-tracking scope.

use candle_core::{Device, Module, Tensor};
use candle_nn::Embedding;

use crate::error::{ConceptError, ConceptResult};

/// A pretrained id → vector lookup whose weights never receive gradient.
#[derive(Debug, Clone)]
pub struct FrozenEmbedding {
    inner: Embedding,
    vocab_size: usize,
    dim: usize,
}

impl FrozenEmbedding {
    /// Build from a rank-2 `(vocab, dim)` weight tensor.
    ///
    /// # Errors
    /// - `ConceptError::InvalidTableShape` if `weights` is not rank-2 or has
    ///   an empty axis.
    pub fn new(weights: Tensor) -> ConceptResult<Self> {
        let dims = weights.dims();
        let (vocab_size, dim) = match dims {
            [vocab, dim] if *vocab > 0 && *dim > 0 => (*vocab, *dim),
            _ => {
                return Err(ConceptError::InvalidTableShape {
                    shape: dims.to_vec(),
                })
            }
        };
        let inner = Embedding::new(weights.detach(), dim);
        Ok(Self {
            inner,
            vocab_size,
            dim,
        })
    }

    /// Number of ids the table can resolve (V).
    pub fn vocab_size(&self) -> usize {
        self.vocab_size
    }

    /// Embedding dimension (D).
    pub fn dim(&self) -> usize {
        self.dim
    }

    pub fn device(&self) -> &Device {
        self.inner.embeddings().device()
    }

    /// Raw weight tensor, shape `(vocab, dim)`.
    pub fn weights(&self) -> &Tensor {
        self.inner.embeddings()
    }

    /// Look up `ids` (any shape, values in `[0, vocab)`), output shape
    /// `ids.shape + (dim,)`, detached from the autograd graph.
    pub fn lookup(&self, ids: &Tensor) -> ConceptResult<Tensor> {
        Ok(self.inner.forward(ids)?.detach())
    }
}

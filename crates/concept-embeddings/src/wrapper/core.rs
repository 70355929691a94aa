//! ConceptEmbedding state and construction.

use std::ops::Range;
use std::sync::Arc;

use candle_core::Var;
use tracing::debug;

use crate::config::ConceptConfig;
use crate::error::ConceptResult;
use crate::table::FrozenEmbedding;

/// A frozen base table plus a small trainable bank of concept vectors.
///
/// Ids in `[0, V)` resolve through the base table with the gradient path
/// severed; reserved ids `{V, …, V+C-1}` resolve to trainable concept
/// vectors. Concept bank index `i` corresponds to reserved id `V + i`, and
/// `C` is fixed at construction.
///
/// The concept bank is the sole gradient-bearing state. External optimizers
/// must obtain it through [`ConceptEmbedding::trainable_parameters`], which
/// deliberately excludes the base table.
#[derive(Debug)]
pub struct ConceptEmbedding {
    table: Arc<FrozenEmbedding>,
    concepts: Var,
    config: ConceptConfig,
}

impl ConceptEmbedding {
    /// Wrap `table` with `num_concepts` trainable vectors, default init.
    ///
    /// # Errors
    /// - `ConceptError::InvalidConfig` if `num_concepts` is zero.
    pub fn new(table: Arc<FrozenEmbedding>, num_concepts: usize) -> ConceptResult<Self> {
        Self::with_config(table, ConceptConfig::new(num_concepts))
    }

    /// Wrap `table` per `config`.
    ///
    /// The bank is drawn from a zero-mean normal with `config.init_std` so
    /// early training is not degenerate.
    ///
    /// # Errors
    /// - `ConceptError::InvalidConfig` if `config` fails validation.
    pub fn with_config(table: Arc<FrozenEmbedding>, config: ConceptConfig) -> ConceptResult<Self> {
        config.validate()?;
        let concepts = Var::randn(
            0f32,
            config.init_std as f32,
            (config.num_concepts, table.dim()),
            table.device(),
        )?;
        debug!(
            vocab_size = table.vocab_size(),
            dim = table.dim(),
            num_concepts = config.num_concepts,
            "constructed concept embedding wrapper"
        );
        Ok(Self {
            table,
            concepts,
            config,
        })
    }

    /// The shared frozen base table.
    pub fn table(&self) -> &Arc<FrozenEmbedding> {
        &self.table
    }

    /// Number of concept vectors in the bank (C).
    pub fn num_concepts(&self) -> usize {
        self.config.num_concepts
    }

    /// Base vocabulary size (V).
    pub fn vocab_size(&self) -> usize {
        self.table.vocab_size()
    }

    /// Embedding dimension (D).
    pub fn dim(&self) -> usize {
        self.table.dim()
    }

    /// Reserved ids, contiguous past the base vocabulary: `V..V+C`.
    pub fn reserved_ids(&self) -> Range<u32> {
        let vocab = self.table.vocab_size() as u32;
        vocab..vocab + self.config.num_concepts as u32
    }

    /// Reserved id of concept bank index `index`.
    pub fn reserved_id(&self, index: usize) -> u32 {
        self.table.vocab_size() as u32 + index as u32
    }

    /// The trainable concept bank, shape `(C, D)`.
    pub fn concepts(&self) -> &Var {
        &self.concepts
    }

    /// Exactly the concept bank, nothing else: the base table is deliberately
    /// excluded from the trainable set.
    pub fn trainable_parameters(&self) -> Vec<Var> {
        vec![self.concepts.clone()]
    }

    /// Replace the bank wholesale. Merge-internal; shape must stay `(C, D)`.
    pub(crate) fn install_bank(&mut self, concepts: Var) {
        self.concepts = concepts;
    }
}

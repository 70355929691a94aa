//! Lookup interception: masking, frozen lookup, concept splice.

use candle_core::{DType, Tensor, D};
use tracing::trace;

use crate::error::{ConceptError, ConceptResult};

use super::core::ConceptEmbedding;
use super::selector::ConceptSelector;

impl ConceptEmbedding {
    /// Embed `ids`, substituting trainable concept vectors at reserved ids.
    ///
    /// `ids` may have any shape and any integer dtype; the output shape is
    /// `ids.shape + (dim,)`. With a `selector`, only the selected concepts are
    /// substituted and each selected concept's reserved id must occur in
    /// every row of `ids` (any over the last axis, all over the leading
    /// axes). Without one, all concepts are active.
    ///
    /// Non-reserved positions equal the frozen table's lookup exactly, with
    /// the gradient path severed; substituted positions carry the concept
    /// vector, the only path gradient can flow through.
    ///
    /// # Errors
    /// - `ConceptError::DuplicateConceptIndex` on a repeated selector index.
    /// - `ConceptError::ConceptIndexOutOfRange` on a selector index `>= C`.
    /// - `ConceptError::ConceptNotPresent` when a selected concept's reserved
    ///   id is absent from some row of `ids`.
    /// - `ConceptError::UnresolvedReservedId` when an id at or past the
    ///   vocabulary boundary is not covered by any active concept.
    pub fn forward(
        &self,
        ids: &Tensor,
        selector: Option<&ConceptSelector>,
    ) -> ConceptResult<Tensor> {
        let ids = if ids.dtype() == DType::U32 {
            ids.clone()
        } else {
            ids.to_dtype(DType::U32)?
        };

        let active: Vec<usize> = match selector {
            Some(selector) => {
                selector.validate(self.num_concepts())?;
                selector.indices().to_vec()
            }
            None => (0..self.num_concepts()).collect(),
        };

        self.check_ids(&ids, &active, selector.is_some())?;

        trace!(active = ?active, shape = ?ids.dims(), "concept forward");

        // Working copy with every active reserved position moved onto the
        // placeholder id 0, always a valid index into the base table.
        let zeros = ids.zeros_like()?;
        let mut masked = ids.clone();
        let mut masks = Vec::with_capacity(active.len());
        for &index in &active {
            let mask = ids.eq(self.reserved_id(index))?;
            masked = mask.where_cond(&zeros, &masked)?;
            masks.push((index, mask));
        }

        let mut embeds = self.table().lookup(&masked)?;

        let mut out_dims = ids.dims().to_vec();
        out_dims.push(self.dim());
        for (index, mask) in masks {
            let mask = mask.unsqueeze(D::Minus1)?.broadcast_as(out_dims.as_slice())?;
            let concept = self
                .concepts()
                .as_tensor()
                .get(index)?
                .broadcast_as(out_dims.as_slice())?;
            // later concepts win where masks overlap
            embeds = mask.where_cond(&concept, &embeds)?;
        }

        Ok(embeds)
    }

    /// Host-side precondition scan, run before any tensor computation:
    /// selected reserved ids must appear in every row, and no id at or past
    /// the vocabulary boundary may escape the active set.
    fn check_ids(&self, ids: &Tensor, active: &[usize], explicit: bool) -> ConceptResult<()> {
        let flat: Vec<u32> = ids.flatten_all()?.to_vec1()?;
        let row_len = ids.dims().last().copied().unwrap_or(1).max(1);

        if explicit {
            let mut missing = Vec::new();
            for &index in active {
                let reserved = self.reserved_id(index);
                if flat.chunks(row_len).any(|row| !row.contains(&reserved)) {
                    missing.push(reserved);
                }
            }
            if !missing.is_empty() {
                return Err(ConceptError::ConceptNotPresent {
                    reserved_ids: missing,
                });
            }
        }

        let vocab = self.vocab_size() as u32;
        for &id in &flat {
            if id >= vocab && !active.iter().any(|&index| self.reserved_id(index) == id) {
                return Err(ConceptError::UnresolvedReservedId {
                    id,
                    vocab_size: self.vocab_size(),
                });
            }
        }
        Ok(())
    }
}

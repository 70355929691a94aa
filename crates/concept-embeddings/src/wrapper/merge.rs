//! Combining trained wrappers that share one base table.

use candle_core::{Tensor, Var};
use tracing::debug;

use crate::error::{ConceptError, ConceptResult};

use super::core::ConceptEmbedding;

/// Concatenate the concept banks of several trained wrappers into one
/// wrapper over their shared base table.
///
/// Bank indices are re-keyed contiguously in input order: the concept at
/// index `i` of input `k` lands at `C_0 + … + C_{k-1} + i`, and reserved ids
/// are re-derived from the shared vocabulary size and the combined count.
/// The inputs are never mutated; the merged wrapper is fully constructed
/// before its bank is installed, so no intermediate state is observable.
///
/// # Errors
/// - `ConceptError::EmptyMerge` when called with no wrappers.
/// - `ConceptError::IncompatibleBaseTables` when any input's base table
///   `(vocab, dim)` differs from the first input's.
pub fn merge(wrappers: &[&ConceptEmbedding]) -> ConceptResult<ConceptEmbedding> {
    let first = wrappers.first().ok_or(ConceptError::EmptyMerge)?;
    let expected = (first.vocab_size(), first.dim());
    for wrapper in &wrappers[1..] {
        let got = (wrapper.vocab_size(), wrapper.dim());
        if got != expected {
            return Err(ConceptError::IncompatibleBaseTables { expected, got });
        }
    }

    let total: usize = wrappers.iter().map(|w| w.num_concepts()).sum();
    let mut merged = ConceptEmbedding::new(first.table().clone(), total)?;

    // detached copies: the merged bank is a fresh Var, not a view of the
    // inputs' gradient state
    let banks: Vec<Tensor> = wrappers
        .iter()
        .map(|w| w.concepts().as_tensor().detach())
        .collect();
    let bank = Tensor::cat(&banks, 0)?;
    merged.install_bank(Var::from_tensor(&bank)?);

    debug!(
        inputs = wrappers.len(),
        total_concepts = total,
        "merged concept wrappers"
    );
    Ok(merged)
}

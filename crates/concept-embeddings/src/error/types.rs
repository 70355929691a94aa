//! Core error types for the concept embedding wrapper.

use thiserror::Error;

/// Failure modes of concept lookup, construction, and merge.
///
/// # Error Categories
///
/// | Category | Variants | Meaning |
/// |----------|----------|---------|
/// | Selector | DuplicateConceptIndex, ConceptIndexOutOfRange, ConceptNotPresent | Caller-supplied concept selection is invalid |
/// | Input | UnresolvedReservedId | An id past the vocabulary that no active concept claims |
/// | Merge | IncompatibleBaseTables, EmptyMerge | Merge preconditions violated |
/// | Construction | InvalidTableShape, InvalidConfig | Bad weights or parameters |
/// | Tensor | Tensor | Underlying candle operation failed |
///
/// # Design Principles
///
/// - **FAIL FAST**: every violation is detected before tensor computation runs
/// - **NO FALLBACKS**: violations are fatal to the call, no partial result
/// - **CONTEXTUAL**: every variant carries the offending values
#[derive(Debug, Error)]
pub enum ConceptError {
    // === Selector Errors ===
    /// Selector lists the same concept index more than once.
    #[error("duplicate concept index {index} in selector, concept ids must be all unique")]
    DuplicateConceptIndex { index: usize },

    /// Selector index does not name a concept in the bank.
    #[error("concept index {index} out of range, bank holds {num_concepts} concepts")]
    ConceptIndexOutOfRange { index: usize, num_concepts: usize },

    /// Selected concepts whose reserved ids never occur in the input ids.
    #[error("reserved ids {reserved_ids:?} not found in ids passed in")]
    ConceptNotPresent { reserved_ids: Vec<u32> },

    // === Input Errors ===
    /// An id at or past the vocabulary boundary that no active concept covers.
    /// The frozen table cannot resolve it and substitution was not requested.
    #[error("id {id} is outside the base vocabulary (size {vocab_size}) and no active concept covers it")]
    UnresolvedReservedId { id: u32, vocab_size: usize },

    // === Merge Errors ===
    /// Merge inputs were built over base tables of different shape.
    #[error("incompatible base tables: expected (vocab, dim) {expected:?}, got {got:?}")]
    IncompatibleBaseTables {
        expected: (usize, usize),
        got: (usize, usize),
    },

    /// Merge called with no input wrappers.
    #[error("merge requires at least one wrapper")]
    EmptyMerge,

    // === Construction Errors ===
    /// Base table weights are not a non-empty rank-2 `(vocab, dim)` tensor.
    #[error("base table weights must be rank-2 (vocab, dim) and non-empty, got shape {shape:?}")]
    InvalidTableShape { shape: Vec<usize> },

    /// Construction parameters failed validation.
    #[error("invalid config: {message}")]
    InvalidConfig { message: String },

    // === Tensor Errors ===
    /// Underlying tensor operation failed.
    #[error("tensor error: {0}")]
    Tensor(#[from] candle_core::Error),
}

/// Result type alias for concept-embedding operations.
pub type ConceptResult<T> = Result<T, ConceptError>;

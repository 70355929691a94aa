//! Error taxonomy for concept-embedding operations.

mod types;


pub use types::{ConceptError, ConceptResult};

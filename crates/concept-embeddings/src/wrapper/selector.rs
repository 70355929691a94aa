//! Concept selection argument for [`ConceptEmbedding::forward`].
//!
//! [`ConceptEmbedding::forward`]: super::ConceptEmbedding::forward

use std::collections::HashSet;

use crate::error::{ConceptError, ConceptResult};

/// Which concepts are eligible for substitution on one forward call.
///
/// Caller order is preserved and defines the splice order: where masks
/// overlap, a later concept overwrites an earlier one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConceptSelector {
    /// A single concept bank index.
    One(usize),
    /// Several concept bank indices, in splice order.
    Many(Vec<usize>),
}

impl ConceptSelector {
    /// Concept bank indices in caller order.
    pub fn indices(&self) -> &[usize] {
        match self {
            Self::One(index) => std::slice::from_ref(index),
            Self::Many(indices) => indices,
        }
    }

    /// Uniqueness and range checks, run before any tensor work.
    ///
    /// # Errors
    /// - `ConceptError::DuplicateConceptIndex` on a repeated index.
    /// - `ConceptError::ConceptIndexOutOfRange` on an index `>= num_concepts`.
    pub(crate) fn validate(&self, num_concepts: usize) -> ConceptResult<()> {
        let mut seen = HashSet::new();
        for &index in self.indices() {
            if !seen.insert(index) {
                return Err(ConceptError::DuplicateConceptIndex { index });
            }
            if index >= num_concepts {
                return Err(ConceptError::ConceptIndexOutOfRange {
                    index,
                    num_concepts,
                });
            }
        }
        Ok(())
    }
}

impl From<usize> for ConceptSelector {
    fn from(index: usize) -> Self {
        Self::One(index)
    }
}

impl From<Vec<usize>> for ConceptSelector {
    fn from(indices: Vec<usize>) -> Self {
        Self::Many(indices)
    }
}

impl From<&[usize]> for ConceptSelector {
    fn from(indices: &[usize]) -> Self {
        Self::Many(indices.to_vec())
    }
}

//! Construction-time configuration for the concept wrapper.

use serde::{Deserialize, Serialize};

use crate::error::{ConceptError, ConceptResult};

/// Std of the zero-mean normal draw used to initialize the concept bank when
/// none is configured. Small enough that early training is not degenerate.
pub const DEFAULT_INIT_STD: f64 = 0.02;

/// Parameters for [`crate::ConceptEmbedding`] construction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConceptConfig {
    /// Number of trainable concept vectors (C). Fixed for the wrapper's
    /// lifetime; must be at least 1.
    pub num_concepts: usize,
    /// Std of the normal draw initializing the bank.
    pub init_std: f64,
}

impl Default for ConceptConfig {
    fn default() -> Self {
        Self {
            num_concepts: 1,
            init_std: DEFAULT_INIT_STD,
        }
    }
}

impl ConceptConfig {
    /// Config for `num_concepts` concepts with the default initialization.
    pub fn new(num_concepts: usize) -> Self {
        Self {
            num_concepts,
            ..Self::default()
        }
    }

    /// Fail-fast validation, run at wrapper construction.
    ///
    /// # Errors
    /// - `ConceptError::InvalidConfig` for zero concepts or a non-finite or
    ///   negative `init_std`.
    pub fn validate(&self) -> ConceptResult<()> {
        if self.num_concepts == 0 {
            return Err(ConceptError::InvalidConfig {
                message: "num_concepts must be at least 1".to_string(),
            });
        }
        if !self.init_std.is_finite() || self.init_std < 0.0 {
            return Err(ConceptError::InvalidConfig {
                message: format!(
                    "init_std must be finite and non-negative, got {}",
                    self.init_std
                ),
            });
        }
        Ok(())
    }
}

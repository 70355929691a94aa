//! Trainable concept vectors spliced over a frozen embedding table.
//!
//! A pretrained embedding table stays frozen: no gradient ever reaches its
//! weights through this crate. A small bank of additional concept vectors is
//! the only trainable state. Reserved ids immediately past the base
//! vocabulary (`{V, …, V+C-1}`) are intercepted on lookup and replaced with
//! the corresponding concept vector; every other id resolves through the
//! frozen table with the gradient path explicitly severed.
//!
//! # Architecture
//!
//! ```text
//! ConceptEmbedding
//! ├── table: Arc<FrozenEmbedding>     frozen (V, D) lookup, detached
//! ├── concepts: Var                   trainable (C, D) bank
//! └── reserved ids: V..V+C            derived, fixed at construction
//! ```
//!
//! `forward` computes one boolean mask per active concept, moves the masked
//! positions onto the safe placeholder id 0, runs the detached base lookup,
//! then splices the concept vectors back in with an ordered fold of
//! `where_cond` selects. Independently trained wrappers sharing one base
//! table combine with [`merge`], which concatenates their banks and re-keys
//! the reserved ids contiguously.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use candle_core::{Device, Tensor};
//! use concept_embeddings::{ConceptEmbedding, FrozenEmbedding};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let weights = Tensor::randn(0f32, 1f32, (100, 8), &Device::Cpu)?;
//! let table = Arc::new(FrozenEmbedding::new(weights)?);
//! let wrapper = ConceptEmbedding::new(table, 2)?;
//!
//! // ids 100 and 101 are the two reserved concept ids
//! let ids = Tensor::new(&[5u32, 100, 7, 101], &Device::Cpu)?;
//! let embeds = wrapper.forward(&ids, None)?;
//! assert_eq!(embeds.dims(), &[4, 8]);
//! # Ok(()) }
//! ```

pub mod config;
pub mod error;
pub mod table;
pub mod wrapper;

pub use config::ConceptConfig;
pub use error::{ConceptError, ConceptResult};
pub use table::FrozenEmbedding;
pub use wrapper::{merge, ConceptEmbedding, ConceptSelector};

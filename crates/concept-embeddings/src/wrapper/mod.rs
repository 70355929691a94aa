//! Concept embedding wrapper: trainable vectors spliced over a frozen table.
//!
//! The wrapper intercepts reserved ids `{V, …, V+C-1}` on lookup and
//! substitutes the matching trainable concept vector; everything else goes
//! through the frozen base table with the gradient path severed. [`merge`]
//! combines independently trained wrappers that share one base table.

mod core;
mod forward;
mod merge;
mod selector;

#[cfg(test)]
mod tests;

pub use self::core::ConceptEmbedding;
pub use self::merge::merge;
pub use self::selector::ConceptSelector;

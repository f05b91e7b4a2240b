//! Built-in pipeline phases.

mod assemble;
mod normalize;
mod resolve;

pub use assemble::AssemblePhase;
pub use normalize::{
    NormalizePhase, NormalizedElement, NormalizedField, NormalizedItem, NormalizedProvider,
};
pub use resolve::ResolvePhase;

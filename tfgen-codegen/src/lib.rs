//! Schema normalization, resolution and assembly, plus the machinery every
//! tfgen emitter shares.
//!
//! # Module Organization
//!
//! - [`pipeline`] - normalize → resolve → assemble, with diagnostics
//! - [`builder`] - Code generation building blocks (CodeBuilder, CodeFragment, etc.)
//! - [`language`] - Language-specific abstractions (LanguageCodegen, TypeMapper, etc.)
//! - [`docs`] - Markdown documentation sources
//! - [`values`] - Property value translation, defaults and numeric coercion
//! - [`overlay`] - Hand-written overlay selection
//! - [`metadata`] - Project descriptor and VERSION files
//! - [`testing`] - Fixtures for emitter tests (feature-gated)

pub mod builder;
pub mod docs;
mod error;
pub mod language;
pub mod metadata;
pub mod overlay;
pub mod pipeline;
pub mod values;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use error::MultiError;

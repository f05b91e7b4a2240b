//! Generation pipeline.
//!
//! A [`Pipeline`] takes a provider document through three phases:
//!
//! - normalize: pair every schema field with its override, skip removed
//!   fields and unmapped items, warn about overrides that match nothing
//! - resolve: decide names, projected types, optionality, docs and defaults,
//!   producing IR resources, functions and config variables
//! - assemble: group members into modules and attach overlay files
//!
//! Warnings and per-item errors accumulate in the [`CompilationContext`];
//! emitters consume the assembled [`tfgen_ir::Package`].

mod context;
mod diagnostic;
mod phase;
pub mod phases;
mod runner;

pub use context::{CompilationContext, GenerateOptions, ResolvedProvider};
pub use diagnostic::{Diagnostic, Severity};
pub use phase::Phase;
pub use runner::Pipeline;

//! Language-specific abstractions.
//!
//! This module provides traits and types for language-specific code generation:
//! - [`LanguageCodegen`] - Main trait for language emitters
//! - [`TypeMapper`] - Trait for mapping IR types to language types
//! - [`NamingConvention`] - Language-specific naming rules
//! - [`EmitPlan`] - The files an emitter will write, checked for overlay collisions
//! - [`GenerateResult`] - Result of writing a plan
//! - [`PreviewFile`] - Generated file preview

mod naming;
mod plan;
mod traits;

pub use naming::NamingConvention;
pub use plan::{EmitPlan, GenerateResult, OverlayCopy};
pub use traits::{LanguageCodegen, PreviewFile, TypeMapper};

//! Code generation building blocks.
//!
//! - [`CodeBuilder`] - Fluent API for building indented code and doc comments
//! - [`CodeFragment`] - Intermediate representation for code pieces
//! - [`Renderable`] - Trait for emitter AST nodes that produce fragments
//! - [`Indent`] - Indentation configuration

mod code_builder;
mod indent;
mod renderable;

pub use code_builder::CodeBuilder;
pub use indent::Indent;
pub use renderable::{CodeFragment, Renderable};

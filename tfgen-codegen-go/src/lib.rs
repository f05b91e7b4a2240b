//! Go SDK emitter for tfgen.
//!
//! # Generated Output
//!
//! - `<module>/<name>.go` - a resource or data source in package `<module>`;
//!   root-module members sit at the top level in a package named after the provider
//! - `config/config.go` - provider configuration getters
//! - `<module>/internal_utilities.go` - environment helpers and the SDK version
//! - `go.mod`, `Pulumi.yaml`, `VERSION`

mod generator;
mod naming;
mod symbols;
mod type_mapper;

pub mod files;

pub use generator::Generator;
pub use naming::GO_NAMING;
pub use tfgen_codegen::language::{GenerateResult, LanguageCodegen, PreviewFile};
pub use type_mapper::GoTypeMapper;

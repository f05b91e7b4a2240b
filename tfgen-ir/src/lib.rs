//! Intermediate representation types for the tfgen generator.
//!
//! The pipeline resolves a provider document into these types once; every
//! language emitter then renders from the same values.
//!
//! # Architecture
//!
//! ```text
//! schema.json → tfgen-schema (parsing) → tfgen-ir (resolved package) → emitters
//! ```
//!
//! The IR types are:
//! - Language-agnostic (names are canonical camelCase/PascalCase; each emitter re-mangles)
//! - Fully decided (optionality, projection and docs are already resolved)
//! - Serializable (the schema emitter dumps them as JSON)

mod error;
mod member;
mod package;
mod property;
mod token;
mod types;

pub use error::IrError;
pub use member::{Function, ModuleMember, OverlayFile, Resource};
pub use package::{
    CONFIG_MODULE, DotnetOptions, GoOptions, JavaScriptOptions, LanguageOptions, Module, Package,
    PackageMetadata, Provenance, PythonOptions,
};
pub use property::{DefaultValue, Literal, Position, Property};
pub use token::{ROOT_MODULE, Token};
pub use types::{AssetKind, CustomType, ObjectType, TypeRef};

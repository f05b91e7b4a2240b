//! Language-neutral JSON package schema emitter for tfgen.
//!
//! # Generated Output
//!
//! - `schema.json` - the resolved package: metadata, language options and every
//!   module's resources, functions and config variables
//! - `Pulumi.yaml`, `VERSION`

mod generator;
mod schema_json;

pub use generator::Generator;
pub use schema_json::{SCHEMA_FILE, SchemaJson, SchemaModule, SchemaPackage};
pub use tfgen_codegen::language::{GenerateResult, LanguageCodegen, PreviewFile};

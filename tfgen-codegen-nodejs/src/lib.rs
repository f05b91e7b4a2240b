//! Node.js (TypeScript) SDK emitter for tfgen.
//!
//! # Usage
//!
//! ```ignore
//! use tfgen_codegen_nodejs::{Generator, LanguageCodegen};
//! use std::path::Path;
//!
//! let generator = Generator::new(&package);
//!
//! // Preview files without writing
//! let files = generator.preview()?;
//!
//! // Generate files to disk
//! let result = generator.generate(Path::new("sdk/nodejs"))?;
//! ```
//!
//! # Generated Output
//!
//! - `<module>/<stem>.ts` - one file per resource or data source
//! - `<module>/index.ts` - re-exports; the root `index.ts` also exposes sub-modules
//! - `config/vars.ts` - provider configuration accessors
//! - `utilities.ts` - environment-variable helpers for defaults
//! - `package.json`, `tsconfig.json`, `Pulumi.yaml`, `VERSION`

mod code_file;
mod generator;
mod naming;
mod type_mapper;

pub mod ast;
pub mod files;

pub use code_file::{CodeFile, RawCode};
pub use generator::Generator;
pub use naming::TS_NAMING;
pub use tfgen_codegen::language::{GenerateResult, LanguageCodegen, PreviewFile};
pub use type_mapper::TypeScriptTypeMapper;

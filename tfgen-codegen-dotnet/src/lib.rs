//! .NET (C#) SDK emitter for tfgen.
//!
//! # Generated Output
//!
//! - `<Module>/<Name>.cs` - a resource class or data-source invoker, with its
//!   argument, result and nested object classes, in namespace `Pulumi.<Pkg>.<Module>`
//! - `Config/Config.cs` - provider configuration properties
//! - `Utilities.cs` - environment helpers and the SDK version
//! - `Pulumi.<Pkg>.csproj`, `Pulumi.yaml`, `VERSION`

mod generator;
mod naming;
mod type_mapper;

pub mod files;

pub use generator::Generator;
pub use naming::CS_NAMING;
pub use tfgen_codegen::language::{GenerateResult, LanguageCodegen, PreviewFile};
pub use type_mapper::CSharpTypeMapper;

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

//! Input models for tfgen: the provider schema, the override info layered
//! over it, and the `tfgen.toml` project configuration.

mod config;
mod error;
mod field;
mod info;
mod language;
mod provider;

pub use config::{
    CONFIG_FILE, DEFAULT_OUT_DIR, DEFAULT_OVERLAYS_DIR, GenerateSection, GeneratorConfig,
};
pub use error::{Error, Result, SourceContext};
pub use field::{Element, FieldKind, FieldSchema, ObjectSchema, ValueKind};
pub use info::{
    AssetTranslation, AssetTranslationKind, DataSourceInfo, DefaultFn, DefaultInfo, DocInfo,
    DotnetInfo, GolangInfo, JavaScriptInfo, Overlay, Provenance, PythonInfo, ResourceInfo,
    SchemaInfo,
};
pub use language::Language;
pub use provider::{ProviderDocument, ProviderSchema, parse_document};

//! Python SDK emitter for tfgen.
//!
//! # Generated Output
//!
//! - `pulumi_<pkg>/<module>/<snake>.py` - one file per resource or data source
//! - `pulumi_<pkg>/<module>/__init__.py` - star-imports; the root one loads sub-packages
//! - `pulumi_<pkg>/config/vars.py` - provider configuration values
//! - `pulumi_<pkg>/utilities.py`, `pulumi_<pkg>/tables.py` - env helpers and name tables
//! - `setup.py`, `Pulumi.yaml`, `VERSION`

mod generator;
mod naming;
mod type_mapper;

pub mod files;

pub use generator::Generator;
pub use naming::PY_NAMING;
pub use tfgen_codegen::language::{GenerateResult, LanguageCodegen, PreviewFile};
pub use type_mapper::PythonTypeMapper;

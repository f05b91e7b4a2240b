//! Python file generators.

mod config_vars;
mod function_py;
mod init_py;
mod resource_py;
mod setup_py;
mod tables_py;
mod utilities_py;

use std::path::PathBuf;

pub use config_vars::ConfigVarsPy;
pub use function_py::FunctionPy;
pub use init_py::InitPy;
pub use resource_py::ResourcePy;
pub use setup_py::SetupPy;
pub use tables_py::TablesPy;
use tfgen_core::{CommentStyle, generated_header};
use tfgen_ir::{Literal, Property, ROOT_MODULE, TypeRef};
pub use utilities_py::UtilitiesPy;

/// Name of the importable Python package (`pulumi_<pkg>`).
pub(crate) fn package_dir(package: &str) -> String {
    format!("pulumi_{}", package.replace('-', "_"))
}

/// Directory of a module inside the Python package.
pub(crate) fn module_dir(package: &str, module: &str) -> PathBuf {
    let root = PathBuf::from(package_dir(package));
    if module == ROOT_MODULE {
        root
    } else {
        root.join(module)
    }
}

/// `from .. import utilities, tables` as seen from a module's files.
pub(crate) fn root_import(module: &str) -> &'static str {
    if module == ROOT_MODULE {
        "from . import utilities, tables"
    } else {
        "from .. import utilities, tables"
    }
}

/// The coding line followed by the do-not-edit banner.
///
/// The coding declaration has to come first to take effect, so Python
/// files render their own header.
pub(crate) fn python_header() -> String {
    format!("# coding=utf-8\n{}", generated_header(CommentStyle::Hash))
}

/// Render a literal as a Python expression.
pub(crate) fn literal(value: &Literal) -> String {
    match value {
        Literal::Bool(true) => "True".to_string(),
        Literal::Bool(false) => "False".to_string(),
        Literal::Int(i) => i.to_string(),
        Literal::Float(f) => f.to_string(),
        Literal::String(s) => quote(s),
    }
}

/// Quote a string as a Python literal.
pub(crate) fn quote(s: &str) -> String {
    serde_json::to_string(s).unwrap_or_else(|_| format!("\"{}\"", s))
}

/// Expression producing a property's default, when it has a renderable one.
pub(crate) fn default_expr(prop: &Property) -> Option<String> {
    let default = prop.default.as_ref().filter(|d| d.is_renderable())?;
    let mut parts = Vec::new();
    if !default.env_vars.is_empty() {
        let helper = match prop.ty {
            TypeRef::Bool => "get_env_bool",
            TypeRef::Int => "get_env_int",
            TypeRef::Float => "get_env_float",
            _ => "get_env",
        };
        let vars: Vec<String> = default.env_vars.iter().map(|v| format!("'{}'", v)).collect();
        parts.push(format!("utilities.{}({})", helper, vars.join(", ")));
    }
    if let Some(value) = &default.literal {
        parts.push(literal(value));
    }
    Some(format!("({})", parts.join(" or ")))
}

//! C# file generators.

mod classes;
mod config_cs;
mod csproj;
mod function_cs;
mod resource_cs;
mod utilities_cs;

use std::path::PathBuf;

pub use config_cs::ConfigCs;
pub use csproj::Csproj;
pub use function_cs::FunctionCs;
pub use resource_cs::ResourceCs;
use tfgen_core::to_pascal_case;
use tfgen_ir::{CONFIG_MODULE, Literal, Property, ROOT_MODULE, TypeRef};
pub use utilities_cs::UtilitiesCs;

/// `using` directives at the top of every source file.
pub(crate) const USINGS: &str = "using System;
using System.Collections.Generic;
using System.Collections.Immutable;
using System.Threading.Tasks;
using Pulumi.Serialization;
";

/// The package's root namespace, `Pulumi.<Pkg>`.
pub(crate) fn root_namespace(package: &str) -> String {
    format!("Pulumi.{}", to_pascal_case(package))
}

/// Namespace of a module. Root and config members live in the root namespace.
pub(crate) fn namespace(package: &str, module: &str) -> String {
    if module == ROOT_MODULE || module == CONFIG_MODULE {
        root_namespace(package)
    } else {
        format!("{}.{}", root_namespace(package), to_pascal_case(module))
    }
}

/// Output directory of a module; the root module lives at the top level.
pub(crate) fn module_dir(module: &str) -> PathBuf {
    if module == ROOT_MODULE {
        PathBuf::new()
    } else {
        PathBuf::from(to_pascal_case(module))
    }
}

/// Wrap an already-indented body in a namespace block.
pub(crate) fn in_namespace(namespace: &str, body: &str) -> String {
    format!("{}\nnamespace {}\n{{\n{}}}\n", USINGS, namespace, body)
}

pub(crate) fn quote(s: &str) -> String {
    serde_json::to_string(s).unwrap_or_else(|_| format!("\"{}\"", s))
}

/// A verbatim string, used for attribute arguments.
pub(crate) fn verbatim(s: &str) -> String {
    format!("@\"{}\"", s.replace('"', "\"\""))
}

pub(crate) fn literal(value: &Literal) -> String {
    match value {
        Literal::Bool(b) => b.to_string(),
        Literal::Int(i) => i.to_string(),
        Literal::Float(f) => f.to_string(),
        Literal::String(s) => quote(s),
    }
}

/// Expression producing a property's default, when it has a renderable one.
pub(crate) fn default_expr(prop: &Property) -> Option<String> {
    let default = prop.default.as_ref().filter(|d| d.is_renderable())?;
    let mut parts = Vec::new();
    if !default.env_vars.is_empty() {
        let helper = match prop.ty {
            TypeRef::Bool => "GetEnvBoolean",
            TypeRef::Int => "GetEnvInt32",
            TypeRef::Float => "GetEnvDouble",
            _ => "GetEnv",
        };
        let vars: Vec<String> = default.env_vars.iter().map(|v| quote(v)).collect();
        parts.push(format!("Utilities.{}({})", helper, vars.join(", ")));
    }
    if let Some(value) = &default.literal {
        parts.push(literal(value));
    }
    Some(parts.join(" ?? "))
}

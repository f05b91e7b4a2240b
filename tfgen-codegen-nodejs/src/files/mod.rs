//! TypeScript file generators.

mod config_vars;
mod function_ts;
mod index_ts;
mod package_json;
mod resource_ts;
mod tsconfig;
mod utilities_ts;

use std::path::PathBuf;

pub use config_vars::ConfigVarsTs;
pub use function_ts::FunctionTs;
pub use index_ts::IndexTs;
pub use package_json::PackageJson;
pub use resource_ts::ResourceTs;
use tfgen_core::lower_first;
use tfgen_ir::{Literal, Property, ROOT_MODULE, Token, TypeRef};
pub use tsconfig::TsConfig;
pub use utilities_ts::UtilitiesTs;

use crate::{ast::Import, type_mapper::custom_tokens};

/// Output directory of a module; the root module lives at the top level.
pub(crate) fn module_dir(module: &str) -> PathBuf {
    if module == ROOT_MODULE {
        PathBuf::new()
    } else {
        PathBuf::from(module)
    }
}

/// Import specifier of `to_module/stem` as seen from a file in `from_module`.
pub(crate) fn relative_path(from_module: &str, to_module: &str, stem: &str) -> String {
    let up = if from_module == ROOT_MODULE { "./" } else { "../" };
    if from_module == to_module {
        format!("./{}", stem)
    } else if to_module == ROOT_MODULE {
        format!("{}{}", up, stem)
    } else {
        format!("{}{}/{}", up, to_module, stem)
    }
}

/// `import * as utilities from ".../utilities"`.
pub(crate) fn utilities_import(module: &str) -> Import {
    Import::namespace(relative_path(module, ROOT_MODULE, "utilities"), "utilities")
}

/// Imports for the custom types referenced by `props`, skipping the file itself.
pub(crate) fn custom_type_imports<'a>(
    module: &str,
    own_stem: &str,
    props: impl IntoIterator<Item = &'a Property>,
) -> Vec<Import> {
    let mut imports: Vec<Import> = Vec::new();
    for prop in props {
        for token in custom_tokens(&prop.ty) {
            let stem = token_stem(token);
            if token.module() == module && stem == own_stem {
                continue;
            }
            let from = relative_path(module, token.module(), &stem);
            match imports.iter_mut().find(|i| i.from_path() == from) {
                Some(existing) => *existing = existing.clone().named(token.name()),
                None => imports.push(Import::new(from).named(token.name())),
            }
        }
    }
    imports
}

fn token_stem(token: &Token) -> String {
    token
        .file_stem()
        .map(str::to_string)
        .unwrap_or_else(|| lower_first(token.name()))
}

/// Render a literal as a TypeScript expression.
pub(crate) fn literal(value: &Literal) -> String {
    match value {
        Literal::Bool(b) => b.to_string(),
        Literal::Int(i) => i.to_string(),
        Literal::Float(f) => f.to_string(),
        Literal::String(s) => serde_json::to_string(s).unwrap_or_else(|_| format!("\"{}\"", s)),
    }
}

/// Expression producing a property's default, when it has a renderable one.
///
/// Environment variables are consulted first, then the literal.
pub(crate) fn default_expr(prop: &Property) -> Option<String> {
    let default = prop.default.as_ref().filter(|d| d.is_renderable())?;
    let mut parts = Vec::new();
    if !default.env_vars.is_empty() {
        let helper = match prop.ty {
            TypeRef::Bool => "getEnvBoolean",
            TypeRef::Int | TypeRef::Float => "getEnvNumber",
            _ => "getEnv",
        };
        let vars: Vec<String> = default.env_vars.iter().map(|v| format!("\"{}\"", v)).collect();
        parts.push(format!("utilities.{}({})", helper, vars.join(", ")));
    }
    if let Some(value) = &default.literal {
        parts.push(literal(value));
    }
    Some(parts.join(" ?? "))
}

/// Whether any property needs the utilities module for its default.
pub(crate) fn needs_utilities<'a>(props: impl IntoIterator<Item = &'a Property>) -> bool {
    props.into_iter().any(|p| {
        p.default
            .as_ref()
            .is_some_and(|d| !d.env_vars.is_empty())
    })
}

//! Go file generators.

mod config_go;
mod function_go;
mod go_mod;
mod resource_go;
mod utilities_go;

use std::path::PathBuf;

pub use config_go::ConfigGo;
pub use function_go::FunctionGo;
pub use go_mod::GoMod;
pub use resource_go::ResourceGo;
use tfgen_codegen::builder::CodeBuilder;
use tfgen_core::doc_lines;
use tfgen_ir::{Literal, Property, ROOT_MODULE, TypeRef};
pub use utilities_go::UtilitiesGo;

use crate::{naming::package_name, type_mapper::ptr_constructor};

/// Import path of the Pulumi Go SDK.
pub(crate) const PULUMI_SDK: &str = "github.com/pulumi/pulumi/sdk/v3/go/pulumi";

/// Import path of the root package, defaulting to the conventional SDK location.
pub fn import_base_path(package: &str, configured: Option<&str>) -> String {
    match configured {
        Some(path) => path.trim_end_matches('/').to_string(),
        None => format!("github.com/pulumi/pulumi-{0}/sdk/go/{0}", package),
    }
}

/// Output directory of a module; the root package lives at the top level.
pub(crate) fn module_dir(module: &str) -> PathBuf {
    if module == ROOT_MODULE {
        PathBuf::new()
    } else {
        PathBuf::from(package_name(module))
    }
}

/// Go package name of a module; the root package is named after the provider.
pub(crate) fn go_package(package: &str, module: &str) -> String {
    if module == ROOT_MODULE {
        package_name(package)
    } else {
        package_name(module)
    }
}

/// Package clause and grouped imports, standard library first.
pub(crate) fn preamble(package: &str, imports: &[&str]) -> String {
    let mut out = format!("package {}\n", package);
    if imports.is_empty() {
        return out;
    }

    let (mut std, mut external): (Vec<&str>, Vec<&str>) = imports
        .iter()
        .partition(|path| !path.split('/').next().unwrap_or_default().contains('.'));
    std.sort_unstable();
    external.sort_unstable();

    out.push_str("\nimport (\n");
    for path in &std {
        out.push_str(&format!("\t{}\n", quote(path)));
    }
    if !std.is_empty() && !external.is_empty() {
        out.push('\n');
    }
    for path in &external {
        out.push_str(&format!("\t{}\n", quote(path)));
    }
    out.push_str(")\n");
    out
}

/// Add `//` doc comment lines, keeping paragraph breaks.
pub(crate) fn push_doc(b: &mut CodeBuilder, text: &str) {
    for line in doc_lines(text) {
        if line.is_empty() {
            b.push_line("//");
        } else {
            b.push_line(&format!("// {}", line));
        }
    }
}

pub(crate) fn quote(s: &str) -> String {
    serde_json::to_string(s).unwrap_or_else(|_| format!("\"{}\"", s))
}

pub(crate) fn literal(value: &Literal) -> String {
    match value {
        Literal::Bool(b) => b.to_string(),
        Literal::Int(i) => i.to_string(),
        Literal::Float(f) => format!("{:?}", f),
        Literal::String(s) => quote(s),
    }
}

/// Name of the typed environment lookup for a property type.
pub(crate) fn env_helper(ty: &TypeRef) -> &'static str {
    match ty {
        TypeRef::Bool => "getEnvBool",
        TypeRef::Int => "getEnvInt",
        TypeRef::Float => "getEnvFloat",
        _ => "getEnv",
    }
}

/// Statements filling an unset optional argument `<target>` from its default.
///
/// Environment variables take precedence over the literal.
pub(crate) fn push_default(b: &mut CodeBuilder, target: &str, prop: &Property) {
    let Some(default) = prop.default.as_ref().filter(|d| d.is_renderable()) else {
        return;
    };
    let Some(ptr) = ptr_constructor(&prop.ty) else {
        return;
    };

    b.push_line(&format!("if {} == nil {{", target)).push_indent();
    if default.env_vars.is_empty() {
        if let Some(value) = &default.literal {
            b.push_line(&format!("{} = {}({})", target, ptr, literal(value)));
        }
    } else {
        let vars: Vec<String> = default.env_vars.iter().map(|v| quote(v)).collect();
        b.push_line(&format!(
            "if d, ok := {}({}); ok {{",
            env_helper(&prop.ty),
            vars.join(", ")
        ));
        b.push_indent()
            .push_line(&format!("{} = {}(d)", target, ptr))
            .push_dedent();
        match &default.literal {
            Some(value) => {
                b.push_line("} else {").push_indent();
                b.push_line(&format!("{} = {}({})", target, ptr, literal(value)));
                b.push_dedent().push_line("}");
            }
            None => {
                b.push_line("}");
            }
        }
    }
    b.push_dedent().push_line("}");
}

#[cfg(test)]
mod tests {
    use tfgen_ir::{DefaultValue, Position};

    use super::*;

    #[test]
    fn test_import_base_path() {
        assert_eq!(
            import_base_path("example", None),
            "github.com/pulumi/pulumi-example/sdk/go/example"
        );
        assert_eq!(
            import_base_path("example", Some("example.com/sdk/go/example/")),
            "example.com/sdk/go/example"
        );
    }

    #[test]
    fn test_packages_and_dirs() {
        assert_eq!(go_package("my-cloud", "index"), "mycloud");
        assert_eq!(go_package("example", "s3"), "s3");
        assert_eq!(module_dir("index"), PathBuf::new());
        assert_eq!(module_dir("config"), PathBuf::from("config"));
    }

    #[test]
    fn test_preamble_groups_imports() {
        assert_eq!(
            preamble("example", &[PULUMI_SDK, "reflect", "errors"]),
            "package example\n\nimport (\n\t\"errors\"\n\t\"reflect\"\n\n\t\"github.com/pulumi/pulumi/sdk/v3/go/pulumi\"\n)\n"
        );
        assert_eq!(preamble("config", &[]), "package config\n");
    }

    #[test]
    fn test_push_default() {
        let prop = Property::new("skip", "skip", TypeRef::Bool, Position::Input)
            .optional(true)
            .with_default(DefaultValue {
                literal: Some(Literal::Bool(false)),
                env_vars: vec!["EXAMPLE_SKIP".into()],
                computed: false,
            });
        let mut b = CodeBuilder::go();
        push_default(&mut b, "args.Skip", &prop);
        assert_eq!(
            b.build(),
            "if args.Skip == nil {\n\tif d, ok := getEnvBool(\"EXAMPLE_SKIP\"); ok {\n\t\targs.Skip = pulumi.BoolPtr(d)\n\t} else {\n\t\targs.Skip = pulumi.BoolPtr(false)\n\t}\n}\n"
        );

        let region = Property::new("region", "region", TypeRef::String, Position::Input)
            .optional(true)
            .with_default(DefaultValue {
                literal: None,
                env_vars: vec!["EXAMPLE_REGION".into()],
                computed: false,
            });
        let mut b = CodeBuilder::go();
        push_default(&mut b, "args.Region", &region);
        assert_eq!(
            b.build(),
            "if args.Region == nil {\n\tif d, ok := getEnv(\"EXAMPLE_REGION\"); ok {\n\t\targs.Region = pulumi.StringPtr(d)\n\t}\n}\n"
        );
    }
}

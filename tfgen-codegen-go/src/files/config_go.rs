//! `config/config.go`: typed accessors for provider configuration.

use std::path::PathBuf;

use tfgen_codegen::builder::CodeBuilder;
use tfgen_core::{CommentStyle, FileRules, GeneratedFile, upper_first};
use tfgen_ir::{CONFIG_MODULE, Property, TypeRef};

use super::{PULUMI_SDK, env_helper, literal, module_dir, preamble, quote};

const CONFIG_SDK: &str = "github.com/pulumi/pulumi/sdk/v3/go/pulumi/config";

pub struct ConfigGo<'a> {
    package: &'a str,
    variables: Vec<&'a Property>,
}

impl<'a> ConfigGo<'a> {
    pub fn new(package: &'a str, variables: impl IntoIterator<Item = &'a Property>) -> Self {
        Self {
            package,
            variables: variables.into_iter().collect(),
        }
    }

    /// Go return type and the config-package getter suffix.
    ///
    /// Non-primitive values are returned as their raw JSON text.
    fn kind(ty: &TypeRef) -> (&'static str, &'static str) {
        match ty {
            TypeRef::Bool => ("bool", "Bool"),
            TypeRef::Int => ("int", "Int"),
            TypeRef::Float => ("float64", "Float64"),
            _ => ("string", ""),
        }
    }

    fn push_accessor(&self, b: &mut CodeBuilder, prop: &Property) {
        let (ty, suffix) = Self::kind(&prop.ty);
        let key = quote(&format!("{}:{}", self.package, prop.name));
        let default = prop.default.as_ref().filter(|d| d.is_renderable());

        b.push_line_comment(&prop.doc);
        b.push_line(&format!(
            "func Get{}(ctx *pulumi.Context) {} {{",
            upper_first(&prop.name),
            ty
        ));
        b.push_indent();
        match default {
            Some(default) => {
                b.push_line(&format!("v, err := config.Try{}(ctx, {})", suffix, key));
                b.push_line("if err == nil {");
                b.push_indent().push_line("return v").push_dedent();
                b.push_line("}");
                if !default.env_vars.is_empty() {
                    let vars: Vec<String> = default.env_vars.iter().map(|v| quote(v)).collect();
                    b.push_line(&format!(
                        "if d, ok := {}({}); ok {{",
                        env_helper(&prop.ty),
                        vars.join(", ")
                    ));
                    b.push_indent().push_line("return d").push_dedent();
                    b.push_line("}");
                }
                match &default.literal {
                    Some(value) => b.push_line(&format!("return {}", literal(value))),
                    None => b.push_line("return v"),
                };
            }
            None => {
                let verb = if prop.optional { "Get" } else { "Require" };
                b.push_line(&format!("return config.{}{}(ctx, {})", verb, suffix, key));
            }
        }
        b.push_dedent().push_line("}");
    }
}

impl GeneratedFile for ConfigGo<'_> {
    fn path(&self) -> PathBuf {
        module_dir(CONFIG_MODULE).join("config.go")
    }

    fn rules(&self) -> FileRules {
        FileRules::with_header(CommentStyle::DoubleSlash)
    }

    fn render(&self) -> String {
        let mut b = CodeBuilder::go();
        for (index, prop) in self.variables.iter().enumerate() {
            if index > 0 {
                b.push_blank();
            }
            self.push_accessor(&mut b, prop);
        }
        format!(
            "{}\n{}",
            preamble(CONFIG_MODULE, &[PULUMI_SDK, CONFIG_SDK]),
            b.build()
        )
    }
}

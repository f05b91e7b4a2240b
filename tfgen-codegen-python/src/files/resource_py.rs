//! `pulumi_<pkg>/<module>/<snake>.py` for a resource.

use std::path::PathBuf;

use tfgen_codegen::{builder::CodeBuilder, language::TypeMapper};
use tfgen_core::GeneratedFile;
use tfgen_ir::{Property, Resource};

use super::{default_expr, module_dir, python_header, quote, root_import};
use crate::{PY_NAMING, type_mapper::PythonTypeMapper};

pub struct ResourcePy<'a> {
    package: &'a str,
    module: &'a str,
    resource: &'a Resource,
}

impl<'a> ResourcePy<'a> {
    pub fn new(package: &'a str, module: &'a str, resource: &'a Resource) -> Self {
        Self {
            package,
            module,
            resource,
        }
    }

    fn init_docstring(&self) -> String {
        let mapper = PythonTypeMapper;
        let mut lines = vec![
            ":param str resource_name: The name of the resource.".to_string(),
            ":param pulumi.ResourceOptions opts: Options for the resource.".to_string(),
        ];
        for prop in &self.resource.input_properties {
            lines.push(param_line(
                &format!("pulumi.Input[{}]", mapper.map_input_type(&prop.ty)),
                prop,
            ));
        }
        let params = lines.join("\n");
        if self.resource.doc.is_empty() {
            params
        } else {
            format!("{}\n\n{}", self.resource.doc.trim_end(), params)
        }
    }

    fn class(&self) -> String {
        let r = self.resource;
        let mapper = PythonTypeMapper;
        let base = if r.is_provider {
            "pulumi.ProviderResource"
        } else {
            "pulumi.CustomResource"
        };

        let mut b = CodeBuilder::python();
        b.push_line(&format!("class {}({}):", r.name, base));
        b.push_indent();

        for prop in &r.output_properties {
            let ty = mapper.map_type(&prop.ty);
            let ty = if prop.optional {
                format!("Optional[{}]", ty)
            } else {
                ty
            };
            b.push_line(&format!(
                "{}: pulumi.Output[{}]",
                PY_NAMING.field_name(&prop.name),
                ty
            ));
            b.push_reflowed_docstring(&prop.doc);
        }
        if !r.output_properties.is_empty() {
            b.push_blank();
        }

        let mut params = vec![
            "__self__".to_string(),
            "resource_name".to_string(),
            "opts=None".to_string(),
        ];
        params.extend(
            r.input_properties
                .iter()
                .map(|p| format!("{}=None", PY_NAMING.field_name(&p.name))),
        );
        params.push("__props__=None".to_string());
        b.push_line(&format!("def __init__({}):", params.join(", ")));
        b.push_indent();
        b.push_docstring(&self.init_docstring());
        b.push_line("if opts is None:")
            .push_indent()
            .push_line("opts = pulumi.ResourceOptions()")
            .push_dedent();
        b.push_line("if not isinstance(opts, pulumi.ResourceOptions):")
            .push_indent()
            .push_line("raise TypeError('Expected resource options to be a ResourceOptions instance')")
            .push_dedent();
        b.push_line("if opts.version is None:")
            .push_indent()
            .push_line("opts.version = utilities.get_version()")
            .push_dedent();
        if r.delete_before_replace {
            b.push_line(
                "opts = pulumi.ResourceOptions.merge(pulumi.ResourceOptions(delete_before_replace=True), opts)",
            );
        }
        b.push_line("if opts.id is None:").push_indent();
        b.push_line("if __props__ is not None:")
            .push_indent()
            .push_line("raise TypeError('__props__ is only valid when passed in combination with a valid opts.id to get an existing resource')")
            .push_dedent();
        b.push_line("__props__ = dict()");

        let has_props = !r.input_properties.is_empty() || r.output_only().next().is_some();
        if has_props {
            b.push_blank();
        }
        for prop in &r.input_properties {
            input_assignment(&mut b, prop);
        }
        for prop in r.output_only() {
            b.push_line(&format!(
                "__props__['{}'] = None",
                PY_NAMING.field_name(&prop.name)
            ));
        }
        b.push_dedent();

        b.push_line(&format!("super({}, __self__).__init__(", r.name));
        b.push_indent();
        let pulumi_type = if r.is_provider {
            r.token.name().to_string()
        } else {
            r.token.to_string()
        };
        b.push_line(&format!("'{}',", pulumi_type))
            .push_line("resource_name,")
            .push_line("__props__,")
            .push_line("opts)");
        b.push_dedent();
        b.push_dedent();

        if !r.is_provider {
            b.push_blank();
            b.push_line("@staticmethod");
            b.push_line("def get(resource_name, id, opts=None):");
            b.push_indent();
            b.push_docstring(&format!(
                "Get an existing {} resource's state with the given name, id, and optional extra\n\
                 properties used to qualify the lookup.\n\n\
                 :param str resource_name: The unique name of the resulting resource.\n\
                 :param str id: The unique provider ID of the resource to lookup.\n\
                 :param pulumi.ResourceOptions opts: Options for the resource.",
                r.name
            ));
            b.push_line("opts = pulumi.ResourceOptions.merge(opts, pulumi.ResourceOptions(id=id))");
            b.push_line(&format!("return {}(resource_name, opts=opts)", r.name));
            b.push_dedent();
        }

        b.push_blank();
        b.push_line("def translate_output_property(self, prop):")
            .push_indent()
            .push_line("return tables._CAMEL_TO_SNAKE_CASE_TABLE.get(prop) or prop")
            .push_dedent()
            .push_blank();
        b.push_line("def translate_input_property(self, prop):")
            .push_indent()
            .push_line("return tables._SNAKE_TO_CAMEL_CASE_TABLE.get(prop) or prop")
            .push_dedent();

        b.build()
    }
}

/// `:param <type> <name>: <doc>` with the doc collapsed onto one line.
pub(crate) fn param_line(ty: &str, prop: &Property) -> String {
    let doc = prop.doc.split_whitespace().collect::<Vec<_>>().join(" ");
    let line = format!(":param {} {}:", ty, PY_NAMING.field_name(&prop.name));
    if doc.is_empty() {
        line
    } else {
        format!("{} {}", line, doc)
    }
}

fn input_assignment(b: &mut CodeBuilder, prop: &Property) {
    let name = PY_NAMING.field_name(&prop.name);
    if let Some(message) = &prop.deprecation {
        b.push_line(&format!("if {} is not None:", name))
            .push_indent()
            .push_line(&format!("warnings.warn({}, DeprecationWarning)", quote(message)))
            .push_dedent();
    }
    if let Some(default) = default_expr(prop) {
        b.push_line(&format!("if {} is None:", name))
            .push_indent()
            .push_line(&format!("{} = {}", name, default))
            .push_dedent();
    }
    if prop.needs_required_check() {
        b.push_line(&format!("if {} is None:", name))
            .push_indent()
            .push_line(&format!("raise TypeError('Missing required property {}')", name))
            .push_dedent();
    }
    b.push_line(&format!("__props__['{}'] = {}", name, name));
}

/// The import block shared by resource, function and config files.
pub(crate) fn imports(module: &str) -> String {
    format!(
        "import warnings\n\
         import pulumi\n\
         import pulumi.runtime\n\
         from typing import Any, Mapping, Optional, Sequence\n\
         {}\n",
        root_import(module)
    )
}

impl GeneratedFile for ResourcePy<'_> {
    fn path(&self) -> PathBuf {
        module_dir(self.package, self.module).join(format!(
            "{}.py",
            PY_NAMING.file_name(&self.resource.file_stem)
        ))
    }

    fn render(&self) -> String {
        format!(
            "{}{}\n\n{}",
            python_header(),
            imports(self.module),
            self.class()
        )
    }
}

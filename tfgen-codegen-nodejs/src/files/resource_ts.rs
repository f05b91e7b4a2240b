//! `<module>/<stem>.ts` for a resource.

use std::path::PathBuf;

use tfgen_codegen::{builder::CodeBuilder, language::TypeMapper};
use tfgen_core::{CommentStyle, FileRules, GeneratedFile};
use tfgen_ir::{Property, Resource};

use super::{custom_type_imports, default_expr, module_dir, needs_utilities, utilities_import};
use crate::{
    ast::{Import, Interface, InterfaceField},
    code_file::{CodeFile, RawCode},
    type_mapper::TypeScriptTypeMapper,
};

/// A resource class plus its `<Name>Args` interface.
pub struct ResourceTs<'a> {
    module: &'a str,
    resource: &'a Resource,
}

impl<'a> ResourceTs<'a> {
    pub fn new(module: &'a str, resource: &'a Resource) -> Self {
        Self { module, resource }
    }

    fn class(&self) -> String {
        let r = self.resource;
        let mapper = TypeScriptTypeMapper;
        let base = if r.is_provider {
            "pulumi.ProviderResource"
        } else {
            "pulumi.CustomResource"
        };
        let pulumi_type = if r.is_provider {
            r.token.name().to_string()
        } else {
            r.token.to_string()
        };

        let mut b = CodeBuilder::typescript();
        b.push_jsdoc_lines(&r.doc);
        b.push_line(&format!("export class {} extends {} {{", r.name, base));
        b.push_indent();

        if !r.is_provider {
            b.push_jsdoc_lines(&format!(
                "Get an existing {} resource's state with the given name and ID.\n\n\
                 @param name The _unique_ name of the resulting resource.\n\
                 @param id The _unique_ provider ID of the resource to lookup.\n\
                 @param opts Optional settings to control the behavior of the CustomResource.",
                r.name
            ));
            b.push_line(&format!(
                "public static get(name: string, id: pulumi.Input<pulumi.ID>, opts?: pulumi.CustomResourceOptions): {} {{",
                r.name
            ));
            b.push_indent()
                .push_line(&format!(
                    "return new {}(name, undefined as any, {{ ...opts, id: id }});",
                    r.name
                ))
                .push_dedent()
                .push_line("}")
                .push_blank();
        }

        b.push_line("/** @internal */");
        b.push_line(&format!(
            "public static readonly __pulumiType = \"{}\";",
            pulumi_type
        ));
        b.push_blank();
        b.push_jsdoc(&format!(
            "Returns true if the given object is an instance of {}. This is designed to work even \
             when multiple copies of the Pulumi SDK have been loaded into the same process.",
            r.name
        ));
        b.push_line(&format!(
            "public static isInstance(obj: any): obj is {} {{",
            r.name
        ));
        b.push_indent()
            .push_line("if (obj === undefined || obj === null) {")
            .push_indent()
            .push_line("return false;")
            .push_dedent()
            .push_line("}")
            .push_line(&format!(
                "return obj[\"__pulumiType\"] === {}.__pulumiType;",
                r.name
            ))
            .push_dedent()
            .push_line("}");

        for prop in &r.output_properties {
            b.push_blank();
            b.push_jsdoc(&prop.doc);
            let ty = mapper.map_type(&prop.ty);
            let ty = if prop.optional {
                format!("{} | undefined", ty)
            } else {
                ty
            };
            b.push_line(&format!(
                "public readonly {}!: pulumi.Output<{}>;",
                prop.name, ty
            ));
        }

        b.push_blank();
        b.push_jsdoc_lines(&format!(
            "Create a {} resource with the given unique name, arguments, and options.\n\n\
             @param name The _unique_ name of the resource.\n\
             @param args The arguments to use to populate this resource's properties.\n\
             @param opts A bag of options that control this resource's behavior.",
            r.name
        ));
        let args_param = if r.has_required_inputs() { "args" } else { "args?" };
        let opts_type = if r.is_provider {
            "pulumi.ResourceOptions"
        } else {
            "pulumi.CustomResourceOptions"
        };
        b.push_line(&format!(
            "constructor(name: string, {}: {}, opts?: {}) {{",
            args_param,
            r.args_type_name(),
            opts_type
        ));
        b.push_indent();
        b.push_line("const inputs: pulumi.Inputs = {};");
        self.required_checks(&mut b);
        for prop in &r.input_properties {
            b.push_line(&input_assignment(prop));
        }
        for prop in r.output_only() {
            b.push_line(&format!("inputs[\"{}\"] = undefined /*out*/;", prop.name));
        }
        if r.delete_before_replace {
            b.push_line("opts = { deleteBeforeReplace: true, ...opts };");
        }
        b.push_line(&format!(
            "super({}.__pulumiType, name, inputs, opts);",
            r.name
        ));
        b.push_dedent().push_line("}");

        b.push_dedent().push_line("}");
        b.build()
    }

    fn required_checks(&self, b: &mut CodeBuilder) {
        let required: Vec<&Property> = self
            .resource
            .input_properties
            .iter()
            .filter(|p| p.needs_required_check())
            .collect();
        if required.is_empty() {
            return;
        }
        b.push_line("if (!opts?.id) {").push_indent();
        for prop in required {
            b.push_line(&format!("if (args?.{} === undefined) {{", prop.name))
                .push_indent()
                .push_line(&format!(
                    "throw new Error(\"Missing required property '{}'\");",
                    prop.name
                ))
                .push_dedent()
                .push_line("}");
        }
        b.push_dedent().push_line("}");
    }

    fn args_interface(&self) -> Interface {
        let mapper = TypeScriptTypeMapper;
        let r = self.resource;
        Interface::new(r.args_type_name())
            .doc(format!(
                "The set of arguments for constructing a {} resource.",
                r.name
            ))
            .fields(r.input_properties.iter().map(|prop| {
                InterfaceField::new(
                    &prop.name,
                    format!("pulumi.Input<{}>", mapper.map_input_type(&prop.ty)),
                )
                .optional(prop.optional)
                .doc(&prop.doc)
            }))
    }
}

fn input_assignment(prop: &Property) -> String {
    match default_expr(prop) {
        Some(default) => format!(
            "inputs[\"{}\"] = args?.{} ?? {};",
            prop.name, prop.name, default
        ),
        None => format!("inputs[\"{}\"] = args?.{};", prop.name, prop.name),
    }
}

impl GeneratedFile for ResourceTs<'_> {
    fn path(&self) -> PathBuf {
        module_dir(self.module).join(format!("{}.ts", self.resource.file_stem))
    }

    fn rules(&self) -> FileRules {
        FileRules::with_header(CommentStyle::DoubleSlash)
    }

    fn render(&self) -> String {
        let r = self.resource;
        let props = r.input_properties.iter().chain(&r.output_properties);
        CodeFile::new()
            .import(Import::pulumi())
            .imports(
                needs_utilities(&r.input_properties).then(|| utilities_import(self.module)),
            )
            .imports(custom_type_imports(self.module, &r.file_stem, props))
            .add(RawCode::new(self.class()))
            .add(self.args_interface())
            .render()
    }
}

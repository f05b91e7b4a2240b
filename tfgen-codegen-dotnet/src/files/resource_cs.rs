//! `<Module>/<Name>.cs` for a resource.

use std::{collections::BTreeSet, path::PathBuf};

use tfgen_codegen::{builder::CodeBuilder, language::TypeMapper};
use tfgen_core::{CommentStyle, FileRules, GeneratedFile};
use tfgen_ir::Resource;

use super::{
    classes::{ArgsKind, push_args_class, push_object_classes},
    in_namespace, module_dir, namespace, quote,
};
use crate::{
    naming::property_name,
    type_mapper::{CSharpTypeMapper, nullable},
};

pub struct ResourceCs<'a> {
    package: &'a str,
    module: &'a str,
    resource: &'a Resource,
}

impl<'a> ResourceCs<'a> {
    pub fn new(package: &'a str, module: &'a str, resource: &'a Resource) -> Self {
        Self {
            package,
            module,
            resource,
        }
    }

    fn options_type(&self) -> &'static str {
        if self.resource.is_provider {
            "ResourceOptions"
        } else {
            "CustomResourceOptions"
        }
    }

    fn pulumi_type(&self) -> String {
        let r = self.resource;
        if r.is_provider {
            r.token.name().to_string()
        } else {
            r.token.to_string()
        }
    }

    fn push_class(&self, b: &mut CodeBuilder) {
        let r = self.resource;
        let mapper = CSharpTypeMapper;
        let base = if r.is_provider {
            "Pulumi.ProviderResource"
        } else {
            "Pulumi.CustomResource"
        };

        b.push_xml_doc(&r.doc);
        b.push_line(&format!("public partial class {} : {}", r.name, base));
        b.push_line("{").push_indent();

        for prop in &r.output_properties {
            let ty = mapper.map_type(&prop.ty);
            let ty = if prop.optional {
                nullable(&prop.ty, ty)
            } else {
                ty
            };
            b.push_reflowed_xml_doc(&prop.doc);
            b.push_line(&format!("[Output({})]", quote(&prop.name)));
            b.push_line(&format!(
                "public Output<{}> {} {{ get; private set; }} = null!;",
                ty,
                property_name(&prop.name, &r.name)
            ));
            b.push_blank();
        }

        self.push_constructors(b);
        self.push_helpers(b);

        if !r.is_provider {
            b.push_blank();
            b.push_line("/// <summary>");
            b.push_line(&format!(
                "/// Get an existing {} resource's state with the given name and ID.",
                r.name
            ));
            b.push_line("/// </summary>");
            b.push_line("///");
            b.push_line("/// <param name=\"name\">The unique name of the resulting resource.</param>");
            b.push_line("/// <param name=\"id\">The unique provider ID of the resource to lookup.</param>");
            b.push_line("/// <param name=\"options\">A bag of options that control this resource's behavior</param>");
            b.push_line(&format!(
                "public static {} Get(string name, Input<string> id, CustomResourceOptions? options = null)",
                r.name
            ));
            b.push_line("{")
                .push_indent()
                .push_line(&format!("return new {}(name, id, options);", r.name))
                .push_dedent()
                .push_line("}");
        }

        b.push_dedent().push_line("}");
    }

    fn push_constructors(&self, b: &mut CodeBuilder) {
        let r = self.resource;
        let args_type = r.args_type_name();
        let opts = self.options_type();

        b.push_line("/// <summary>");
        b.push_line(&format!(
            "/// Create a {} resource with the given unique name, arguments, and options.",
            r.name
        ));
        b.push_line("/// </summary>");
        b.push_line("///");
        b.push_line("/// <param name=\"name\">The unique name of the resource</param>");
        b.push_line("/// <param name=\"args\">The arguments used to populate this resource's properties</param>");
        b.push_line("/// <param name=\"options\">A bag of options that control this resource's behavior</param>");

        let (args_param, args_expr) = if r.has_required_inputs() {
            (format!("{} args", args_type), "CheckArgs(args)".to_string())
        } else {
            (
                format!("{}? args = null", args_type),
                format!("args ?? new {}()", args_type),
            )
        };
        let options_expr = if r.is_provider {
            "MakeResourceOptions(options)"
        } else {
            "MakeResourceOptions(options, \"\")"
        };
        b.push_line(&format!(
            "public {}(string name, {}, {}? options = null)",
            r.name, args_param, opts
        ));
        b.push_indent()
            .push_line(&format!(
                ": base({}, name, {}, {})",
                quote(&self.pulumi_type()),
                args_expr,
                options_expr
            ))
            .push_dedent();
        b.push_line("{").push_line("}");

        if !r.is_provider {
            b.push_blank();
            b.push_line(&format!(
                "private {}(string name, Input<string> id, CustomResourceOptions? options = null)",
                r.name
            ));
            b.push_indent()
                .push_line(&format!(
                    ": base({}, name, null, MakeResourceOptions(options, id))",
                    quote(&self.pulumi_type())
                ))
                .push_dedent();
            b.push_line("{").push_line("}");
        }
    }

    fn push_helpers(&self, b: &mut CodeBuilder) {
        let r = self.resource;
        let args_type = r.args_type_name();

        if r.has_required_inputs() {
            b.push_blank();
            b.push_line(&format!("private static {} CheckArgs({} args)", args_type, args_type));
            b.push_line("{").push_indent();
            b.push_line("if (args == null)")
                .push_line("{")
                .push_indent()
                .push_line("throw new ArgumentNullException(nameof(args));")
                .push_dedent()
                .push_line("}");
            for prop in r.input_properties.iter().filter(|p| p.needs_required_check()) {
                b.push_line(&format!(
                    "if (args.{} == null)",
                    property_name(&prop.name, &args_type)
                ))
                .push_line("{")
                .push_indent()
                .push_line(&format!(
                    "throw new ArgumentNullException({}, \"Missing required property '{}'\");",
                    quote(&prop.name),
                    prop.name
                ))
                .push_dedent()
                .push_line("}");
            }
            b.push_line("return args;");
            b.push_dedent().push_line("}");
        }

        let opts = self.options_type();
        b.push_blank();
        if r.is_provider {
            b.push_line(&format!(
                "private static {} MakeResourceOptions({}? options)",
                opts, opts
            ));
        } else {
            b.push_line(&format!(
                "private static {} MakeResourceOptions({}? options, Input<string>? id)",
                opts, opts
            ));
        }
        b.push_line("{").push_indent();
        b.push_line(&format!("var defaultOptions = new {}", opts));
        b.push_line("{").push_indent();
        b.push_line("Version = Utilities.Version,");
        if r.delete_before_replace {
            b.push_line("DeleteBeforeReplace = true,");
        }
        b.push_dedent().push_line("};");
        if r.is_provider {
            b.push_line(&format!("return {}.Merge(defaultOptions, options);", opts));
        } else {
            b.push_line(&format!("var merged = {}.Merge(defaultOptions, options);", opts));
            b.push_line("merged.Id = id ?? merged.Id;");
            b.push_line("return merged;");
        }
        b.push_dedent().push_line("}");
    }
}

impl GeneratedFile for ResourceCs<'_> {
    fn path(&self) -> PathBuf {
        module_dir(self.module).join(format!("{}.cs", self.resource.name))
    }

    fn rules(&self) -> FileRules {
        FileRules::with_header(CommentStyle::DoubleSlash)
    }

    fn render(&self) -> String {
        let r = self.resource;
        let mut b = CodeBuilder::csharp();
        b.push_indent();
        self.push_class(&mut b);
        b.push_blank();
        push_args_class(
            &mut b,
            &r.args_type_name(),
            &format!("The set of arguments for constructing a {} resource.", r.name),
            ArgsKind::Resource,
            &r.input_properties,
        );
        let mut seen = BTreeSet::new();
        push_object_classes(&mut b, &r.input_properties, ArgsKind::Resource, &mut seen);
        push_object_classes(&mut b, &r.output_properties, ArgsKind::Resource, &mut seen);
        in_namespace(&namespace(self.package, self.module), &b.build())
    }
}

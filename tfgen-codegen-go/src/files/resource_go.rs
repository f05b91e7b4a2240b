//! `<module>/<name>.go` for a resource.

use std::path::PathBuf;

use tfgen_codegen::builder::CodeBuilder;
use tfgen_core::{CommentStyle, FileRules, GeneratedFile, lower_first};
use tfgen_ir::Resource;

use super::{PULUMI_SDK, go_package, module_dir, preamble, push_default, push_doc, quote};
use crate::{naming::GO_NAMING, type_mapper::GoTypeMapper};

pub struct ResourceGo<'a> {
    package: &'a str,
    module: &'a str,
    resource: &'a Resource,
}

impl<'a> ResourceGo<'a> {
    pub fn new(package: &'a str, module: &'a str, resource: &'a Resource) -> Self {
        Self {
            package,
            module,
            resource,
        }
    }

    fn push_struct(&self, b: &mut CodeBuilder) {
        let r = self.resource;
        let mapper = GoTypeMapper;
        let state = if r.is_provider {
            "pulumi.ProviderResourceState"
        } else {
            "pulumi.CustomResourceState"
        };

        push_doc(b, &r.doc);
        b.push_line(&format!("type {} struct {{", r.name)).push_indent();
        b.push_line(state);
        if !r.output_properties.is_empty() {
            b.push_blank();
        }
        for prop in &r.output_properties {
            b.push_line_comment(&prop.doc);
            b.push_line(&format!(
                "{} {} `pulumi:{}`",
                GO_NAMING.field_name(&prop.name),
                mapper.output_field(prop),
                quote(&prop.name)
            ));
        }
        b.push_dedent().push_line("}");
    }

    fn push_constructor(&self, b: &mut CodeBuilder) {
        let r = self.resource;
        let args = r.args_type_name();

        b.push_line(&format!(
            "// New{} registers a new resource with the given unique name, arguments, and options.",
            r.name
        ));
        b.push_line(&format!("func New{}(ctx *pulumi.Context,", r.name));
        b.push_indent()
            .push_line(&format!(
                "name string, args *{}, opts ...pulumi.ResourceOption) (*{}, error) {{",
                args, r.name
            ))
            .push_dedent();
        b.push_indent();

        b.push_line("if args == nil {").push_indent();
        if r.has_required_inputs() {
            b.push_line("return nil, errors.New(\"missing one or more required arguments\")");
        } else {
            b.push_line(&format!("args = &{}{{}}", args));
        }
        b.push_dedent().push_line("}");

        let required: Vec<_> = r
            .input_properties
            .iter()
            .filter(|p| p.needs_required_check())
            .collect();
        if !required.is_empty() {
            b.push_blank();
        }
        for prop in required {
            let field = GO_NAMING.field_name(&prop.name);
            b.push_line(&format!("if args.{} == nil {{", field)).push_indent();
            b.push_line(&format!(
                "return nil, errors.New(\"invalid value for required argument '{}'\")",
                field
            ));
            b.push_dedent().push_line("}");
        }
        for prop in &r.input_properties {
            push_default(b, &format!("args.{}", GO_NAMING.field_name(&prop.name)), prop);
        }

        if r.delete_before_replace {
            b.push_line("opts = append(opts, pulumi.DeleteBeforeReplace(true))");
        }
        b.push_line("opts = pkgResourceDefaultOpts(opts)");
        b.push_line(&format!("var resource {}", r.name));
        b.push_line(&format!(
            "err := ctx.RegisterResource({}, name, args, &resource, opts...)",
            quote(&r.token.to_string())
        ));
        push_error_return(b);
        b.push_line("return &resource, nil");
        b.push_dedent().push_line("}");
    }

    fn push_getter(&self, b: &mut CodeBuilder) {
        let r = self.resource;
        b.push_line(&format!(
            "// Get{0} gets an existing {0} resource's state with the given name and ID.",
            r.name
        ));
        b.push_line(&format!("func Get{}(ctx *pulumi.Context,", r.name));
        b.push_indent()
            .push_line(&format!(
                "name string, id pulumi.IDInput, opts ...pulumi.ResourceOption) (*{}, error) {{",
                r.name
            ))
            .push_dedent();
        b.push_indent();
        b.push_line(&format!("var resource {}", r.name));
        b.push_line(&format!(
            "err := ctx.ReadResource({}, name, id, nil, &resource, pkgResourceDefaultOpts(opts)...)",
            quote(&r.token.to_string())
        ));
        push_error_return(b);
        b.push_line("return &resource, nil");
        b.push_dedent().push_line("}");
    }

    fn push_args(&self, b: &mut CodeBuilder) {
        let r = self.resource;
        let mapper = GoTypeMapper;
        let args = r.args_type_name();
        let plain = lower_first(&args);

        b.push_line(&format!("type {} struct {{", plain)).push_indent();
        for prop in &r.input_properties {
            b.push_line_comment(&prop.doc);
            b.push_line(&format!(
                "{} {} `pulumi:{}`",
                GO_NAMING.field_name(&prop.name),
                mapper.plain_field(prop),
                quote(&prop.name)
            ));
        }
        b.push_dedent().push_line("}");
        b.push_blank();

        b.push_line(&format!(
            "// The set of arguments for constructing a {} resource.",
            r.name
        ));
        b.push_line(&format!("type {} struct {{", args)).push_indent();
        for prop in &r.input_properties {
            b.push_line_comment(&prop.doc);
            b.push_line(&format!(
                "{} {}",
                GO_NAMING.field_name(&prop.name),
                mapper.input_field(prop)
            ));
        }
        b.push_dedent().push_line("}");
        b.push_blank();

        b.push_line(&format!("func ({}) ElementType() reflect.Type {{", args));
        b.push_indent()
            .push_line(&format!("return reflect.TypeOf((*{})(nil)).Elem()", plain))
            .push_dedent();
        b.push_line("}");
    }
}

pub(crate) fn push_error_return(b: &mut CodeBuilder) {
    b.push_line("if err != nil {");
    b.push_indent().push_line("return nil, err").push_dedent();
    b.push_line("}");
}

impl GeneratedFile for ResourceGo<'_> {
    fn path(&self) -> PathBuf {
        module_dir(self.module).join(format!(
            "{}.go",
            GO_NAMING.file_name(&self.resource.file_stem)
        ))
    }

    fn rules(&self) -> FileRules {
        FileRules::with_header(CommentStyle::DoubleSlash)
    }

    fn render(&self) -> String {
        let mut imports = vec!["reflect", PULUMI_SDK];
        if self.resource.has_required_inputs() {
            imports.push("errors");
        }

        let mut b = CodeBuilder::go();
        self.push_struct(&mut b);
        b.push_blank();
        self.push_constructor(&mut b);
        if !self.resource.is_provider {
            b.push_blank();
            self.push_getter(&mut b);
        }
        b.push_blank();
        self.push_args(&mut b);

        format!(
            "{}\n{}",
            preamble(&go_package(self.package, self.module), &imports),
            b.build()
        )
    }
}

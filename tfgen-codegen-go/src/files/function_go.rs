//! `<module>/<name>.go` for a data source.

use std::path::PathBuf;

use tfgen_codegen::builder::CodeBuilder;
use tfgen_core::{CommentStyle, FileRules, GeneratedFile};
use tfgen_ir::{Function, Property};

use super::{
    PULUMI_SDK, go_package, module_dir, preamble, push_doc, quote, resource_go::push_error_return,
};
use crate::{naming::GO_NAMING, type_mapper::GoTypeMapper};

pub struct FunctionGo<'a> {
    package: &'a str,
    module: &'a str,
    function: &'a Function,
    /// Exported name of the invoke function; args and result types share it.
    name: String,
}

impl<'a> FunctionGo<'a> {
    pub fn new(package: &'a str, module: &'a str, function: &'a Function, name: String) -> Self {
        Self {
            package,
            module,
            function,
            name,
        }
    }

    fn args_type_name(&self) -> String {
        format!("{}Args", self.name)
    }

    fn result_type_name(&self) -> String {
        format!("{}Result", self.name)
    }

    fn push_invoke(&self, b: &mut CodeBuilder) {
        let f = self.function;
        let result = self.result_type_name();

        push_doc(b, &f.doc);
        b.push_line(&format!(
            "func {}(ctx *pulumi.Context, args *{}, opts ...pulumi.InvokeOption) (*{}, error) {{",
            self.name,
            self.args_type_name(),
            result
        ));
        b.push_indent();
        if f.has_required_args() {
            b.push_line("if args == nil {").push_indent();
            b.push_line("return nil, errors.New(\"missing one or more required arguments\")");
            b.push_dedent().push_line("}");
        }
        b.push_line(&format!("var rv {}", result));
        b.push_line(&format!(
            "err := ctx.Invoke({}, args, &rv, pkgInvokeDefaultOpts(opts)...)",
            quote(&f.token.to_string())
        ));
        push_error_return(b);
        b.push_line("return &rv, nil");
        b.push_dedent().push_line("}");
    }

    fn push_plain_struct(b: &mut CodeBuilder, doc: &str, name: &str, props: &[Property]) {
        let mapper = GoTypeMapper;
        b.push_line(&format!("// {}", doc));
        b.push_line(&format!("type {} struct {{", name)).push_indent();
        for prop in props {
            b.push_line_comment(&prop.doc);
            b.push_line(&format!(
                "{} {} `pulumi:{}`",
                GO_NAMING.field_name(&prop.name),
                mapper.plain_field(prop),
                quote(&prop.name)
            ));
        }
        b.push_dedent().push_line("}");
    }
}

impl GeneratedFile for FunctionGo<'_> {
    fn path(&self) -> PathBuf {
        module_dir(self.module).join(format!(
            "{}.go",
            GO_NAMING.file_name(&self.function.file_stem)
        ))
    }

    fn rules(&self) -> FileRules {
        FileRules::with_header(CommentStyle::DoubleSlash)
    }

    fn render(&self) -> String {
        let f = self.function;
        let mut imports = vec![PULUMI_SDK];
        if f.has_required_args() {
            imports.push("errors");
        }

        let mut b = CodeBuilder::go();
        self.push_invoke(&mut b);
        b.push_blank();
        Self::push_plain_struct(
            &mut b,
            &format!("A collection of arguments for invoking {}.", f.name),
            &self.args_type_name(),
            &f.args,
        );
        b.push_blank();
        Self::push_plain_struct(
            &mut b,
            &format!("A collection of values returned by {}.", f.name),
            &self.result_type_name(),
            &f.results,
        );

        format!(
            "{}\n{}",
            preamble(&go_package(self.package, self.module), &imports),
            b.build()
        )
    }
}

//! `<Module>/<Name>.cs` for a data source.

use std::{collections::BTreeSet, path::PathBuf};

use tfgen_codegen::builder::CodeBuilder;
use tfgen_core::{CommentStyle, FileRules, GeneratedFile, upper_first};
use tfgen_ir::Function;

use super::{
    classes::{ArgsKind, push_args_class, push_object_classes, push_output_class},
    in_namespace, module_dir, namespace, quote,
};
use crate::naming::property_name;

/// A static class with an `InvokeAsync` method plus its argument and result types.
pub struct FunctionCs<'a> {
    package: &'a str,
    module: &'a str,
    function: &'a Function,
}

impl<'a> FunctionCs<'a> {
    pub fn new(package: &'a str, module: &'a str, function: &'a Function) -> Self {
        Self {
            package,
            module,
            function,
        }
    }

    fn class_name(&self) -> String {
        upper_first(&self.function.name)
    }

    fn push_invoke(&self, b: &mut CodeBuilder) {
        let f = self.function;
        let args_type = f.args_type_name();
        let result_type = f.result_type_name();

        b.push_line(&format!("public static class {}", self.class_name()));
        b.push_line("{").push_indent();
        b.push_xml_doc(&f.doc);
        let args_param = if f.has_required_args() {
            format!("{} args", args_type)
        } else {
            format!("{}? args = null", args_type)
        };
        b.push_line(&format!(
            "public static Task<{}> InvokeAsync({}, InvokeOptions? options = null)",
            result_type, args_param
        ));
        b.push_line("{").push_indent();
        if f.has_required_args() {
            b.push_line("if (args == null)")
                .push_line("{")
                .push_indent()
                .push_line("throw new ArgumentNullException(nameof(args));")
                .push_dedent()
                .push_line("}");
            for prop in f.args.iter().filter(|p| p.needs_required_check()) {
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
        }
        let args_expr = if f.has_required_args() {
            "args".to_string()
        } else {
            format!("args ?? new {}()", args_type)
        };
        b.push_line(&format!(
            "return Pulumi.Deployment.Instance.InvokeAsync<{}>({}, {}, options.WithVersion());",
            result_type,
            quote(&f.token.to_string()),
            args_expr
        ));
        b.push_dedent().push_line("}");
        b.push_dedent().push_line("}");
    }
}

impl GeneratedFile for FunctionCs<'_> {
    fn path(&self) -> PathBuf {
        module_dir(self.module).join(format!("{}.cs", self.class_name()))
    }

    fn rules(&self) -> FileRules {
        FileRules::with_header(CommentStyle::DoubleSlash)
    }

    fn render(&self) -> String {
        let f = self.function;
        let mut b = CodeBuilder::csharp();
        b.push_indent();
        self.push_invoke(&mut b);
        b.push_blank();
        push_args_class(
            &mut b,
            &f.args_type_name(),
            &format!("A collection of arguments for invoking {}.", f.name),
            ArgsKind::Invoke,
            &f.args,
        );
        b.push_blank();
        push_output_class(
            &mut b,
            &f.result_type_name(),
            &format!("A collection of values returned by {}.", f.name),
            &f.results,
        );
        let mut seen = BTreeSet::new();
        push_object_classes(&mut b, &f.args, ArgsKind::Invoke, &mut seen);
        push_object_classes(&mut b, &f.results, ArgsKind::Invoke, &mut seen);
        in_namespace(&namespace(self.package, self.module), &b.build())
    }
}

//! `<module>/<stem>.ts` for a data source.

use std::path::PathBuf;

use tfgen_codegen::{builder::CodeBuilder, language::TypeMapper};
use tfgen_core::{CommentStyle, FileRules, GeneratedFile};
use tfgen_ir::{Function, Property};

use super::{custom_type_imports, module_dir};
use crate::{
    ast::{Import, Interface, InterfaceField},
    code_file::{CodeFile, RawCode},
    type_mapper::TypeScriptTypeMapper,
};

/// An `async function` invoking the data source, with its args and result types.
pub struct FunctionTs<'a> {
    module: &'a str,
    function: &'a Function,
}

impl<'a> FunctionTs<'a> {
    pub fn new(module: &'a str, function: &'a Function) -> Self {
        Self { module, function }
    }

    fn body(&self) -> String {
        let f = self.function;
        let mut params = Vec::new();
        if !f.args.is_empty() {
            let name = if f.has_required_args() { "args" } else { "args?" };
            params.push(format!("{}: {}", name, f.args_type_name()));
        }
        params.push("opts?: pulumi.InvokeOptions".to_string());

        let mut b = CodeBuilder::typescript();
        b.push_jsdoc_lines(&f.doc);
        b.push_line(&format!(
            "export async function {}({}): Promise<{}> {{",
            f.name,
            params.join(", "),
            f.result_type_name()
        ));
        b.push_indent();
        if f.args.is_empty() {
            b.push_line(&format!(
                "return pulumi.runtime.invoke(\"{}\", {{}}, opts);",
                f.token
            ));
        } else {
            if !f.has_required_args() {
                b.push_line("args = args || {};");
            }
            b.push_line(&format!("return pulumi.runtime.invoke(\"{}\", {{", f.token));
            b.push_indent();
            for arg in &f.args {
                b.push_line(&format!("\"{}\": args.{},", arg.name, arg.name));
            }
            b.push_dedent().push_line("}, opts);");
        }
        b.push_dedent().push_line("}");
        b.build()
    }

    fn interface(name: String, doc: String, props: &[Property]) -> Interface {
        let mapper = TypeScriptTypeMapper;
        Interface::new(name).doc(doc).fields(props.iter().map(|prop| {
            InterfaceField::new(&prop.name, mapper.map_type(&prop.ty))
                .optional(prop.optional)
                .doc(&prop.doc)
        }))
    }
}

impl GeneratedFile for FunctionTs<'_> {
    fn path(&self) -> PathBuf {
        module_dir(self.module).join(format!("{}.ts", self.function.file_stem))
    }

    fn rules(&self) -> FileRules {
        FileRules::with_header(CommentStyle::DoubleSlash)
    }

    fn render(&self) -> String {
        let f = self.function;
        let args = (!f.args.is_empty()).then(|| {
            Self::interface(
                f.args_type_name(),
                format!("A collection of arguments for invoking {}.", f.name),
                &f.args,
            )
        });
        CodeFile::new()
            .import(Import::pulumi())
            .imports(custom_type_imports(
                self.module,
                &f.file_stem,
                f.args.iter().chain(&f.results),
            ))
            .add(RawCode::new(self.body()))
            .add_all(args)
            .add(Self::interface(
                f.result_type_name(),
                format!("A collection of values returned by {}.", f.name),
                &f.results,
            ))
            .render()
    }
}

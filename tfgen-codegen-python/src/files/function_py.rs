//! `pulumi_<pkg>/<module>/<snake>.py` for a data source.

use std::path::PathBuf;

use tfgen_codegen::{builder::CodeBuilder, language::TypeMapper};
use tfgen_core::GeneratedFile;
use tfgen_ir::Function;

use super::{module_dir, python_header, resource_py::{imports, param_line}};
use crate::{
    PY_NAMING,
    type_mapper::{PythonTypeMapper, runtime_class},
};

/// A result class plus the `async def` that invokes the data source.
pub struct FunctionPy<'a> {
    package: &'a str,
    module: &'a str,
    function: &'a Function,
}

impl<'a> FunctionPy<'a> {
    pub fn new(package: &'a str, module: &'a str, function: &'a Function) -> Self {
        Self {
            package,
            module,
            function,
        }
    }

    fn result_class(&self) -> String {
        let f = self.function;
        let mut b = CodeBuilder::python();
        b.push_line(&format!("class {}:", f.result_type_name()));
        b.push_indent();
        b.push_docstring(&format!("A collection of values returned by {}.", f.name));

        let params: Vec<String> = std::iter::once("__self__".to_string())
            .chain(
                f.results
                    .iter()
                    .map(|p| format!("{}=None", PY_NAMING.field_name(&p.name))),
            )
            .collect();
        b.push_line(&format!("def __init__({}):", params.join(", ")));
        b.push_indent();
        if f.results.is_empty() {
            b.push_line("pass");
        }
        for prop in &f.results {
            let name = PY_NAMING.field_name(&prop.name);
            if let Some(class) = runtime_class(&prop.ty) {
                b.push_line(&format!(
                    "if {} and not isinstance({}, {}):",
                    name, name, class
                ))
                .push_indent()
                .push_line(&format!(
                    "raise TypeError(\"Expected argument '{}' to be a {}\")",
                    name, class
                ))
                .push_dedent();
            }
            b.push_line(&format!("__self__.{} = {}", name, name));
            b.push_reflowed_docstring(&prop.doc);
        }
        b.push_dedent();
        b.push_dedent();
        b.build()
    }

    fn invoke(&self) -> String {
        let f = self.function;
        let mapper = PythonTypeMapper;

        let mut params: Vec<String> = f
            .args
            .iter()
            .map(|p| format!("{}=None", PY_NAMING.field_name(&p.name)))
            .collect();
        params.push("opts=None".to_string());

        let mut doc_lines: Vec<String> = f
            .args
            .iter()
            .map(|p| param_line(&mapper.map_input_type(&p.ty), p))
            .collect();
        if !f.doc.is_empty() {
            doc_lines.insert(0, format!("{}\n", f.doc.trim_end()));
        }

        let mut b = CodeBuilder::python();
        b.push_line(&format!(
            "async def {}({}) -> {}:",
            PY_NAMING.field_name(&f.name),
            params.join(", "),
            f.result_type_name()
        ));
        b.push_indent();
        b.push_docstring(&doc_lines.join("\n"));
        b.push_line("__args__ = dict()");
        if !f.args.is_empty() {
            b.push_blank();
        }
        for prop in &f.args {
            let name = PY_NAMING.field_name(&prop.name);
            if prop.needs_required_check() {
                b.push_line(&format!("if {} is None:", name))
                    .push_indent()
                    .push_line(&format!("raise TypeError('Missing required property {}')", name))
                    .push_dedent();
            }
            b.push_line(&format!("__args__['{}'] = {}", prop.name, name));
        }
        b.push_line("if opts is None:")
            .push_indent()
            .push_line("opts = pulumi.InvokeOptions()")
            .push_dedent();
        b.push_line("if opts.version is None:")
            .push_indent()
            .push_line("opts.version = utilities.get_version()")
            .push_dedent();
        b.push_line(&format!(
            "__ret__ = pulumi.runtime.invoke('{}', __args__, opts=opts).value",
            f.token
        ));
        b.push_blank();

        if f.results.is_empty() {
            b.push_line(&format!("return {}()", f.result_type_name()));
        } else {
            b.push_line(&format!("return {}(", f.result_type_name()));
            b.push_indent();
            let last = f.results.len() - 1;
            for (i, prop) in f.results.iter().enumerate() {
                let close = if i == last { ")" } else { "," };
                b.push_line(&format!(
                    "{}=__ret__.get('{}'){}",
                    PY_NAMING.field_name(&prop.name),
                    prop.name,
                    close
                ));
            }
            b.push_dedent();
        }
        b.build()
    }
}

impl GeneratedFile for FunctionPy<'_> {
    fn path(&self) -> PathBuf {
        module_dir(self.package, self.module).join(format!(
            "{}.py",
            PY_NAMING.file_name(&self.function.file_stem)
        ))
    }

    fn render(&self) -> String {
        format!(
            "{}{}\n\n{}\n\n{}",
            python_header(),
            imports(self.module),
            self.result_class(),
            self.invoke()
        )
    }
}

#[cfg(test)]
mod tests {
    use tfgen_ir::{Position, Property, Token, TypeRef};

    use super::*;

    fn function(args: Vec<Property>, results: Vec<Property>) -> Function {
        Function {
            token: Token::new("example", "index", "getThing"),
            name: "getThing".into(),
            raw_name: "example_thing".into(),
            file_stem: "getThing".into(),
            doc: String::new(),
            args,
            results,
        }
    }

    #[test]
    fn test_empty_result_class_passes() {
        let f = function(vec![], vec![]);
        let file = FunctionPy::new("example", "index", &f);
        assert_eq!(file.path(), PathBuf::from("pulumi_example/get_thing.py"));
        let out = file.render();
        assert!(out.contains("class GetThingResult:\n"));
        assert!(out.contains("    def __init__(__self__):\n        pass\n"));
        assert!(out.contains("async def get_thing(opts=None) -> GetThingResult:\n"));
        assert!(out.contains("    return GetThingResult()\n"));
    }

    #[test]
    fn test_required_arg_check() {
        let f = function(
            vec![Property::new("name", "name", TypeRef::String, Position::Input)],
            vec![Property::new("count", "count", TypeRef::Int, Position::Output)],
        );
        let out = FunctionPy::new("example", "index", &f).render();
        assert!(out.contains(
            "    if name is None:\n        raise TypeError('Missing required property name')\n    __args__['name'] = name\n"
        ));
        assert!(out.contains(
            "        if count and not isinstance(count, int):\n            raise TypeError(\"Expected argument 'count' to be a int\")\n"
        ));
        assert!(out.contains("        count=__ret__.get('count'))\n"));
    }
}

//! `config/vars.py`: module-level provider configuration values.

use std::path::PathBuf;

use tfgen_codegen::builder::CodeBuilder;
use tfgen_core::GeneratedFile;
use tfgen_ir::{CONFIG_MODULE, Property, TypeRef};

use super::{default_expr, module_dir, python_header, resource_py::imports};
use crate::PY_NAMING;

pub struct ConfigVarsPy<'a> {
    package: &'a str,
    variables: Vec<&'a Property>,
}

impl<'a> ConfigVarsPy<'a> {
    pub fn new(package: &'a str, variables: impl IntoIterator<Item = &'a Property>) -> Self {
        Self {
            package,
            variables: variables.into_iter().collect(),
        }
    }

    fn getter(prop: &Property) -> String {
        let suffix = match prop.ty {
            TypeRef::String => "",
            TypeRef::Bool => "_bool",
            TypeRef::Int => "_int",
            TypeRef::Float => "_float",
            _ => "_object",
        };
        let verb = if prop.optional { "get" } else { "require" };
        format!("{}{}", verb, suffix)
    }

    fn accessor(prop: &Property) -> String {
        let name = PY_NAMING.field_name(&prop.name);
        let mut b = CodeBuilder::python();
        b.push_line(&format!(
            "{} = __config__.{}('{}')",
            name,
            Self::getter(prop),
            prop.name
        ));
        b.push_reflowed_docstring(&prop.doc);
        if let Some(default) = default_expr(prop) {
            b.push_line(&format!("if {} is None:", name))
                .push_indent()
                .push_line(&format!("{} = {}", name, default))
                .push_dedent();
        }
        b.build()
    }
}

impl GeneratedFile for ConfigVarsPy<'_> {
    fn path(&self) -> PathBuf {
        module_dir(self.package, CONFIG_MODULE).join("vars.py")
    }

    fn render(&self) -> String {
        let mut out = format!(
            "{}{}\n__config__ = pulumi.Config('{}')\n",
            python_header(),
            imports(CONFIG_MODULE),
            self.package
        );
        for prop in &self.variables {
            out.push('\n');
            out.push_str(&Self::accessor(prop));
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use tfgen_ir::{DefaultValue, Literal, Position};

    use super::*;

    #[test]
    fn test_required_string() {
        let region = Property::new("region", "region", TypeRef::String, Position::Input)
            .with_doc("The region.");
        assert_eq!(
            ConfigVarsPy::accessor(&region),
            "region = __config__.require('region')\n\"\"\"\nThe region.\n\"\"\"\n"
        );
    }

    #[test]
    fn test_optional_bool_with_default() {
        let skip = Property::new("skip_validation", "skipValidation", TypeRef::Bool, Position::Input)
            .optional(true)
            .with_default(DefaultValue {
                literal: Some(Literal::Bool(true)),
                env_vars: vec!["EXAMPLE_SKIP".into()],
                computed: false,
            });
        assert_eq!(
            ConfigVarsPy::accessor(&skip),
            "skip_validation = __config__.get_bool('skipValidation')\n\
             if skip_validation is None:\n    skip_validation = (utilities.get_env_bool('EXAMPLE_SKIP') or True)\n"
        );
    }

    #[test]
    fn test_object_getter() {
        let tags = Property::new("tags", "tags", TypeRef::map(TypeRef::String), Position::Input)
            .optional(true);
        assert_eq!(ConfigVarsPy::getter(&tags), "get_object");
    }
}

//! `config/vars.ts`: typed accessors for provider configuration.

use std::path::PathBuf;

use tfgen_codegen::{builder::CodeBuilder, language::TypeMapper};
use tfgen_core::{CommentStyle, FileRules, GeneratedFile};
use tfgen_ir::{CONFIG_MODULE, Property};

use super::{custom_type_imports, default_expr, needs_utilities, utilities_import};
use crate::{
    TS_NAMING,
    ast::Import,
    code_file::{CodeFile, RawCode},
    type_mapper::TypeScriptTypeMapper,
};

pub struct ConfigVarsTs<'a> {
    package: &'a str,
    variables: Vec<&'a Property>,
}

impl<'a> ConfigVarsTs<'a> {
    pub fn new(package: &'a str, variables: impl IntoIterator<Item = &'a Property>) -> Self {
        Self {
            package,
            variables: variables.into_iter().collect(),
        }
    }

    fn accessor(prop: &Property) -> String {
        let mapper = TypeScriptTypeMapper;
        let ty = mapper.map_type(&prop.ty);
        let getter = match (prop.ty.is_string(), prop.optional) {
            (true, true) => "get".to_string(),
            (true, false) => "require".to_string(),
            (false, true) => format!("getObject<{}>", ty),
            (false, false) => format!("requireObject<{}>", ty),
        };
        let read = format!("__config.{}(\"{}\")", getter, prop.name);
        let has_literal = prop
            .default
            .as_ref()
            .is_some_and(|d| d.literal.is_some());
        let declared = if prop.optional && !has_literal {
            format!("{} | undefined", ty)
        } else {
            ty
        };
        let value = match default_expr(prop) {
            Some(default) => format!("{} ?? {}", read, default),
            None => read,
        };

        let mut b = CodeBuilder::typescript();
        b.push_jsdoc(&prop.doc);
        b.push_line(&format!(
            "export const {}: {} = {};",
            TS_NAMING.field_name(&prop.name),
            declared,
            value
        ));
        b.build()
    }
}

impl GeneratedFile for ConfigVarsTs<'_> {
    fn path(&self) -> PathBuf {
        PathBuf::from(CONFIG_MODULE).join("vars.ts")
    }

    fn rules(&self) -> FileRules {
        FileRules::with_header(CommentStyle::DoubleSlash)
    }

    fn render(&self) -> String {
        let vars = self.variables.iter().copied();
        let mut file = CodeFile::new()
            .import(Import::pulumi())
            .imports(needs_utilities(vars.clone()).then(|| utilities_import(CONFIG_MODULE)))
            .imports(custom_type_imports(CONFIG_MODULE, "vars", vars))
            .add(RawCode::new(format!(
                "const __config = new pulumi.Config(\"{}\");",
                self.package
            )));
        for prop in &self.variables {
            file = file.add(RawCode::new(Self::accessor(prop)));
        }
        file.render()
    }
}

#[cfg(test)]
mod tests {
    use tfgen_ir::{DefaultValue, Literal, Position, TypeRef};

    use super::*;

    #[test]
    fn test_required_string_uses_require() {
        let region = Property::new("region", "region", TypeRef::String, Position::Input);
        assert_eq!(
            ConfigVarsTs::accessor(&region),
            "export const region: string = __config.require(\"region\");\n"
        );
    }

    #[test]
    fn test_optional_object_with_env_default() {
        let skip = Property::new("skip", "skip", TypeRef::Bool, Position::Input)
            .optional(true)
            .with_default(DefaultValue {
                literal: Some(Literal::Bool(false)),
                env_vars: vec!["EXAMPLE_SKIP".into()],
                computed: false,
            });
        assert_eq!(
            ConfigVarsTs::accessor(&skip),
            "export const skip: boolean = __config.getObject<boolean>(\"skip\") ?? utilities.getEnvBoolean(\"EXAMPLE_SKIP\") ?? false;\n"
        );
    }

    #[test]
    fn test_reserved_name_is_escaped() {
        let prop = Property::new("default", "default", TypeRef::String, Position::Input).optional(true);
        assert!(ConfigVarsTs::accessor(&prop).starts_with("export const _default: string | undefined"));
    }
}

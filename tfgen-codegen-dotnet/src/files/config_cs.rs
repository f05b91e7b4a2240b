//! `Config/Config.cs`: static provider configuration properties.

use std::path::PathBuf;

use tfgen_codegen::{builder::CodeBuilder, language::TypeMapper};
use tfgen_core::{CommentStyle, FileRules, GeneratedFile};
use tfgen_ir::{CONFIG_MODULE, Property, TypeRef};

use super::{default_expr, in_namespace, module_dir, quote, root_namespace};
use crate::{
    naming::property_name,
    type_mapper::{CSharpTypeMapper, nullable},
};

const CLASS: &str = "Config";

pub struct ConfigCs<'a> {
    package: &'a str,
    variables: Vec<&'a Property>,
}

impl<'a> ConfigCs<'a> {
    pub fn new(package: &'a str, variables: impl IntoIterator<Item = &'a Property>) -> Self {
        Self {
            package,
            variables: variables.into_iter().collect(),
        }
    }

    fn getter(prop: &Property, ty: &str) -> String {
        let verb = if prop.optional { "Get" } else { "Require" };
        match prop.ty {
            TypeRef::String => verb.to_string(),
            TypeRef::Bool => format!("{}Boolean", verb),
            TypeRef::Int => format!("{}Int32", verb),
            TypeRef::Float => format!("{}Double", verb),
            _ => format!("{}Object<{}>", verb, ty),
        }
    }

    fn push_accessor(b: &mut CodeBuilder, prop: &Property) {
        let mapper = CSharpTypeMapper;
        let ty = mapper.map_type(&prop.ty);
        let read = format!("__config.{}({})", Self::getter(prop, &ty), quote(&prop.name));
        let has_literal = prop
            .default
            .as_ref()
            .is_some_and(|d| d.literal.is_some());
        let declared = if prop.optional && !has_literal {
            nullable(&prop.ty, ty)
        } else {
            ty
        };
        let value = match default_expr(prop) {
            Some(default) => format!("{} ?? {}", read, default),
            None => read,
        };
        b.push_reflowed_xml_doc(&prop.doc);
        b.push_line(&format!(
            "public static {} {} {{ get; set; }} = {};",
            declared,
            property_name(&prop.name, CLASS),
            value
        ));
    }
}

impl GeneratedFile for ConfigCs<'_> {
    fn path(&self) -> PathBuf {
        module_dir(CONFIG_MODULE).join("Config.cs")
    }

    fn rules(&self) -> FileRules {
        FileRules::with_header(CommentStyle::DoubleSlash)
    }

    fn render(&self) -> String {
        let mut b = CodeBuilder::csharp();
        b.push_indent();
        b.push_line(&format!("public static class {}", CLASS));
        b.push_line("{").push_indent();
        b.push_line(&format!(
            "private static readonly Pulumi.Config __config = new Pulumi.Config({});",
            quote(self.package)
        ));
        for prop in &self.variables {
            b.push_blank();
            Self::push_accessor(&mut b, prop);
        }
        b.push_dedent().push_line("}");
        in_namespace(&root_namespace(self.package), &b.build())
    }
}

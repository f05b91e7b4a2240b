//! Module members: resources, functions, config variables and overlays.

use std::path::PathBuf;

use serde::Serialize;

use crate::{Property, Token};

/// A resource type.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Resource {
    pub token: Token,
    /// PascalCase class name.
    pub name: String,
    pub raw_name: String,
    /// camelCase file stem.
    pub file_stem: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub doc: String,
    pub input_properties: Vec<Property>,
    pub output_properties: Vec<Property>,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub is_provider: bool,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub delete_before_replace: bool,
}

impl Resource {
    pub fn args_type_name(&self) -> String {
        format!("{}Args", self.name)
    }

    /// Whether any input must be supplied by the caller.
    pub fn has_required_inputs(&self) -> bool {
        self.input_properties.iter().any(Property::needs_required_check)
    }

    /// Output properties with no input counterpart.
    pub fn output_only(&self) -> impl Iterator<Item = &Property> {
        self.output_properties.iter().filter(|out| {
            !self
                .input_properties
                .iter()
                .any(|input| input.raw_name == out.raw_name)
        })
    }

    pub fn input(&self, raw_name: &str) -> Option<&Property> {
        self.input_properties.iter().find(|p| p.raw_name == raw_name)
    }
}

/// A data-source invocation.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Function {
    pub token: Token,
    /// camelCase function name.
    pub name: String,
    pub raw_name: String,
    pub file_stem: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub doc: String,
    pub args: Vec<Property>,
    pub results: Vec<Property>,
}

impl Function {
    fn type_prefix(&self) -> String {
        let mut chars = self.name.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }

    pub fn args_type_name(&self) -> String {
        format!("{}Args", self.type_prefix())
    }

    pub fn result_type_name(&self) -> String {
        format!("{}Result", self.type_prefix())
    }

    pub fn has_required_args(&self) -> bool {
        self.args.iter().any(Property::needs_required_check)
    }
}

/// A hand-written file copied into the generated tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OverlayFile {
    /// File name relative to the module directory.
    pub name: String,
    /// Where to copy it from.
    pub source: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum ModuleMember {
    Resource(Resource),
    Function(Function),
    Variable(Property),
    Overlay(OverlayFile),
}

impl ModuleMember {
    /// Unique name of the member within its module.
    pub fn name(&self) -> &str {
        match self {
            ModuleMember::Resource(r) => &r.name,
            ModuleMember::Function(f) => &f.name,
            ModuleMember::Variable(v) => &v.name,
            ModuleMember::Overlay(o) => &o.name,
        }
    }
}

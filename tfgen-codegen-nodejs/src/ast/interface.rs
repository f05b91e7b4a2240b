//! TypeScript interface builder.

use tfgen_codegen::builder::{CodeFragment, Renderable};

/// A field in a TypeScript interface.
#[derive(Debug, Clone)]
pub struct InterfaceField {
    pub name: String,
    pub ty: String,
    pub doc: String,
    pub optional: bool,
}

impl InterfaceField {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            doc: String::new(),
            optional: false,
        }
    }

    pub fn optional(mut self, optional: bool) -> Self {
        self.optional = optional;
        self
    }

    pub fn doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = doc.into();
        self
    }
}

/// Builder for exported, read-only TypeScript interfaces.
#[derive(Debug, Clone)]
pub struct Interface {
    name: String,
    doc: String,
    fields: Vec<InterfaceField>,
}

impl Interface {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            doc: String::new(),
            fields: Vec::new(),
        }
    }

    pub fn doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = doc.into();
        self
    }

    pub fn field(mut self, field: InterfaceField) -> Self {
        self.fields.push(field);
        self
    }

    pub fn fields(mut self, fields: impl IntoIterator<Item = InterfaceField>) -> Self {
        self.fields.extend(fields);
        self
    }
}

impl Renderable for Interface {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut out = Vec::new();
        if !self.doc.is_empty() {
            out.push(CodeFragment::JsDocLines(self.doc.clone()));
        }
        if self.fields.is_empty() {
            out.push(CodeFragment::line(format!("export interface {} {{}}", self.name)));
            return out;
        }

        let body = self
            .fields
            .iter()
            .flat_map(|field| {
                let mut lines = Vec::new();
                if !field.doc.is_empty() {
                    lines.push(CodeFragment::jsdoc(field.doc.clone()));
                }
                lines.push(CodeFragment::line(format!(
                    "readonly {}{}: {};",
                    field.name,
                    if field.optional { "?" } else { "" },
                    field.ty
                )));
                lines
            })
            .collect();
        out.push(CodeFragment::block(
            format!("export interface {} {{", self.name),
            body,
            Some("}".to_string()),
        ));
        out
    }
}

//! Resolved properties: the unit every emitter renders.

use serde::Serialize;

use crate::TypeRef;

/// Whether a property was resolved for input (args) or output (state) use.
///
/// Optionality and type can differ between the two, so each field may be
/// resolved twice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Position {
    Input,
    Output,
}

/// A literal default value.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Literal {
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
}

/// Override-supplied default for a property.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DefaultValue {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub literal: Option<Literal>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub env_vars: Vec<String>,
    /// Computed from sibling properties at runtime.
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub computed: bool,
}

impl DefaultValue {
    /// Whether generated code can fill the value in (literal or env var).
    pub fn is_renderable(&self) -> bool {
        self.literal.is_some() || !self.env_vars.is_empty()
    }
}

/// A fully-resolved property (a Resolved Variable).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Property {
    /// Schema key.
    pub raw_name: String,
    /// Canonical (camelCase) name.
    pub name: String,
    #[serde(rename = "type")]
    pub ty: TypeRef,
    pub optional: bool,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub doc: String,
    #[serde(skip)]
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<DefaultValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deprecation: Option<String>,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub secret: bool,
    #[serde(skip)]
    pub position: Position,
}

impl Property {
    pub fn new(
        raw_name: impl Into<String>,
        name: impl Into<String>,
        ty: TypeRef,
        position: Position,
    ) -> Self {
        Self {
            raw_name: raw_name.into(),
            name: name.into(),
            ty,
            optional: false,
            doc: String::new(),
            description: String::new(),
            default: None,
            deprecation: None,
            secret: false,
            position,
        }
    }

    pub fn optional(mut self, optional: bool) -> Self {
        self.optional = optional;
        self
    }

    pub fn with_doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = doc.into();
        self
    }

    pub fn with_default(mut self, default: DefaultValue) -> Self {
        self.default = Some(default);
        self
    }

    /// Required inputs get a construction-time presence check.
    pub fn needs_required_check(&self) -> bool {
        self.position == Position::Input && !self.optional
    }

    pub fn is_input(&self) -> bool {
        self.position == Position::Input
    }
}

//! Field schemas: the typed, recursive description of a provider field.
//!
//! On the wire a field is a loose JSON object. It is read into a raw form
//! first and then converted into the closed [`FieldKind`] union, so that a
//! node that fits none of the known shapes fails at load time with its JSON
//! path instead of surfacing later inside an emitter.

use std::collections::BTreeMap;

use serde::Deserialize;
use serde_json::Value;

use crate::{Result, error::SourceContext};

/// Ordered mapping of field name to schema, used for resources, data sources
/// and nested objects.
pub type ObjectSchema = BTreeMap<String, FieldSchema>;

/// The primitive or collection kind of a field.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldKind {
    Bool,
    Int,
    Float,
    String,
    List(Element),
    Set(Element),
    Map(Element),
}

/// The element descriptor of a list, set or map.
#[derive(Debug, Clone, PartialEq)]
pub enum Element {
    /// A single nested field schema, usually a primitive.
    Field(Box<FieldSchema>),
    /// A nested object with its own named fields.
    Object(ObjectSchema),
}

/// The scalar kind of a field, ignoring element information.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Bool,
    Int,
    Float,
    String,
    List,
    Set,
    Map,
}

impl ValueKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ValueKind::Bool => "bool",
            ValueKind::Int => "int",
            ValueKind::Float => "float",
            ValueKind::String => "string",
            ValueKind::List => "list",
            ValueKind::Set => "set",
            ValueKind::Map => "map",
        }
    }
}

impl FieldKind {
    pub fn value_kind(&self) -> ValueKind {
        match self {
            FieldKind::Bool => ValueKind::Bool,
            FieldKind::Int => ValueKind::Int,
            FieldKind::Float => ValueKind::Float,
            FieldKind::String => ValueKind::String,
            FieldKind::List(_) => ValueKind::List,
            FieldKind::Set(_) => ValueKind::Set,
            FieldKind::Map(_) => ValueKind::Map,
        }
    }

    /// The element descriptor for collection kinds.
    pub fn element(&self) -> Option<&Element> {
        match self {
            FieldKind::List(elem) | FieldKind::Set(elem) | FieldKind::Map(elem) => Some(elem),
            _ => None,
        }
    }
}

/// One node of a provider schema.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldSchema {
    pub kind: FieldKind,
    pub optional: bool,
    pub required: bool,
    pub computed: bool,
    pub force_new: bool,
    pub sensitive: bool,
    /// Zero means unbounded.
    pub max_items: u32,
    pub min_items: u32,
    pub deprecated: Option<String>,
    pub removed: Option<String>,
    pub description: String,
    pub default: Option<Value>,
}

impl FieldSchema {
    pub fn new(kind: FieldKind) -> Self {
        Self {
            kind,
            optional: false,
            required: false,
            computed: false,
            force_new: false,
            sensitive: false,
            max_items: 0,
            min_items: 0,
            deprecated: None,
            removed: None,
            description: String::new(),
            default: None,
        }
    }

    pub fn bool() -> Self {
        Self::new(FieldKind::Bool)
    }

    pub fn int() -> Self {
        Self::new(FieldKind::Int)
    }

    pub fn float() -> Self {
        Self::new(FieldKind::Float)
    }

    pub fn string() -> Self {
        Self::new(FieldKind::String)
    }

    pub fn list_of(elem: FieldSchema) -> Self {
        Self::new(FieldKind::List(Element::Field(Box::new(elem))))
    }

    pub fn list_of_object(fields: ObjectSchema) -> Self {
        Self::new(FieldKind::List(Element::Object(fields)))
    }

    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn computed(mut self) -> Self {
        self.computed = true;
        self
    }

    pub fn max_items(mut self, n: u32) -> Self {
        self.max_items = n;
        self
    }

    pub fn describe(mut self, text: impl Into<String>) -> Self {
        self.description = text.into();
        self
    }

    pub fn with_default(mut self, value: Value) -> Self {
        self.default = Some(value);
        self
    }

    pub fn deprecate(mut self, message: impl Into<String>) -> Self {
        self.deprecated = Some(message.into());
        self
    }

    pub fn value_kind(&self) -> ValueKind {
        self.kind.value_kind()
    }

    pub fn is_removed(&self) -> bool {
        self.removed.is_some()
    }

    /// Whether the field is an input (user-settable) property.
    pub fn is_input(&self) -> bool {
        self.optional || self.required
    }
}

/// Field as it appears on the wire, before shape checks.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RawFieldSchema {
    #[serde(rename = "type")]
    ty: String,
    #[serde(default)]
    optional: bool,
    #[serde(default)]
    required: bool,
    #[serde(default)]
    computed: bool,
    #[serde(default)]
    force_new: bool,
    #[serde(default)]
    sensitive: bool,
    #[serde(default)]
    element: Option<RawElement>,
    #[serde(default)]
    max_items: u32,
    #[serde(default)]
    min_items: u32,
    #[serde(default)]
    deprecated: Option<String>,
    #[serde(default)]
    removed: Option<String>,
    #[serde(default)]
    description: String,
    #[serde(default)]
    default: Option<Value>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct RawElement {
    #[serde(default)]
    schema: Option<Box<RawFieldSchema>>,
    #[serde(default)]
    resource: Option<BTreeMap<String, RawFieldSchema>>,
}

pub(crate) type RawObjectSchema = BTreeMap<String, RawFieldSchema>;

impl RawFieldSchema {
    pub(crate) fn convert(self, path: &str, ctx: &SourceContext) -> Result<FieldSchema> {
        let kind = match self.ty.as_str() {
            "bool" => FieldKind::Bool,
            "int" => FieldKind::Int,
            "float" => FieldKind::Float,
            "string" => FieldKind::String,
            "list" | "set" | "map" => {
                let Some(raw) = self.element else {
                    return Err(ctx.malformed(
                        path,
                        format!("{} field has no element descriptor", self.ty),
                    ));
                };
                let elem = raw.convert(&format!("{}.element", path), ctx)?;
                match self.ty.as_str() {
                    "list" => FieldKind::List(elem),
                    "set" => FieldKind::Set(elem),
                    _ => FieldKind::Map(elem),
                }
            }
            other => {
                return Err(ctx.malformed(path, format!("unknown field type '{}'", other)));
            }
        };

        Ok(FieldSchema {
            kind,
            optional: self.optional,
            required: self.required,
            computed: self.computed,
            force_new: self.force_new,
            sensitive: self.sensitive,
            max_items: self.max_items,
            min_items: self.min_items,
            deprecated: self.deprecated,
            removed: self.removed,
            description: self.description,
            default: self.default,
        })
    }
}

impl RawElement {
    fn convert(self, path: &str, ctx: &SourceContext) -> Result<Element> {
        match (self.schema, self.resource) {
            (Some(schema), None) => Ok(Element::Field(Box::new(
                schema.convert(&format!("{}.schema", path), ctx)?,
            ))),
            (None, Some(fields)) => Ok(Element::Object(convert_object(
                fields,
                &format!("{}.resource", path),
                ctx,
            )?)),
            (Some(_), Some(_)) => Err(ctx.malformed(
                path,
                "element carries both `schema` and `resource`",
            )),
            (None, None) => Err(ctx.malformed(
                path,
                "element carries neither `schema` nor `resource`",
            )),
        }
    }
}

/// Convert every field of a raw object, prefixing paths with `path`.
pub(crate) fn convert_object(
    raw: RawObjectSchema,
    path: &str,
    ctx: &SourceContext,
) -> Result<ObjectSchema> {
    raw.into_iter()
        .map(|(name, field)| {
            let field_path = format!("{}.{}", path, name);
            field.convert(&field_path, ctx).map(|f| (name, f))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    fn convert_json(json: &str) -> Result<FieldSchema> {
        let ctx = SourceContext::new(json, "field.json");
        let raw: RawFieldSchema = serde_json::from_str(json).map_err(|e| ctx.json_error(e))?;
        raw.convert("field", &ctx)
    }

    #[test]
    fn test_primitive() {
        let field = convert_json(r#"{"type": "string", "required": true, "description": "Name."}"#)
            .unwrap();
        assert_eq!(field.kind, FieldKind::String);
        assert!(field.required);
        assert!(field.is_input());
        assert_eq!(field.description, "Name.");
    }

    #[test]
    fn test_list_of_object() {
        let field = convert_json(
            r#"{"type": "list", "maxItems": 1, "element": {"resource": {
                "port": {"type": "int", "optional": true}
            }}}"#,
        )
        .unwrap();
        assert_eq!(field.max_items, 1);
        match field.kind {
            FieldKind::List(Element::Object(fields)) => {
                assert_eq!(fields["port"].kind, FieldKind::Int);
            }
            other => panic!("expected list of object, got {:?}", other),
        }
    }

    #[test]
    fn test_map_without_element_is_malformed() {
        let err = convert_json(r#"{"type": "map"}"#).unwrap_err();
        match *err {
            Error::MalformedSchema { path, reason, .. } => {
                assert_eq!(path, "field");
                assert!(reason.contains("no element"));
            }
            other => panic!("expected malformed schema, got {:?}", other),
        }
    }

    #[test]
    fn test_element_with_both_shapes_is_malformed() {
        let err = convert_json(
            r#"{"type": "set", "element": {"schema": {"type": "string"}, "resource": {}}}"#,
        )
        .unwrap_err();
        assert!(matches!(*err, Error::MalformedSchema { ref path, .. } if path == "field.element"));
    }

    #[test]
    fn test_unknown_nested_type_names_path() {
        let err = convert_json(
            r#"{"type": "list", "element": {"resource": {"x": {"type": "tuple"}}}}"#,
        )
        .unwrap_err();
        match *err {
            Error::MalformedSchema { path, reason, .. } => {
                assert_eq!(path, "field.element.resource.x");
                assert_eq!(reason, "unknown field type 'tuple'");
            }
            other => panic!("expected malformed schema, got {:?}", other),
        }
    }

    #[test]
    fn test_builders() {
        let field = FieldSchema::list_of(FieldSchema::string())
            .optional()
            .max_items(1)
            .describe("One item.");
        assert_eq!(field.value_kind(), ValueKind::List);
        assert!(matches!(field.kind.element(), Some(Element::Field(_))));
        assert!(!FieldSchema::string().computed().is_input());
    }
}

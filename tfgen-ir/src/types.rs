//! Language-neutral type references.

use serde::Serialize;

use crate::{Property, Token};

/// The projected type of a property.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", content = "of", rename_all = "camelCase")]
pub enum TypeRef {
    Bool,
    Int,
    Float,
    String,
    Array(Box<TypeRef>),
    /// String-keyed dictionary of the element type.
    Map(Box<TypeRef>),
    Object(ObjectType),
    Custom(CustomType),
    Asset(AssetKind),
}

impl TypeRef {
    pub fn array(elem: TypeRef) -> Self {
        TypeRef::Array(Box::new(elem))
    }

    pub fn map(elem: TypeRef) -> Self {
        TypeRef::Map(Box::new(elem))
    }

    pub fn is_string(&self) -> bool {
        matches!(self, TypeRef::String)
    }

    /// Whether the type is a bool, number or string.
    pub fn is_primitive(&self) -> bool {
        matches!(
            self,
            TypeRef::Bool | TypeRef::Int | TypeRef::Float | TypeRef::String
        )
    }

    /// Visit every nested object type, outermost first.
    pub fn objects(&self) -> Vec<&ObjectType> {
        let mut out = Vec::new();
        self.collect_objects(&mut out);
        out
    }

    fn collect_objects<'a>(&'a self, out: &mut Vec<&'a ObjectType>) {
        match self {
            TypeRef::Array(elem) | TypeRef::Map(elem) => elem.collect_objects(out),
            TypeRef::Object(obj) => {
                out.push(obj);
                for prop in &obj.properties {
                    prop.ty.collect_objects(out);
                }
            }
            _ => {}
        }
    }
}

/// A generated nested object type.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ObjectType {
    /// `<Owner><Args?><SingularPascalKey>`
    pub name: String,
    pub properties: Vec<Property>,
}

/// A type supplied by an override instead of the schema type.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomType {
    pub token: Token,
    /// Only populated in input position.
    pub alt_types: Vec<Token>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum AssetKind {
    Asset,
    Archive,
}

impl AssetKind {
    /// The SDK class name.
    pub fn sdk_name(&self) -> &'static str {
        match self {
            AssetKind::Asset => "Asset",
            AssetKind::Archive => "Archive",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Position;

    #[test]
    fn test_serialize_tagged() {
        let ty = TypeRef::array(TypeRef::String);
        assert_eq!(
            serde_json::to_string(&ty).unwrap(),
            r#"{"type":"array","of":{"type":"string"}}"#
        );
        assert_eq!(
            serde_json::to_string(&TypeRef::Asset(AssetKind::Archive)).unwrap(),
            r#"{"type":"asset","of":"archive"}"#
        );
    }

    #[test]
    fn test_objects_walks_nesting() {
        let inner = ObjectType {
            name: "WidgetRuleTarget".into(),
            properties: vec![Property::new("port", "port", TypeRef::Int, Position::Output)],
        };
        let outer = ObjectType {
            name: "WidgetRule".into(),
            properties: vec![Property::new(
                "targets",
                "targets",
                TypeRef::array(TypeRef::Object(inner)),
                Position::Output,
            )],
        };
        let ty = TypeRef::map(TypeRef::Object(outer));
        let names: Vec<_> = ty.objects().iter().map(|o| o.name.as_str()).collect();
        assert_eq!(names, vec!["WidgetRule", "WidgetRuleTarget"]);
    }

    #[test]
    fn test_primitive() {
        assert!(TypeRef::Float.is_primitive());
        assert!(!TypeRef::array(TypeRef::Bool).is_primitive());
        assert_eq!(AssetKind::Asset.sdk_name(), "Asset");
    }
}

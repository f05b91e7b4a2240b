//! TypeScript type mapper implementation.

use tfgen_codegen::language::TypeMapper;
use tfgen_ir::{AssetKind, ObjectType, Token, TypeRef};

/// Maps IR types to TypeScript type expressions.
///
/// Nested objects render as inline object literal types. Input positions
/// wrap every nested value in `pulumi.Input<...>` so callers may pass
/// promises or outputs at any depth.
pub struct TypeScriptTypeMapper;

impl TypeScriptTypeMapper {
    fn asset(kind: AssetKind) -> String {
        format!("pulumi.asset.{}", kind.sdk_name())
    }

    fn object(&self, obj: &ObjectType, input: bool) -> String {
        if obj.properties.is_empty() {
            return "{}".to_string();
        }
        let fields: Vec<String> = obj
            .properties
            .iter()
            .map(|prop| {
                let ty = if input {
                    format!("pulumi.Input<{}>", self.map_input_type(&prop.ty))
                } else {
                    self.map_type(&prop.ty)
                };
                format!("{}{}: {}", prop.name, if prop.optional { "?" } else { "" }, ty)
            })
            .collect();
        format!("{{ {} }}", fields.join(", "))
    }
}

impl TypeMapper for TypeScriptTypeMapper {
    fn language(&self) -> &'static str {
        "nodejs"
    }

    fn map_type(&self, ty: &TypeRef) -> String {
        match ty {
            TypeRef::Bool => "boolean".to_string(),
            TypeRef::Int | TypeRef::Float => "number".to_string(),
            TypeRef::String => "string".to_string(),
            TypeRef::Array(elem) => {
                let elem = self.map_type(elem);
                if elem.contains(" | ") {
                    format!("({})[]", elem)
                } else {
                    format!("{}[]", elem)
                }
            }
            TypeRef::Map(elem) => format!("{{[key: string]: {}}}", self.map_type(elem)),
            TypeRef::Object(obj) => self.object(obj, false),
            TypeRef::Custom(custom) => custom.token.name().to_string(),
            TypeRef::Asset(kind) => Self::asset(*kind),
        }
    }

    fn map_input_type(&self, ty: &TypeRef) -> String {
        match ty {
            TypeRef::Array(elem) => format!("pulumi.Input<{}>[]", self.map_input_type(elem)),
            TypeRef::Map(elem) => format!(
                "{{[key: string]: pulumi.Input<{}>}}",
                self.map_input_type(elem)
            ),
            TypeRef::Object(obj) => self.object(obj, true),
            TypeRef::Custom(custom) if !custom.alt_types.is_empty() => {
                std::iter::once(&custom.token)
                    .chain(&custom.alt_types)
                    .map(Token::name)
                    .collect::<Vec<_>>()
                    .join(" | ")
            }
            _ => self.map_type(ty),
        }
    }
}

/// Every custom type token a type refers to, including alternates.
pub fn custom_tokens(ty: &TypeRef) -> Vec<&Token> {
    let mut out = Vec::new();
    collect_tokens(ty, &mut out);
    out
}

fn collect_tokens<'a>(ty: &'a TypeRef, out: &mut Vec<&'a Token>) {
    match ty {
        TypeRef::Array(elem) | TypeRef::Map(elem) => collect_tokens(elem, out),
        TypeRef::Object(obj) => {
            for prop in &obj.properties {
                collect_tokens(&prop.ty, out);
            }
        }
        TypeRef::Custom(custom) => {
            out.push(&custom.token);
            out.extend(&custom.alt_types);
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use tfgen_ir::{CustomType, Position, Property};

    use super::*;

    fn rule() -> ObjectType {
        ObjectType {
            name: "WidgetRule".into(),
            properties: vec![
                Property::new("target_arn", "targetArn", TypeRef::String, Position::Output),
                Property::new("priority", "priority", TypeRef::Int, Position::Output).optional(true),
            ],
        }
    }

    #[test]
    fn test_primitives() {
        let mapper = TypeScriptTypeMapper;
        assert_eq!(mapper.map_type(&TypeRef::Bool), "boolean");
        assert_eq!(mapper.map_type(&TypeRef::Float), "number");
        assert_eq!(mapper.map_input_type(&TypeRef::String), "string");
        assert_eq!(
            mapper.map_type(&TypeRef::Asset(AssetKind::Archive)),
            "pulumi.asset.Archive"
        );
    }

    #[test]
    fn test_collections() {
        let mapper = TypeScriptTypeMapper;
        let tags = TypeRef::map(TypeRef::String);
        assert_eq!(mapper.map_type(&tags), "{[key: string]: string}");
        assert_eq!(
            mapper.map_input_type(&tags),
            "{[key: string]: pulumi.Input<string>}"
        );
        assert_eq!(
            mapper.map_input_type(&TypeRef::array(TypeRef::String)),
            "pulumi.Input<string>[]"
        );
    }

    #[test]
    fn test_inline_objects() {
        let mapper = TypeScriptTypeMapper;
        let ty = TypeRef::array(TypeRef::Object(rule()));
        assert_eq!(
            mapper.map_type(&ty),
            "{ targetArn: string, priority?: number }[]"
        );
        assert_eq!(
            mapper.map_input_type(&ty),
            "pulumi.Input<{ targetArn: pulumi.Input<string>, priority?: pulumi.Input<number> }>[]"
        );
    }

    #[test]
    fn test_custom_with_alt_types() {
        let mapper = TypeScriptTypeMapper;
        let ty = TypeRef::Custom(CustomType {
            token: "example:iam/role:Role".parse().unwrap(),
            alt_types: vec!["example:iam/role:RoleArn".parse().unwrap()],
        });
        assert_eq!(mapper.map_type(&ty), "Role");
        assert_eq!(mapper.map_input_type(&ty), "Role | RoleArn");
        assert_eq!(custom_tokens(&TypeRef::array(ty)).len(), 2);
    }
}

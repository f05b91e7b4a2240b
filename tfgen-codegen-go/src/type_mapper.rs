//! Go type mapper implementation.

use tfgen_codegen::language::TypeMapper;
use tfgen_ir::{AssetKind, Property, TypeRef};

/// Maps IR types to the Pulumi Go SDK's typed inputs and outputs.
///
/// Nested objects are untyped maps; custom types are strings.
pub struct GoTypeMapper;

fn primitive(ty: &TypeRef) -> Option<&'static str> {
    match ty {
        TypeRef::Bool => Some("Bool"),
        TypeRef::Int => Some("Int"),
        TypeRef::Float => Some("Float64"),
        TypeRef::String | TypeRef::Custom(_) => Some("String"),
        _ => None,
    }
}

/// `pulumi.<Kind><suffix>` for a type, where suffix is `Input` or `Output`.
fn sdk_type(ty: &TypeRef, suffix: &str) -> String {
    let kind = match ty {
        TypeRef::Array(elem) => match (primitive(elem), elem.as_ref()) {
            (Some(p), _) => format!("{}Array", p),
            (None, TypeRef::Object(_)) => "MapArray".to_string(),
            _ => "Array".to_string(),
        },
        TypeRef::Map(elem) => match (primitive(elem), elem.as_ref()) {
            (Some(p), _) => format!("{}Map", p),
            (None, TypeRef::Object(_)) => "MapMap".to_string(),
            _ => "Map".to_string(),
        },
        TypeRef::Object(_) => "Map".to_string(),
        TypeRef::Asset(AssetKind::Asset) => "Asset".to_string(),
        TypeRef::Asset(AssetKind::Archive) => "Archive".to_string(),
        _ => primitive(ty).unwrap_or("Any").to_string(),
    };
    format!("pulumi.{}{}", kind, suffix)
}

impl TypeMapper for GoTypeMapper {
    fn language(&self) -> &'static str {
        "go"
    }

    fn map_type(&self, ty: &TypeRef) -> String {
        sdk_type(ty, "Output")
    }

    fn map_input_type(&self, ty: &TypeRef) -> String {
        sdk_type(ty, "Input")
    }
}

impl GoTypeMapper {
    /// Output field type; optional primitives are pointers.
    pub fn output_field(&self, prop: &Property) -> String {
        match primitive(&prop.ty) {
            Some(p) if prop.optional => format!("pulumi.{}PtrOutput", p),
            _ => self.map_type(&prop.ty),
        }
    }

    /// Argument field type; optional primitives are pointers.
    pub fn input_field(&self, prop: &Property) -> String {
        match primitive(&prop.ty) {
            Some(p) if prop.optional => format!("pulumi.{}PtrInput", p),
            _ => self.map_input_type(&prop.ty),
        }
    }

    /// The plain Go type carried on the wire.
    pub fn plain_type(&self, ty: &TypeRef) -> String {
        match ty {
            TypeRef::Bool => "bool".to_string(),
            TypeRef::Int => "int".to_string(),
            TypeRef::Float => "float64".to_string(),
            TypeRef::String | TypeRef::Custom(_) => "string".to_string(),
            TypeRef::Array(elem) => format!("[]{}", self.plain_type(elem)),
            TypeRef::Map(elem) => format!("map[string]{}", self.plain_type(elem)),
            TypeRef::Object(_) => "map[string]interface{}".to_string(),
            TypeRef::Asset(_) => "pulumi.AssetOrArchive".to_string(),
        }
    }

    /// Plain field type; optional primitives are pointers.
    pub fn plain_field(&self, prop: &Property) -> String {
        let ty = self.plain_type(&prop.ty);
        if prop.optional && primitive(&prop.ty).is_some() {
            format!("*{}", ty)
        } else {
            ty
        }
    }
}

/// The `pulumi.<Kind>Ptr` constructor for an optional primitive.
pub fn ptr_constructor(ty: &TypeRef) -> Option<String> {
    primitive(ty).map(|p| format!("pulumi.{}Ptr", p))
}

#[cfg(test)]
mod tests {
    use tfgen_ir::{ObjectType, Position};

    use super::*;

    fn object() -> TypeRef {
        TypeRef::Object(ObjectType {
            name: "WidgetRule".into(),
            properties: vec![],
        })
    }

    #[test]
    fn test_sdk_types() {
        let mapper = GoTypeMapper;
        assert_eq!(mapper.map_type(&TypeRef::String), "pulumi.StringOutput");
        assert_eq!(mapper.map_input_type(&TypeRef::array(TypeRef::Int)), "pulumi.IntArrayInput");
        assert_eq!(mapper.map_type(&TypeRef::map(TypeRef::Float)), "pulumi.Float64MapOutput");
        assert_eq!(mapper.map_input_type(&TypeRef::array(object())), "pulumi.MapArrayInput");
        assert_eq!(mapper.map_type(&object()), "pulumi.MapOutput");
        assert_eq!(
            mapper.map_input_type(&TypeRef::array(TypeRef::array(TypeRef::String))),
            "pulumi.ArrayInput"
        );
        assert_eq!(mapper.map_input_type(&TypeRef::Asset(AssetKind::Archive)), "pulumi.ArchiveInput");
    }

    #[test]
    fn test_optional_fields_are_pointers() {
        let mapper = GoTypeMapper;
        let size = Property::new("size", "size", TypeRef::Int, Position::Input).optional(true);
        assert_eq!(mapper.input_field(&size), "pulumi.IntPtrInput");
        assert_eq!(mapper.output_field(&size), "pulumi.IntPtrOutput");
        assert_eq!(mapper.plain_field(&size), "*int");

        let tags = Property::new("tags", "tags", TypeRef::map(TypeRef::String), Position::Input)
            .optional(true);
        assert_eq!(mapper.input_field(&tags), "pulumi.StringMapInput");
        assert_eq!(mapper.plain_field(&tags), "map[string]string");
        assert_eq!(ptr_constructor(&TypeRef::Bool).as_deref(), Some("pulumi.BoolPtr"));
    }
}

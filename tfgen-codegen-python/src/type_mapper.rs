//! Python type mapper implementation.

use tfgen_codegen::language::TypeMapper;
use tfgen_ir::TypeRef;

/// Maps IR types to Python type annotations.
///
/// Nested objects are plain dictionaries; custom types are untyped.
pub struct PythonTypeMapper;

impl TypeMapper for PythonTypeMapper {
    fn language(&self) -> &'static str {
        "python"
    }

    fn map_type(&self, ty: &TypeRef) -> String {
        match ty {
            TypeRef::Bool => "bool".to_string(),
            TypeRef::Int => "int".to_string(),
            TypeRef::Float => "float".to_string(),
            TypeRef::String => "str".to_string(),
            TypeRef::Array(elem) => format!("Sequence[{}]", self.map_type(elem)),
            TypeRef::Map(elem) => format!("Mapping[str, {}]", self.map_type(elem)),
            TypeRef::Object(_) => "dict".to_string(),
            TypeRef::Custom(_) => "Any".to_string(),
            TypeRef::Asset(kind) => format!("pulumi.{}", kind.sdk_name()),
        }
    }

    fn map_input_type(&self, ty: &TypeRef) -> String {
        match ty {
            TypeRef::Array(elem) => {
                format!("Sequence[pulumi.Input[{}]]", self.map_input_type(elem))
            }
            TypeRef::Map(elem) => {
                format!("Mapping[str, pulumi.Input[{}]]", self.map_input_type(elem))
            }
            _ => self.map_type(ty),
        }
    }
}

/// The builtin an output value is checked against, if any.
pub fn runtime_class(ty: &TypeRef) -> Option<&'static str> {
    match ty {
        TypeRef::Bool => Some("bool"),
        TypeRef::Int => Some("int"),
        TypeRef::Float => Some("float"),
        TypeRef::String => Some("str"),
        TypeRef::Array(_) => Some("list"),
        TypeRef::Map(_) | TypeRef::Object(_) => Some("dict"),
        TypeRef::Custom(_) | TypeRef::Asset(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use tfgen_ir::AssetKind;

    use super::*;

    #[test]
    fn test_python_types() {
        let mapper = PythonTypeMapper;
        assert_eq!(mapper.map_type(&TypeRef::String), "str");
        assert_eq!(mapper.map_type(&TypeRef::map(TypeRef::Int)), "Mapping[str, int]");
        assert_eq!(
            mapper.map_input_type(&TypeRef::array(TypeRef::String)),
            "Sequence[pulumi.Input[str]]"
        );
        assert_eq!(mapper.map_type(&TypeRef::Asset(AssetKind::Archive)), "pulumi.Archive");
    }

    #[test]
    fn test_runtime_class() {
        assert_eq!(runtime_class(&TypeRef::array(TypeRef::Bool)), Some("list"));
        assert_eq!(runtime_class(&TypeRef::Asset(AssetKind::Asset)), None);
    }
}

//! C# type mapper implementation.

use tfgen_codegen::language::TypeMapper;
use tfgen_ir::TypeRef;

/// Maps IR types to C# types.
///
/// Output types use immutable collections, resource arguments use the
/// `Input*` wrappers and invoke arguments use plain mutable collections.
pub struct CSharpTypeMapper;

impl TypeMapper for CSharpTypeMapper {
    fn language(&self) -> &'static str {
        "dotnet"
    }

    fn map_type(&self, ty: &TypeRef) -> String {
        match ty {
            TypeRef::Bool => "bool".to_string(),
            TypeRef::Int => "int".to_string(),
            TypeRef::Float => "double".to_string(),
            TypeRef::String | TypeRef::Custom(_) => "string".to_string(),
            TypeRef::Array(elem) => format!("ImmutableArray<{}>", self.map_type(elem)),
            TypeRef::Map(elem) => format!("ImmutableDictionary<string, {}>", self.map_type(elem)),
            TypeRef::Object(obj) => obj.name.clone(),
            TypeRef::Asset(kind) => kind.sdk_name().to_string(),
        }
    }

    fn map_input_type(&self, ty: &TypeRef) -> String {
        match ty {
            TypeRef::Array(elem) => format!("InputList<{}>", self.map_type(elem)),
            TypeRef::Map(elem) => format!("InputMap<{}>", self.map_type(elem)),
            _ => format!("Input<{}>", self.map_type(ty)),
        }
    }
}

impl CSharpTypeMapper {
    /// Type of a data-source argument.
    pub fn map_invoke_type(&self, ty: &TypeRef) -> String {
        match ty {
            TypeRef::Array(elem) => format!("List<{}>", self.map_invoke_type(elem)),
            TypeRef::Map(elem) => format!("Dictionary<string, {}>", self.map_invoke_type(elem)),
            _ => self.map_type(ty),
        }
    }
}

/// Mark a mapped type nullable; `ImmutableArray` is a struct that defaults
/// to empty and stays as is.
pub fn nullable(ty: &TypeRef, mapped: String) -> String {
    match ty {
        TypeRef::Array(_) if mapped.starts_with("ImmutableArray<") => mapped,
        _ => format!("{}?", mapped),
    }
}

//! C#-specific naming conventions.

use tfgen_codegen::language::NamingConvention;
use tfgen_core::{lower_first, to_pascal_case};

fn escape_cs_reserved(name: &str) -> String {
    format!("@{}", name)
}

/// C# naming conventions: PascalCase types, files and properties; camelCase
/// parameters escaped with `@` when they collide with a keyword.
pub const CS_NAMING: NamingConvention = NamingConvention {
    to_type: to_pascal_case,
    to_file: to_pascal_case,
    to_field: lower_first,
    reserved_words: &[
        "abstract", "as", "base", "bool", "break", "byte", "case", "catch", "char", "checked",
        "class", "const", "continue", "decimal", "default", "delegate", "do", "double", "else",
        "enum", "event", "explicit", "extern", "false", "finally", "fixed", "float", "for",
        "foreach", "goto", "if", "implicit", "in", "int", "interface", "internal", "is", "lock",
        "long", "namespace", "new", "null", "object", "operator", "out", "override", "params",
        "private", "protected", "public", "readonly", "ref", "return", "sbyte", "sealed", "short",
        "sizeof", "stackalloc", "static", "string", "struct", "switch", "this", "throw", "true",
        "try", "typeof", "uint", "ulong", "unchecked", "unsafe", "ushort", "using", "virtual",
        "void", "volatile", "while",
    ],
    escape_reserved: escape_cs_reserved,
};

/// PascalCase property name, suffixed with `Value` when it would collide
/// with its enclosing class.
pub fn property_name(name: &str, class: &str) -> String {
    let pascal = to_pascal_case(name);
    if pascal == class {
        format!("{}Value", pascal)
    } else {
        pascal
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parameter_names_are_escaped() {
        assert_eq!(CS_NAMING.field_name("namePrefix"), "namePrefix");
        assert_eq!(CS_NAMING.field_name("default"), "@default");
        assert_eq!(CS_NAMING.field_name("Event"), "@event");
    }

    #[test]
    fn test_property_name_avoids_class_name() {
        assert_eq!(property_name("bucket", "Bucket"), "BucketValue");
        assert_eq!(property_name("contentFile", "Bucket"), "ContentFile");
    }

    #[test]
    fn test_file_names() {
        assert_eq!(CS_NAMING.file_name("getWidgets"), "GetWidgets");
        assert_eq!(CS_NAMING.type_name("s3"), "S3");
    }
}

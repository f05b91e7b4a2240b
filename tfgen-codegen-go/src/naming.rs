//! Go-specific naming conventions.

use tfgen_codegen::language::NamingConvention;
use tfgen_core::{to_pascal_case, to_snake_words, upper_first};

fn escape_go_reserved(name: &str) -> String {
    format!("{}_", name)
}

/// Go naming conventions: exported PascalCase identifiers and snake_case files.
pub const GO_NAMING: NamingConvention = NamingConvention {
    to_type: to_pascal_case,
    to_file: to_snake_words,
    to_field: upper_first,
    reserved_words: &[
        "break", "case", "chan", "const", "continue", "default", "defer", "else", "fallthrough",
        "for", "func", "go", "goto", "if", "import", "interface", "map", "package", "range",
        "return", "select", "struct", "switch", "type", "var",
    ],
    escape_reserved: escape_go_reserved,
};

/// Go package name for a directory name: lowercase, no dashes, not a keyword.
pub fn package_name(name: &str) -> String {
    let cleaned: String = name
        .chars()
        .filter(|c| *c != '-')
        .flat_map(char::to_lowercase)
        .collect();
    GO_NAMING.safe_name(&cleaned)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_go_names() {
        assert_eq!(GO_NAMING.field_name("targetArn"), "TargetArn");
        assert_eq!(GO_NAMING.file_name("getWidgets"), "get_widgets");
        assert_eq!(GO_NAMING.type_name("s3"), "S3");
    }

    #[test]
    fn test_package_name() {
        assert_eq!(package_name("example"), "example");
        assert_eq!(package_name("My-Cloud"), "mycloud");
        assert_eq!(package_name("type"), "type_");
    }
}

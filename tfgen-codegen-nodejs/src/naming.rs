//! TypeScript-specific naming conventions.

use tfgen_codegen::language::NamingConvention;
use tfgen_core::{lower_first, to_camel_case, to_pascal_case};

fn escape_ts_reserved(name: &str) -> String {
    format!("_{}", name)
}

/// TypeScript naming conventions.
///
/// Module-level bindings (config variables, functions) go through
/// [`NamingConvention::field_name`]; object property keys are emitted as-is.
pub const TS_NAMING: NamingConvention = NamingConvention {
    to_type: to_pascal_case,
    // Files keep the member's camelCase stem
    to_file: lower_first,
    to_field: to_camel_case,
    reserved_words: &[
        // JavaScript reserved words
        "break",
        "case",
        "catch",
        "class",
        "const",
        "continue",
        "debugger",
        "default",
        "delete",
        "do",
        "else",
        "enum",
        "export",
        "extends",
        "false",
        "finally",
        "for",
        "function",
        "if",
        "import",
        "in",
        "instanceof",
        "let",
        "new",
        "null",
        "return",
        "super",
        "switch",
        "this",
        "throw",
        "true",
        "try",
        "typeof",
        "var",
        "void",
        "while",
        "with",
        "yield",
        // Strict-mode reserved words
        "await",
        "implements",
        "interface",
        "package",
        "private",
        "protected",
        "public",
        "static",
    ],
    escape_reserved: escape_ts_reserved,
};

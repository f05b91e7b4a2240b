//! Python-specific naming conventions.

use tfgen_codegen::language::NamingConvention;
use tfgen_core::{to_pascal_case, to_snake_words};

fn escape_py_reserved(name: &str) -> String {
    format!("{}_", name)
}

/// Python naming conventions: snake_case modules and parameters, with a
/// trailing underscore on keywords (`lambda` → `lambda_`).
pub const PY_NAMING: NamingConvention = NamingConvention {
    to_type: to_pascal_case,
    to_file: to_snake_words,
    to_field: to_snake_words,
    reserved_words: &[
        "False", "None", "True", "and", "as", "assert", "async", "await", "break", "class",
        "continue", "def", "del", "elif", "else", "except", "finally", "for", "from", "global",
        "if", "import", "in", "is", "lambda", "nonlocal", "not", "or", "pass", "raise", "return",
        "try", "while", "with", "yield",
        // Names the generated code binds itself
        "opts", "resource_name", "id",
    ],
    escape_reserved: escape_py_reserved,
};

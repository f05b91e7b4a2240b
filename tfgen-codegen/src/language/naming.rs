//! Naming conventions for different programming languages.

/// Language-specific naming conventions.
///
/// Defines how to transform canonical IR names into type, file and field
/// names, and how to handle reserved words.
#[derive(Debug, Clone, Copy)]
pub struct NamingConvention {
    /// Transform a canonical name into a type name (e.g., "bucketPolicy" -> "BucketPolicy")
    pub to_type: fn(&str) -> String,
    /// Transform a canonical name into a file stem (e.g., "bucketPolicy" -> "bucket_policy")
    pub to_file: fn(&str) -> String,
    /// Transform a canonical property name into a field name
    pub to_field: fn(&str) -> String,
    /// List of reserved words in the language
    pub reserved_words: &'static [&'static str],
    /// Escape a reserved word (e.g., "lambda" -> "lambda_" in Python)
    pub escape_reserved: fn(&str) -> String,
}

impl NamingConvention {
    /// Check if a name is a reserved word.
    pub fn is_reserved(&self, name: &str) -> bool {
        self.reserved_words.contains(&name)
    }

    /// Get a safe name, escaping if necessary.
    pub fn safe_name(&self, name: &str) -> String {
        if self.is_reserved(name) {
            (self.escape_reserved)(name)
        } else {
            name.to_string()
        }
    }

    /// Transform and make safe for use as a type name.
    pub fn type_name(&self, name: &str) -> String {
        let transformed = (self.to_type)(name);
        self.safe_name(&transformed)
    }

    /// Transform a name into a file stem. File names are never escaped.
    pub fn file_name(&self, name: &str) -> String {
        (self.to_file)(name)
    }

    /// Transform and make safe for use as a field name.
    pub fn field_name(&self, name: &str) -> String {
        let transformed = (self.to_field)(name);
        self.safe_name(&transformed)
    }
}

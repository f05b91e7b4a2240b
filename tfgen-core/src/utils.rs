//! Shared case-conversion helpers for code generation.

/// Uppercase the first character (e.g., "widget" -> "Widget")
pub fn upper_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c.to_uppercase().chain(chars).collect(),
    }
}

/// Lowercase the first character (e.g., "Widget" -> "widget")
pub fn lower_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c.to_lowercase().chain(chars).collect(),
    }
}

/// Convert a string to PascalCase (e.g., "hello_world" -> "HelloWorld")
///
/// Segments are split on `_` and `-`; the casing inside a segment is kept.
pub fn to_pascal_case(s: &str) -> String {
    s.split(['_', '-']).map(upper_first).collect()
}

/// Convert a string to camelCase (e.g., "hello_world" -> "helloWorld")
///
/// The leading segment is kept as-is, so already-camel names are a fixed point.
pub fn to_camel_case(s: &str) -> String {
    let mut parts = s.split(['_', '-']);
    let mut result = parts.next().unwrap_or_default().to_string();
    for part in parts {
        result.push_str(&upper_first(part));
    }
    result
}

/// Convert a string to snake_case (e.g., "HelloWorld" -> "hello_world")
///
/// Every uppercase letter starts a new word; see [`crate::split_words`] for the
/// acronym-aware variant.
pub fn to_snake_case(s: &str) -> String {
    let mut result = String::new();
    for (i, c) in s.chars().enumerate() {
        if c.is_uppercase() && i > 0 {
            result.push('_');
        }
        result.extend(c.to_lowercase());
    }
    result.replace('-', "_")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_pascal_case() {
        assert_eq!(to_pascal_case("hello"), "Hello");
        assert_eq!(to_pascal_case("hello_world"), "HelloWorld");
        assert_eq!(to_pascal_case("load-balancer"), "LoadBalancer");
        assert_eq!(to_pascal_case("hElLo"), "HElLo");
        assert_eq!(to_pascal_case(""), "");
    }

    #[test]
    fn test_to_camel_case() {
        assert_eq!(to_camel_case("instance_type"), "instanceType");
        assert_eq!(to_camel_case("a_b_c"), "aBC");
        assert_eq!(to_camel_case("instanceType"), "instanceType");
        assert_eq!(to_camel_case("Widget"), "Widget");
        assert_eq!(to_camel_case(""), "");
    }

    #[test]
    fn test_to_snake_case() {
        assert_eq!(to_snake_case("Hello"), "hello");
        assert_eq!(to_snake_case("HelloWorld"), "hello_world");
        assert_eq!(to_snake_case("hello-world"), "hello_world");
        assert_eq!(to_snake_case(""), "");
    }

    #[test]
    fn test_first_char_helpers() {
        assert_eq!(upper_first("getWidget"), "GetWidget");
        assert_eq!(lower_first("Widget"), "widget");
        assert_eq!(lower_first(""), "");
    }
}

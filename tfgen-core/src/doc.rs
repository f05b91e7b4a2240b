//! Documentation text preparation for generated comments.

/// Maximum line width for reflowed doc comments.
pub const MAX_WIDTH: usize = 120;

/// Neutralize block-comment terminators inside doc text.
pub fn sanitize(text: &str) -> String {
    text.replace("*/", "*&#47;")
}

/// Reflow `text` into lines no wider than `width`, never breaking a word.
///
/// Whitespace (including newlines) is collapsed. A single word longer than
/// `width` gets a line of its own.
pub fn reflow(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let word = sanitize(word);
        if !current.is_empty() {
            if current.len() + word.len() + 1 > width {
                lines.push(std::mem::take(&mut current));
            } else {
                current.push(' ');
            }
        }
        current.push_str(&word);
    }

    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

/// Split doc text into sanitized lines, keeping its own line breaks.
///
/// A trailing blank line is dropped.
pub fn doc_lines(text: &str) -> Vec<String> {
    let mut lines: Vec<String> = text.split('\n').map(sanitize).collect();
    if lines.last().is_some_and(|l| l.trim().is_empty()) {
        lines.pop();
    }
    lines
}

/// Append a deprecation note to a doc string.
pub fn with_deprecation(doc: &str, deprecation: Option<&str>) -> String {
    match deprecation {
        Some(message) if doc.is_empty() => format!("Deprecated: {}", message),
        Some(message) => format!("{}\n\nDeprecated: {}", doc.trim_end(), message),
        None => doc.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize() {
        assert_eq!(sanitize("a */ b"), "a *&#47; b");
        assert_eq!(sanitize("plain"), "plain");
    }

    #[test]
    fn test_reflow_wraps_on_word_boundary() {
        let lines = reflow("the quick brown fox jumps", 10);
        assert_eq!(lines, vec!["the quick", "brown fox", "jumps"]);
        for line in &lines {
            assert!(line.len() <= 10);
        }
    }

    #[test]
    fn test_reflow_collapses_whitespace() {
        assert_eq!(reflow("a\n  b\tc", 120), vec!["a b c"]);
        assert!(reflow("   ", 120).is_empty());
    }

    #[test]
    fn test_reflow_long_word() {
        assert_eq!(reflow("a verylongword b", 5), vec!["a", "verylongword", "b"]);
    }

    #[test]
    fn test_reflow_sanitizes() {
        assert_eq!(reflow("ends */ here", 120), vec!["ends *&#47; here"]);
    }

    #[test]
    fn test_doc_lines_drops_trailing_blank() {
        assert_eq!(doc_lines("one\ntwo\n"), vec!["one", "two"]);
        assert_eq!(doc_lines("one\n\ntwo"), vec!["one", "", "two"]);
    }

    #[test]
    fn test_with_deprecation() {
        assert_eq!(with_deprecation("Doc.", None), "Doc.");
        assert_eq!(
            with_deprecation("Doc.\n", Some("use x")),
            "Doc.\n\nDeprecated: use x"
        );
        assert_eq!(with_deprecation("", Some("gone")), "Deprecated: gone");
    }
}

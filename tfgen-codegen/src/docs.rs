//! Documentation sources for resources and data sources.
//!
//! Docs are Terraform-style markdown pages: `r/<stem>.html.markdown` for
//! resources and `d/<stem>.html.markdown` for data sources.

use std::{
    collections::BTreeMap,
    fs,
    path::{Path, PathBuf},
};

/// Which kind of item a doc page describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocKind {
    Resource,
    DataSource,
}

impl DocKind {
    fn dir(&self) -> &'static str {
        match self {
            DocKind::Resource => "r",
            DocKind::DataSource => "d",
        }
    }
}

/// Parsed documentation for one item.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedDoc {
    pub description: String,
    /// Argument docs keyed by raw field name.
    pub arguments: BTreeMap<String, String>,
    /// Attribute docs keyed by raw field name.
    pub attributes: BTreeMap<String, String>,
}

impl ParsedDoc {
    /// Doc for a field: the argument doc, else the attribute doc.
    pub fn field(&self, key: &str) -> Option<&str> {
        self.arguments
            .get(key)
            .or_else(|| self.attributes.get(key))
            .map(String::as_str)
    }
}

/// Outcome of a doc lookup.
///
/// A missing page is not a problem; an ambiguous one carries a warning.
#[derive(Debug, Default)]
pub struct DocLookup {
    pub doc: Option<ParsedDoc>,
    pub warning: Option<String>,
}

/// Somewhere docs can be read from.
pub trait DocsSource {
    fn lookup(&self, kind: DocKind, stem: &str) -> DocLookup;
}

/// Reads markdown pages from a docs directory.
#[derive(Debug, Clone)]
pub struct MarkdownDocs {
    root: PathBuf,
}

impl MarkdownDocs {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl DocsSource for MarkdownDocs {
    fn lookup(&self, kind: DocKind, stem: &str) -> DocLookup {
        let dir = self.root.join(kind.dir());
        let html = dir.join(format!("{}.html.markdown", stem));
        let plain = dir.join(format!("{}.markdown", stem));

        let mut lookup = DocLookup::default();
        let path = match (html.is_file(), plain.is_file()) {
            (true, true) => {
                lookup.warning = Some(format!(
                    "Ambiguous documentation source for {}: both '{}' and '{}' exist; using the first",
                    stem,
                    html.display(),
                    plain.display()
                ));
                html
            }
            (true, false) => html,
            (false, true) => plain,
            (false, false) => {
                tracing::debug!(stem, "no documentation found");
                return lookup;
            }
        };

        match fs::read_to_string(&path) {
            Ok(markdown) => lookup.doc = Some(parse_markdown(&markdown)),
            Err(err) => {
                lookup.warning = Some(format!(
                    "Could not read documentation '{}': {}",
                    path.display(),
                    err
                ));
            }
        }
        lookup
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Section {
    Preamble,
    Description,
    Arguments,
    Attributes,
    Other,
}

/// Parse a markdown doc page.
///
/// The first paragraph after the `#` title is the description. Bullets of
/// the form ``* `name` - text`` under `## Argument Reference` and
/// `## Attributes Reference` become field docs; indented continuation lines
/// are joined onto the bullet.
pub fn parse_markdown(markdown: &str) -> ParsedDoc {
    let mut doc = ParsedDoc::default();
    let mut section = Section::Preamble;
    let mut description: Vec<&str> = Vec::new();
    let mut last_key: Option<String> = None;
    let mut in_front_matter = false;

    for (index, line) in markdown.lines().enumerate() {
        let trimmed = line.trim();

        if index == 0 && trimmed == "---" {
            in_front_matter = true;
            continue;
        }
        if in_front_matter {
            if trimmed == "---" {
                in_front_matter = false;
            }
            continue;
        }

        if let Some(heading) = trimmed.strip_prefix("## ") {
            last_key = None;
            section = match heading.trim() {
                "Argument Reference" | "Arguments Reference" => Section::Arguments,
                "Attributes Reference" | "Attribute Reference" => Section::Attributes,
                _ => Section::Other,
            };
            continue;
        }
        if trimmed.starts_with("# ") && section == Section::Preamble {
            section = Section::Description;
            continue;
        }

        match section {
            Section::Description => {
                if trimmed.is_empty() {
                    if !description.is_empty() {
                        section = Section::Other;
                    }
                } else {
                    description.push(trimmed);
                }
            }
            Section::Arguments | Section::Attributes => {
                let target = if section == Section::Arguments {
                    &mut doc.arguments
                } else {
                    &mut doc.attributes
                };
                if let Some((key, text)) = parse_bullet(trimmed) {
                    target.insert(key.clone(), text);
                    last_key = Some(key);
                } else if trimmed.is_empty() {
                    last_key = None;
                } else if line.starts_with(char::is_whitespace)
                    && let Some(key) = &last_key
                    && let Some(existing) = target.get_mut(key)
                {
                    existing.push(' ');
                    existing.push_str(trimmed);
                }
            }
            Section::Preamble | Section::Other => {}
        }
    }

    doc.description = description.join("\n");
    doc
}

/// Parse ``* `name` - text`` into its key and text.
fn parse_bullet(line: &str) -> Option<(String, String)> {
    let rest = line.strip_prefix("* `")?;
    let (key, rest) = rest.split_once('`')?;
    let text = rest
        .trim_start()
        .strip_prefix('-')
        .or_else(|| rest.trim_start().strip_prefix(':'))
        .unwrap_or(rest)
        .trim();
    Some((key.to_string(), text.to_string()))
}

/// Merge argument or attribute docs borrowed from another item.
pub fn merge_docs(target: &mut ParsedDoc, from: &ParsedDoc, arguments: bool, attributes: bool) {
    if arguments {
        for (key, text) in &from.arguments {
            target.arguments.entry(key.clone()).or_insert_with(|| text.clone());
        }
    }
    if attributes {
        for (key, text) in &from.attributes {
            target.attributes.entry(key.clone()).or_insert_with(|| text.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    const WIDGET: &str = "---
layout: \"example\"
page_title: \"Example: example_widget\"
---

# example\\_widget

Provides a widget resource.
Widgets are small.

## Example Usage

Some text.

## Argument Reference

The following arguments are supported:

* `name` - (Required) The name of the widget.
* `tags` - (Optional) A mapping of tags
  to assign to the widget.

## Attributes Reference

* `arn` - The ARN of the widget.
";

    #[test]
    fn test_parse_markdown() {
        let doc = parse_markdown(WIDGET);
        assert_eq!(doc.description, "Provides a widget resource.\nWidgets are small.");
        assert_eq!(doc.field("name"), Some("(Required) The name of the widget."));
        assert_eq!(
            doc.field("tags"),
            Some("(Optional) A mapping of tags to assign to the widget.")
        );
        assert_eq!(doc.field("arn"), Some("The ARN of the widget."));
        assert_eq!(doc.field("missing"), None);
    }

    #[test]
    fn test_parse_bullet() {
        assert_eq!(
            parse_bullet("* `id` - The ID."),
            Some(("id".to_string(), "The ID.".to_string()))
        );
        assert_eq!(parse_bullet("- not a bullet"), None);
    }

    #[test]
    fn test_lookup_missing_is_silent() {
        let dir = TempDir::new().unwrap();
        let lookup = MarkdownDocs::new(dir.path()).lookup(DocKind::Resource, "widget");
        assert!(lookup.doc.is_none());
        assert!(lookup.warning.is_none());
    }

    #[test]
    fn test_lookup_ambiguous_prefers_html() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("d")).unwrap();
        fs::write(dir.path().join("d/widget.html.markdown"), "# w\n\nFrom html.\n").unwrap();
        fs::write(dir.path().join("d/widget.markdown"), "# w\n\nFrom plain.\n").unwrap();

        let lookup = MarkdownDocs::new(dir.path()).lookup(DocKind::DataSource, "widget");
        assert_eq!(lookup.doc.unwrap().description, "From html.");
        assert!(lookup.warning.unwrap().starts_with("Ambiguous documentation source"));
    }

    #[test]
    fn test_merge_docs_keeps_own_entries() {
        let mut target = parse_markdown("## Argument Reference\n\n* `name` - Own.\n");
        let from = parse_markdown(WIDGET);
        merge_docs(&mut target, &from, true, false);
        assert_eq!(target.field("name"), Some("Own."));
        assert!(target.arguments.contains_key("tags"));
        assert!(target.attributes.is_empty());
    }
}

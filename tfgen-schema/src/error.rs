use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for tfgen-schema operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

/// Source context for error reporting.
///
/// Carries the source text and its display name so that parse errors can
/// point at the offending span.
///
/// # Example
///
/// ```ignore
/// let ctx = SourceContext::new(content, "schema.json");
/// let doc: RawDocument = serde_json::from_str(content).map_err(|e| ctx.json_error(e))?;
/// ```
#[derive(Debug, Clone)]
pub struct SourceContext {
    src: String,
    filename: String,
}

impl SourceContext {
    /// Create a new source context.
    pub fn new(src: impl Into<String>, filename: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            filename: filename.into(),
        }
    }

    /// Get the source content.
    pub fn src(&self) -> &str {
        &self.src
    }

    /// Get the filename.
    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// Create a NamedSource for miette error reporting.
    pub fn named_source(&self) -> NamedSource<String> {
        NamedSource::new(&self.filename, self.src.clone())
    }

    /// Create a parse error from a serde_json error.
    pub fn json_error(&self, source: serde_json::Error) -> Box<Error> {
        let span = line_column_offset(&self.src, source.line(), source.column())
            .map(|offset| SourceSpan::from((offset, 0)));
        Box::new(Error::Json {
            src: self.named_source(),
            span,
            source,
        })
    }

    /// Create a parse error from a toml error.
    pub fn toml_error(&self, source: toml::de::Error) -> Box<Error> {
        let span = source.span().map(SourceSpan::from);
        Box::new(Error::Toml {
            src: self.named_source(),
            span,
            source,
        })
    }

    /// Create a malformed schema error for the node at `path`.
    pub fn malformed(&self, path: impl Into<String>, reason: impl Into<String>) -> Box<Error> {
        let path = path.into();
        let span = find_path_span(&self.src, &path);
        Box::new(Error::MalformedSchema {
            src: self.named_source(),
            span,
            path,
            reason: reason.into(),
        })
    }
}

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{path}'")]
    #[diagnostic(code(tfgen::io))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse provider document")]
    #[diagnostic(code(tfgen::json_parse_error))]
    Json {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to parse tfgen.toml")]
    #[diagnostic(code(tfgen::toml_parse_error))]
    Toml {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: toml::de::Error,
    },

    #[error("malformed schema node at '{path}': {reason}")]
    #[diagnostic(
        code(tfgen::malformed_schema),
        help("fields need a known `type`; list, set and map fields need an `element` with `schema` or `resource`")
    )]
    MalformedSchema {
        #[source_code]
        src: NamedSource<String>,
        #[label("in this field")]
        span: Option<SourceSpan>,
        path: String,
        reason: String,
    },

    #[error("missing required input: {what}")]
    #[diagnostic(
        code(tfgen::missing_input),
        help("set it in tfgen.toml under [generate] or pass it on the command line")
    )]
    MissingInput { what: String },
}

impl Error {
    /// Create an I/O error for the given path.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Box<Self> {
        Box::new(Error::Io {
            path: path.into(),
            source,
        })
    }

    /// Create a missing input error.
    pub fn missing_input(what: impl Into<String>) -> Box<Self> {
        Box::new(Error::MissingInput { what: what.into() })
    }
}

/// Convert a 1-based line/column pair into a byte offset.
fn line_column_offset(src: &str, line: usize, column: usize) -> Option<usize> {
    if line == 0 {
        return None;
    }
    let mut offset = 0;
    for (i, text) in src.split_inclusive('\n').enumerate() {
        if i + 1 == line {
            let col = column.saturating_sub(1).min(text.len());
            return Some(offset + col);
        }
        offset += text.len();
    }
    None
}

/// Locate a dotted JSON path by finding each quoted key after the previous one.
fn find_path_span(src: &str, path: &str) -> Option<SourceSpan> {
    let mut from = 0;
    let mut found = None;
    for segment in path.split('.') {
        let needle = format!("\"{}\"", segment);
        let start = from + src[from..].find(&needle)?;
        found = Some(SourceSpan::from((start, needle.len())));
        from = start + needle.len();
    }
    found
}

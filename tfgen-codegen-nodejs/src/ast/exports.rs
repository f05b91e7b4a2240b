//! TypeScript export builder.

use tfgen_codegen::builder::{CodeFragment, Renderable};

/// Builder for TypeScript export statements.
#[derive(Debug, Clone, Default)]
pub struct Export {
    from: Option<String>,
    named: Vec<String>,
}

impl Export {
    pub fn new() -> Self {
        Self::default()
    }

    /// Re-export everything from another module.
    pub fn all_from(module: impl Into<String>) -> Self {
        Self {
            from: Some(module.into()),
            named: Vec::new(),
        }
    }

    /// Export a named item.
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.named.push(name.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.from.is_none() && self.named.is_empty()
    }
}

impl Renderable for Export {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        match (&self.from, self.named.is_empty()) {
            (Some(from), true) => vec![CodeFragment::line(format!("export * from \"{}\";", from))],
            (Some(from), false) => vec![CodeFragment::line(format!(
                "export {{ {} }} from \"{}\";",
                self.named.join(", "),
                from
            ))],
            (None, false) => vec![CodeFragment::Block {
                header: "export {".to_string(),
                body: self
                    .named
                    .iter()
                    .map(|name| CodeFragment::line(format!("{},", name)))
                    .collect(),
                close: Some("};".to_string()),
            }],
            (None, true) => Vec::new(),
        }
    }
}

//! TypeScript import builder.

use tfgen_codegen::builder::{CodeFragment, Renderable};

/// Builder for TypeScript import statements.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Import {
    from: String,
    namespace: Option<String>,
    named: Vec<String>,
}

impl Import {
    pub fn new(from: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            namespace: None,
            named: Vec::new(),
        }
    }

    /// `import * as <alias> from "<from>"`.
    pub fn namespace(from: impl Into<String>, alias: impl Into<String>) -> Self {
        Self {
            namespace: Some(alias.into()),
            ..Self::new(from)
        }
    }

    /// `import * as pulumi from "@pulumi/pulumi"`.
    pub fn pulumi() -> Self {
        Self::namespace("@pulumi/pulumi", "pulumi")
    }

    /// Import a named export.
    pub fn named(mut self, name: impl Into<String>) -> Self {
        let name = name.into();
        if !self.named.contains(&name) {
            self.named.push(name);
        }
        self
    }

    pub fn from_path(&self) -> &str {
        &self.from
    }

    /// Render the statement.
    pub fn build(&self) -> String {
        match (&self.namespace, self.named.is_empty()) {
            (Some(alias), _) => format!("import * as {} from \"{}\";", alias, self.from),
            (None, false) => format!(
                "import {{ {} }} from \"{}\";",
                self.named.join(", "),
                self.from
            ),
            (None, true) => format!("import \"{}\";", self.from),
        }
    }
}

impl Renderable for Import {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        vec![CodeFragment::line(self.build())]
    }
}

//! Structured TypeScript module bodies.

use tfgen_codegen::builder::{CodeBuilder, CodeFragment, Renderable};

use crate::ast::Import;

/// A TypeScript module: an import section followed by body items.
///
/// Body items are separated by one blank line. The do-not-edit banner is
/// added by the file writer, not here.
#[derive(Default)]
pub struct CodeFile {
    imports: Vec<Import>,
    body: Vec<Vec<CodeFragment>>,
}

impl CodeFile {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an import statement; repeated imports of the same module are merged away.
    pub fn import(mut self, import: Import) -> Self {
        if !self.imports.contains(&import) {
            self.imports.push(import);
        }
        self
    }

    pub fn imports(self, imports: impl IntoIterator<Item = Import>) -> Self {
        imports.into_iter().fold(self, Self::import)
    }

    /// Add a body item.
    #[allow(clippy::should_implement_trait)]
    pub fn add<R: Renderable>(mut self, node: R) -> Self {
        let fragments = node.to_fragments();
        if !fragments.is_empty() {
            self.body.push(fragments);
        }
        self
    }

    pub fn add_all<R: Renderable>(self, nodes: impl IntoIterator<Item = R>) -> Self {
        nodes.into_iter().fold(self, Self::add)
    }

    pub fn render(&self) -> String {
        let mut builder = CodeBuilder::typescript();

        for import in &self.imports {
            builder.emit(import);
        }
        if !self.imports.is_empty() && !self.body.is_empty() {
            builder.push_blank();
        }

        for (i, fragments) in self.body.iter().enumerate() {
            if i > 0 {
                builder.push_blank();
            }
            for fragment in fragments {
                builder.apply_fragment(fragment.clone());
            }
        }

        builder.build()
    }

    pub fn is_empty(&self) -> bool {
        self.imports.is_empty() && self.body.is_empty()
    }
}

/// Pre-rendered lines used as one body item.
#[derive(Debug, Clone)]
pub struct RawCode(String);

impl RawCode {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }
}

impl Renderable for RawCode {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        self.0.lines().map(CodeFragment::line).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::Export;

    #[test]
    fn test_empty_file() {
        let file = CodeFile::new();
        assert!(file.is_empty());
        assert_eq!(file.render(), "");
    }

    #[test]
    fn test_imports_then_body() {
        let code = CodeFile::new()
            .import(Import::pulumi())
            .import(Import::pulumi())
            .add(RawCode::new("const a = 1;"))
            .add(RawCode::new("const b = 2;"))
            .render();
        assert_eq!(
            code,
            "import * as pulumi from \"@pulumi/pulumi\";\n\nconst a = 1;\n\nconst b = 2;\n"
        );
    }

    #[test]
    fn test_empty_items_are_skipped() {
        let code = CodeFile::new()
            .add(Export::new())
            .add(Export::all_from("./widget"))
            .render();
        assert_eq!(code, "export * from \"./widget\";\n");
    }
}

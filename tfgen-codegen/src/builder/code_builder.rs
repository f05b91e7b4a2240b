//! Code builder utility for generating properly indented code.

use tfgen_core::{MAX_WIDTH, doc_lines, reflow};

use super::{CodeFragment, Indent, Renderable};

/// Fluent API for building code with proper indentation.
///
/// Supports both consuming methods (returning `Self`) for chaining and
/// mutable methods (returning `&mut Self`).
///
/// # Example (Consuming API)
///
/// ```
/// use tfgen_codegen::builder::CodeBuilder;
///
/// let code = CodeBuilder::typescript()
///     .line("export class Widget {")
///     .indent()
///     .line("public readonly name: string;")
///     .dedent()
///     .line("}")
///     .build();
///
/// assert_eq!(code, "export class Widget {\n  public readonly name: string;\n}\n");
/// ```
///
/// # Example (Mutable API)
///
/// ```
/// use tfgen_codegen::builder::CodeBuilder;
///
/// let mut builder = CodeBuilder::python();
/// builder
///     .push_line("class Widget(pulumi.CustomResource):")
///     .push_indent()
///     .push_docstring("A widget.")
///     .push_dedent();
/// assert_eq!(
///     builder.build(),
///     "class Widget(pulumi.CustomResource):\n    \"\"\"\n    A widget.\n    \"\"\"\n"
/// );
/// ```
#[derive(Debug, Clone)]
pub struct CodeBuilder {
    indent_level: usize,
    indent: Indent,
    buffer: String,
}

impl CodeBuilder {
    /// Create a new CodeBuilder with the specified indentation.
    pub fn new(indent: Indent) -> Self {
        Self {
            indent_level: 0,
            indent,
            buffer: String::new(),
        }
    }

    /// 2-space indentation (TypeScript).
    pub fn typescript() -> Self {
        Self::new(Indent::TYPESCRIPT)
    }

    /// 4-space indentation (Python).
    pub fn python() -> Self {
        Self::new(Indent::FOUR)
    }

    /// 4-space indentation (C#).
    pub fn csharp() -> Self {
        Self::new(Indent::FOUR)
    }

    /// Tab indentation (Go).
    pub fn go() -> Self {
        Self::new(Indent::GO)
    }

    // =========================================================================
    // Mutable API - methods prefixed with `push_`
    // =========================================================================

    /// Add a line of code with current indentation (mutable).
    pub fn push_line(&mut self, s: &str) -> &mut Self {
        if s.is_empty() {
            self.buffer.push('\n');
            return self;
        }
        self.write_indent();
        self.buffer.push_str(s);
        self.buffer.push('\n');
        self
    }

    /// Add a blank line (mutable).
    pub fn push_blank(&mut self) -> &mut Self {
        self.buffer.push('\n');
        self
    }

    /// Increase indentation level (mutable).
    pub fn push_indent(&mut self) -> &mut Self {
        self.indent_level += 1;
        self
    }

    /// Decrease indentation level (mutable).
    pub fn push_dedent(&mut self) -> &mut Self {
        self.indent_level = self.indent_level.saturating_sub(1);
        self
    }

    /// Add a `/** ... */` comment with the text reflowed to the maximum width.
    pub fn push_jsdoc(&mut self, text: &str) -> &mut Self {
        let lines = reflow(text, self.doc_width(3));
        self.push_star_block(&lines)
    }

    /// Add a `/** ... */` comment keeping the text's own line breaks.
    pub fn push_jsdoc_lines(&mut self, text: &str) -> &mut Self {
        if text.is_empty() {
            return self;
        }
        let lines = doc_lines(text);
        self.push_star_block(&lines)
    }

    /// Add a Python docstring keeping the text's own line breaks.
    pub fn push_docstring(&mut self, text: &str) -> &mut Self {
        if text.is_empty() {
            return self;
        }
        let lines = doc_lines(text);
        self.push_docstring_block(&lines)
    }

    /// Add a Python docstring with the text reflowed to the maximum width.
    pub fn push_reflowed_docstring(&mut self, text: &str) -> &mut Self {
        let lines = reflow(text, self.doc_width(0));
        self.push_docstring_block(&lines)
    }

    /// Add a C# `<summary>` doc comment keeping the text's own line breaks.
    pub fn push_xml_doc(&mut self, text: &str) -> &mut Self {
        if text.is_empty() {
            return self;
        }
        let lines = doc_lines(text);
        self.push_summary_block(&lines)
    }

    /// Add a C# `<summary>` doc comment reflowed to the maximum width.
    pub fn push_reflowed_xml_doc(&mut self, text: &str) -> &mut Self {
        let lines = reflow(text, self.doc_width(4));
        self.push_summary_block(&lines)
    }

    /// Add reflowed `//` comment lines.
    pub fn push_line_comment(&mut self, text: &str) -> &mut Self {
        for line in reflow(text, self.doc_width(3)) {
            self.push_line(&format!("// {}", line));
        }
        self
    }

    /// Emit a Renderable node (mutable).
    pub fn emit(&mut self, node: &impl Renderable) -> &mut Self {
        for fragment in node.to_fragments() {
            self.apply_fragment(fragment);
        }
        self
    }

    /// Apply a single code fragment.
    pub fn apply_fragment(&mut self, fragment: CodeFragment) {
        match fragment {
            CodeFragment::Line(s) => {
                self.push_line(&s);
            }
            CodeFragment::Block {
                header,
                body,
                close,
            } => {
                self.push_line(&header);
                self.push_indent();
                for f in body {
                    self.apply_fragment(f);
                }
                self.push_dedent();
                if let Some(c) = close {
                    self.push_line(&c);
                }
            }
            CodeFragment::JsDoc(text) => {
                self.push_jsdoc(&text);
            }
            CodeFragment::JsDocLines(text) => {
                self.push_jsdoc_lines(&text);
            }
        }
    }

    // =========================================================================
    // Consuming API
    // =========================================================================

    /// Add a line of code with current indentation.
    pub fn line(mut self, s: &str) -> Self {
        self.push_line(s);
        self
    }

    /// Add a blank line (no indentation).
    pub fn blank(mut self) -> Self {
        self.push_blank();
        self
    }

    /// Increase indentation level.
    pub fn indent(mut self) -> Self {
        self.push_indent();
        self
    }

    /// Decrease indentation level.
    pub fn dedent(mut self) -> Self {
        self.push_dedent();
        self
    }

    /// Add a block without a closing line (Python).
    pub fn block<F>(self, header: &str, f: F) -> Self
    where
        F: FnOnce(Self) -> Self,
    {
        let builder = self.line(header).indent();
        f(builder).dedent()
    }

    /// Add a reflowed JSDoc comment.
    pub fn jsdoc(mut self, text: &str) -> Self {
        self.push_jsdoc(text);
        self
    }

    /// Add a Python docstring.
    pub fn docstring(mut self, text: &str) -> Self {
        self.push_docstring(text);
        self
    }

    /// Consume the builder and return the generated code.
    pub fn build(self) -> String {
        self.buffer
    }

    /// Get a reference to the current buffer content.
    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    fn write_indent(&mut self) {
        for _ in 0..self.indent_level {
            self.buffer.push_str(self.indent.as_str());
        }
    }

    /// Columns left for comment text after indentation and a marker.
    fn doc_width(&self, marker: usize) -> usize {
        MAX_WIDTH
            .saturating_sub(self.indent_level * self.indent.width() + marker)
            .max(20)
    }

    fn push_docstring_block(&mut self, lines: &[String]) -> &mut Self {
        if lines.is_empty() {
            return self;
        }
        self.push_line("\"\"\"");
        for line in lines {
            self.push_line(&line.replace("\"\"\"", "\\\"\\\"\\\""));
        }
        self.push_line("\"\"\"")
    }

    fn push_summary_block(&mut self, lines: &[String]) -> &mut Self {
        if lines.is_empty() {
            return self;
        }
        self.push_line("/// <summary>");
        for line in lines {
            let escaped = line
                .replace('&', "&amp;")
                .replace('<', "&lt;")
                .replace('>', "&gt;");
            if escaped.is_empty() {
                self.push_line("///");
            } else {
                self.push_line(&format!("/// {}", escaped));
            }
        }
        self.push_line("/// </summary>")
    }

    fn push_star_block(&mut self, lines: &[String]) -> &mut Self {
        if lines.is_empty() {
            return self;
        }
        self.push_line("/**");
        for line in lines {
            if line.is_empty() {
                self.push_line(" *");
            } else {
                self.push_line(&format!(" * {}", line));
            }
        }
        self.push_line(" */")
    }
}

impl Default for CodeBuilder {
    fn default() -> Self {
        Self::typescript()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indentation() {
        let code = CodeBuilder::typescript()
            .line("function foo() {")
            .indent()
            .line("return 1;")
            .dedent()
            .line("}")
            .build();

        assert_eq!(code, "function foo() {\n  return 1;\n}\n");
    }

    #[test]
    fn test_empty_line_has_no_indent() {
        let code = CodeBuilder::python().indent().line("").line("x").build();
        assert_eq!(code, "\n    x\n");
    }

    #[test]
    fn test_python_block() {
        let code = CodeBuilder::python()
            .block("def f():", |b| b.line("pass"))
            .line("x = 1")
            .build();
        assert_eq!(code, "def f():\n    pass\nx = 1\n");
    }

    #[test]
    fn test_jsdoc_reflows() {
        let long = "word ".repeat(40);
        let code = CodeBuilder::typescript().indent().jsdoc(&long).build();
        let lines: Vec<&str> = code.lines().collect();
        assert_eq!(lines[0], "  /**");
        assert_eq!(*lines.last().unwrap(), "   */");
        for line in &lines {
            assert!(line.len() <= MAX_WIDTH, "line too long: {}", line);
        }
        assert!(lines.len() > 3);
    }

    #[test]
    fn test_jsdoc_sanitizes_terminator() {
        let code = CodeBuilder::typescript().jsdoc("a */ b").build();
        assert_eq!(code, "/**\n * a *&#47; b\n */\n");
    }

    #[test]
    fn test_empty_docs_emit_nothing() {
        let mut builder = CodeBuilder::typescript();
        builder
            .push_jsdoc("")
            .push_jsdoc_lines("")
            .push_docstring("")
            .push_reflowed_docstring("  ")
            .push_xml_doc("")
            .push_reflowed_xml_doc("")
            .push_line_comment("");
        assert_eq!(builder.build(), "");
    }

    #[test]
    fn test_jsdoc_lines_keep_breaks() {
        let mut builder = CodeBuilder::typescript();
        builder.push_jsdoc_lines("First.\n\nSecond.\n");
        assert_eq!(builder.build(), "/**\n * First.\n *\n * Second.\n */\n");
    }

    #[test]
    fn test_xml_doc_escapes() {
        let mut builder = CodeBuilder::csharp();
        builder.push_xml_doc("Map<string, int> & more");
        assert_eq!(
            builder.build(),
            "/// <summary>\n/// Map&lt;string, int&gt; &amp; more\n/// </summary>\n"
        );
    }

    #[test]
    fn test_reflowed_docs_fit_the_width() {
        let long = "word ".repeat(100);
        let mut python = CodeBuilder::python();
        python.push_indent().push_reflowed_docstring(&long);
        let mut csharp = CodeBuilder::csharp();
        csharp.push_indent().push_indent().push_reflowed_xml_doc(&long);
        let mut go = CodeBuilder::go();
        go.push_indent().push_line_comment(&long);

        for code in [python.build(), csharp.build(), go.build()] {
            let lines: Vec<&str> = code.lines().collect();
            assert!(lines.len() > 3, "{}", code);
            for line in lines {
                assert!(line.len() <= MAX_WIDTH, "line too long: {}", line);
            }
        }
    }

    #[test]
    fn test_reflowed_docstring_joins_lines() {
        let mut builder = CodeBuilder::python();
        builder.push_reflowed_docstring("The name\nof the widget.");
        assert_eq!(builder.build(), "\"\"\"\nThe name of the widget.\n\"\"\"\n");
    }

    #[test]
    fn test_line_comment() {
        let mut builder = CodeBuilder::go();
        builder.push_indent().push_line_comment("The name.");
        assert_eq!(builder.build(), "\t// The name.\n");
    }

    #[test]
    fn test_emit_block_fragment() {
        struct BlockNode;
        impl Renderable for BlockNode {
            fn to_fragments(&self) -> Vec<CodeFragment> {
                vec![
                    CodeFragment::jsdoc("Doc."),
                    CodeFragment::block(
                        "export interface A {",
                        vec![CodeFragment::line("readonly a?: string;")],
                        Some("}".to_string()),
                    ),
                ]
            }
        }

        let mut builder = CodeBuilder::typescript();
        builder.emit(&BlockNode);
        assert_eq!(
            builder.build(),
            "/**\n * Doc.\n */\nexport interface A {\n  readonly a?: string;\n}\n"
        );
    }
}

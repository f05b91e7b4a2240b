//! Do-not-edit banners for generated source files.

/// Name written into generated banners and the VERSION file.
pub const GENERATOR_NAME: &str = "tfgen";

/// Line-comment syntax of a target file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommentStyle {
    /// `// ...` (TypeScript, C#, Go)
    DoubleSlash,
    /// `# ...` (Python, YAML)
    Hash,
    /// `<!-- ... -->` (XML project files)
    Xml,
}

const BANNER: [&str; 2] = [
    "*** WARNING: this file was generated by the tfgen tool. ***",
    "*** Do not edit by hand unless you're certain you know what you are doing! ***",
];

/// Render the banner followed by one blank line.
pub fn generated_header(style: CommentStyle) -> String {
    let mut out = String::new();
    match style {
        CommentStyle::DoubleSlash => {
            for line in BANNER {
                out.push_str("// ");
                out.push_str(line);
                out.push('\n');
            }
        }
        CommentStyle::Hash => {
            for line in BANNER {
                out.push_str("# ");
                out.push_str(line);
                out.push('\n');
            }
        }
        CommentStyle::Xml => {
            out.push_str("<!--\n");
            for line in BANNER {
                out.push_str("    ");
                out.push_str(line);
                out.push('\n');
            }
            out.push_str("-->\n");
        }
    }
    out.push('\n');
    out
}

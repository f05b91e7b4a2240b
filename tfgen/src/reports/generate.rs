//! Generate command report data structures.

use std::path::PathBuf;

use tfgen_schema::Language;

use super::output::{Output, Report};

/// Report data from generating one language package.
#[derive(Debug)]
pub struct GenerateReport {
    pub language: Language,
    pub package: String,
    pub version: String,
    pub output_dir: PathBuf,
    pub result: GenerationResult,
}

/// Result of code generation.
#[derive(Debug)]
pub enum GenerationResult {
    /// Files were written to disk, relative to the output directory.
    Written {
        files: Vec<PathBuf>,
        overlays: Vec<PathBuf>,
    },
    /// Dry-run listing of the files that would be written.
    Preview { files: Vec<String> },
}

impl Report for GenerateReport {
    fn render(&self, out: &mut dyn Output) {
        match &self.result {
            GenerationResult::Written { files, overlays } => {
                out.line(&format!(
                    "✓ Generated {} package {} v{} ({} file{})",
                    self.language,
                    self.package,
                    self.version,
                    files.len() + overlays.len(),
                    if files.len() + overlays.len() == 1 { "" } else { "s" }
                ));
                out.key_value("  Output", &self.output_dir.display().to_string());
                if !overlays.is_empty() {
                    out.section("  Overlays");
                    for overlay in overlays {
                        out.added_item(&overlay.display().to_string());
                    }
                }
            }
            GenerationResult::Preview { files } => {
                out.divider(&format!(
                    "{} → {} (dry run)",
                    self.language,
                    self.output_dir.display()
                ));
                for file in files {
                    out.list_item(file);
                }
            }
        }
        out.newline();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::output::RecordingOutput;

    fn report(result: GenerationResult) -> GenerateReport {
        GenerateReport {
            language: Language::Go,
            package: "example".into(),
            version: "1.2.3".into(),
            output_dir: PathBuf::from("pack/go"),
            result,
        }
    }

    #[test]
    fn test_render_written() {
        let mut out = RecordingOutput::default();
        report(GenerationResult::Written {
            files: vec![PathBuf::from("go.mod"), PathBuf::from("widget.go")],
            overlays: vec![PathBuf::from("s3/helpers.go")],
        })
        .render(&mut out);

        assert_eq!(
            out.lines,
            vec![
                "✓ Generated go package example v1.2.3 (3 files)",
                "  Output: pack/go",
                "  Overlays:",
                "  + s3/helpers.go",
                "",
            ]
        );
    }

    #[test]
    fn test_render_preview() {
        let mut out = RecordingOutput::default();
        report(GenerationResult::Preview {
            files: vec!["go.mod".into()],
        })
        .render(&mut out);

        assert_eq!(out.lines, vec!["── go → pack/go (dry run) ──", "  - go.mod", ""]);
    }
}

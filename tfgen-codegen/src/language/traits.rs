//! Language-agnostic code generation traits.

use std::path::Path;

use eyre::Result;
use tfgen_ir::TypeRef;

use super::{EmitPlan, GenerateResult};

/// Trait for language-specific emitters.
///
/// Implement this trait to add support for generating an SDK in a new language.
/// Emitters render into an [`EmitPlan`]; writing is shared.
pub trait LanguageCodegen {
    /// Language identifier (e.g., "nodejs", "python", "go")
    fn language(&self) -> &'static str;

    /// File extension for generated source files (e.g., "ts", "py", "go")
    fn file_extension(&self) -> &'static str;

    /// Render every file this emitter produces.
    fn plan(&self) -> Result<EmitPlan>;

    /// Preview generated files without writing to disk, sorted by path.
    fn preview(&self) -> Result<Vec<PreviewFile>> {
        let plan = self.plan()?;
        let mut files: Vec<PreviewFile> = plan
            .files()
            .iter()
            .map(|f| PreviewFile {
                path: f.path().display().to_string(),
                content: f.content().to_string(),
            })
            .collect();
        files.sort_by(|a, b| a.path.cmp(&b.path));
        Ok(files)
    }

    /// Generate all files into the specified output directory.
    fn generate(&self, output_dir: &Path) -> Result<GenerateResult> {
        self.plan()?.write(output_dir)
    }
}

/// A generated file for preview
#[derive(Debug)]
pub struct PreviewFile {
    /// Relative path from output directory
    pub path: String,
    /// File content
    pub content: String,
}

/// Trait for mapping IR types to language-specific type strings.
///
/// Implement this trait for each target language to provide type mappings.
pub trait TypeMapper {
    /// The target language name
    fn language(&self) -> &'static str;

    /// Map a type in output position.
    fn map_type(&self, ty: &TypeRef) -> String;

    /// Map a type in input position. Defaults to the output mapping.
    fn map_input_type(&self, ty: &TypeRef) -> String {
        self.map_type(ty)
    }
}

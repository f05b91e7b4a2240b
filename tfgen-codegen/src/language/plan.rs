//! The set of files an emitter produces, and writing it to disk.

use std::path::{Path, PathBuf};

use eyre::{Result, bail};
use tfgen_core::{File, GeneratedFile, copy_file};

/// A hand-written overlay file to copy into the output tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverlayCopy {
    /// Destination, relative to the output root.
    pub path: PathBuf,
    /// Where the file is copied from.
    pub source: PathBuf,
}

/// Everything one emitter will write.
///
/// Paths are unique: a generated file and an overlay landing on the same
/// path is a fatal conflict, reported with both paths.
#[derive(Debug, Default)]
pub struct EmitPlan {
    files: Vec<File>,
    overlays: Vec<OverlayCopy>,
}

/// Result of writing a plan.
#[derive(Debug, Default)]
pub struct GenerateResult {
    /// Generated files, relative to the output root.
    pub written: Vec<PathBuf>,
    /// Overlay files copied, relative to the output root.
    pub copied: Vec<PathBuf>,
}

impl EmitPlan {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a rendered file.
    pub fn add_file(&mut self, file: File) -> Result<()> {
        if let Some(overlay) = self.overlay_at(file.path()) {
            bail!(
                "overlay file '{}' conflicts with generated file '{}'",
                overlay.source.display(),
                file.path().display()
            );
        }
        if self.files.iter().any(|f| f.path() == file.path()) {
            bail!("file '{}' was generated twice", file.path().display());
        }
        self.files.push(file);
        Ok(())
    }

    /// Render and add a generated file.
    pub fn add(&mut self, file: &impl GeneratedFile) -> Result<()> {
        self.add_file(file.to_file())
    }

    /// Add an overlay copy.
    pub fn add_overlay(&mut self, path: impl Into<PathBuf>, source: impl Into<PathBuf>) -> Result<()> {
        let copy = OverlayCopy {
            path: path.into(),
            source: source.into(),
        };
        if let Some(file) = self.files.iter().find(|f| f.path() == copy.path) {
            bail!(
                "overlay file '{}' conflicts with generated file '{}'",
                copy.source.display(),
                file.path().display()
            );
        }
        if let Some(existing) = self.overlay_at(&copy.path) {
            bail!(
                "overlay file '{}' conflicts with overlay file '{}'",
                copy.source.display(),
                existing.source.display()
            );
        }
        self.overlays.push(copy);
        Ok(())
    }

    pub fn files(&self) -> &[File] {
        &self.files
    }

    pub fn overlays(&self) -> &[OverlayCopy] {
        &self.overlays
    }

    /// Look up a generated file by its relative path.
    pub fn file(&self, path: impl AsRef<Path>) -> Option<&File> {
        self.files.iter().find(|f| f.path() == path.as_ref())
    }

    fn overlay_at(&self, path: &Path) -> Option<&OverlayCopy> {
        self.overlays.iter().find(|o| o.path == path)
    }

    /// Write generated files and copy overlays beneath `root`.
    pub fn write(&self, root: &Path) -> Result<GenerateResult> {
        let mut result = GenerateResult::default();

        for overlay in &self.overlays {
            if !overlay.source.is_file() {
                bail!("overlay source '{}' does not exist", overlay.source.display());
            }
        }

        for file in &self.files {
            let target = file.write(root)?;
            tracing::debug!(path = %target.display(), "wrote file");
            result.written.push(file.path().to_path_buf());
        }

        for overlay in &self.overlays {
            copy_file(&overlay.source, &root.join(&overlay.path))?;
            tracing::debug!(from = %overlay.source.display(), to = %overlay.path.display(), "copied overlay");
            result.copied.push(overlay.path.clone());
        }

        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_overlay_after_file_conflicts() {
        let mut plan = EmitPlan::new();
        plan.add_file(File::new("index.ts", "x")).unwrap();
        let err = plan.add_overlay("index.ts", "overlays/index.ts").unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("overlays/index.ts"));
        assert!(msg.contains("generated file 'index.ts'"));
    }

    #[test]
    fn test_file_after_overlay_conflicts() {
        let mut plan = EmitPlan::new();
        plan.add_overlay("helpers.ts", "src/helpers.ts").unwrap();
        let err = plan.add_file(File::new("helpers.ts", "x")).unwrap_err();
        assert!(err.to_string().contains("conflicts with generated file 'helpers.ts'"));
    }

    #[test]
    fn test_duplicate_generated_file() {
        let mut plan = EmitPlan::new();
        plan.add_file(File::new("a.ts", "x")).unwrap();
        assert!(plan.add_file(File::new("a.ts", "y")).is_err());
    }

    #[test]
    fn test_write_files_and_overlays() {
        let src = TempDir::new().unwrap();
        let out = TempDir::new().unwrap();
        let overlay = src.path().join("extra.ts");
        fs::write(&overlay, "export const extra = 1;\n").unwrap();

        let mut plan = EmitPlan::new();
        plan.add_file(File::new("sub/index.ts", "export {};\n")).unwrap();
        plan.add_overlay("sub/extra.ts", &overlay).unwrap();

        let result = plan.write(out.path()).unwrap();
        assert_eq!(result.written, vec![PathBuf::from("sub/index.ts")]);
        assert_eq!(result.copied, vec![PathBuf::from("sub/extra.ts")]);
        assert_eq!(
            fs::read_to_string(out.path().join("sub/extra.ts")).unwrap(),
            "export const extra = 1;\n"
        );
    }

    #[test]
    fn test_missing_overlay_source_is_fatal() {
        let out = TempDir::new().unwrap();
        let mut plan = EmitPlan::new();
        plan.add_file(File::new("a.ts", "x")).unwrap();
        plan.add_overlay("b.ts", "/nonexistent/b.ts").unwrap();

        let err = plan.write(out.path()).unwrap_err();
        assert!(err.to_string().contains("does not exist"));
        assert!(!out.path().join("a.ts").exists());
    }
}

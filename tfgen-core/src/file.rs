use std::path::{Path, PathBuf};

use eyre::{Result, WrapErr};

use crate::{CommentStyle, generated_header};

/// Trait for types that represent a generated file
pub trait GeneratedFile {
    /// Get the file path relative to the output root
    fn path(&self) -> PathBuf;

    /// Get the rules for writing this file
    fn rules(&self) -> FileRules {
        FileRules::default()
    }

    /// Render the file body
    fn render(&self) -> String;

    /// Render the file with its banner, ready to write
    fn contents(&self) -> String {
        match self.rules().header {
            Some(style) => format!("{}{}", generated_header(style), self.render()),
            None => self.render(),
        }
    }

    /// Convert into an in-memory file
    fn to_file(&self) -> File {
        File::new(self.path(), self.contents())
    }
}

/// Write `content` to `path`, creating parent directories.
pub fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .wrap_err_with(|| format!("failed to create directory '{}'", parent.display()))?;
    }
    std::fs::write(path, content)
        .wrap_err_with(|| format!("failed to write '{}'", path.display()))?;
    Ok(())
}

/// Copy `from` to `to`, creating parent directories.
pub fn copy_file(from: &Path, to: &Path) -> Result<()> {
    if let Some(parent) = to.parent() {
        std::fs::create_dir_all(parent)
            .wrap_err_with(|| format!("failed to create directory '{}'", parent.display()))?;
    }
    std::fs::copy(from, to).wrap_err_with(|| {
        format!("failed to copy '{}' to '{}'", from.display(), to.display())
    })?;
    Ok(())
}

/// A rendered file, path relative to the output root
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct File {
    path: PathBuf,
    content: String,
}

impl File {
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }

    /// Get the relative file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the file content
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Write the file beneath `root`
    pub fn write(&self, root: &Path) -> Result<PathBuf> {
        let target = root.join(&self.path);
        write_file(&target, &self.content)?;
        Ok(target)
    }
}

/// Rules that determine how a file is written
#[derive(Debug, Clone, Default)]
pub struct FileRules {
    /// Banner prepended to the rendered body
    pub header: Option<CommentStyle>,
}

impl FileRules {
    pub fn with_header(style: CommentStyle) -> Self {
        Self {
            header: Some(style),
        }
    }
}

//! Project configuration read from `tfgen.toml`.

use std::{
    path::{Path, PathBuf},
    str::FromStr,
};

use serde::Deserialize;

use crate::{Error, Language, Result, error::SourceContext};

/// File name looked up in the working directory.
pub const CONFIG_FILE: &str = "tfgen.toml";

/// Default output directory.
pub const DEFAULT_OUT_DIR: &str = "pack";

/// Default overlays directory.
pub const DEFAULT_OVERLAYS_DIR: &str = "overlays";

/// Root of `tfgen.toml`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GeneratorConfig {
    #[serde(default)]
    pub generate: GenerateSection,
}

/// The `[generate]` table.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GenerateSection {
    pub package: Option<String>,
    pub version: Option<String>,
    /// `-` means stdin.
    pub schema: Option<PathBuf>,
    pub out: Option<PathBuf>,
    pub overlays: Option<PathBuf>,
    pub docs: Option<PathBuf>,
    #[serde(default)]
    pub languages: Vec<Language>,
}

impl GenerateSection {
    pub fn out_dir(&self) -> PathBuf {
        self.out
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUT_DIR))
    }

    pub fn overlays_dir(&self) -> PathBuf {
        self.overlays
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OVERLAYS_DIR))
    }

    /// Whether the schema should be read from stdin.
    pub fn schema_from_stdin(&self) -> bool {
        self.schema.as_deref().is_none_or(|p| p == Path::new("-"))
    }
}

impl FromStr for GeneratorConfig {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        parse_config(s, CONFIG_FILE)
    }
}

impl GeneratorConfig {
    /// Parse a `tfgen.toml` file from the given path.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        parse_config(&content, &path.display().to_string())
    }

    /// Load `tfgen.toml` from `dir` if present.
    pub fn discover(dir: impl AsRef<Path>) -> Result<Option<Self>> {
        let path = dir.as_ref().join(CONFIG_FILE);
        if !path.exists() {
            return Ok(None);
        }
        Self::from_file(path).map(Some)
    }
}

fn parse_config(content: &str, filename: &str) -> Result<GeneratorConfig> {
    let ctx = SourceContext::new(content, filename);
    toml::from_str(content).map_err(|e| ctx.toml_error(e))
}

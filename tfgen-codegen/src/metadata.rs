//! Files every target writes: the project descriptor and the VERSION marker.

use std::path::PathBuf;

use tfgen_core::{GENERATOR_NAME, GeneratedFile};
use tfgen_ir::{Package, Provenance};

/// `Pulumi.yaml`: name, description and runtime of the generated project.
#[derive(Debug, Clone)]
pub struct ProjectDescriptor {
    pub name: String,
    pub description: String,
    pub language: String,
}

impl ProjectDescriptor {
    pub fn new(package: &Package, language: impl Into<String>) -> Self {
        Self {
            name: package.name.clone(),
            description: package.metadata.description.clone(),
            language: language.into(),
        }
    }
}

impl GeneratedFile for ProjectDescriptor {
    fn path(&self) -> PathBuf {
        PathBuf::from("Pulumi.yaml")
    }

    fn render(&self) -> String {
        let mut out = format!("name: {}\n", self.name);
        if !self.description.is_empty() {
            // A JSON string is a valid double-quoted YAML scalar.
            let quoted = serde_json::to_string(&self.description)
                .unwrap_or_else(|_| format!("\"{}\"", self.description));
            out.push_str(&format!("description: {}\n", quoted));
        }
        out.push_str(&format!("language: {}\n", self.language));
        out
    }
}

/// `VERSION`: where the provider schema came from.
///
/// This is the only file that may differ between runs over the same schema.
#[derive(Debug, Clone)]
pub struct VersionFile {
    pub provenance: Option<Provenance>,
}

impl VersionFile {
    pub fn new(package: &Package) -> Self {
        Self {
            provenance: package.provenance.clone(),
        }
    }
}

impl GeneratedFile for VersionFile {
    fn path(&self) -> PathBuf {
        PathBuf::from("VERSION")
    }

    fn render(&self) -> String {
        let mut out = format!("Generated by {} from:\n", GENERATOR_NAME);
        match &self.provenance {
            Some(provenance) => {
                out.push_str(&format!("Repo: {}\n", provenance.repo));
                if let Some(tag) = &provenance.tag {
                    out.push_str(&format!("Tag: {}\n", tag));
                }
                if let Some(commit) = &provenance.commit {
                    out.push_str(&format!("Commit: {}\n", commit));
                }
            }
            None => out.push_str("Repo: unknown\n"),
        }
        out.push('\n');
        out
    }
}

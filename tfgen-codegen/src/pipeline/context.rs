//! Compilation context passed through pipeline phases.

use std::path::PathBuf;

use eyre::{Result, bail};
use tfgen_core::Version;
use tfgen_ir::{Function, Package, Property, Resource};
use tfgen_schema::{DEFAULT_OVERLAYS_DIR, Language, ProviderDocument};

use super::{
    diagnostic::Diagnostic,
    phases::NormalizedProvider,
};
use crate::MultiError;

/// Caller-supplied settings for one generator run.
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    /// Package name; defaults to the provider document's name.
    pub package: Option<String>,
    pub version: Version,
    /// Root of the per-language overlay directories.
    pub overlays_dir: PathBuf,
    /// Terraform-style markdown docs, if any.
    pub docs_dir: Option<PathBuf>,
    /// Target whose overlays are merged into the package.
    pub language: Option<Language>,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            package: None,
            version: Version::default(),
            overlays_dir: PathBuf::from(DEFAULT_OVERLAYS_DIR),
            docs_dir: None,
            language: None,
        }
    }
}

/// Members produced by the resolve phase, before module assembly.
#[derive(Debug, Clone, Default)]
pub struct ResolvedProvider {
    pub config: Vec<Property>,
    pub resources: Vec<Resource>,
    pub functions: Vec<Function>,
}

/// Context passed through all pipeline phases.
///
/// Each phase reads what the previous one produced and records warnings
/// and per-item errors in `diagnostics`.
#[derive(Debug)]
pub struct CompilationContext {
    pub document: ProviderDocument,
    pub options: GenerateOptions,
    /// Populated by the normalize phase.
    pub normalized: Option<NormalizedProvider>,
    /// Populated by the resolve phase.
    pub resolved: Option<ResolvedProvider>,
    /// Populated by the assemble phase.
    pub package: Option<Package>,
    pub diagnostics: Vec<Diagnostic>,
}

impl CompilationContext {
    pub fn new(document: ProviderDocument, options: GenerateOptions) -> Self {
        Self {
            document,
            options,
            normalized: None,
            resolved: None,
            package: None,
            diagnostics: Vec::new(),
        }
    }

    /// The package name: the explicit option, else the document name.
    pub fn package_name(&self) -> &str {
        match &self.options.package {
            Some(name) if !name.is_empty() => name,
            _ => &self.document.name,
        }
    }

    /// Prefix every raw resource and data-source name must carry.
    pub fn resource_prefix(&self) -> String {
        format!("{}_", self.document.name)
    }

    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(|d| d.severity.is_error())
    }

    pub fn has_warnings(&self) -> bool {
        self.diagnostics.iter().any(|d| d.severity.is_warning())
    }

    pub fn error_count(&self) -> usize {
        self.errors().count()
    }

    pub fn warning_count(&self) -> usize {
        self.warnings().count()
    }

    pub fn add_error(&mut self, phase: &str, message: impl Into<String>) {
        self.add_diagnostic(Diagnostic::error(phase, message));
    }

    pub fn add_warning(&mut self, phase: &str, message: impl Into<String>) {
        self.add_diagnostic(Diagnostic::warning(phase, message));
    }

    /// Record a diagnostic and mirror it to the debug log.
    ///
    /// Printing diagnostics to the user is the caller's job.
    pub fn add_diagnostic(&mut self, diagnostic: Diagnostic) {
        tracing::debug!(
            phase = %diagnostic.phase,
            severity = %diagnostic.severity,
            "{}",
            diagnostic.message
        );
        self.diagnostics.push(diagnostic);
    }

    pub fn errors(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter().filter(|d| d.severity.is_error())
    }

    pub fn warnings(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter().filter(|d| d.severity.is_warning())
    }

    /// Take the assembled package.
    ///
    /// Fails with every accumulated per-item error if any were recorded.
    pub fn into_package(self) -> Result<Package> {
        if self.has_errors() {
            let errors = self.errors().map(|d| d.message.clone()).collect();
            return Err(MultiError::new(errors).into());
        }
        match self.package {
            Some(package) => Ok(package),
            None => bail!("package was not assembled; did the assemble phase run?"),
        }
    }
}

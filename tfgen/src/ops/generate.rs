//! Generate operation - resolve the provider and emit one language package.

use std::path::Path;

use eyre::{Context, Result};
use tfgen_codegen::pipeline::Pipeline;
use tfgen_ir::Package;
use tfgen_schema::{Language, ProviderDocument};

use super::Settings;
use crate::{
    language::LanguageSupport,
    reports::{GenerateReport, GenerationResult},
};

/// A package resolved for one language, with the warnings raised on the way.
#[derive(Debug)]
pub struct Prepared {
    pub package: Package,
    pub warnings: Vec<String>,
}

/// Run normalize, resolve and assemble for one target.
///
/// Fails with every per-item error when any item could not be resolved.
pub fn prepare(
    document: &ProviderDocument,
    settings: &Settings,
    language: Language,
) -> Result<Prepared> {
    let ctx = Pipeline::new()
        .run(document.clone(), settings.options(Some(language)))
        .wrap_err("Pipeline failed")?;

    let mut warnings: Vec<String> = Vec::new();
    for diag in ctx.warnings() {
        if !warnings.contains(&diag.message) {
            warnings.push(diag.message.clone());
        }
    }

    let package = ctx
        .into_package()
        .wrap_err_with(|| format!("Failed to resolve the {} package", language))?;

    Ok(Prepared { package, warnings })
}

/// Emit a prepared package, or only list its files on a dry run.
pub fn emit(
    package: &Package,
    language: Language,
    output_dir: &Path,
    dry_run: bool,
) -> Result<GenerateReport> {
    let generator = LanguageSupport::get(language).generator(package);

    let result = if dry_run {
        let files = generator
            .preview()
            .wrap_err("Failed to render code")?
            .into_iter()
            .map(|f| f.path)
            .collect();
        GenerationResult::Preview { files }
    } else {
        let written = generator
            .generate(output_dir)
            .wrap_err_with(|| format!("Failed to generate code into {}", output_dir.display()))?;
        let extension = generator.file_extension();
        let sources = written
            .written
            .iter()
            .filter(|p| p.extension().is_some_and(|e| e == extension))
            .count();
        tracing::info!(
            %language,
            files = written.written.len(),
            sources,
            overlays = written.copied.len(),
            dir = %output_dir.display(),
            "generated package"
        );
        GenerationResult::Written {
            files: written.written,
            overlays: written.copied,
        }
    };

    Ok(GenerateReport {
        language,
        package: package.name.clone(),
        version: package.version.clone(),
        output_dir: output_dir.to_path_buf(),
        result,
    })
}

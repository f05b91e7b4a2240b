//! Pipeline orchestrator.

use eyre::{Result, bail};
use tfgen_schema::ProviderDocument;

use super::{
    CompilationContext, GenerateOptions, Phase,
    phases::{AssemblePhase, NormalizePhase, ResolvePhase},
};

/// The generation pipeline: normalize → resolve → assemble.
///
/// ```
/// use tfgen_codegen::pipeline::{GenerateOptions, Pipeline};
/// use tfgen_schema::ProviderDocument;
///
/// let document: ProviderDocument = r#"{"name": "example"}"#.parse().unwrap();
/// let ctx = Pipeline::new().run(document, GenerateOptions::default()).unwrap();
/// assert!(!ctx.has_errors());
/// let package = ctx.into_package().unwrap();
/// assert_eq!(package.name, "example");
/// ```
pub struct Pipeline {
    phases: Vec<Box<dyn Phase>>,
}

impl Pipeline {
    pub fn new() -> Self {
        Self {
            phases: vec![
                Box::new(NormalizePhase),
                Box::new(ResolvePhase),
                Box::new(AssemblePhase),
            ],
        }
    }

    /// Run every phase over `document`.
    ///
    /// Returns the context even when per-item errors were recorded; use
    /// [`CompilationContext::into_package`] to turn those into a failure.
    ///
    /// # Errors
    ///
    /// Fails immediately when the package name is missing or a phase fails
    /// fatally.
    pub fn run(
        &self,
        document: ProviderDocument,
        options: GenerateOptions,
    ) -> Result<CompilationContext> {
        let mut ctx = CompilationContext::new(document, options);
        if ctx.package_name().is_empty() {
            bail!("missing required input: package name");
        }

        for phase in &self.phases {
            tracing::debug!(phase = phase.name(), "{}", phase.description());
            phase.run(&mut ctx)?;
            tracing::trace!(
                phase = phase.name(),
                diagnostics = ctx.diagnostics.len(),
                "phase complete"
            );
        }

        Ok(ctx)
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn document() -> ProviderDocument {
        r#"{"name": "example"}"#.parse().expect("valid document")
    }

    #[test]
    fn test_pipeline_runs_phases() {
        let ctx = Pipeline::new()
            .run(document(), GenerateOptions::default())
            .expect("pipeline should succeed");

        assert!(ctx.normalized.is_some());
        assert!(ctx.resolved.is_some());
        assert!(ctx.package.is_some());
        assert!(ctx.diagnostics.is_empty());
    }

    #[test]
    fn test_diagnostics_carry_phase_name() {
        let document: ProviderDocument = r#"{
            "name": "example",
            "resources": {"example_gone": {"tok": "example:index:Gone"}}
        }"#
        .parse()
        .expect("valid document");
        let ctx = Pipeline::new()
            .run(document, GenerateOptions::default())
            .expect("pipeline should succeed");

        assert_eq!(ctx.warning_count(), 1);
        assert_eq!(ctx.diagnostics[0].phase, "normalize");
    }

    #[test]
    fn test_missing_package_name_is_fatal() {
        let err = Pipeline::new()
            .run(ProviderDocument::default(), GenerateOptions::default())
            .unwrap_err();
        assert!(err.to_string().contains("package name"));
    }
}

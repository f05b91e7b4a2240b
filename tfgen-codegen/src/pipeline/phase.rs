//! Pipeline phase trait.

use eyre::Result;

use super::CompilationContext;

/// A phase in the generation pipeline.
///
/// Phases run in order:
/// - `NormalizePhase` - pairs schema fields with their overrides
/// - `ResolvePhase` - decides names, types, optionality, docs and defaults
/// - `AssemblePhase` - groups members into modules
///
/// A phase returns an error only for fatal failures; per-item problems are
/// recorded as diagnostics.
pub trait Phase: Send + Sync {
    /// The name of this phase, recorded on its diagnostics.
    fn name(&self) -> &'static str;

    fn description(&self) -> &'static str;

    fn run(&self, ctx: &mut CompilationContext) -> Result<()>;
}

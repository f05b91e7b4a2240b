//! Overlay selection: hand-written files merged into the generated tree.

use std::path::Path;

use tfgen_ir::{OverlayFile, ROOT_MODULE};
use tfgen_schema::{Language, Overlay, ProviderDocument};

/// The overlay tree declared for `language`, if any.
pub fn overlay_for(document: &ProviderDocument, language: Language) -> Option<&Overlay> {
    match language {
        Language::Nodejs => document.javascript.overlay.as_ref(),
        Language::Python => document.python.overlay.as_ref(),
        Language::Dotnet => document.dotnet.overlay.as_ref(),
        Language::Go => document.golang.overlay.as_ref(),
        Language::Schema => None,
    }
}

/// Overlay files paired with the module they belong to.
#[derive(Debug, Default)]
pub struct CollectedOverlays {
    pub files: Vec<(String, OverlayFile)>,
    pub warnings: Vec<String>,
}

/// Flatten an overlay tree rooted at `base`.
///
/// Root files land in the root module and are read from `base`; module
/// files are read from `base/<module>`. Modules nested deeper than one level
/// are skipped with a warning.
pub fn collect_overlays(overlay: &Overlay, base: &Path) -> CollectedOverlays {
    let mut collected = CollectedOverlays::default();

    for file in &overlay.files {
        collected.files.push((
            ROOT_MODULE.to_string(),
            OverlayFile {
                name: file.clone(),
                source: base.join(file),
            },
        ));
    }

    for (module, sub) in &overlay.modules {
        for file in &sub.files {
            collected.files.push((
                module.clone(),
                OverlayFile {
                    name: file.clone(),
                    source: base.join(module).join(file),
                },
            ));
        }
        if !sub.modules.is_empty() {
            collected.warnings.push(format!(
                "Modules more than one level deep not supported; sub-overlays for {} skipped",
                module
            ));
        }
    }

    collected
}

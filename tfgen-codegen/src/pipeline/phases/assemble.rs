//! Assemble phase - groups resolved members into the package tree.

use eyre::{Result, bail};
use tfgen_ir::{
    CONFIG_MODULE, DotnetOptions, GoOptions, JavaScriptOptions, LanguageOptions, ModuleMember,
    Package, PackageMetadata, Provenance, PythonOptions, ROOT_MODULE,
};
use tfgen_schema::ProviderDocument;

use crate::{
    overlay::{collect_overlays, overlay_for},
    pipeline::{CompilationContext, Diagnostic, Phase},
};

const PHASE: &str = "assemble";

/// Phase that builds the [`Package`].
///
/// Config variables go to the `config` module, the provider resource to the
/// root module, and every other member to the module named by its token.
/// Overlays of the target language are attached to their modules.
pub struct AssemblePhase;

impl Phase for AssemblePhase {
    fn name(&self) -> &'static str {
        PHASE
    }

    fn description(&self) -> &'static str {
        "Group members and overlays into modules"
    }

    fn run(&self, ctx: &mut CompilationContext) -> Result<()> {
        let Some(resolved) = ctx.resolved.as_ref() else {
            bail!("provider was not resolved; did the resolve phase run?");
        };

        let package_name = ctx.package_name().to_string();
        let mut package = Package::new(&package_name, ctx.options.version.to_string());
        package.metadata = metadata(&ctx.document);
        package.provenance = ctx.document.provenance.as_ref().map(|p| Provenance {
            repo: p.repo.clone(),
            tag: p.tag.clone(),
            commit: p.commit.clone(),
        });
        package.language = language_options(&ctx.document);

        let mut diagnostics = Vec::new();

        for variable in &resolved.config {
            if let Err(err) =
                package.add_member(CONFIG_MODULE, ModuleMember::Variable(variable.clone()))
            {
                diagnostics.push(Diagnostic::item_error(PHASE, &package_name, &variable.raw_name, err));
            }
        }

        for resource in &resolved.resources {
            let module = if resource.is_provider {
                ROOT_MODULE
            } else {
                resource.token.module()
            };
            if let Err(err) = package.add_member(module, ModuleMember::Resource(resource.clone())) {
                diagnostics.push(Diagnostic::item_error(PHASE, &package_name, &resource.raw_name, err));
            }
        }

        for function in &resolved.functions {
            let module = function.token.module();
            if let Err(err) = package.add_member(module, ModuleMember::Function(function.clone())) {
                diagnostics.push(Diagnostic::item_error(PHASE, &package_name, &function.raw_name, err));
            }
        }

        if let Some(language) = ctx.options.language
            && let Some(overlay) = overlay_for(&ctx.document, language)
        {
            let base = ctx.options.overlays_dir.join(language.as_str());
            let collected = collect_overlays(overlay, &base);
            for warning in collected.warnings {
                diagnostics.push(Diagnostic::warning(PHASE, warning));
            }
            for (module, file) in collected.files {
                let name = file.name.clone();
                if let Err(err) = package.add_member(&module, ModuleMember::Overlay(file)) {
                    diagnostics.push(Diagnostic::item_error(PHASE, &package_name, &name, err));
                }
            }
        }

        for diagnostic in diagnostics {
            ctx.add_diagnostic(diagnostic);
        }
        tracing::debug!(modules = package.modules.len(), "assembled package");
        ctx.package = Some(package);
        Ok(())
    }
}

fn metadata(document: &ProviderDocument) -> PackageMetadata {
    PackageMetadata {
        description: document.description.clone(),
        keywords: document.keywords.clone(),
        homepage: document.homepage.clone(),
        repository: document.repository.clone(),
        license: document.license.clone(),
    }
}

fn language_options(document: &ProviderDocument) -> LanguageOptions {
    LanguageOptions {
        javascript: JavaScriptOptions {
            dependencies: document.javascript.dependencies.clone(),
            dev_dependencies: document.javascript.dev_dependencies.clone(),
            peer_dependencies: document.javascript.peer_dependencies.clone(),
        },
        python: PythonOptions {
            requires: document.python.requires.clone(),
        },
        dotnet: DotnetOptions {
            package_references: document.dotnet.package_references.clone(),
        },
        go: GoOptions {
            import_base_path: document.golang.import_base_path.clone(),
        },
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use tfgen_schema::{Language, ProviderDocument};

    use super::*;
    use crate::pipeline::{GenerateOptions, Pipeline};

    const DOCUMENT: &str = r#"{
        "name": "example",
        "description": "An example provider.",
        "provider": {
            "schema": {"region": {"type": "string", "optional": true}},
            "resources": {
                "example_widget": {"name": {"type": "string", "required": true}},
                "example_bucket": {"name": {"type": "string", "required": true}}
            },
            "dataSources": {"example_widgets": {"ids": {"type": "list", "computed": true, "element": {"schema": {"type": "string"}}}}}
        },
        "resources": {
            "example_widget": {"tok": "example:index:Widget"},
            "example_bucket": {"tok": "example:s3:Bucket"}
        },
        "dataSources": {"example_widgets": {"tok": "example:index:getWidgets"}},
        "javascript": {
            "dependencies": {"semver": "^5.4.0"},
            "overlay": {"files": ["helpers.ts"], "modules": {"s3": {"files": ["mixins.ts"], "modules": {"deep": {}}}}}
        },
        "provenance": {"repo": "github.com/example/terraform-provider-example", "tag": "v1.0.0"}
    }"#;

    fn assembled(language: Option<Language>) -> (Package, Vec<String>) {
        let document: ProviderDocument = DOCUMENT.parse().expect("valid document");
        let options = GenerateOptions {
            language,
            overlays_dir: PathBuf::from("overlays"),
            ..Default::default()
        };
        let ctx = Pipeline::new().run(document, options).expect("pipeline");
        let warnings = ctx.warnings().map(|d| d.message.clone()).collect();
        (ctx.into_package().expect("package"), warnings)
    }

    #[test]
    fn test_modules_are_grouped() {
        let (package, warnings) = assembled(None);
        assert!(warnings.is_empty());

        let names: Vec<&str> = package.modules.keys().map(String::as_str).collect();
        assert_eq!(names, vec!["config", "index", "s3"]);

        let root = package.root().unwrap();
        let members: Vec<&str> = root.members.keys().map(String::as_str).collect();
        assert_eq!(members, vec!["Provider", "Widget", "getWidgets"]);

        let config = package.config().unwrap();
        assert_eq!(config.variables().count(), 1);
        assert_eq!(package.module("s3").unwrap().resources().count(), 1);

        assert_eq!(package.metadata.description, "An example provider.");
        assert_eq!(package.provenance.as_ref().unwrap().tag.as_deref(), Some("v1.0.0"));
        assert_eq!(
            package.language.javascript.dependencies.get("semver").map(String::as_str),
            Some("^5.4.0")
        );
    }

    #[test]
    fn test_overlays_follow_language() {
        let (package, warnings) = assembled(Some(Language::Nodejs));
        assert_eq!(
            warnings,
            vec!["Modules more than one level deep not supported; sub-overlays for s3 skipped"]
        );

        let root_overlays: Vec<_> = package.root().unwrap().overlays().collect();
        assert_eq!(root_overlays.len(), 1);
        assert_eq!(root_overlays[0].source, PathBuf::from("overlays/nodejs/helpers.ts"));

        let s3_overlays: Vec<_> = package.module("s3").unwrap().overlays().collect();
        assert_eq!(s3_overlays[0].source, PathBuf::from("overlays/nodejs/s3/mixins.ts"));

        let (python, _) = assembled(Some(Language::Python));
        assert_eq!(python.root().unwrap().overlays().count(), 0);
    }

    #[test]
    fn test_duplicate_members_are_errors() {
        let document: ProviderDocument = r#"{
            "name": "example",
            "provider": {"resources": {
                "example_a": {"x": {"type": "string", "optional": true}},
                "example_b": {"x": {"type": "string", "optional": true}}
            }},
            "resources": {
                "example_a": {"tok": "example:index:Thing"},
                "example_b": {"tok": "example:index:Thing"}
            }
        }"#
        .parse()
        .expect("valid document");
        let ctx = Pipeline::new()
            .run(document, GenerateOptions::default())
            .expect("pipeline");

        assert_eq!(ctx.error_count(), 1);
        let message = &ctx.errors().next().unwrap().message;
        assert!(message.starts_with("example:example_b: "));
        assert!(ctx.into_package().is_err());
    }
}

//! Check operation - resolve the provider without emitting anything.

use eyre::{Context, Result};
use tfgen_codegen::pipeline::Pipeline;
use tfgen_schema::ProviderDocument;

use super::Settings;
use crate::reports::CheckReport;

/// Run normalize, resolve and assemble, and summarize the outcome.
///
/// Per-item errors are reported, not returned; only fatal failures are `Err`.
pub fn check(document: ProviderDocument, settings: &Settings) -> Result<CheckReport> {
    let ctx = Pipeline::new()
        .run(document, settings.options(None))
        .wrap_err("Validation failed")?;

    let errors = ctx.errors().map(|d| d.message.clone()).collect();
    let warnings = ctx.warnings().map(|d| d.message.clone()).collect();

    let mut report = CheckReport {
        package: ctx.package_name().to_string(),
        version: settings.version.to_string(),
        modules: 0,
        resources: 0,
        functions: 0,
        config: 0,
        errors,
        warnings,
    };
    if let Some(package) = &ctx.package {
        report.modules = package.modules.len();
        report.resources = package.resources().count();
        report.functions = package.functions().count();
        report.config = package.config().map_or(0, |m| m.variables().count());
    }
    Ok(report)
}

#[cfg(test)]
mod tests {
    use tfgen_codegen::testing::{FULL_DOCUMENT, document};
    use tfgen_schema::GenerateSection;

    use super::*;

    fn settings() -> Settings {
        Settings::resolve(GenerateSection::default(), GenerateSection::default()).unwrap()
    }

    #[test]
    fn test_check_full_document() {
        let report = check(document(FULL_DOCUMENT), &settings()).unwrap();
        assert_eq!(report.package, "example");
        assert_eq!(report.modules, 3);
        // Provider, Widget and Bucket
        assert_eq!(report.resources, 3);
        assert_eq!(report.functions, 1);
        assert_eq!(report.config, 3);
        assert!(report.is_ok(false));
    }

    #[test]
    fn test_check_reports_item_errors() {
        let doc = document(
            r#"{
                "name": "example",
                "provider": {"resources": {"example_widget": {"name": {"type": "string", "required": true}}}},
                "resources": {"example_widget": {"tok": "example:a/b/c:Widget"}}
            }"#,
        );
        let report = check(doc, &settings()).unwrap();
        assert_eq!(report.errors.len(), 1);
        assert!(report.errors[0].starts_with("example:example_widget: "));
        assert!(!report.is_ok(false));
    }

    #[test]
    fn test_deny_warnings() {
        let doc = document(r#"{"name": "example", "resources": {"example_gone": {"tok": "example:index:Gone"}}}"#);
        let report = check(doc, &settings()).unwrap();
        assert_eq!(report.warnings.len(), 1);
        assert!(report.is_ok(false));
        assert!(!report.is_ok(true));
    }
}

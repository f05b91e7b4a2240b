//! Fixtures and helpers for emitter tests.
//!
//! This module is only available when the `testing` feature is enabled
//! or during tests.

use std::path::Path;

use eyre::Result;
use tfgen_core::Version;
use tfgen_ir::Package;
use tfgen_schema::{Language, ProviderDocument};

use crate::pipeline::{GenerateOptions, Pipeline};

/// One resource, `example_widget`, with a required `name` and optional `tags`.
pub const WIDGET_DOCUMENT: &str = r#"{
    "name": "example",
    "description": "An example provider.",
    "provider": {
        "resources": {
            "example_widget": {
                "name": {"type": "string", "required": true, "description": "The name of the widget."},
                "tags": {"type": "map", "optional": true, "element": {"schema": {"type": "string"}}}
            }
        }
    },
    "resources": {
        "example_widget": {"tok": "example:index:Widget"}
    }
}"#;

/// A provider exercising config, sub-modules, nested objects, max-items-one
/// projection, defaults, assets, data sources and language options.
pub const FULL_DOCUMENT: &str = r#"{
    "name": "example",
    "description": "A Pulumi package for creating and managing example cloud resources.",
    "keywords": ["pulumi", "example"],
    "license": "Apache-2.0",
    "homepage": "https://example.com",
    "repository": "https://github.com/example/pulumi-example",
    "provider": {
        "schema": {
            "region": {"type": "string", "required": true, "description": "The region where operations will take place."},
            "skip_credentials_validation": {"type": "bool", "optional": true},
            "max_retries": {"type": "int", "optional": true}
        },
        "resources": {
            "example_widget": {
                "name": {"type": "string", "required": true, "description": "The name of the widget."},
                "tags": {"type": "map", "optional": true, "element": {"schema": {"type": "string"}}},
                "arn": {"type": "string", "computed": true, "description": "The ARN of the widget."},
                "size": {"type": "int", "optional": true, "computed": true},
                "labels": {"type": "list", "optional": true, "element": {"schema": {"type": "string"}}},
                "rule": {"type": "list", "optional": true, "maxItems": 1, "element": {"resource": {
                    "target_arn": {"type": "string", "required": true},
                    "priority": {"type": "int", "optional": true}
                }}}
            },
            "example_bucket": {
                "bucket": {"type": "string", "optional": true, "computed": true},
                "acl": {"type": "string", "optional": true, "deprecated": "Use grants instead."},
                "content_file": {"type": "string", "optional": true},
                "versioning": {"type": "list", "optional": true, "element": {"resource": {
                    "enabled": {"type": "bool", "optional": true}
                }}}
            }
        },
        "dataSources": {
            "example_widgets": {
                "name_prefix": {"type": "string", "optional": true},
                "ids": {"type": "list", "computed": true, "element": {"schema": {"type": "string"}}}
            }
        }
    },
    "config": {
        "skip_credentials_validation": {"default": {"value": false, "envVars": ["EXAMPLE_SKIP_CREDENTIALS_VALIDATION"]}}
    },
    "resources": {
        "example_widget": {"tok": "example:index:Widget"},
        "example_bucket": {
            "tok": "example:s3/bucket:Bucket",
            "fields": {"content_file": {"asset": {"kind": "fileAsset"}}}
        }
    },
    "dataSources": {
        "example_widgets": {"tok": "example:index:getWidgets"}
    },
    "javascript": {
        "dependencies": {"semver": "^5.4.0"},
        "devDependencies": {"@types/node": "^8.0.0"}
    },
    "python": {"requires": {"semver": ">=2.8.1"}},
    "dotnet": {"packageReferences": {"Pulumi": "1.5.0-*"}},
    "golang": {"importBasePath": "github.com/example/pulumi-example/sdk/go/example"},
    "provenance": {"repo": "github.com/example/terraform-provider-example", "tag": "v1.2.3", "commit": "abc1234"}
}"#;

/// Parse a provider document fixture.
pub fn document(json: &str) -> ProviderDocument {
    json.parse().expect("fixture document should parse")
}

/// Run the full pipeline over a fixture and return the assembled package.
pub fn package_from(json: &str, language: Option<Language>) -> Package {
    let options = GenerateOptions {
        version: Version::new(1, 2, 3),
        language,
        ..Default::default()
    };
    Pipeline::new()
        .run(document(json), options)
        .expect("pipeline should run")
        .into_package()
        .expect("fixture should resolve without errors")
}

/// The package built from [`WIDGET_DOCUMENT`].
pub fn widget_package() -> Package {
    package_from(WIDGET_DOCUMENT, None)
}

/// The package built from [`FULL_DOCUMENT`].
pub fn full_package() -> Package {
    package_from(FULL_DOCUMENT, None)
}

/// Generate into a temporary directory and return it.
///
/// The directory is removed when the returned `TempDir` is dropped.
pub fn generate_to_temp<F>(generate: F) -> Result<tempfile::TempDir>
where
    F: FnOnce(&Path) -> Result<()>,
{
    let temp_dir = tempfile::TempDir::new()?;
    generate(temp_dir.path())?;
    Ok(temp_dir)
}

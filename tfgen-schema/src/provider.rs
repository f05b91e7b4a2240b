//! The provider document: provider schema plus its override tree.

use std::{collections::BTreeMap, path::Path, str::FromStr};

use serde::Deserialize;

use crate::{
    DataSourceInfo, DotnetInfo, Error, GolangInfo, JavaScriptInfo, ObjectSchema, Provenance,
    PythonInfo, ResourceInfo, Result, SchemaInfo,
    error::SourceContext,
    field::{RawFieldSchema, RawObjectSchema, convert_object},
};

/// The raw provider schema: config variables, resources and data sources.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProviderSchema {
    pub config: ObjectSchema,
    pub resources: BTreeMap<String, ObjectSchema>,
    pub data_sources: BTreeMap<String, ObjectSchema>,
}

/// A loaded provider document.
#[derive(Debug, Clone, Default)]
pub struct ProviderDocument {
    pub name: String,
    pub description: String,
    pub keywords: Vec<String>,
    pub license: String,
    pub homepage: String,
    pub repository: String,
    pub provider: ProviderSchema,
    pub config: BTreeMap<String, SchemaInfo>,
    pub resources: BTreeMap<String, ResourceInfo>,
    pub data_sources: BTreeMap<String, DataSourceInfo>,
    pub javascript: JavaScriptInfo,
    pub python: PythonInfo,
    pub dotnet: DotnetInfo,
    pub golang: GolangInfo,
    pub provenance: Option<Provenance>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct RawDocument {
    #[serde(default)]
    name: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    keywords: Vec<String>,
    #[serde(default)]
    license: String,
    #[serde(default)]
    homepage: String,
    #[serde(default)]
    repository: String,
    #[serde(default)]
    provider: RawProviderSchema,
    #[serde(default)]
    config: BTreeMap<String, SchemaInfo>,
    #[serde(default)]
    resources: BTreeMap<String, ResourceInfo>,
    #[serde(default)]
    data_sources: BTreeMap<String, DataSourceInfo>,
    #[serde(default)]
    javascript: JavaScriptInfo,
    #[serde(default)]
    python: PythonInfo,
    #[serde(default)]
    dotnet: DotnetInfo,
    #[serde(default)]
    golang: GolangInfo,
    #[serde(default)]
    provenance: Option<Provenance>,
}

#[derive(Default, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct RawProviderSchema {
    #[serde(default)]
    schema: BTreeMap<String, RawFieldSchema>,
    #[serde(default)]
    resources: BTreeMap<String, RawObjectSchema>,
    #[serde(default)]
    data_sources: BTreeMap<String, RawObjectSchema>,
}

impl RawProviderSchema {
    fn convert(self, ctx: &SourceContext) -> Result<ProviderSchema> {
        let config = convert_object(self.schema, "provider.schema", ctx)?;
        let resources = self
            .resources
            .into_iter()
            .map(|(name, fields)| {
                let path = format!("provider.resources.{}", name);
                convert_object(fields, &path, ctx).map(|f| (name, f))
            })
            .collect::<Result<_>>()?;
        let data_sources = self
            .data_sources
            .into_iter()
            .map(|(name, fields)| {
                let path = format!("provider.dataSources.{}", name);
                convert_object(fields, &path, ctx).map(|f| (name, f))
            })
            .collect::<Result<_>>()?;
        Ok(ProviderSchema {
            config,
            resources,
            data_sources,
        })
    }
}

impl FromStr for ProviderDocument {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        parse_document(s, "schema.json")
    }
}

impl ProviderDocument {
    /// Read and parse a provider document from disk.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        parse_document(&content, &path.display().to_string())
    }

    /// Provider name prefix stripped from raw resource names, e.g. `example_`.
    pub fn resource_prefix(&self) -> String {
        format!("{}_", self.name)
    }
}

/// Parse a provider document from content with the given filename for error reporting.
pub fn parse_document(content: &str, filename: &str) -> Result<ProviderDocument> {
    let ctx = SourceContext::new(content, filename);
    let raw: RawDocument = serde_json::from_str(content).map_err(|e| ctx.json_error(e))?;
    let provider = raw.provider.convert(&ctx)?;

    Ok(ProviderDocument {
        name: raw.name,
        description: raw.description,
        keywords: raw.keywords,
        license: raw.license,
        homepage: raw.homepage,
        repository: raw.repository,
        provider,
        config: raw.config,
        resources: raw.resources,
        data_sources: raw.data_sources,
        javascript: raw.javascript,
        python: raw.python,
        dotnet: raw.dotnet,
        golang: raw.golang,
        provenance: raw.provenance,
    })
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;
    use crate::FieldKind;

    const WIDGET: &str = r#"{
        "name": "example",
        "description": "An example provider.",
        "provider": {
            "schema": {"region": {"type": "string", "optional": true}},
            "resources": {
                "example_widget": {
                    "name": {"type": "string", "required": true},
                    "tags": {"type": "map", "optional": true, "element": {"schema": {"type": "string"}}}
                }
            }
        },
        "resources": {"example_widget": {"tok": "example:index:Widget"}},
        "provenance": {"repo": "github.com/example/provider", "tag": "v1.0.0"}
    }"#;

    #[test]
    fn test_parse_document() {
        let doc: ProviderDocument = WIDGET.parse().unwrap();
        assert_eq!(doc.name, "example");
        assert_eq!(doc.resource_prefix(), "example_");
        assert_eq!(doc.provider.config["region"].kind, FieldKind::String);
        let widget = &doc.provider.resources["example_widget"];
        assert!(widget["name"].required);
        assert!(matches!(widget["tags"].kind, FieldKind::Map(_)));
        assert_eq!(doc.resources["example_widget"].tok, "example:index:Widget");
        assert_eq!(doc.provenance.unwrap().tag.as_deref(), Some("v1.0.0"));
    }

    #[test]
    fn test_malformed_resource_field_path() {
        let src = r#"{"name": "example", "provider": {"resources": {
            "example_widget": {"tags": {"type": "map"}}
        }}}"#;
        let err = ProviderDocument::from_str(src).unwrap_err();
        match *err {
            Error::MalformedSchema { path, span, .. } => {
                assert_eq!(path, "provider.resources.example_widget.tags");
                assert!(span.is_some());
            }
            other => panic!("expected malformed schema, got {:?}", other),
        }
    }

    #[test]
    fn test_syntax_error() {
        let err = ProviderDocument::from_str("{\"name\": ").unwrap_err();
        assert!(matches!(*err, Error::Json { .. }));
    }

    #[test]
    fn test_unknown_top_level_key() {
        let err = ProviderDocument::from_str(r#"{"nmae": "x"}"#).unwrap_err();
        assert!(matches!(*err, Error::Json { .. }));
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(WIDGET.as_bytes()).unwrap();
        let doc = ProviderDocument::from_file(file.path()).unwrap();
        assert_eq!(doc.description, "An example provider.");
    }

    #[test]
    fn test_from_missing_file() {
        let err = ProviderDocument::from_file("/nonexistent/schema.json").unwrap_err();
        assert!(matches!(*err, Error::Io { .. }));
    }
}

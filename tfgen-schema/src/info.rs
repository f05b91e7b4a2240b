//! Override info: caller-supplied metadata layered over the provider schema.

use std::{collections::BTreeMap, fmt, sync::Arc};

use serde::Deserialize;
use serde_json::{Map, Value};

/// Per-field override.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SchemaInfo {
    /// Canonical name override.
    #[serde(default)]
    pub name: Option<String>,
    /// Custom type token projected instead of the schema type.
    #[serde(default, rename = "type")]
    pub ty: Option<String>,
    /// Additional accepted input types.
    #[serde(default)]
    pub alt_types: Vec<String>,
    /// Override for the element of a collection.
    #[serde(default)]
    pub element: Option<Box<SchemaInfo>>,
    /// Overrides for the fields of a nested object.
    #[serde(default)]
    pub fields: BTreeMap<String, SchemaInfo>,
    #[serde(default)]
    pub asset: Option<AssetTranslation>,
    #[serde(default)]
    pub default: Option<DefaultInfo>,
    /// Force (or suppress) scalar projection of a collection.
    #[serde(default)]
    pub max_items_one: Option<bool>,
}

impl SchemaInfo {
    pub fn has_default(&self) -> bool {
        self.default.is_some()
    }

    /// Nested override for a field of an object element.
    ///
    /// A container's element override wins over its own `fields` map.
    pub fn field(&self, key: &str) -> Option<&SchemaInfo> {
        self.element
            .as_deref()
            .and_then(|elem| elem.fields.get(key))
            .or_else(|| self.fields.get(key))
    }
}

/// How an asset or archive maps onto a string field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct AssetTranslation {
    pub kind: AssetTranslationKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AssetTranslationKind {
    FileAsset,
    BytesAsset,
    FileArchive,
    BytesArchive,
}

impl AssetTranslation {
    pub fn is_archive(&self) -> bool {
        matches!(
            self.kind,
            AssetTranslationKind::FileArchive | AssetTranslationKind::BytesArchive
        )
    }
}

/// Computes a default from the other input properties of the same resource.
#[derive(Clone)]
pub struct DefaultFn(Arc<dyn Fn(&Map<String, Value>) -> Option<Value> + Send + Sync>);

impl DefaultFn {
    pub fn new(f: impl Fn(&Map<String, Value>) -> Option<Value> + Send + Sync + 'static) -> Self {
        Self(Arc::new(f))
    }

    pub fn call(&self, props: &Map<String, Value>) -> Option<Value> {
        (self.0)(props)
    }
}

impl fmt::Debug for DefaultFn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("DefaultFn(..)")
    }
}

/// Default-value directive for a field.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct DefaultInfo {
    #[serde(default)]
    pub value: Option<Value>,
    /// Environment variables consulted in order; the first set one wins.
    #[serde(default)]
    pub env_vars: Vec<String>,
    /// Programmatic only.
    #[serde(skip)]
    pub from: Option<DefaultFn>,
}

/// Where to find documentation for a resource or data source.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct DocInfo {
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub include_arguments_from: Option<String>,
    #[serde(default)]
    pub include_attributes_from: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ResourceInfo {
    pub tok: String,
    #[serde(default)]
    pub fields: BTreeMap<String, SchemaInfo>,
    #[serde(default)]
    pub docs: Option<DocInfo>,
    #[serde(default)]
    pub delete_before_replace: bool,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct DataSourceInfo {
    pub tok: String,
    #[serde(default)]
    pub fields: BTreeMap<String, SchemaInfo>,
    #[serde(default)]
    pub docs: Option<DocInfo>,
}

/// Hand-written files merged into the generated tree.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Overlay {
    #[serde(default)]
    pub files: Vec<String>,
    #[serde(default)]
    pub modules: BTreeMap<String, Overlay>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct JavaScriptInfo {
    #[serde(default)]
    pub dependencies: BTreeMap<String, String>,
    #[serde(default)]
    pub dev_dependencies: BTreeMap<String, String>,
    #[serde(default)]
    pub peer_dependencies: BTreeMap<String, String>,
    #[serde(default)]
    pub overlay: Option<Overlay>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct PythonInfo {
    #[serde(default)]
    pub requires: BTreeMap<String, String>,
    #[serde(default)]
    pub overlay: Option<Overlay>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct DotnetInfo {
    #[serde(default)]
    pub package_references: BTreeMap<String, String>,
    #[serde(default)]
    pub overlay: Option<Overlay>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct GolangInfo {
    #[serde(default)]
    pub import_base_path: Option<String>,
    #[serde(default)]
    pub overlay: Option<Overlay>,
}

/// Where the provider schema came from; recorded in the VERSION file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Provenance {
    #[serde(default)]
    pub repo: String,
    #[serde(default)]
    pub tag: Option<String>,
    #[serde(default)]
    pub commit: Option<String>,
}

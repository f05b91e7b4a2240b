//! `schema.json`: a deterministic dump of the resolved package.

use std::collections::BTreeMap;

use serde::Serialize;
use tfgen_ir::{Function, LanguageOptions, Package, PackageMetadata, Property, Resource};

/// The serialized package.
///
/// Provenance and overlay sources are left out: both depend on where the
/// generator ran, not on the schema.
#[derive(Debug, Serialize)]
pub struct SchemaPackage<'a> {
    pub name: &'a str,
    pub version: &'a str,
    #[serde(flatten)]
    pub metadata: &'a PackageMetadata,
    pub language: &'a LanguageOptions,
    pub modules: BTreeMap<&'a str, SchemaModule<'a>>,
}

/// One module's generated members, in declaration order.
#[derive(Debug, Default, Serialize)]
pub struct SchemaModule<'a> {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub resources: Vec<&'a Resource>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub functions: Vec<&'a Function>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub variables: Vec<&'a Property>,
}

impl<'a> SchemaPackage<'a> {
    pub fn new(package: &'a Package) -> Self {
        let modules = package
            .modules
            .values()
            .map(|module| {
                let entry = SchemaModule {
                    resources: module.resources().collect(),
                    functions: module.functions().collect(),
                    variables: module.variables().collect(),
                };
                (module.name.as_str(), entry)
            })
            .filter(|(_, entry)| {
                !(entry.resources.is_empty()
                    && entry.functions.is_empty()
                    && entry.variables.is_empty())
            })
            .collect();

        Self {
            name: &package.name,
            version: &package.version,
            metadata: &package.metadata,
            language: &package.language,
            modules,
        }
    }
}

/// Name of the generated schema file.
pub const SCHEMA_FILE: &str = "schema.json";

pub struct SchemaJson<'a> {
    package: &'a Package,
}

impl<'a> SchemaJson<'a> {
    pub fn new(package: &'a Package) -> Self {
        Self { package }
    }

    /// Pretty-printed JSON with a trailing newline.
    pub fn to_json(&self) -> serde_json::Result<String> {
        let mut json = serde_json::to_string_pretty(&SchemaPackage::new(self.package))?;
        json.push('\n');
        Ok(json)
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use tfgen_ir::{ModuleMember, OverlayFile, Position, Token, TypeRef};

    use super::*;

    fn package() -> Package {
        let mut package = Package::new("example", "1.2.3");
        let name = Property::new("name", "name", TypeRef::String, Position::Input);
        package
            .add_member(
                "index",
                ModuleMember::Resource(Resource {
                    token: Token::new("example", "index", "Widget"),
                    name: "Widget".into(),
                    raw_name: "example_widget".into(),
                    file_stem: "widget".into(),
                    doc: String::new(),
                    input_properties: vec![name.clone()],
                    output_properties: vec![name],
                    is_provider: false,
                    delete_before_replace: false,
                }),
            )
            .unwrap();
        package
            .add_member(
                "extras",
                ModuleMember::Overlay(OverlayFile {
                    name: "extra.ts".into(),
                    source: PathBuf::from("/tmp/extra.ts"),
                }),
            )
            .unwrap();
        package
    }

    #[test]
    fn test_overlay_only_modules_are_dropped() {
        let package = package();
        let schema = SchemaPackage::new(&package);
        assert_eq!(schema.modules.keys().copied().collect::<Vec<_>>(), vec!["index"]);
        assert_eq!(schema.modules["index"].resources.len(), 1);
    }

    #[test]
    fn test_json_is_stable() {
        let package = package();
        let first = SchemaJson::new(&package).to_json().unwrap();
        let second = SchemaJson::new(&package).to_json().unwrap();
        assert_eq!(first, second);
        assert!(first.ends_with("}\n"));
        assert!(!first.contains("/tmp/extra.ts"));

        let value: serde_json::Value = serde_json::from_str(&first).unwrap();
        assert_eq!(value["name"], "example");
        assert_eq!(value["modules"]["index"]["resources"][0]["token"], "example:index:Widget");
    }
}

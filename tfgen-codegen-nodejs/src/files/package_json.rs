//! `package.json` for the generated npm package.

use std::{collections::BTreeMap, path::PathBuf};

use tfgen_core::GeneratedFile;
use tfgen_ir::Package;

const PULUMI_PACKAGE: &str = "@pulumi/pulumi";
const PULUMI_VERSION: &str = "^3.0.0";
const TYPESCRIPT_VERSION: &str = "^4.3.5";

/// The package.json manifest.
pub struct PackageJson {
    pub name: String,
    pub version: String,
    pub description: String,
    pub keywords: Vec<String>,
    pub homepage: String,
    pub repository: String,
    pub license: String,
    pub dependencies: BTreeMap<String, String>,
    pub dev_dependencies: BTreeMap<String, String>,
    pub peer_dependencies: BTreeMap<String, String>,
}

impl PackageJson {
    pub fn new(package: &Package) -> Self {
        let js = &package.language.javascript;
        let mut dev_dependencies = js.dev_dependencies.clone();
        dev_dependencies
            .entry("typescript".to_string())
            .or_insert_with(|| TYPESCRIPT_VERSION.to_string());
        let mut peer_dependencies = js.peer_dependencies.clone();
        peer_dependencies
            .entry(PULUMI_PACKAGE.to_string())
            .or_insert_with(|| PULUMI_VERSION.to_string());

        Self {
            name: format!("@pulumi/{}", package.name),
            version: package.version.clone(),
            description: package.metadata.description.clone(),
            keywords: package.metadata.keywords.clone(),
            homepage: package.metadata.homepage.clone(),
            repository: package.metadata.repository.clone(),
            license: package.metadata.license.clone(),
            dependencies: js.dependencies.clone(),
            dev_dependencies,
            peer_dependencies,
        }
    }

    fn render_dependencies(deps: &BTreeMap<String, String>) -> String {
        if deps.is_empty() {
            return "{}".to_string();
        }
        let entries: Vec<String> = deps
            .iter()
            .map(|(name, version)| format!("    {}: {}", quote(name), quote(version)))
            .collect();
        format!("{{\n{}\n  }}", entries.join(",\n"))
    }
}

fn quote(s: &str) -> String {
    serde_json::to_string(s).unwrap_or_else(|_| format!("\"{}\"", s))
}

impl GeneratedFile for PackageJson {
    fn path(&self) -> PathBuf {
        PathBuf::from("package.json")
    }

    fn render(&self) -> String {
        let mut fields = vec![
            format!("  \"name\": {}", quote(&self.name)),
            format!("  \"version\": {}", quote(&self.version)),
        ];
        for (key, value) in [
            ("description", &self.description),
            ("homepage", &self.homepage),
            ("repository", &self.repository),
            ("license", &self.license),
        ] {
            if !value.is_empty() {
                fields.push(format!("  \"{}\": {}", key, quote(value)));
            }
        }
        if !self.keywords.is_empty() {
            let keywords: Vec<String> = self.keywords.iter().map(|k| quote(k)).collect();
            fields.push(format!("  \"keywords\": [{}]", keywords.join(", ")));
        }
        fields.push("  \"scripts\": {\n    \"build\": \"tsc\"\n  }".to_string());
        fields.push(format!(
            "  \"dependencies\": {}",
            Self::render_dependencies(&self.dependencies)
        ));
        fields.push(format!(
            "  \"devDependencies\": {}",
            Self::render_dependencies(&self.dev_dependencies)
        ));
        fields.push(format!(
            "  \"peerDependencies\": {}",
            Self::render_dependencies(&self.peer_dependencies)
        ));
        format!("{{\n{}\n}}\n", fields.join(",\n"))
    }
}

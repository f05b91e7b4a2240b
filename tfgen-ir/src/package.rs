//! Modules and the package tree.

use std::collections::BTreeMap;

use indexmap::IndexMap;
use serde::Serialize;

use crate::{Function, IrError, ModuleMember, OverlayFile, Property, ROOT_MODULE, Resource};

/// Name of the reserved configuration module.
pub const CONFIG_MODULE: &str = "config";

/// A named bucket of members, kept in insertion order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Module {
    pub name: String,
    pub members: IndexMap<String, ModuleMember>,
}

impl Module {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            members: IndexMap::new(),
        }
    }

    pub fn is_root(&self) -> bool {
        self.name == ROOT_MODULE
    }

    pub fn is_config(&self) -> bool {
        self.name == CONFIG_MODULE
    }

    /// Add a member; a second member with the same name is an error.
    pub fn add(&mut self, member: ModuleMember) -> Result<(), IrError> {
        let name = member.name().to_string();
        if self.members.contains_key(&name) {
            return Err(IrError::DuplicateMember {
                module: self.name.clone(),
                name,
            });
        }
        self.members.insert(name, member);
        Ok(())
    }

    pub fn resources(&self) -> impl Iterator<Item = &Resource> {
        self.members.values().filter_map(|m| match m {
            ModuleMember::Resource(r) => Some(r),
            _ => None,
        })
    }

    pub fn functions(&self) -> impl Iterator<Item = &Function> {
        self.members.values().filter_map(|m| match m {
            ModuleMember::Function(f) => Some(f),
            _ => None,
        })
    }

    pub fn variables(&self) -> impl Iterator<Item = &Property> {
        self.members.values().filter_map(|m| match m {
            ModuleMember::Variable(v) => Some(v),
            _ => None,
        })
    }

    pub fn overlays(&self) -> impl Iterator<Item = &OverlayFile> {
        self.members.values().filter_map(|m| match m {
            ModuleMember::Overlay(o) => Some(o),
            _ => None,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

/// Descriptive package metadata.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PackageMetadata {
    pub description: String,
    pub keywords: Vec<String>,
    pub homepage: String,
    pub repository: String,
    pub license: String,
}

/// Origin of the provider schema.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Provenance {
    pub repo: String,
    pub tag: Option<String>,
    pub commit: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JavaScriptOptions {
    pub dependencies: BTreeMap<String, String>,
    pub dev_dependencies: BTreeMap<String, String>,
    pub peer_dependencies: BTreeMap<String, String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PythonOptions {
    pub requires: BTreeMap<String, String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DotnetOptions {
    pub package_references: BTreeMap<String, String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GoOptions {
    pub import_base_path: Option<String>,
}

/// Per-language packaging options.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LanguageOptions {
    pub javascript: JavaScriptOptions,
    pub python: PythonOptions,
    pub dotnet: DotnetOptions,
    pub go: GoOptions,
}

/// The assembled package tree.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Package {
    pub name: String,
    pub version: String,
    pub metadata: PackageMetadata,
    pub modules: BTreeMap<String, Module>,
    #[serde(skip)]
    pub provenance: Option<Provenance>,
    #[serde(skip)]
    pub language: LanguageOptions,
}

impl Package {
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
            metadata: PackageMetadata::default(),
            modules: BTreeMap::new(),
            provenance: None,
            language: LanguageOptions::default(),
        }
    }

    /// Add a member to `module`, creating the module on first use.
    pub fn add_member(&mut self, module: &str, member: ModuleMember) -> Result<(), IrError> {
        self.modules
            .entry(module.to_string())
            .or_insert_with(|| Module::new(module))
            .add(member)
    }

    pub fn module(&self, name: &str) -> Option<&Module> {
        self.modules.get(name)
    }

    pub fn root(&self) -> Option<&Module> {
        self.module(ROOT_MODULE)
    }

    pub fn config(&self) -> Option<&Module> {
        self.module(CONFIG_MODULE)
    }

    /// Modules other than the root, in name order.
    pub fn submodules(&self) -> impl Iterator<Item = &Module> {
        self.modules.values().filter(|m| !m.is_root())
    }

    pub fn resources(&self) -> impl Iterator<Item = &Resource> {
        self.modules.values().flat_map(Module::resources)
    }

    pub fn functions(&self) -> impl Iterator<Item = &Function> {
        self.modules.values().flat_map(Module::functions)
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;
    use crate::{Position, TypeRef};

    fn overlay(name: &str) -> ModuleMember {
        ModuleMember::Overlay(OverlayFile {
            name: name.into(),
            source: PathBuf::from(name),
        })
    }

    #[test]
    fn test_add_member_creates_module() {
        let mut pkg = Package::new("example", "1.0.0");
        let region = Property::new("region", "region", TypeRef::String, Position::Input);
        pkg.add_member(CONFIG_MODULE, ModuleMember::Variable(region))
            .unwrap();
        assert!(pkg.config().unwrap().is_config());
        assert_eq!(pkg.config().unwrap().variables().count(), 1);
    }

    #[test]
    fn test_duplicate_member_rejected() {
        let mut module = Module::new("net");
        module.add(overlay("a.ts")).unwrap();
        let err = module.add(overlay("a.ts")).unwrap_err();
        assert_eq!(
            err,
            IrError::DuplicateMember {
                module: "net".into(),
                name: "a.ts".into()
            }
        );
    }

    #[test]
    fn test_members_keep_insertion_order() {
        let mut pkg = Package::new("example", "1.0.0");
        pkg.add_member("net", overlay("b.ts")).unwrap();
        pkg.add_member("net", overlay("a.ts")).unwrap();

        let names: Vec<_> = pkg.module("net").unwrap().members.keys().cloned().collect();
        assert_eq!(names, vec!["b.ts", "a.ts"]);
    }

    #[test]
    fn test_submodules_exclude_root() {
        let mut pkg = Package::new("example", "1.0.0");
        pkg.add_member(ROOT_MODULE, overlay("x.ts")).unwrap();
        pkg.add_member("storage", overlay("y.ts")).unwrap();
        let names: Vec<_> = pkg.submodules().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["storage"]);
        assert!(pkg.root().is_some());
    }
}

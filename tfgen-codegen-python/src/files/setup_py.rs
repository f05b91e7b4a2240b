//! `setup.py` for the generated Python distribution.

use std::{collections::BTreeMap, path::PathBuf};

use tfgen_core::{CommentStyle, FileRules, GeneratedFile};
use tfgen_ir::Package;

use super::{package_dir, quote};

const PULUMI_REQUIREMENT: &str = ">=3.0.0,<4.0.0";

pub struct SetupPy {
    pub name: String,
    pub version: String,
    pub description: String,
    pub keywords: Vec<String>,
    pub homepage: String,
    pub repository: String,
    pub license: String,
    /// Requirement name to version specifier.
    pub requires: BTreeMap<String, String>,
}

impl SetupPy {
    pub fn new(package: &Package) -> Self {
        let mut requires = package.language.python.requires.clone();
        requires
            .entry("pulumi".to_string())
            .or_insert_with(|| PULUMI_REQUIREMENT.to_string());
        Self {
            name: package_dir(&package.name),
            version: package.version.clone(),
            description: package.metadata.description.clone(),
            keywords: package.metadata.keywords.clone(),
            homepage: package.metadata.homepage.clone(),
            repository: package.metadata.repository.clone(),
            license: package.metadata.license.clone(),
            requires,
        }
    }
}

impl GeneratedFile for SetupPy {
    fn path(&self) -> PathBuf {
        PathBuf::from("setup.py")
    }

    fn rules(&self) -> FileRules {
        FileRules::with_header(CommentStyle::Hash)
    }

    fn render(&self) -> String {
        let mut out = String::from("from setuptools import setup, find_packages\n\n");
        out.push_str(&format!("setup(name={},\n", quote(&self.name)));
        out.push_str(&format!("      version={},\n", quote(&self.version)));
        if !self.description.is_empty() {
            out.push_str(&format!("      description={},\n", quote(&self.description)));
        }
        if !self.keywords.is_empty() {
            out.push_str(&format!("      keywords={},\n", quote(&self.keywords.join(" "))));
        }
        if !self.homepage.is_empty() {
            out.push_str(&format!("      url={},\n", quote(&self.homepage)));
        }
        if !self.repository.is_empty() {
            out.push_str("      project_urls={\n");
            out.push_str(&format!("          'Repository': {}\n", quote(&self.repository)));
            out.push_str("      },\n");
        }
        if !self.license.is_empty() {
            out.push_str(&format!("      license={},\n", quote(&self.license)));
        }
        out.push_str("      packages=find_packages(),\n");
        out.push_str("      install_requires=[\n");
        let requires: Vec<String> = self
            .requires
            .iter()
            .map(|(name, spec)| format!("          {}", quote(&format!("{}{}", name, spec))))
            .collect();
        out.push_str(&requires.join(",\n"));
        out.push_str("\n      ],\n");
        out.push_str("      zip_safe=False)\n");
        out
    }
}

#[cfg(test)]
mod tests {
    use tfgen_codegen::testing::{full_package, widget_package};

    use super::*;

    #[test]
    fn test_full_setup_py() {
        let setup = SetupPy::new(&full_package());
        insta::assert_snapshot!(setup.render(), @r#"
        from setuptools import setup, find_packages

        setup(name="pulumi_example",
              version="1.2.3",
              description="A Pulumi package for creating and managing example cloud resources.",
              keywords="pulumi example",
              url="https://example.com",
              project_urls={
                  'Repository': "https://github.com/example/pulumi-example"
              },
              license="Apache-2.0",
              packages=find_packages(),
              install_requires=[
                  "pulumi>=3.0.0,<4.0.0",
                  "semver>=2.8.1"
              ],
              zip_safe=False)
        "#);
    }

    #[test]
    fn test_user_pulumi_requirement_wins() {
        let mut package = widget_package();
        package
            .language
            .python
            .requires
            .insert("pulumi".into(), "==3.1.0".into());
        let setup = SetupPy::new(&package);
        assert_eq!(setup.requires.len(), 1);
        assert!(setup.render().contains("\"pulumi==3.1.0\""));
    }
}

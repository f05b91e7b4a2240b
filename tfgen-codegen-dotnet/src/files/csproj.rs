//! `Pulumi.<Pkg>.csproj` for the generated NuGet package.

use std::{collections::BTreeMap, path::PathBuf};

use tfgen_core::{CommentStyle, FileRules, GeneratedFile, Version};
use tfgen_ir::Package;

use super::root_namespace;

const PULUMI_PACKAGE: &str = "Pulumi";
const PULUMI_VERSION: &str = "3.*";

/// The SDK-style project file.
pub struct Csproj {
    pub name: String,
    pub version: String,
    pub description: String,
    pub keywords: Vec<String>,
    pub homepage: String,
    pub repository: String,
    pub license: String,
    pub package_references: BTreeMap<String, String>,
}

impl Csproj {
    pub fn new(package: &Package) -> Self {
        let mut package_references = package.language.dotnet.package_references.clone();
        package_references
            .entry(PULUMI_PACKAGE.to_string())
            .or_insert_with(|| PULUMI_VERSION.to_string());
        Self {
            name: root_namespace(&package.name),
            version: nuget_version(&package.version),
            description: package.metadata.description.clone(),
            keywords: package.metadata.keywords.clone(),
            homepage: package.metadata.homepage.clone(),
            repository: package.metadata.repository.clone(),
            license: package.metadata.license.clone(),
            package_references,
        }
    }
}

/// The NuGet form of a package version: no leading `v`, and a pre-release
/// collapses to `<base>-*`. Unparseable versions pass through without the `v`.
pub fn nuget_version(version: &str) -> String {
    match version.parse::<Version>() {
        Ok(parsed) => parsed.nuget(),
        Err(_) => version.strip_prefix('v').unwrap_or(version).to_string(),
    }
}

fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

impl GeneratedFile for Csproj {
    fn path(&self) -> PathBuf {
        PathBuf::from(format!("{}.csproj", self.name))
    }

    fn rules(&self) -> FileRules {
        FileRules::with_header(CommentStyle::Xml)
    }

    fn render(&self) -> String {
        let mut properties = vec![
            "<GeneratePackageOnBuild>true</GeneratePackageOnBuild>".to_string(),
            format!("<Version>{}</Version>", escape_xml(&self.version)),
        ];
        for (tag, value) in [
            ("Description", &self.description),
            ("PackageLicenseExpression", &self.license),
            ("PackageProjectUrl", &self.homepage),
            ("RepositoryUrl", &self.repository),
        ] {
            if !value.is_empty() {
                properties.push(format!("<{}>{}</{}>", tag, escape_xml(value), tag));
            }
        }
        if !self.keywords.is_empty() {
            properties.push(format!(
                "<PackageTags>{}</PackageTags>",
                escape_xml(&self.keywords.join(";"))
            ));
        }
        properties.push("<TargetFramework>netcoreapp3.1</TargetFramework>".to_string());
        properties.push("<Nullable>enable</Nullable>".to_string());

        let mut out = String::from("<Project Sdk=\"Microsoft.NET.Sdk\">\n\n  <PropertyGroup>\n");
        for line in properties {
            out.push_str(&format!("    {}\n", line));
        }
        out.push_str("  </PropertyGroup>\n\n  <ItemGroup>\n");
        for (name, version) in &self.package_references {
            out.push_str(&format!(
                "    <PackageReference Include=\"{}\" Version=\"{}\" />\n",
                escape_xml(name),
                escape_xml(version)
            ));
        }
        out.push_str("  </ItemGroup>\n\n</Project>\n");
        out
    }
}

#[cfg(test)]
mod tests {
    use tfgen_codegen::testing::full_package;

    use super::*;

    #[test]
    fn test_nuget_version() {
        assert_eq!(nuget_version("1.2.3"), "1.2.3");
        assert_eq!(nuget_version("v1.2.3"), "1.2.3");
        assert_eq!(nuget_version("v0.5.0-alpha.1+abc"), "0.5.0-*");
        assert_eq!(nuget_version("vnext"), "next");
    }

    #[test]
    fn test_full_csproj() {
        let mut package = full_package();
        package
            .language
            .dotnet
            .package_references
            .insert("Newtonsoft.Json".into(), "12.0.3".into());
        let csproj = Csproj::new(&package);
        assert_eq!(csproj.path(), PathBuf::from("Pulumi.Example.csproj"));
        insta::assert_snapshot!(csproj.render(), @r#"
        <Project Sdk="Microsoft.NET.Sdk">

          <PropertyGroup>
            <GeneratePackageOnBuild>true</GeneratePackageOnBuild>
            <Version>1.2.3</Version>
            <Description>A Pulumi package for creating and managing example cloud resources.</Description>
            <PackageLicenseExpression>Apache-2.0</PackageLicenseExpression>
            <PackageProjectUrl>https://example.com</PackageProjectUrl>
            <RepositoryUrl>https://github.com/example/pulumi-example</RepositoryUrl>
            <PackageTags>pulumi;example</PackageTags>
            <TargetFramework>netcoreapp3.1</TargetFramework>
            <Nullable>enable</Nullable>
          </PropertyGroup>

          <ItemGroup>
            <PackageReference Include="Newtonsoft.Json" Version="12.0.3" />
            <PackageReference Include="Pulumi" Version="1.5.0-*" />
          </ItemGroup>

        </Project>
        "#);
    }
}

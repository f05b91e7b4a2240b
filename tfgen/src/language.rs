//! Unified language dispatch.
//!
//! Centralizes emitter creation and per-language metadata.

use tfgen_codegen::language::LanguageCodegen;
use tfgen_ir::Package;
use tfgen_schema::Language;

/// Language-specific support for code generation.
pub struct LanguageSupport {
    pub language: Language,
    /// One-line summary shown by `tfgen languages`.
    pub description: &'static str,
}

impl LanguageSupport {
    pub fn get(language: Language) -> Self {
        let description = match language {
            Language::Nodejs => "TypeScript package for Node.js (package.json, tsconfig.json)",
            Language::Python => "Python package (setup.py, pulumi_<pkg>/)",
            Language::Dotnet => "C# project (Pulumi.<Pkg>.csproj)",
            Language::Go => "Go module (go.mod, one package per module)",
            Language::Schema => "Language-neutral JSON package schema (schema.json)",
        };
        Self {
            language,
            description,
        }
    }

    /// Every supported target, in display order.
    pub fn all() -> impl Iterator<Item = Self> {
        Language::ALL.into_iter().map(Self::get)
    }

    /// Create the emitter for a resolved package.
    pub fn generator<'a>(&self, package: &'a Package) -> Box<dyn LanguageCodegen + 'a> {
        match self.language {
            Language::Nodejs => Box::new(tfgen_codegen_nodejs::Generator::new(package)),
            Language::Python => Box::new(tfgen_codegen_python::Generator::new(package)),
            Language::Dotnet => Box::new(tfgen_codegen_dotnet::Generator::new(package)),
            Language::Go => Box::new(tfgen_codegen_go::Generator::new(package)),
            Language::Schema => Box::new(tfgen_codegen_schema::Generator::new(package)),
        }
    }
}

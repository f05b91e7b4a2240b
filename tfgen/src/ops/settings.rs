//! Effective settings: `tfgen.toml` layered under command-line flags.

use std::path::{Path, PathBuf};

use eyre::{Result, eyre};
use tfgen_codegen::pipeline::GenerateOptions;
use tfgen_core::Version;
use tfgen_schema::{DEFAULT_OUT_DIR, GenerateSection, Language};

/// Settings for one invocation after merging config and flags.
#[derive(Debug, Clone)]
pub struct Settings {
    pub package: Option<String>,
    pub version: Version,
    /// `None` reads the document from stdin.
    pub schema: Option<PathBuf>,
    /// Output root as given; `None` means the default.
    pub out: Option<PathBuf>,
    pub overlays_dir: PathBuf,
    pub docs_dir: Option<PathBuf>,
    pub languages: Vec<Language>,
}

impl Settings {
    /// Merge `flags` over `config`. Any value set on the command line wins.
    pub fn resolve(config: GenerateSection, flags: GenerateSection) -> Result<Self> {
        let merged = GenerateSection {
            package: flags.package.or(config.package),
            version: flags.version.or(config.version),
            schema: flags.schema.or(config.schema),
            out: flags.out.or(config.out),
            overlays: flags.overlays.or(config.overlays),
            docs: flags.docs.or(config.docs),
            languages: if flags.languages.is_empty() {
                config.languages
            } else {
                flags.languages
            },
        };

        let version = match &merged.version {
            Some(raw) => raw
                .parse::<Version>()
                .map_err(|e| eyre!("invalid --version: {}", e))?,
            None => Version::default(),
        };

        let mut languages = Vec::new();
        for language in &merged.languages {
            if !languages.contains(language) {
                languages.push(*language);
            }
        }

        Ok(Self {
            schema: (!merged.schema_from_stdin())
                .then(|| merged.schema.clone())
                .flatten(),
            overlays_dir: merged.overlays_dir(),
            package: merged.package,
            version,
            out: merged.out,
            docs_dir: merged.docs,
            languages,
        })
    }

    /// Where one language's package is written.
    ///
    /// An explicit output directory is used as-is for a single language;
    /// otherwise each language gets its own subdirectory.
    pub fn output_dir(&self, language: Language) -> PathBuf {
        match &self.out {
            Some(out) if self.languages.len() == 1 => out.clone(),
            Some(out) => out.join(language.as_str()),
            None => Path::new(DEFAULT_OUT_DIR).join(language.as_str()),
        }
    }

    /// Pipeline options for one language.
    pub fn options(&self, language: Option<Language>) -> GenerateOptions {
        GenerateOptions {
            package: self.package.clone(),
            version: self.version.clone(),
            overlays_dir: self.overlays_dir.clone(),
            docs_dir: self.docs_dir.clone(),
            language,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn section(languages: &[Language]) -> GenerateSection {
        GenerateSection {
            languages: languages.to_vec(),
            ..Default::default()
        }
    }

    #[test]
    fn test_flags_override_config() {
        let config = GenerateSection {
            package: Some("fromconfig".into()),
            version: Some("1.0.0".into()),
            schema: Some("schema.json".into()),
            languages: vec![Language::Python],
            ..Default::default()
        };
        let flags = GenerateSection {
            package: Some("fromflag".into()),
            languages: vec![Language::Go],
            ..Default::default()
        };

        let settings = Settings::resolve(config, flags).unwrap();
        assert_eq!(settings.package.as_deref(), Some("fromflag"));
        assert_eq!(settings.version, Version::new(1, 0, 0));
        assert_eq!(settings.schema, Some(PathBuf::from("schema.json")));
        assert_eq!(settings.languages, vec![Language::Go]);
        assert_eq!(settings.overlays_dir, PathBuf::from("overlays"));
    }

    #[test]
    fn test_dash_reads_stdin() {
        let flags = GenerateSection {
            schema: Some("-".into()),
            ..Default::default()
        };
        let settings = Settings::resolve(GenerateSection::default(), flags).unwrap();
        assert_eq!(settings.schema, None);
    }

    #[test]
    fn test_invalid_version() {
        let flags = GenerateSection {
            version: Some("one.two".into()),
            ..Default::default()
        };
        let err = Settings::resolve(GenerateSection::default(), flags).unwrap_err();
        assert!(err.to_string().starts_with("invalid --version"));
    }

    #[test]
    fn test_output_dir() {
        let settings =
            Settings::resolve(GenerateSection::default(), section(&[Language::Go])).unwrap();
        assert_eq!(settings.output_dir(Language::Go), PathBuf::from("pack/go"));

        let mut flags = section(&[Language::Go]);
        flags.out = Some("sdk".into());
        let settings = Settings::resolve(GenerateSection::default(), flags).unwrap();
        assert_eq!(settings.output_dir(Language::Go), PathBuf::from("sdk"));

        let mut flags = section(&[Language::Go, Language::Nodejs, Language::Go]);
        flags.out = Some("sdk".into());
        let settings = Settings::resolve(GenerateSection::default(), flags).unwrap();
        assert_eq!(settings.languages, vec![Language::Go, Language::Nodejs]);
        assert_eq!(settings.output_dir(Language::Nodejs), PathBuf::from("sdk/nodejs"));
    }
}

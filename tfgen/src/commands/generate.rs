use std::path::PathBuf;

use clap::Args;
use eyre::{Result, bail};
use tfgen_schema::{Error, GenerateSection, Language};

use super::{SchemaArgs, UnwrapOrExit, exit_with};
use crate::{
    ops::{self, Settings},
    reports::{Output, Report, TerminalOutput},
};

#[derive(Args)]
pub struct GenerateCommand {
    /// Target languages (defaults to `languages` in tfgen.toml)
    #[arg(value_name = "LANGUAGE")]
    pub languages: Vec<Language>,

    #[command(flatten)]
    pub schema: SchemaArgs,

    /// Output directory; with several languages each gets a subdirectory (defaults to ./pack/<language>)
    #[arg(short, long)]
    pub out: Option<PathBuf>,

    /// Directory holding hand-written overlays, one subdirectory per language
    #[arg(long)]
    pub overlays: Option<PathBuf>,

    /// Package version
    #[arg(long)]
    pub version: Option<String>,

    /// List the files that would be generated without writing to disk
    #[arg(long)]
    pub dry_run: bool,
}

impl GenerateCommand {
    pub fn run(&self) -> Result<()> {
        let config = self.schema.load_config();
        let flags = GenerateSection {
            version: self.version.clone(),
            out: self.out.clone(),
            overlays: self.overlays.clone(),
            languages: self.languages.clone(),
            ..self.schema.section()
        };
        let settings = Settings::resolve(config, flags)?;
        if settings.languages.is_empty() {
            exit_with(Error::missing_input("target language"));
        }

        let document = ops::load_document(settings.schema.as_deref()).unwrap_or_exit();

        let mut out = TerminalOutput::new();
        let mut reported: Vec<String> = Vec::new();
        for &language in &settings.languages {
            let prepared = ops::prepare(&document, &settings, language)?;

            // Most warnings are the same for every language.
            for warning in &prepared.warnings {
                if !reported.contains(warning) {
                    out.warning(warning);
                    reported.push(warning.clone());
                }
            }
            if self.schema.deny_warnings && !prepared.warnings.is_empty() {
                bail!(
                    "{} warning(s) while generating {}; refusing to continue with --deny-warnings",
                    prepared.warnings.len(),
                    language
                );
            }

            let report = ops::emit(
                &prepared.package,
                language,
                &settings.output_dir(language),
                self.dry_run,
            )?;
            report.render(&mut out);
        }

        Ok(())
    }
}

use clap::Args;
use eyre::Result;

use crate::{
    language::LanguageSupport,
    reports::{LanguagesReport, Report, TerminalOutput},
};

#[derive(Args)]
pub struct LanguagesCommand {}

impl LanguagesCommand {
    pub fn run(&self) -> Result<()> {
        let report = LanguagesReport {
            languages: LanguageSupport::all()
                .map(|s| (s.language, s.description))
                .collect(),
        };
        report.render(&mut TerminalOutput::new());
        Ok(())
    }
}

use clap::Args;
use eyre::Result;

use super::{SchemaArgs, UnwrapOrExit};
use crate::{
    ops::{self, Settings},
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct CheckCommand {
    #[command(flatten)]
    pub schema: SchemaArgs,
}

impl CheckCommand {
    /// Run the check command
    pub fn run(&self) -> Result<()> {
        let config = self.schema.load_config();
        let settings = Settings::resolve(config, self.schema.section())?;
        let document = ops::load_document(settings.schema.as_deref()).unwrap_or_exit();

        let report = ops::check(document, &settings)?;
        report.render(&mut TerminalOutput::new());

        if !report.is_ok(self.schema.deny_warnings) {
            std::process::exit(1);
        }
        Ok(())
    }
}

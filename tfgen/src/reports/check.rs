//! Check command report data structures.

use super::output::{Output, Report};

/// Report data from resolving a provider without emitting code.
#[derive(Debug)]
pub struct CheckReport {
    pub package: String,
    pub version: String,
    pub modules: usize,
    /// Resources, including the provider resource.
    pub resources: usize,
    pub functions: usize,
    /// Config variables.
    pub config: usize,
    /// Per-item errors.
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl CheckReport {
    /// No errors, and no warnings either when they are denied.
    pub fn is_ok(&self, deny_warnings: bool) -> bool {
        self.errors.is_empty() && !(deny_warnings && !self.warnings.is_empty())
    }
}

fn plural(count: usize, noun: &str) -> String {
    format!("{} {}{}", count, noun, if count == 1 { "" } else { "s" })
}

impl Report for CheckReport {
    fn render(&self, out: &mut dyn Output) {
        for warning in &self.warnings {
            out.warning(warning);
        }
        for error in &self.errors {
            out.error(error);
        }

        if !self.errors.is_empty() {
            out.line(&format!(
                "✗ {} v{} has {}",
                self.package,
                self.version,
                plural(self.errors.len(), "error")
            ));
            return;
        }

        if !self.warnings.is_empty() {
            out.newline();
        }
        out.line(&format!("✓ {} v{} is valid", self.package, self.version));
        out.newline();
        out.key_value("  Modules", &self.modules.to_string());
        out.key_value("  Resources", &self.resources.to_string());
        out.key_value("  Functions", &self.functions.to_string());
        out.key_value("  Config", &plural(self.config, "variable"));
        if !self.warnings.is_empty() {
            out.key_value("  Warnings", &self.warnings.len().to_string());
        }
    }
}

//! JSON package schema generator.

use eyre::{Result, WrapErr};
use tfgen_codegen::{
    language::{EmitPlan, LanguageCodegen},
    metadata::{ProjectDescriptor, VersionFile},
};
use tfgen_core::File;
use tfgen_ir::Package;

use crate::schema_json::{SCHEMA_FILE, SchemaJson};

/// Renders a resolved [`Package`] as `schema.json`.
pub struct Generator<'a> {
    package: &'a Package,
}

impl LanguageCodegen for Generator<'_> {
    fn language(&self) -> &'static str {
        "schema"
    }

    fn file_extension(&self) -> &'static str {
        "json"
    }

    fn plan(&self) -> Result<EmitPlan> {
        let mut plan = EmitPlan::new();
        plan.add(&ProjectDescriptor::new(self.package, self.language()))?;
        plan.add(&VersionFile::new(self.package))?;

        let schema = SchemaJson::new(self.package);
        let json = schema
            .to_json()
            .wrap_err_with(|| format!("failed to serialize package '{}'", self.package.name))?;
        tracing::debug!(bytes = json.len(), "serialized package schema");
        plan.add_file(File::new(SCHEMA_FILE, json))?;
        Ok(plan)
    }
}

impl<'a> Generator<'a> {
    pub fn new(package: &'a Package) -> Self {
        Self { package }
    }
}

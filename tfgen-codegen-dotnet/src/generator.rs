//! .NET (C#) SDK generator.

use eyre::{Result, WrapErr};
use tfgen_codegen::{
    language::{EmitPlan, LanguageCodegen},
    metadata::{ProjectDescriptor, VersionFile},
};
use tfgen_ir::{Module, ModuleMember, Package};

use crate::files::{ConfigCs, Csproj, FunctionCs, ResourceCs, UtilitiesCs, module_dir};

/// Renders a resolved [`Package`] as a `Pulumi.<Pkg>` C# project.
pub struct Generator<'a> {
    package: &'a Package,
}

impl LanguageCodegen for Generator<'_> {
    fn language(&self) -> &'static str {
        "dotnet"
    }

    fn file_extension(&self) -> &'static str {
        "cs"
    }

    fn plan(&self) -> Result<EmitPlan> {
        let mut plan = EmitPlan::new();
        plan.add(&ProjectDescriptor::new(self.package, self.language()))?;
        plan.add(&VersionFile::new(self.package))?;
        plan.add(&Csproj::new(self.package))?;
        plan.add(&UtilitiesCs::new(&self.package.name, &self.package.version))?;

        for module in self.package.modules.values() {
            self.plan_module(&mut plan, module)
                .wrap_err_with(|| format!("failed to generate module '{}'", module.name))?;
        }
        Ok(plan)
    }
}

impl<'a> Generator<'a> {
    pub fn new(package: &'a Package) -> Self {
        Self { package }
    }

    fn plan_module(&self, plan: &mut EmitPlan, module: &Module) -> Result<()> {
        tracing::debug!(module = %module.name, members = module.members.len(), "rendering module");
        let pkg = &self.package.name;
        let dir = module_dir(&module.name);

        let variables: Vec<_> = module.variables().collect();
        if !variables.is_empty() {
            plan.add(&ConfigCs::new(pkg, variables))?;
        }

        for member in module.members.values() {
            match member {
                ModuleMember::Resource(resource) => {
                    plan.add(&ResourceCs::new(pkg, &module.name, resource))?;
                }
                ModuleMember::Function(function) => {
                    plan.add(&FunctionCs::new(pkg, &module.name, function))?;
                }
                ModuleMember::Overlay(overlay) => {
                    plan.add_overlay(dir.join(&overlay.name), &overlay.source)?;
                }
                ModuleMember::Variable(_) => {}
            }
        }
        Ok(())
    }
}

//! Go SDK generator.

use eyre::{Result, WrapErr};
use tfgen_codegen::{
    language::{EmitPlan, LanguageCodegen},
    metadata::{ProjectDescriptor, VersionFile},
};
use tfgen_ir::{Module, ModuleMember, Package};

use crate::{
    files::{ConfigGo, FunctionGo, GoMod, ResourceGo, UtilitiesGo, import_base_path, module_dir},
    symbols::ModuleSymbols,
};

/// Renders a resolved [`Package`] as a Go module with one package per module.
pub struct Generator<'a> {
    package: &'a Package,
}

impl LanguageCodegen for Generator<'_> {
    fn language(&self) -> &'static str {
        "go"
    }

    fn file_extension(&self) -> &'static str {
        "go"
    }

    fn plan(&self) -> Result<EmitPlan> {
        let pkg = self.package;
        let mut plan = EmitPlan::new();
        plan.add(&ProjectDescriptor::new(pkg, self.language()))?;
        plan.add(&VersionFile::new(pkg))?;
        plan.add(&GoMod::new(import_base_path(
            &pkg.name,
            pkg.language.go.import_base_path.as_deref(),
        )))?;

        for module in pkg.modules.values() {
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
        let symbols = ModuleSymbols::plan(module)?;

        let variables: Vec<_> = module.variables().collect();
        if !variables.is_empty() {
            plan.add(&ConfigGo::new(pkg, variables))?;
        }

        for member in module.members.values() {
            match member {
                ModuleMember::Resource(resource) => {
                    plan.add(&ResourceGo::new(pkg, &module.name, resource))?;
                }
                ModuleMember::Function(function) => {
                    let name = symbols.function_name(function);
                    plan.add(&FunctionGo::new(pkg, &module.name, function, name))?;
                }
                ModuleMember::Overlay(overlay) => {
                    plan.add_overlay(dir.join(&overlay.name), &overlay.source)?;
                }
                ModuleMember::Variable(_) => {}
            }
        }

        if module.members.values().any(|m| !matches!(m, ModuleMember::Overlay(_))) {
            plan.add(&UtilitiesGo::new(pkg, &module.name, &self.package.version))?;
        }
        Ok(())
    }
}

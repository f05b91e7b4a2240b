//! Node.js (TypeScript) SDK generator.

use eyre::{Result, WrapErr};
use tfgen_codegen::{
    language::{EmitPlan, LanguageCodegen},
    metadata::{ProjectDescriptor, VersionFile},
};
use tfgen_ir::{Module, ModuleMember, Package, ROOT_MODULE};

use crate::files::{
    ConfigVarsTs, FunctionTs, IndexTs, PackageJson, ResourceTs, TsConfig, UtilitiesTs, module_dir,
};

/// Renders a resolved [`Package`] as an npm package written in TypeScript.
pub struct Generator<'a> {
    package: &'a Package,
}

impl LanguageCodegen for Generator<'_> {
    fn language(&self) -> &'static str {
        "nodejs"
    }

    fn file_extension(&self) -> &'static str {
        "ts"
    }

    fn plan(&self) -> Result<EmitPlan> {
        let mut plan = EmitPlan::new();
        plan.add(&ProjectDescriptor::new(self.package, self.language()))?;
        plan.add(&VersionFile::new(self.package))?;
        plan.add(&UtilitiesTs::new(&self.package.version))?;

        for module in self.package.modules.values() {
            self.plan_module(&mut plan, module)
                .wrap_err_with(|| format!("failed to generate module '{}'", module.name))?;
        }
        if self.package.root().is_none() {
            self.plan_root_index(&mut plan, &Module::new(ROOT_MODULE))?;
        }

        plan.add(&PackageJson::new(self.package))?;
        let sources: Vec<String> = plan
            .files()
            .iter()
            .map(|f| f.path())
            .chain(plan.overlays().iter().map(|o| o.path.as_path()))
            .filter(|p| p.extension().is_some_and(|ext| ext == "ts"))
            .map(|p| p.display().to_string())
            .collect();
        plan.add(&TsConfig::new(sources))?;

        Ok(plan)
    }
}

impl<'a> Generator<'a> {
    pub fn new(package: &'a Package) -> Self {
        Self { package }
    }

    fn plan_module(&self, plan: &mut EmitPlan, module: &Module) -> Result<()> {
        tracing::debug!(module = %module.name, members = module.members.len(), "rendering module");
        let dir = module_dir(&module.name);

        let variables: Vec<_> = module.variables().collect();
        if !variables.is_empty() {
            plan.add(&ConfigVarsTs::new(&self.package.name, variables))?;
        }

        for member in module.members.values() {
            match member {
                ModuleMember::Resource(resource) => {
                    plan.add(&ResourceTs::new(&module.name, resource))?;
                }
                ModuleMember::Function(function) => {
                    plan.add(&FunctionTs::new(&module.name, function))?;
                }
                ModuleMember::Overlay(overlay) => {
                    plan.add_overlay(dir.join(&overlay.name), &overlay.source)?;
                }
                ModuleMember::Variable(_) => {}
            }
        }

        if module.is_root() {
            self.plan_root_index(plan, module)
        } else {
            plan.add(&IndexTs::new(module))
        }
    }

    fn plan_root_index(&self, plan: &mut EmitPlan, root: &Module) -> Result<()> {
        let submodules = self.package.submodules().map(|m| m.name.clone());
        plan.add(&IndexTs::new(root).with_submodules(submodules))
    }
}

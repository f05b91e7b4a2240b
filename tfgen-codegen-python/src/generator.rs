//! Python SDK generator.

use eyre::{Result, WrapErr};
use tfgen_codegen::{
    language::{EmitPlan, LanguageCodegen},
    metadata::{ProjectDescriptor, VersionFile},
};
use tfgen_ir::{Module, ModuleMember, Package, ROOT_MODULE};

use crate::files::{
    ConfigVarsPy, FunctionPy, InitPy, ResourcePy, SetupPy, TablesPy, UtilitiesPy, module_dir,
};

/// Renders a resolved [`Package`] as a `pulumi_<pkg>` Python distribution.
pub struct Generator<'a> {
    package: &'a Package,
}

impl LanguageCodegen for Generator<'_> {
    fn language(&self) -> &'static str {
        "python"
    }

    fn file_extension(&self) -> &'static str {
        "py"
    }

    fn plan(&self) -> Result<EmitPlan> {
        let pkg = &self.package.name;
        let mut plan = EmitPlan::new();
        plan.add(&ProjectDescriptor::new(self.package, self.language()))?;
        plan.add(&VersionFile::new(self.package))?;
        plan.add(&SetupPy::new(self.package))?;
        plan.add(&UtilitiesPy::new(pkg, &self.package.version))?;
        plan.add(&TablesPy::new(self.package))?;

        for module in self.package.modules.values() {
            self.plan_module(&mut plan, module)
                .wrap_err_with(|| format!("failed to generate module '{}'", module.name))?;
        }
        if self.package.root().is_none() {
            self.plan_root_init(&mut plan, &Module::new(ROOT_MODULE))?;
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
        let dir = module_dir(pkg, &module.name);

        let variables: Vec<_> = module.variables().collect();
        if !variables.is_empty() {
            plan.add(&ConfigVarsPy::new(pkg, variables))?;
        }

        for member in module.members.values() {
            match member {
                ModuleMember::Resource(resource) => {
                    plan.add(&ResourcePy::new(pkg, &module.name, resource))?;
                }
                ModuleMember::Function(function) => {
                    plan.add(&FunctionPy::new(pkg, &module.name, function))?;
                }
                ModuleMember::Overlay(overlay) => {
                    plan.add_overlay(dir.join(&overlay.name), &overlay.source)?;
                }
                ModuleMember::Variable(_) => {}
            }
        }

        if module.is_root() {
            self.plan_root_init(plan, module)
        } else {
            plan.add(&InitPy::new(pkg, module))
        }
    }

    fn plan_root_init(&self, plan: &mut EmitPlan, root: &Module) -> Result<()> {
        let submodules = self.package.submodules().map(|m| m.name.clone());
        plan.add(&InitPy::new(&self.package.name, root).with_submodules(submodules))
    }
}

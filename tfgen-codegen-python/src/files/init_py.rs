//! `__init__.py`: star-imports a module's files; the root also loads sub-packages.

use std::path::PathBuf;

use tfgen_core::GeneratedFile;
use tfgen_ir::{CONFIG_MODULE, Module};

use super::{module_dir, python_header};
use crate::PY_NAMING;

pub struct InitPy {
    package: String,
    module: String,
    exports: Vec<String>,
    submodules: Vec<String>,
}

impl InitPy {
    pub fn new(package: &str, module: &Module) -> Self {
        let mut exports: Vec<String> = Vec::new();
        if module.variables().next().is_some() {
            exports.push("vars".to_string());
        }
        exports.extend(module.resources().map(|r| PY_NAMING.file_name(&r.file_stem)));
        exports.extend(module.functions().map(|f| PY_NAMING.file_name(&f.file_stem)));
        exports.extend(
            module
                .overlays()
                .filter_map(|o| o.name.strip_suffix(".py"))
                .filter(|stem| *stem != "__init__")
                .map(str::to_string),
        );
        Self {
            package: package.to_string(),
            module: module.name.clone(),
            exports,
            submodules: Vec::new(),
        }
    }

    /// Sub-packages the root `__init__.py` lists in `__all__`.
    pub fn with_submodules(mut self, submodules: impl IntoIterator<Item = String>) -> Self {
        self.submodules = submodules.into_iter().collect();
        self
    }
}

impl GeneratedFile for InitPy {
    fn path(&self) -> PathBuf {
        module_dir(&self.package, &self.module).join("__init__.py")
    }

    fn render(&self) -> String {
        let mut out = python_header();
        if !self.submodules.is_empty() {
            out.push_str("import importlib\n");
        }
        if !self.exports.is_empty() {
            out.push_str("# Export this package's modules as members:\n");
            for stem in &self.exports {
                out.push_str(&format!("from .{} import *\n", stem));
            }
        }
        if !self.submodules.is_empty() {
            let names: Vec<String> = self.submodules.iter().map(|m| format!("'{}'", m)).collect();
            if !self.exports.is_empty() {
                out.push('\n');
            }
            out.push_str("# Make subpackages available:\n");
            out.push_str(&format!("__all__ = [{}]\n", names.join(", ")));
            out.push_str("for pkg in __all__:\n");
            out.push_str(&format!("    if pkg != '{}':\n", CONFIG_MODULE));
            out.push_str("        importlib.import_module(f'{__name__}.{pkg}')\n");
        }
        out
    }
}

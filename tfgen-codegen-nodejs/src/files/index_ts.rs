//! `index.ts` re-export files.

use std::path::PathBuf;

use tfgen_core::{CommentStyle, FileRules, GeneratedFile};
use tfgen_ir::{Module, ModuleMember};

use super::module_dir;
use crate::{
    ast::{Export, Import},
    code_file::{CodeFile, RawCode},
};

/// Re-exports every member of a module; the root index also exposes
/// each sub-module as a namespace.
pub struct IndexTs {
    module: String,
    exports: Vec<String>,
    submodules: Vec<String>,
}

impl IndexTs {
    pub fn new(module: &Module) -> Self {
        let mut exports: Vec<String> = Vec::new();
        for member in module.members.values() {
            let stem = match member {
                ModuleMember::Resource(r) => Some(r.file_stem.clone()),
                ModuleMember::Function(f) => Some(f.file_stem.clone()),
                ModuleMember::Variable(_) => Some("vars".to_string()),
                ModuleMember::Overlay(o) => o.name.strip_suffix(".ts").map(str::to_string),
            };
            if let Some(stem) = stem
                && !exports.contains(&stem)
            {
                exports.push(stem);
            }
        }
        Self {
            module: module.name.clone(),
            exports,
            submodules: Vec::new(),
        }
    }

    /// Sub-modules imported and re-exported as namespaces.
    pub fn with_submodules(mut self, submodules: impl IntoIterator<Item = String>) -> Self {
        self.submodules = submodules.into_iter().collect();
        self
    }
}

impl GeneratedFile for IndexTs {
    fn path(&self) -> PathBuf {
        module_dir(&self.module).join("index.ts")
    }

    fn rules(&self) -> FileRules {
        FileRules::with_header(CommentStyle::DoubleSlash)
    }

    fn render(&self) -> String {
        let mut file = CodeFile::new();
        if !self.exports.is_empty() {
            let lines: Vec<String> = self
                .exports
                .iter()
                .map(|stem| format!("export * from \"./{}\";", stem))
                .collect();
            file = file.add(RawCode::new(lines.join("\n")));
        }
        if !self.submodules.is_empty() {
            let imports: Vec<String> = self
                .submodules
                .iter()
                .map(|m| Import::namespace(format!("./{}", m), m).build())
                .collect();
            file = file
                .add(RawCode::new(format!(
                    "// Export sub-modules:\n{}",
                    imports.join("\n")
                )))
                .add(
                    self.submodules
                        .iter()
                        .fold(Export::new(), |e, m| e.named(m)),
                );
        }
        file.render()
    }
}

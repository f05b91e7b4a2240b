//! `tables.py`: name translation between Python attributes and wire properties.

use std::{collections::BTreeMap, path::PathBuf};

use tfgen_core::GeneratedFile;
use tfgen_ir::{Package, Property};

use super::{package_dir, python_header};
use crate::PY_NAMING;

pub struct TablesPy {
    package: String,
    /// Python name to canonical name, for every name that differs.
    snake_to_camel: BTreeMap<String, String>,
}

impl TablesPy {
    pub fn new(package: &Package) -> Self {
        let mut snake_to_camel = BTreeMap::new();
        let mut record = |prop: &Property| {
            let snake = PY_NAMING.field_name(&prop.name);
            if snake != prop.name {
                snake_to_camel.insert(snake, prop.name.clone());
            }
        };
        for module in package.modules.values() {
            for prop in module.variables() {
                visit(prop, &mut record);
            }
            for resource in module.resources() {
                for prop in resource.input_properties.iter().chain(&resource.output_properties) {
                    visit(prop, &mut record);
                }
            }
            for function in module.functions() {
                for prop in function.args.iter().chain(&function.results) {
                    visit(prop, &mut record);
                }
            }
        }
        Self {
            package: package.name.clone(),
            snake_to_camel,
        }
    }

    fn render_table(name: &str, entries: impl Iterator<Item = (String, String)>) -> String {
        let lines: Vec<String> = entries
            .map(|(k, v)| format!("    \"{}\": \"{}\",", k, v))
            .collect();
        if lines.is_empty() {
            format!("{} = {{}}\n", name)
        } else {
            format!("{} = {{\n{}\n}}\n", name, lines.join("\n"))
        }
    }
}

fn visit(prop: &Property, record: &mut impl FnMut(&Property)) {
    record(prop);
    for object in prop.ty.objects() {
        for nested in &object.properties {
            record(nested);
        }
    }
}

impl GeneratedFile for TablesPy {
    fn path(&self) -> PathBuf {
        PathBuf::from(package_dir(&self.package)).join("tables.py")
    }

    fn render(&self) -> String {
        let forward = Self::render_table(
            "_SNAKE_TO_CAMEL_CASE_TABLE",
            self.snake_to_camel.iter().map(|(k, v)| (k.clone(), v.clone())),
        );
        let reverse: BTreeMap<&String, &String> =
            self.snake_to_camel.iter().map(|(k, v)| (v, k)).collect();
        let backward = Self::render_table(
            "_CAMEL_TO_SNAKE_CASE_TABLE",
            reverse.into_iter().map(|(k, v)| (k.clone(), v.clone())),
        );
        format!("{}{}\n{}", python_header(), forward, backward)
    }
}

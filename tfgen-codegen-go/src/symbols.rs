//! Package-level Go identifiers of a module.
//!
//! Every member of a module shares one Go package, so resource types,
//! constructors, getters and data-source functions must not collide.

use std::collections::HashMap;

use eyre::{Result, bail};
use tfgen_core::{lower_first, upper_first};
use tfgen_ir::{Function, Module, Resource};

/// Go function names chosen for the data sources of one module.
#[derive(Debug, Default)]
pub struct ModuleSymbols {
    functions: HashMap<String, String>,
}

impl ModuleSymbols {
    /// Declare every resource identifier, then name each data source.
    ///
    /// A `getX` data source whose name is already taken by the getter of
    /// resource `X` becomes `LookupX`. Any other clash is fatal.
    pub fn plan(module: &Module) -> Result<Self> {
        let mut declared: HashMap<String, String> = HashMap::new();
        for resource in module.resources() {
            let owner = format!("resource {}", resource.token);
            for symbol in resource_symbols(resource) {
                declare(&mut declared, symbol, &owner)?;
            }
        }

        let mut functions = HashMap::new();
        for function in module.functions() {
            let mut name = upper_first(&function.name);
            if declared.contains_key(&name)
                && let Some(rest) = name.strip_prefix("Get")
            {
                name = format!("Lookup{}", rest);
            }

            let owner = format!("data source {}", function.token);
            for symbol in [
                name.clone(),
                format!("{}Args", name),
                format!("{}Result", name),
            ] {
                declare(&mut declared, symbol, &owner)?;
            }
            functions.insert(function.name.clone(), name);
        }
        Ok(Self { functions })
    }

    /// Go name of a data source's invoke function.
    pub fn function_name(&self, function: &Function) -> String {
        self.functions
            .get(&function.name)
            .cloned()
            .unwrap_or_else(|| upper_first(&function.name))
    }
}

fn resource_symbols(resource: &Resource) -> Vec<String> {
    let args = resource.args_type_name();
    let mut symbols = vec![
        resource.name.clone(),
        format!("New{}", resource.name),
        lower_first(&args),
        args,
    ];
    if !resource.is_provider {
        symbols.push(format!("Get{}", resource.name));
    }
    symbols
}

fn declare(declared: &mut HashMap<String, String>, symbol: String, owner: &str) -> Result<()> {
    if let Some(existing) = declared.get(&symbol) {
        bail!(
            "Go identifier '{}' is declared by both {} and {}",
            symbol,
            existing,
            owner
        );
    }
    declared.insert(symbol, owner.to_string());
    Ok(())
}

#[cfg(test)]
mod tests {
    use tfgen_ir::{ModuleMember, Position, Property, TypeRef};

    use super::*;

    fn resource(name: &str) -> Resource {
        Resource {
            token: format!("example:index:{}", name).parse().unwrap(),
            name: name.into(),
            raw_name: format!("example_{}", name.to_lowercase()),
            file_stem: lower_first(name),
            doc: String::new(),
            input_properties: vec![],
            output_properties: vec![],
            is_provider: false,
            delete_before_replace: false,
        }
    }

    fn function(name: &str) -> Function {
        Function {
            token: format!("example:index:{}", name).parse().unwrap(),
            name: name.into(),
            raw_name: "example_widget".into(),
            file_stem: name.into(),
            doc: String::new(),
            args: vec![],
            results: vec![Property::new("id", "id", TypeRef::String, Position::Output)],
        }
    }

    fn module(members: Vec<ModuleMember>) -> Module {
        let mut module = Module::new("index");
        for member in members {
            let key = match &member {
                ModuleMember::Resource(r) => r.name.clone(),
                ModuleMember::Function(f) => f.name.clone(),
                _ => unreachable!(),
            };
            module.members.insert(key, member);
        }
        module
    }

    #[test]
    fn test_get_data_source_beside_resource_becomes_lookup() {
        let f = function("getWidget");
        let m = module(vec![
            ModuleMember::Resource(resource("Widget")),
            ModuleMember::Function(f.clone()),
        ]);
        let symbols = ModuleSymbols::plan(&m).unwrap();
        assert_eq!(symbols.function_name(&f), "LookupWidget");
    }

    #[test]
    fn test_unrelated_data_source_keeps_its_name() {
        let f = function("getWidgets");
        let m = module(vec![
            ModuleMember::Resource(resource("Widget")),
            ModuleMember::Function(f.clone()),
        ]);
        let symbols = ModuleSymbols::plan(&m).unwrap();
        assert_eq!(symbols.function_name(&f), "GetWidgets");
    }

    #[test]
    fn test_data_source_named_like_resource_is_fatal() {
        let m = module(vec![
            ModuleMember::Resource(resource("Widget")),
            ModuleMember::Function(function("widget")),
        ]);
        let err = ModuleSymbols::plan(&m).unwrap_err().to_string();
        assert_eq!(
            err,
            "Go identifier 'Widget' is declared by both resource example:index:Widget and data source example:index:widget"
        );
    }
}

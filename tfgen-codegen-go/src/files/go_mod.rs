//! `go.mod` for the generated module.

use std::path::PathBuf;

use tfgen_core::GeneratedFile;

/// Minimum Go release declared by the module.
const GO_VERSION: &str = "1.21";
const PULUMI_REQUIREMENT: &str = "github.com/pulumi/pulumi/sdk/v3 v3.0.0";

pub struct GoMod {
    module_path: String,
}

impl GoMod {
    pub fn new(module_path: impl Into<String>) -> Self {
        Self {
            module_path: module_path.into(),
        }
    }
}

impl GeneratedFile for GoMod {
    fn path(&self) -> PathBuf {
        PathBuf::from("go.mod")
    }

    fn render(&self) -> String {
        format!(
            "module {}\n\ngo {}\n\nrequire {}\n",
            self.module_path, GO_VERSION, PULUMI_REQUIREMENT
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_go_mod() {
        let file = GoMod::new("github.com/example/pulumi-example/sdk/go/example");
        insta::assert_snapshot!(file.render(), @r"
        module github.com/example/pulumi-example/sdk/go/example

        go 1.21

        require github.com/pulumi/pulumi/sdk/v3 v3.0.0
        ");
    }
}

//! `tsconfig.json` listing every TypeScript source in the package.

use std::path::PathBuf;

use tfgen_core::GeneratedFile;

pub struct TsConfig {
    files: Vec<String>,
}

impl TsConfig {
    /// Files are sorted and deduplicated.
    pub fn new(files: impl IntoIterator<Item = String>) -> Self {
        let mut files: Vec<String> = files.into_iter().collect();
        files.sort();
        files.dedup();
        Self { files }
    }
}

impl GeneratedFile for TsConfig {
    fn path(&self) -> PathBuf {
        PathBuf::from("tsconfig.json")
    }

    fn render(&self) -> String {
        let files: Vec<String> = self
            .files
            .iter()
            .map(|f| format!("    \"{}\"", f))
            .collect();
        format!(
            r#"{{
  "compilerOptions": {{
    "outDir": "bin",
    "target": "es2016",
    "module": "commonjs",
    "moduleResolution": "node",
    "declaration": true,
    "sourceMap": true,
    "stripInternal": true,
    "experimentalDecorators": true,
    "noFallthroughCasesInSwitch": true,
    "forceConsistentCasingInFileNames": true,
    "strict": true
  }},
  "files": [
{}
  ]
}}
"#,
            files.join(",\n")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_files_sorted() {
        let config = TsConfig::new(["s3/index.ts".to_string(), "index.ts".to_string()]);
        let json = config.render();
        assert!(json.contains("    \"index.ts\",\n    \"s3/index.ts\"\n  ]"));
    }
}

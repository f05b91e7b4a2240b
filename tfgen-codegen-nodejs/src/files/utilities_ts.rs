//! `utilities.ts`: runtime helpers used by generated defaults.

use std::path::PathBuf;

use tfgen_core::{CommentStyle, FileRules, GeneratedFile};

pub struct UtilitiesTs {
    version: String,
}

impl UtilitiesTs {
    pub fn new(version: impl Into<String>) -> Self {
        Self {
            version: version.into(),
        }
    }
}

impl GeneratedFile for UtilitiesTs {
    fn path(&self) -> PathBuf {
        PathBuf::from("utilities.ts")
    }

    fn rules(&self) -> FileRules {
        FileRules::with_header(CommentStyle::DoubleSlash)
    }

    fn render(&self) -> String {
        format!(
            r#"export function getEnv(...vars: string[]): string | undefined {{
  for (const v of vars) {{
    const value = process.env[v];
    if (value) {{
      return value;
    }}
  }}
  return undefined;
}}

export function getEnvBoolean(...vars: string[]): boolean | undefined {{
  const s = getEnv(...vars);
  if (s !== undefined) {{
    if (["1", "t", "T", "true", "TRUE", "True"].includes(s)) {{
      return true;
    }}
    if (["0", "f", "F", "false", "FALSE", "False"].includes(s)) {{
      return false;
    }}
  }}
  return undefined;
}}

export function getEnvNumber(...vars: string[]): number | undefined {{
  const s = getEnv(...vars);
  if (s !== undefined) {{
    const f = parseFloat(s);
    if (!isNaN(f)) {{
      return f;
    }}
  }}
  return undefined;
}}

export function getVersion(): string {{
  return "{}";
}}
"#,
            self.version
        )
    }
}

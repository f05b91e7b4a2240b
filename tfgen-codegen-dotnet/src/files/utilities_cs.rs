//! `Utilities.cs`: environment helpers and the SDK version.

use std::path::PathBuf;

use tfgen_core::{CommentStyle, FileRules, GeneratedFile};

use super::{quote, root_namespace};

pub struct UtilitiesCs {
    package: String,
    version: String,
}

impl UtilitiesCs {
    pub fn new(package: &str, version: &str) -> Self {
        Self {
            package: package.to_string(),
            version: version.to_string(),
        }
    }
}

impl GeneratedFile for UtilitiesCs {
    fn path(&self) -> PathBuf {
        PathBuf::from("Utilities.cs")
    }

    fn rules(&self) -> FileRules {
        FileRules::with_header(CommentStyle::DoubleSlash)
    }

    fn render(&self) -> String {
        format!(
            r#"using System;

namespace {}
{{
    static class Utilities
    {{
        public static string? GetEnv(params string[] names)
        {{
            foreach (var n in names)
            {{
                var value = Environment.GetEnvironmentVariable(n);
                if (value != null)
                {{
                    return value;
                }}
            }}
            return null;
        }}

        static string[] trueValues = {{ "1", "t", "T", "true", "TRUE", "True" }};
        static string[] falseValues = {{ "0", "f", "F", "false", "FALSE", "False" }};

        public static bool? GetEnvBoolean(params string[] names)
        {{
            var s = GetEnv(names);
            if (s != null)
            {{
                if (Array.IndexOf(trueValues, s) != -1)
                {{
                    return true;
                }}
                if (Array.IndexOf(falseValues, s) != -1)
                {{
                    return false;
                }}
            }}
            return null;
        }}

        public static int? GetEnvInt32(params string[] names) => int.TryParse(GetEnv(names), out int v) ? (int?)v : null;

        public static double? GetEnvDouble(params string[] names) => double.TryParse(GetEnv(names), out double v) ? (double?)v : null;

        public static InvokeOptions WithVersion(this InvokeOptions? options)
        {{
            if (options?.Version != null)
            {{
                return options;
            }}
            return new InvokeOptions
            {{
                Parent = options?.Parent,
                Provider = options?.Provider,
                Version = Version,
            }};
        }}

        public static string Version => {};
    }}
}}
"#,
            root_namespace(&self.package),
            quote(&self.version)
        )
    }
}

//! Target languages the generator can emit.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// Supported target languages for code generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// TypeScript on Node.js
    Nodejs,
    /// Python 3
    Python,
    /// C# on .NET
    Dotnet,
    /// Go
    Go,
    /// Language-neutral JSON package schema
    Schema,
}

impl Language {
    /// Every supported target, in display order.
    pub const ALL: [Language; 5] = [
        Language::Nodejs,
        Language::Python,
        Language::Dotnet,
        Language::Go,
        Language::Schema,
    ];

    /// Returns the language identifier as a static string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::Nodejs => "nodejs",
            Language::Python => "python",
            Language::Dotnet => "dotnet",
            Language::Go => "go",
            Language::Schema => "schema",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "nodejs" | "node" | "typescript" | "ts" => Ok(Language::Nodejs),
            "python" | "py" => Ok(Language::Python),
            "dotnet" | "csharp" | "cs" => Ok(Language::Dotnet),
            "go" | "golang" => Ok(Language::Go),
            "schema" | "json" => Ok(Language::Schema),
            _ => Err(format!(
                "unknown language '{}', expected one of 'nodejs', 'python', 'dotnet', 'go', 'schema'",
                s
            )),
        }
    }
}

//! Resource-type tokens (`package:module:Name`).

use std::{fmt, str::FromStr};

use serde::{Serialize, Serializer};

use crate::IrError;

/// Module name that maps to the package root.
pub const ROOT_MODULE: &str = "index";

/// A language-neutral type identifier shared by generated SDKs and the
/// runtime provider.
///
/// The module part may carry a file stem (`mod/file`); only one level of
/// nesting is accepted.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Token {
    package: String,
    module: String,
    file: Option<String>,
    name: String,
}

impl Token {
    pub fn new(package: impl Into<String>, module: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            package: package.into(),
            module: module.into(),
            file: None,
            name: name.into(),
        }
    }

    /// Token of the provider resource for `package`.
    pub fn provider(package: &str) -> Self {
        Self::new("pulumi", "providers", package)
    }

    pub fn package(&self) -> &str {
        &self.package
    }

    /// Output module; empty and `index` both mean the root.
    pub fn module(&self) -> &str {
        if self.module.is_empty() {
            ROOT_MODULE
        } else {
            &self.module
        }
    }

    pub fn is_root_module(&self) -> bool {
        self.module() == ROOT_MODULE
    }

    /// File stem override taken from a `mod/file` module part.
    pub fn file_stem(&self) -> Option<&str> {
        self.file.as_deref()
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl FromStr for Token {
    type Err = IrError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split(':').collect();
        let [package, module, name] = parts.as_slice() else {
            return Err(IrError::InvalidToken(s.to_string()));
        };
        if package.is_empty() || name.is_empty() {
            return Err(IrError::InvalidToken(s.to_string()));
        }

        let mut segments = module.split('/');
        let module_name = segments.next().unwrap_or_default();
        let file = segments.next().map(str::to_string);
        if segments.next().is_some() {
            return Err(IrError::NestedModule(s.to_string()));
        }

        Ok(Self {
            package: package.to_string(),
            module: module_name.to_string(),
            file,
            name: name.to_string(),
        })
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.file {
            Some(file) => write!(f, "{}:{}/{}:{}", self.package, self.module, file, self.name),
            None => write!(f, "{}:{}:{}", self.package, self.module, self.name),
        }
    }
}

impl Serialize for Token {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple() {
        let tok: Token = "example:index:Widget".parse().unwrap();
        assert_eq!(tok.package(), "example");
        assert_eq!(tok.module(), "index");
        assert!(tok.is_root_module());
        assert_eq!(tok.file_stem(), None);
        assert_eq!(tok.name(), "Widget");
    }

    #[test]
    fn test_empty_module_is_root() {
        let tok: Token = "example::Widget".parse().unwrap();
        assert!(tok.is_root_module());
        assert_eq!(tok.to_string(), "example::Widget");
    }

    #[test]
    fn test_module_with_file() {
        let tok: Token = "example:storage/bucketObject:BucketObject".parse().unwrap();
        assert_eq!(tok.module(), "storage");
        assert_eq!(tok.file_stem(), Some("bucketObject"));
        assert_eq!(tok.to_string(), "example:storage/bucketObject:BucketObject");
    }

    #[test]
    fn test_nested_module_rejected() {
        let err = "example:a/b/c:Widget".parse::<Token>().unwrap_err();
        assert_eq!(err, IrError::NestedModule("example:a/b/c:Widget".into()));
    }

    #[test]
    fn test_invalid_token() {
        assert!("example:Widget".parse::<Token>().is_err());
        assert!("a:b:c:d".parse::<Token>().is_err());
        assert!(":index:Widget".parse::<Token>().is_err());
    }

    #[test]
    fn test_provider_token() {
        assert_eq!(Token::provider("example").to_string(), "pulumi:providers:example");
    }

    #[test]
    fn test_serialize_as_string() {
        let tok = Token::new("example", "net", "Vpc");
        assert_eq!(serde_json::to_string(&tok).unwrap(), "\"example:net:Vpc\"");
    }
}

use thiserror::Error;

/// Errors raised while building IR values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IrError {
    #[error("invalid token '{0}', expected 'package:module:name'")]
    InvalidToken(String),

    #[error("Modules nested more than one level deep not currently supported: '{0}'")]
    NestedModule(String),

    #[error("module '{module}' already has a member named '{name}'")]
    DuplicateMember { module: String, name: String },
}

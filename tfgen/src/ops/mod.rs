//! Core operations.
//!
//! This module contains the business logic for tfgen commands,
//! separated from CLI argument parsing and output rendering.

pub mod check;
pub mod generate;
pub mod settings;

use std::{
    io::Read,
    path::{Path, PathBuf},
};

use tfgen_schema::{Error, ProviderDocument, parse_document};

pub use check::check;
pub use generate::{emit, prepare};
pub use settings::Settings;

const STDIN: &str = "<stdin>";

/// Load the provider document from a file, or from stdin when `path` is `None`.
pub fn load_document(path: Option<&Path>) -> tfgen_schema::Result<ProviderDocument> {
    match path {
        Some(path) => {
            tracing::debug!(path = %path.display(), "reading provider document");
            ProviderDocument::from_file(path)
        }
        None => {
            tracing::debug!("reading provider document from stdin");
            let mut content = String::new();
            std::io::stdin()
                .read_to_string(&mut content)
                .map_err(|e| Error::io(PathBuf::from(STDIN), e))?;
            parse_document(&content, STDIN)
        }
    }
}

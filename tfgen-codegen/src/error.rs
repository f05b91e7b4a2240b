//! Accumulated per-item errors.

use thiserror::Error;

/// Every per-item error of a run, reported together.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{}", render(.errors))]
pub struct MultiError {
    errors: Vec<String>,
}

impl MultiError {
    pub fn new(errors: Vec<String>) -> Self {
        Self { errors }
    }

    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }
}

fn render(errors: &[String]) -> String {
    let mut out = match errors.len() {
        1 => "1 error occurred:\n".to_string(),
        n => format!("{} errors occurred:\n", n),
    };
    for error in errors {
        out.push_str(&format!("\t* {}\n", error));
    }
    out
}

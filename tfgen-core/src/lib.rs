//! Core utilities shared across the tfgen workspace.
//!
//! Name mangling, doc-comment preparation, generated-file banners and file
//! writing live here so that the pipeline and every emitter agree on them.

mod doc;
mod file;
mod header;
mod names;
mod utils;
mod version;

// Doc comments
pub use doc::{MAX_WIDTH, doc_lines, reflow, sanitize, with_deprecation};
// File operations
pub use file::{File, FileRules, GeneratedFile, copy_file, write_file};
pub use header::{CommentStyle, GENERATOR_NAME, generated_header};
// Name mangling
pub use names::{
    pulumi_to_terraform_name, singularize, split_words, terraform_to_pulumi_name,
    terraform_to_pulumi_type_name, to_snake_words,
};
// String utilities
pub use utils::{lower_first, to_camel_case, to_pascal_case, to_snake_case, upper_first};
pub use version::Version;

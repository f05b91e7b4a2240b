//! TypeScript syntax builders rendered through [`CodeBuilder`](tfgen_codegen::builder::CodeBuilder).

mod exports;
mod imports;
mod interface;

pub use exports::Export;
pub use imports::Import;
pub use interface::{Interface, InterfaceField};

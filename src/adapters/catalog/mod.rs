//! Catalog adapters. Implement CatalogPort.
//!
//! Built-in tables by default; a JSON data file when configured.

pub mod builtin;
pub mod json_file;

pub use builtin::{BuiltinCatalog, REGION_NAME, builtin_community};
pub use json_file::JsonFileCatalog;

//! Value Catalog - the fixed set of candidate core values.
//!
//! The catalog is the single source of truth for which value ids are valid.
//! It is built once and shared by reference; nothing mutates it afterwards.

mod core_value;
mod fixtures;
mod value_catalog;

pub use core_value::CoreValue;
pub use value_catalog::ValueCatalog;

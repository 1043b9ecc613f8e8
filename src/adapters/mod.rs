//! Adapters - Implementations of ports.
//!
//! Following hexagonal architecture, adapters implement the port interfaces
//! defined in the ports module.

pub mod content;

pub use content::{StaticInsightLibrary, YamlInsightLibrary};

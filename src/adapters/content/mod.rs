//! Content adapters - implementations of the InsightLibrary port.
//!
//! - `StaticInsightLibrary` - Built-in editorial tables (default)
//! - `YamlInsightLibrary` - Content loaded from a YAML file

mod static_library;
mod yaml_library;

pub use static_library::StaticInsightLibrary;
pub use yaml_library::YamlInsightLibrary;

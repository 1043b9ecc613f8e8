//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Content Ports
//!
//! - `InsightLibrary` - Authored bridging statements, value context and
//!   discussion prompts

mod insight_library;

pub use insight_library::{ContentError, InsightLibrary};

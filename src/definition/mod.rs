//! Definition discovery and parsing subsystem.
//!
//! # Data Flow
//! ```text
//! services directory
//!     → loader.rs (ensure directory, list regular files sorted by name)
//!     → schema.rs (serde decode + field defaults)
//!     → Vec<ApiDefinition> (immutable, ordered)
//! ```
//!
//! # Design Decisions
//! - Definitions are read exactly once at startup; no watching, no reload
//! - A file that fails to decode is skipped with a warning; the rest of
//!   the startup proceeds
//! - Listing is sorted by file name so duplicate routes resolve the same
//!   way on every run

pub mod loader;
pub mod schema;

pub use loader::load_definitions;
pub use schema::{ApiDefinition, HeaderPair};

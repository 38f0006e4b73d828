//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Route Compilation (at startup):
//!     Vec<ApiDefinition>
//!     → validate url/method/status/headers into wire types
//!     → insert into (path, method) map, last registration wins
//!     → Freeze as immutable RouteTable
//!
//! Incoming Request (method, path):
//!     → RouteTable::lookup
//!     → Return: matched ResponseAction or None (health fallback)
//! ```
//!
//! # Design Decisions
//! - Routes compiled at startup, immutable at runtime
//! - Deterministic: definitions arrive in file-name order, so the same
//!   file set always produces the same table
//! - Handlers never capture per-definition state; dispatch is an indexed
//!   lookup into the shared table

pub mod table;

pub use table::{ResponseAction, RouteTable};

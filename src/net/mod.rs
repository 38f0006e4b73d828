//! Network utilities.
//!
//! # Design Decisions
//! - The port probe is a best-effort early diagnostic; the bind call
//!   remains the authority on whether the port is actually free

pub mod probe;

pub use probe::port_in_use;

//! HTTP serving subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection (axum/hyper)
//!     → server.rs (dispatch handler, route table lookup)
//!     → response.rs (replay the bound action, or the health payload)
//!     → Send to client
//! ```
//!
//! # Design Decisions
//! - A single dispatch handler owns the lookup; axum never sees
//!   per-definition routes, so handlers cannot capture loop state
//! - Any unmatched (method, path) falls through to the fixed health
//!   response
//! - Responses are replayed verbatim: no templating, no substitution

pub mod response;
pub mod server;

pub use server::{build_router, serve};

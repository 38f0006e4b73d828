//! File-backed HTTP mock server.
//!
//! Reads declarative API-definition files from a directory at startup,
//! registers each as a live route replaying a canned response, and serves
//! them alongside a default health route.
//!
//! # Architecture Overview
//!
//! ```text
//! services directory (one JSON file per endpoint)
//!     → definition (discover + decode + default)
//!     → routing    (compile into immutable route table)
//!     → http       (axum server, per-request replay)
//!
//! Cross-cutting: cli (arguments), net (port probe), error (startup errors)
//! ```
//!
//! The server has two phases: **Initializing** (scan, parse, build, probe)
//! and **Serving** (listener bound, accepting indefinitely). Any failure
//! while initializing is fatal; nothing mutates after serving begins.

pub mod cli;
pub mod definition;
pub mod error;
pub mod http;
pub mod net;
pub mod routing;

pub use cli::Cli;
pub use definition::{load_definitions, ApiDefinition};
pub use error::StartupError;
pub use routing::{ResponseAction, RouteTable};

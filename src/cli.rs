//! Command-line argument surface.
//!
//! # Design Decisions
//! - One optional positional argument (the listening port), no subcommands
//! - The services directory is not part of the visible CLI surface; it can
//!   be overridden through `MOCK_SERVER_SERVICES_DIR` for tests and
//!   non-standard layouts

use clap::Parser;
use std::path::PathBuf;

/// Serve canned HTTP responses from definition files.
#[derive(Debug, Parser)]
#[command(name = "mock-server", about = "File-backed HTTP mock server", long_about = None)]
pub struct Cli {
    /// Port to listen on.
    #[arg(default_value_t = 8080)]
    pub port: u16,

    /// Directory containing API definition files, one JSON object per file.
    #[arg(
        long,
        env = "MOCK_SERVER_SERVICES_DIR",
        default_value = "./services",
        hide = true
    )]
    pub services_dir: PathBuf,
}

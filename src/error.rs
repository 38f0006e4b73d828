//! Startup error definitions.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while bringing the server up.
///
/// Every variant is fatal: the process reports it and exits non-zero before
/// the listener is bound (or, for [`StartupError::Serve`], after the accept
/// loop itself fails). Definition decode failures are deliberately absent —
/// those are skipped with a warning, not raised.
#[derive(Debug, Error)]
pub enum StartupError {
    /// The services directory could not be created or listed.
    #[error("failed to access services directory {path}: {source}")]
    Directory {
        path: PathBuf,
        source: std::io::Error,
    },

    /// A definition file could not be read from disk.
    #[error("failed to read definition file {path}: {source}")]
    ReadDefinition {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The probe found another process listening on the target port.
    #[error("port {port} is already in use")]
    PortInUse { port: u16 },

    /// The listener could not be bound. The probe is best-effort, so this
    /// can still happen even after it reported the port free.
    #[error("failed to bind port {port}: {source}")]
    Bind { port: u16, source: std::io::Error },

    /// The accept loop failed after startup.
    #[error("server error: {0}")]
    Serve(std::io::Error),
}

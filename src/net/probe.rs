//! Pre-bind port availability probe.

use std::time::Duration;

use tokio::net::TcpStream;
use tokio::time::timeout;

/// How long the probe waits before treating the port as free.
pub const PROBE_TIMEOUT: Duration = Duration::from_secs(1);

/// Returns true when another process is already listening on the port.
///
/// A successful TCP connect to localhost means the port is occupied; a
/// refused connection or a timeout means it is treated as free. This is
/// inherently racy (the port can be claimed between probe and bind), so
/// callers must still handle the bind's own error.
pub async fn port_in_use(port: u16) -> bool {
    matches!(
        timeout(PROBE_TIMEOUT, TcpStream::connect(("127.0.0.1", port))).await,
        Ok(Ok(_))
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::net::TcpListener;

    #[tokio::test]
    async fn detects_an_occupied_port() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port = listener.local_addr().unwrap().port();

        assert!(port_in_use(port).await);
    }

    #[tokio::test]
    async fn reports_a_free_port_as_free() {
        let port = {
            let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
            listener.local_addr().unwrap().port()
        };
        // Listener dropped; connecting now gets refused.

        assert!(!port_in_use(port).await);
    }
}

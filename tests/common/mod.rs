//! Shared utilities for integration testing.

use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;

use mock_server::{http, load_definitions, RouteTable};

/// Write one definition file into the services directory.
pub fn write_definition(dir: &Path, name: &str, contents: &str) {
    std::fs::write(dir.join(name), contents).unwrap();
}

/// Load the directory, build the route table, and serve it on an ephemeral
/// port. Returns the bound address.
pub async fn spawn_server(dir: &Path) -> SocketAddr {
    let definitions = load_definitions(dir).unwrap();
    let table = Arc::new(RouteTable::build(&definitions));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        let _ = http::serve(listener, table).await;
    });

    addr
}

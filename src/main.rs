//! Startup orchestration for the mock server.
//!
//! Fail fast: every step of initialization is fatal on error, and the
//! listener binds last so traffic only arrives once the route table is
//! complete.

use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use mock_server::{http, load_definitions, net, Cli, RouteTable, StartupError};

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "mock_server=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            tracing::error!(%error, "startup failed");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<(), StartupError> {
    if net::port_in_use(cli.port).await {
        return Err(StartupError::PortInUse { port: cli.port });
    }

    let definitions = load_definitions(&cli.services_dir)?;
    let table = Arc::new(RouteTable::build(&definitions));

    tracing::info!(
        port = cli.port,
        services_dir = %cli.services_dir.display(),
        routes = table.len(),
        "starting mock server"
    );

    let listener = TcpListener::bind(("0.0.0.0", cli.port))
        .await
        .map_err(|source| StartupError::Bind {
            port: cli.port,
            source,
        })?;

    http::serve(listener, table)
        .await
        .map_err(StartupError::Serve)
}

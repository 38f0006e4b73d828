//! HTTP server setup and request dispatch.
//!
//! # Responsibilities
//! - Create the Axum router with the dispatch handler
//! - Wire up request tracing middleware
//! - Serve the bound listener until the process exits
//!
//! # Design Decisions
//! - The route table is the routing authority; axum delivers every request
//!   to one fallback handler that does an indexed lookup
//! - The table is shared via `Arc` and read-only, so concurrent handler
//!   invocations need no locking

use std::sync::Arc;

use axum::extract::{Request, State};
use axum::response::Response;
use axum::Router;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use crate::http::response;
use crate::routing::RouteTable;

/// State injected into the dispatch handler.
#[derive(Clone)]
pub struct AppState {
    table: Arc<RouteTable>,
}

/// Build the router: one dispatch handler for every request.
pub fn build_router(table: Arc<RouteTable>) -> Router {
    Router::new()
        .fallback(dispatch)
        .with_state(AppState { table })
        .layer(TraceLayer::new_for_http())
}

/// Serve the route table on an already-bound listener.
///
/// Runs until the accept loop fails or the process is killed; there is no
/// graceful-shutdown state.
pub async fn serve(listener: TcpListener, table: Arc<RouteTable>) -> std::io::Result<()> {
    axum::serve(listener, build_router(table)).await
}

/// Dispatch one request against the route table.
///
/// On a (method, path) hit the bound action is replayed verbatim; any miss
/// falls through to the default health response.
async fn dispatch(State(state): State<AppState>, request: Request) -> Response {
    let method = request.method();
    let path = request.uri().path();

    match state.table.lookup(method, path) {
        Some(action) => {
            tracing::debug!(%method, path, status = action.status.as_u16(), "replaying mock response");
            response::replay(action)
        }
        None => {
            tracing::debug!(%method, path, "no route matched, serving health response");
            response::health()
        }
    }
}

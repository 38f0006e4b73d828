//! Response construction.

use axum::body::Body;
use axum::http::{header, HeaderValue};
use axum::response::Response;

use crate::routing::ResponseAction;

/// Body of the default health response.
pub const HEALTH_BODY: &str = "{\"message\": \"Hello World\"}";

/// Replay a bound response action verbatim.
///
/// Headers are appended in declaration order, then the bound status and
/// body are written unchanged.
pub fn replay(action: &ResponseAction) -> Response {
    let mut response = Response::new(Body::from(action.body.clone()));
    *response.status_mut() = action.status;
    for (name, value) in &action.headers {
        response.headers_mut().append(name.clone(), value.clone());
    }
    response
}

/// The default health response served for every unmatched request.
pub fn health() -> Response {
    let mut response = Response::new(Body::from(HEALTH_BODY));
    response.headers_mut().insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("application/json"),
    );
    response
}

//! Definition file schema.
//!
//! One JSON object per file. All fields except `url` are optional:
//!
//! | field      | default |
//! |------------|---------|
//! | `method`   | `"GET"` |
//! | `status`   | `200`   |
//! | `response` | `""`    |
//! | `headers`  | `[]`    |
//!
//! A `status` of `0` is treated the same as an absent one (it normalizes to
//! 200 when the route table is compiled).

use serde::Deserialize;

/// A single response header, replayed in declaration order.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct HeaderPair {
    pub name: String,
    pub value: String,
}

/// One mock endpoint definition, as decoded from a file.
///
/// Values here are still untyped strings/integers; they are validated and
/// compiled into wire types by [`crate::routing::RouteTable::build`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ApiDefinition {
    /// Path the route answers on. Required; a file without it fails to
    /// decode and is skipped.
    pub url: String,

    /// HTTP verb to match.
    #[serde(default = "default_method")]
    pub method: String,

    /// Response status code.
    #[serde(default = "default_status")]
    pub status: u16,

    /// Literal response body.
    #[serde(default)]
    pub response: String,

    /// Response headers in declaration order.
    #[serde(default)]
    pub headers: Vec<HeaderPair>,
}

fn default_method() -> String {
    "GET".to_string()
}

fn default_status() -> u16 {
    200
}

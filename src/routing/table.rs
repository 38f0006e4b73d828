//! Route table construction and lookup.

use std::collections::HashMap;

use axum::body::Bytes;
use axum::http::{HeaderName, HeaderValue, Method, StatusCode};
use thiserror::Error;

use crate::definition::ApiDefinition;

/// The fixed response replayed for a matched route.
#[derive(Debug, Clone)]
pub struct ResponseAction {
    pub status: StatusCode,
    /// Headers in declaration order; order affects wire output, not
    /// semantics.
    pub headers: Vec<(HeaderName, HeaderValue)>,
    pub body: Bytes,
}

/// Why a definition was rejected during compilation.
#[derive(Debug, Error)]
pub enum DefinitionError {
    #[error("url must start with '/' (got {0:?})")]
    InvalidUrl(String),

    #[error("unknown HTTP method {0:?}")]
    InvalidMethod(String),

    #[error("status {0} is outside the valid HTTP range")]
    InvalidStatus(u16),

    #[error("invalid header {0:?}")]
    InvalidHeader(String),
}

/// Immutable (method, path) → [`ResponseAction`] map built at startup.
///
/// Shared read-only across handler invocations via `Arc`; nothing mutates
/// it after construction, so no locking is needed.
#[derive(Debug, Default)]
pub struct RouteTable {
    routes: HashMap<String, HashMap<Method, ResponseAction>>,
}

impl RouteTable {
    /// Compile the ordered definition list into a route table.
    ///
    /// Invalid definitions are skipped with a warning. Duplicate
    /// (method, url) pairs resolve last-registration-wins; since the
    /// loader sorts files by name, the lexicographically later file takes
    /// precedence.
    pub fn build(definitions: &[ApiDefinition]) -> Self {
        let mut routes: HashMap<String, HashMap<Method, ResponseAction>> = HashMap::new();

        for definition in definitions {
            let (method, action) = match compile(definition) {
                Ok(compiled) => compiled,
                Err(error) => {
                    tracing::warn!(url = %definition.url, %error, "skipping invalid definition");
                    continue;
                }
            };

            tracing::info!(
                url = %definition.url,
                method = %method,
                status = action.status.as_u16(),
                "registered mock endpoint"
            );

            let replaced = routes
                .entry(definition.url.clone())
                .or_default()
                .insert(method.clone(), action);
            if replaced.is_some() {
                tracing::warn!(
                    url = %definition.url,
                    method = %method,
                    "duplicate definition replaces an earlier one for the same method and url"
                );
            }
        }

        Self { routes }
    }

    /// Look up the response action bound to (method, path), if any.
    pub fn lookup(&self, method: &Method, path: &str) -> Option<&ResponseAction> {
        self.routes.get(path)?.get(method)
    }

    /// Number of registered (method, path) bindings.
    pub fn len(&self) -> usize {
        self.routes.values().map(HashMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

/// Validate one definition and compile it into wire types.
fn compile(definition: &ApiDefinition) -> Result<(Method, ResponseAction), DefinitionError> {
    if !definition.url.starts_with('/') {
        return Err(DefinitionError::InvalidUrl(definition.url.clone()));
    }

    let method = parse_method(&definition.method)?;

    // A zero status means the field was absent (or explicitly zero); both
    // normalize to 200.
    let raw_status = if definition.status == 0 {
        200
    } else {
        definition.status
    };
    let status = StatusCode::from_u16(raw_status)
        .map_err(|_| DefinitionError::InvalidStatus(definition.status))?;
    if status.as_u16() > 599 {
        return Err(DefinitionError::InvalidStatus(definition.status));
    }

    let mut headers = Vec::with_capacity(definition.headers.len());
    for pair in &definition.headers {
        let name = HeaderName::from_bytes(pair.name.as_bytes())
            .map_err(|_| DefinitionError::InvalidHeader(pair.name.clone()))?;
        let value = HeaderValue::from_str(&pair.value)
            .map_err(|_| DefinitionError::InvalidHeader(pair.name.clone()))?;
        headers.push((name, value));
    }

    let action = ResponseAction {
        status,
        headers,
        body: Bytes::from(definition.response.clone()),
    };
    Ok((method, action))
}

/// Map a definition's verb onto a standard HTTP method.
///
/// Matching is case-insensitive; extension methods are rejected.
fn parse_method(verb: &str) -> Result<Method, DefinitionError> {
    match verb.to_ascii_uppercase().as_str() {
        "GET" => Ok(Method::GET),
        "POST" => Ok(Method::POST),
        "PUT" => Ok(Method::PUT),
        "DELETE" => Ok(Method::DELETE),
        "PATCH" => Ok(Method::PATCH),
        "HEAD" => Ok(Method::HEAD),
        "OPTIONS" => Ok(Method::OPTIONS),
        "TRACE" => Ok(Method::TRACE),
        "CONNECT" => Ok(Method::CONNECT),
        _ => Err(DefinitionError::InvalidMethod(verb.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::definition::HeaderPair;

    fn definition(url: &str) -> ApiDefinition {
        ApiDefinition {
            url: url.to_string(),
            method: "GET".to_string(),
            status: 200,
            response: String::new(),
            headers: Vec::new(),
        }
    }

    #[test]
    fn declared_fields_compile_into_the_binding() {
        let def = ApiDefinition {
            url: "/hello".to_string(),
            method: "GET".to_string(),
            status: 201,
            response: "hi".to_string(),
            headers: vec![HeaderPair {
                name: "X-Test".to_string(),
                value: "1".to_string(),
            }],
        };

        let table = RouteTable::build(&[def]);
        let action = table.lookup(&Method::GET, "/hello").unwrap();

        assert_eq!(action.status, StatusCode::CREATED);
        assert_eq!(action.body.as_ref(), b"hi");
        assert_eq!(action.headers.len(), 1);
        assert_eq!(action.headers[0].0.as_str(), "x-test");
        assert_eq!(action.headers[0].1.to_str().unwrap(), "1");
    }

    #[test]
    fn lookup_is_scoped_to_the_method() {
        let table = RouteTable::build(&[definition("/only-get")]);

        assert!(table.lookup(&Method::GET, "/only-get").is_some());
        assert!(table.lookup(&Method::POST, "/only-get").is_none());
        assert!(table.lookup(&Method::GET, "/other").is_none());
    }

    #[test]
    fn zero_status_normalizes_to_200() {
        let mut def = definition("/z");
        def.status = 0;

        let table = RouteTable::build(&[def]);

        let action = table.lookup(&Method::GET, "/z").unwrap();
        assert_eq!(action.status, StatusCode::OK);
    }

    #[test]
    fn last_registration_wins_for_duplicates() {
        let mut first = definition("/dup");
        first.response = "first".to_string();
        let mut second = definition("/dup");
        second.response = "second".to_string();

        let table = RouteTable::build(&[first, second]);

        let action = table.lookup(&Method::GET, "/dup").unwrap();
        assert_eq!(action.body.as_ref(), b"second");
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn same_url_different_methods_are_distinct_bindings() {
        let get = definition("/both");
        let mut post = definition("/both");
        post.method = "POST".to_string();
        post.response = "posted".to_string();

        let table = RouteTable::build(&[get, post]);

        assert_eq!(table.len(), 2);
        let action = table.lookup(&Method::POST, "/both").unwrap();
        assert_eq!(action.body.as_ref(), b"posted");
    }

    #[test]
    fn method_matching_is_case_insensitive() {
        let mut def = definition("/lower");
        def.method = "post".to_string();

        let table = RouteTable::build(&[def]);

        assert!(table.lookup(&Method::POST, "/lower").is_some());
    }

    #[test]
    fn invalid_definitions_are_skipped() {
        let bad_url = definition("no-slash");
        let mut bad_method = definition("/m");
        bad_method.method = "FETCH".to_string();
        let mut bad_status = definition("/s");
        bad_status.status = 42;
        let mut bad_header = definition("/h");
        bad_header.headers = vec![HeaderPair {
            name: "bad header".to_string(),
            value: "1".to_string(),
        }];

        let table = RouteTable::build(&[bad_url, bad_method, bad_status, bad_header]);

        assert!(table.is_empty());
    }

    #[test]
    fn build_is_deterministic() {
        let defs = vec![definition("/a"), definition("/b"), definition("/a")];

        let first = RouteTable::build(&defs);
        let second = RouteTable::build(&defs);

        assert_eq!(first.len(), second.len());
        for (path, methods) in &first.routes {
            for (method, action) in methods {
                let other = second.lookup(method, path).unwrap();
                assert_eq!(other.status, action.status);
                assert_eq!(other.body, action.body);
            }
        }
    }
}

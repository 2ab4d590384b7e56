//! Static API key authentication middleware.
//!
//! Clients provide the shared secret via the `x-api-key` header:
//!
//! ```bash
//! curl -X POST -H "X-API-Key: your-secret-key" http://localhost:3000/api/products
//! ```
//!
//! # Bypassed Methods
//!
//! Read-only methods (GET, HEAD, OPTIONS) pass through without a key; only
//! mutating requests (POST, PUT, DELETE) are checked. OPTIONS must stay open
//! for CORS preflight to work.
//!
//! # Control Flow
//!
//! A missing or mismatched key short-circuits with a fixed 401 JSON body
//! directly from the middleware. This deliberately bypasses the typed error
//! pipeline used for validation and not-found failures.
//!
//! # Security Notes
//!
//! Key comparison uses constant-time equality to avoid timing leaks. There
//! is no rate limiting or lockout on failures; a single static secret is a
//! documented limitation of this service, not a design goal to extend.

use std::sync::Arc;
use std::task::{Context, Poll};

use axum::body::Body;
use axum::http::{Method, Request, Response, StatusCode};
use axum::response::IntoResponse;
use subtle::ConstantTimeEq;
use tower::{Layer, Service};
use tracing::{debug, warn};

/// Header name for the API key.
pub const API_KEY_HEADER: &str = "x-api-key";

/// API key authentication layer guarding mutating requests.
#[derive(Clone)]
pub struct ApiKeyAuth {
    expected_key: Arc<String>,
}

impl ApiKeyAuth {
    /// Create a new API key auth layer checking against `api_key`.
    pub fn new(api_key: String) -> Self {
        Self {
            expected_key: Arc::new(api_key),
        }
    }
}

impl<S> Layer<S> for ApiKeyAuth {
    type Service = ApiKeyAuthService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        ApiKeyAuthService {
            inner,
            expected_key: self.expected_key.clone(),
        }
    }
}

/// API key authentication service wrapper.
#[derive(Clone)]
pub struct ApiKeyAuthService<S> {
    inner: S,
    expected_key: Arc<String>,
}

impl<S> Service<Request<Body>> for ApiKeyAuthService<S>
where
    S: Service<Request<Body>, Response = Response<Body>> + Clone + Send + 'static,
    S::Future: Send,
{
    type Response = Response<Body>;
    type Error = S::Error;
    type Future = std::pin::Pin<
        Box<dyn std::future::Future<Output = Result<Self::Response, Self::Error>> + Send>,
    >;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, req: Request<Body>) -> Self::Future {
        let expected_key = self.expected_key.clone();
        let mut inner = self.inner.clone();

        Box::pin(async move {
            // Read-only methods are open to everyone
            if is_read_only(req.method()) {
                return inner.call(req).await;
            }

            match extract_api_key(&req) {
                Some(provided) if constant_time_eq(&provided, &expected_key) => {
                    debug!("API key authentication successful");
                    inner.call(req).await
                }
                Some(_) => {
                    warn!(path = %req.uri().path(), "Invalid API key provided");
                    Ok(unauthorized_response())
                }
                None => {
                    warn!(path = %req.uri().path(), "Missing API key");
                    Ok(unauthorized_response())
                }
            }
        })
    }
}

/// Whether a method leaves the store untouched and so bypasses the key check.
fn is_read_only(method: &Method) -> bool {
    matches!(*method, Method::GET | Method::HEAD | Method::OPTIONS)
}

/// Extract the API key from the request header.
fn extract_api_key<B>(req: &Request<B>) -> Option<String> {
    req.headers()
        .get(API_KEY_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string)
}

/// Perform constant-time comparison of two strings.
///
/// This prevents timing attacks where an attacker could determine
/// the correct API key by measuring response times.
fn constant_time_eq(a: &str, b: &str) -> bool {
    a.as_bytes().ct_eq(b.as_bytes()).into()
}

/// Build the fixed unauthorized (401) response.
fn unauthorized_response() -> Response<Body> {
    (
        StatusCode::UNAUTHORIZED,
        [
            ("WWW-Authenticate", "API-Key"),
            ("Content-Type", "application/json"),
        ],
        r#"{"error":"unauthorized","message":"Invalid or missing X-API-Key header"}"#,
    )
        .into_response()
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_read_only_methods_bypass() {
        assert!(is_read_only(&Method::GET));
        assert!(is_read_only(&Method::HEAD));
        assert!(is_read_only(&Method::OPTIONS));
    }

    #[test]
    fn test_mutating_methods_are_checked() {
        assert!(!is_read_only(&Method::POST));
        assert!(!is_read_only(&Method::PUT));
        assert!(!is_read_only(&Method::DELETE));
    }

    #[test]
    fn test_extract_api_key_from_header() {
        let req = Request::builder()
            .header("x-api-key", "my-secret-key")
            .body(Body::empty())
            .unwrap();

        assert_eq!(extract_api_key(&req).as_deref(), Some("my-secret-key"));
    }

    #[test]
    fn test_extract_api_key_none() {
        let req = Request::builder().body(Body::empty()).unwrap();
        assert!(extract_api_key(&req).is_none());
    }

    #[test]
    fn test_constant_time_eq_equal() {
        assert!(constant_time_eq("secret123", "secret123"));
    }

    #[test]
    fn test_constant_time_eq_not_equal() {
        assert!(!constant_time_eq("secret123", "secret456"));
    }

    #[test]
    fn test_constant_time_eq_different_lengths() {
        assert!(!constant_time_eq("short", "much-longer-string"));
    }

    #[test]
    fn test_unauthorized_response_status() {
        let response = unauthorized_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }
}

//! HTTP middleware for security and observability.
//!
//! # Architecture
//!
//! ```text
//! Request → Auth → Tracing → CORS → Body Limit → Handler → Response
//!             ↓
//!         401 Unauthorized (short-circuit, mutating methods only)
//! ```
//!
//! Request logging itself is handled by `tower_http::trace::TraceLayer`,
//! applied in `routes.rs`.

pub mod auth;

pub use auth::{API_KEY_HEADER, ApiKeyAuth};

//! Request extractors with rejections matching the API contract.

use axum::extract::FromRequest;

use crate::error::ApiError;

/// JSON request body extractor.
///
/// Delegates to `axum::Json` but converts its rejection into an
/// `ApiError`, so a body that cannot be parsed at all gets the same 400
/// treatment as a body that fails field validation.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct JsonBody<T>(pub T);

//! Field-level validation of submitted product payloads.
//!
//! Every rule is checked independently and every violation is collected, so
//! a client sees all problems in one response rather than one per request.

use serde_json::Value;

use crate::error::{ApiError, ApiResult};
use crate::models::{Product, ProductPayload};

/// A validated, coerced product body awaiting an id.
///
/// `price` is an `f64` and `in_stock` a `bool` here no matter how the JSON
/// spelled them (an integer `1200` becomes `1200.0`).
#[derive(Debug, Clone, PartialEq)]
pub struct ProductDraft {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub category: String,
    pub in_stock: bool,
}

impl ProductDraft {
    /// Attach an id, producing a storable product.
    pub fn into_product(self, id: String) -> Product {
        Product {
            id,
            name: self.name,
            description: self.description,
            price: self.price,
            category: self.category,
            in_stock: self.in_stock,
        }
    }
}

/// Validate a candidate product payload.
///
/// Rules:
/// - `name`, `description`, `category`: strings, non-empty after trimming
/// - `price`: number, >= 0
/// - `inStock`: boolean
///
/// # Errors
///
/// Returns `ApiError::Validation` carrying the ordered list of every
/// violated rule when any check fails. The check is pure and
/// non-short-circuiting.
pub fn validate_product(payload: &ProductPayload) -> ApiResult<ProductDraft> {
    let mut errors = Vec::new();

    let name = require_string(
        &payload.name,
        "Name is required and must be a non-empty string",
        &mut errors,
    );
    let description = require_string(
        &payload.description,
        "Description is required and must be a non-empty string",
        &mut errors,
    );
    let price = require_non_negative_number(&payload.price, &mut errors);
    let category = require_string(
        &payload.category,
        "Category is required and must be a non-empty string",
        &mut errors,
    );
    let in_stock = require_boolean(&payload.in_stock, &mut errors);

    match (name, description, price, category, in_stock) {
        (Some(name), Some(description), Some(price), Some(category), Some(in_stock))
            if errors.is_empty() =>
        {
            Ok(ProductDraft {
                name,
                description,
                price,
                category,
                in_stock,
            })
        }
        _ => Err(ApiError::Validation(errors)),
    }
}

/// Extract a non-empty string field, recording a violation otherwise.
///
/// The stored value keeps its original whitespace; only the emptiness check
/// trims.
fn require_string(value: &Value, message: &str, errors: &mut Vec<String>) -> Option<String> {
    match value.as_str() {
        Some(s) if !s.trim().is_empty() => Some(s.to_string()),
        _ => {
            errors.push(message.to_string());
            None
        }
    }
}

/// Extract a non-negative number field, recording a violation otherwise.
fn require_non_negative_number(value: &Value, errors: &mut Vec<String>) -> Option<f64> {
    match value.as_f64() {
        Some(n) if n >= 0.0 => Some(n),
        _ => {
            errors.push("Price must be a non-negative number".to_string());
            None
        }
    }
}

/// Extract a boolean field, recording a violation otherwise.
fn require_boolean(value: &Value, errors: &mut Vec<String>) -> Option<bool> {
    match value.as_bool() {
        Some(b) => Some(b),
        None => {
            errors.push("inStock must be a boolean (true or false)".to_string());
            None
        }
    }
}

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::Product;

/// Candidate product submitted to the create and update endpoints.
///
/// Fields are deserialized as raw JSON values so that a missing or
/// wrong-typed field reaches the validator, which reports every violation in
/// one response instead of failing on the first serde mismatch.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductPayload {
    #[serde(default)]
    pub name: Value,
    #[serde(default)]
    pub description: Value,
    #[serde(default)]
    pub price: Value,
    #[serde(default)]
    pub category: Value,
    #[serde(default)]
    pub in_stock: Value,
}

/// Query parameters accepted by the product listing endpoint.
///
/// `page` and `limit` are kept as raw strings: a non-numeric or
/// non-positive value falls back to the default instead of rejecting the
/// request.
#[derive(Debug, Default, Deserialize)]
pub struct ListQuery {
    /// Exact-match category filter
    pub category: Option<String>,
    /// Case-insensitive substring match on the product name
    pub search: Option<String>,
    /// Page number (default: 1)
    pub page: Option<String>,
    /// Page size (default: 10)
    pub limit: Option<String>,
}

/// Response body for the product listing endpoint.
#[derive(Debug, Serialize)]
pub struct ProductListResponse {
    /// The requested page of products
    pub products: Vec<Product>,
    /// Pagination metadata for the filtered result set
    pub pagination: Pagination,
}

/// Pagination metadata computed over the filtered result set.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    /// Page number this response covers
    pub current_page: usize,
    /// Total pages at the current page size
    pub total_pages: usize,
    /// Total products after filtering, before pagination
    pub total_products: usize,
    /// Whether a later page exists
    pub has_next: bool,
    /// Whether an earlier page exists
    pub has_prev: bool,
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_payload_missing_fields_default_to_null() {
        let payload: ProductPayload =
            serde_json::from_str("{}").expect("Deserialization should succeed");

        assert!(payload.name.is_null());
        assert!(payload.price.is_null());
        assert!(payload.in_stock.is_null());
    }

    #[test]
    fn test_payload_accepts_wrong_types() {
        // Type errors are the validator's job, not serde's
        let json = r#"{"name": 42, "price": "free", "inStock": "yes"}"#;
        let payload: ProductPayload =
            serde_json::from_str(json).expect("Deserialization should succeed");

        assert!(payload.name.is_number());
        assert!(payload.price.is_string());
        assert!(payload.in_stock.is_string());
    }

    #[test]
    fn test_payload_in_stock_camel_case() {
        let json = r#"{"inStock": false}"#;
        let payload: ProductPayload =
            serde_json::from_str(json).expect("Deserialization should succeed");

        assert_eq!(payload.in_stock, Value::Bool(false));
    }

    #[test]
    fn test_pagination_serializes_camel_case() {
        let pagination = Pagination {
            current_page: 1,
            total_pages: 2,
            total_products: 3,
            has_next: true,
            has_prev: false,
        };

        let json = serde_json::to_string(&pagination).expect("Serialization should succeed");
        assert!(json.contains("\"currentPage\":1"));
        assert!(json.contains("\"totalPages\":2"));
        assert!(json.contains("\"totalProducts\":3"));
        assert!(json.contains("\"hasNext\":true"));
        assert!(json.contains("\"hasPrev\":false"));
    }
}

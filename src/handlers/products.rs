use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use tracing::instrument;
use uuid::Uuid;

use crate::error::{ApiError, ApiResult};
use crate::extract::JsonBody;
use crate::models::{ListQuery, Pagination, Product, ProductListResponse, ProductPayload};
use crate::state::AppState;
use crate::validation::validate_product;

/// Default page number when `page` is absent or unusable.
const DEFAULT_PAGE: usize = 1;

/// Default page size when `limit` is absent or unusable.
const DEFAULT_LIMIT: usize = 10;

/// List products with optional filtering, search, and pagination.
///
/// Query parameters:
/// - `category`: keep only exact category matches
/// - `search`: keep only names containing the term, case-insensitive
/// - `page` / `limit`: pagination over the filtered set; out-of-range pages
///   yield fewer or zero items, never an error
#[instrument(skip(state))]
pub async fn list_products(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Json<ProductListResponse> {
    let mut result = state.store.list().await;

    if let Some(category) = &query.category {
        result.retain(|p| &p.category == category);
    }

    if let Some(search) = &query.search {
        let term = search.to_lowercase();
        result.retain(|p| p.name.to_lowercase().contains(&term));
    }

    let page = parse_positive(query.page.as_deref(), DEFAULT_PAGE);
    let limit = parse_positive(query.limit.as_deref(), DEFAULT_LIMIT);

    let total_products = result.len();
    let start = (page - 1).saturating_mul(limit);
    let end = start.saturating_add(limit);

    let products: Vec<Product> = result.into_iter().skip(start).take(limit).collect();

    Json(ProductListResponse {
        products,
        pagination: Pagination {
            current_page: page,
            total_pages: total_products.div_ceil(limit),
            total_products,
            has_next: end < total_products,
            has_prev: start > 0,
        },
    })
}

/// Get a single product by id.
#[instrument(skip(state))]
pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<Product>> {
    let product = state
        .store
        .find_by_id(&id)
        .await
        .ok_or_else(|| ApiError::NotFound("Product not found".to_string()))?;

    Ok(Json(product))
}

/// Create a new product.
///
/// Authentication has already run in the middleware; validation happens
/// here. A fresh UUID is assigned, and `price`/`inStock` are coerced to
/// their canonical types by the validator.
#[instrument(skip(state, payload))]
pub async fn create_product(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<ProductPayload>,
) -> ApiResult<(StatusCode, Json<Product>)> {
    let draft = validate_product(&payload)?;
    let product = draft.into_product(Uuid::new_v4().to_string());

    state.store.insert(product.clone()).await;

    Ok((StatusCode::CREATED, Json(product)))
}

/// Update an existing product, replacing every field except the id.
#[instrument(skip(state, payload))]
pub async fn update_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
    JsonBody(payload): JsonBody<ProductPayload>,
) -> ApiResult<Json<Product>> {
    let draft = validate_product(&payload)?;
    let replacement = draft.into_product(id.clone());

    let updated = state
        .store
        .replace(&id, replacement)
        .await
        .ok_or_else(|| ApiError::NotFound("Product not found".to_string()))?;

    Ok(Json(updated))
}

/// Delete a product and return the removed record.
#[instrument(skip(state))]
pub async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<Product>> {
    let deleted = state
        .store
        .remove(&id)
        .await
        .ok_or_else(|| ApiError::NotFound("Product not found".to_string()))?;

    Ok(Json(deleted))
}

/// Leniently parse a pagination parameter.
///
/// Absent, non-numeric, or non-positive values fall back to the default
/// rather than rejecting the request. Zero falls back too, so the page size
/// can never divide by zero.
fn parse_positive(raw: Option<&str>, default: usize) -> usize {
    raw.and_then(|s| s.parse::<usize>().ok())
        .filter(|v| *v > 0)
        .unwrap_or(default)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_positive_absent() {
        assert_eq!(parse_positive(None, 10), 10);
    }

    #[test]
    fn test_parse_positive_valid() {
        assert_eq!(parse_positive(Some("2"), 1), 2);
        assert_eq!(parse_positive(Some("25"), 10), 25);
    }

    #[test]
    fn test_parse_positive_non_numeric() {
        assert_eq!(parse_positive(Some("abc"), 1), 1);
        assert_eq!(parse_positive(Some("2.5"), 10), 10);
        assert_eq!(parse_positive(Some(""), 10), 10);
    }

    #[test]
    fn test_parse_positive_zero_falls_back() {
        assert_eq!(parse_positive(Some("0"), 10), 10);
    }

    #[test]
    fn test_parse_positive_negative_falls_back() {
        assert_eq!(parse_positive(Some("-1"), 1), 1);
    }
}

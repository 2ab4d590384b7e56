mod api;
mod product;

pub use api::{ListQuery, Pagination, ProductListResponse, ProductPayload};
pub use product::Product;

//! # Product Catalog API
//!
//! A minimal REST service exposing CRUD over an in-memory product
//! collection, featuring:
//!
//! - **Filtering & Search**: exact category filter, case-insensitive name
//!   search, lenient pagination
//! - **Security**: static API key on mutating requests, constant-time
//!   comparison
//! - **Validation**: field-level rules with every violation reported at once
//! - **Observability**: structured logging, centralized error translation
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      Axum HTTP Server                       │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Middleware (Auth → Trace → CORS → Body Limit)              │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Handlers (greeting, list/get/create/update/delete)         │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Validation (field rules, type coercion)                    │
//! ├─────────────────────────────────────────────────────────────┤
//! │  ProductStore (RwLock-guarded in-memory collection)         │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use product_catalog_api::{AppState, Config, ProductStore, build_router};
//!
//! #[tokio::main]
//! async fn main() {
//!     let config = Config::default();
//!     let state = AppState::new(ProductStore::with_seed_data(), config);
//!     let app = build_router(state);
//!
//!     // Start the server...
//! }
//! ```
//!
//! ## Security Configuration
//!
//! The API key is required at startup:
//! ```bash
//! API_KEY=your-secret-key cargo run
//! ```

pub mod config;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod state;
pub mod store;
pub mod utils;
pub mod validation;

// Re-exports for convenience
pub use config::Config;
pub use error::{ApiError, ApiResult};
pub use models::Product;
pub use routes::build_router;
pub use state::AppState;
pub use store::ProductStore;

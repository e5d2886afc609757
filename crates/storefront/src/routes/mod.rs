//! HTTP route handlers for the storefront API.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health                  - Liveness check (in main)
//! GET  /health/ready            - Readiness check (in main)
//!
//! # Products
//! GET  /products/{id}           - Product detail (variants + gallery)
//! GET  /products/{id}/gallery   - Re-resolved gallery for a color change
//! ```

pub mod products;

use axum::{Router, routing::get};

use crate::state::AppState;

/// Create the product routes router.
pub fn product_routes() -> Router<AppState> {
    Router::new()
        .route("/{id}", get(products::show))
        .route("/{id}/gallery", get(products::gallery))
}

/// Create all routes for the storefront API.
pub fn routes() -> Router<AppState> {
    Router::new().nest("/products", product_routes())
}

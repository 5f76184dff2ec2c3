//! Shared response payload types for API handlers.

use microgrid_core::catalog::Product;
use serde::Serialize;

/// `{ "products": [...] }` payload returned by product listing and search.
#[derive(Debug, Serialize)]
pub struct ProductsResponse {
    pub products: Vec<Product>,
}

/// `{ "message": ... }` payload for informational endpoints.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

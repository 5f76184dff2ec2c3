//! Handlers for the read-only product catalog.

use axum::extract::{Path, Query, State};
use axum::response::IntoResponse;
use axum::Json;
use microgrid_core::component_types::PALETTE;
use microgrid_core::filter::{filter_products, SpecQuery};

use crate::error::AppResult;
use crate::query::SearchParams;
use crate::response::ProductsResponse;
use crate::state::AppState;

/// GET /api/products
pub async fn list(State(state): State<AppState>) -> impl IntoResponse {
    Json(ProductsResponse {
        products: state.catalog.list_all().to_vec(),
    })
}

/// GET /api/products/search?type=&<attr>_min=&<attr>_max=&<attr>=
///
/// Filter the catalog by type and spec attributes. No matches is an empty
/// list, not an error.
pub async fn search(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> AppResult<impl IntoResponse> {
    let query = SpecQuery::from_params(params.0, &state.catalog.spec_attributes())?;
    let products = filter_products(state.catalog.list_all(), &query);

    tracing::debug!(
        product_type = ?query.product_type,
        ranges = query.ranges.len(),
        exact = query.exact.len(),
        matches = products.len(),
        "Product search",
    );

    Ok(Json(ProductsResponse { products }))
}

/// GET /api/products/{id}
///
/// A product plus every other product of the same type.
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let detail = state.catalog.get_by_id(&id)?;
    Ok(Json(detail))
}

/// GET /api/component-types
pub async fn component_types() -> impl IntoResponse {
    Json(PALETTE.as_slice())
}

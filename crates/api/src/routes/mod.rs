pub mod design;
pub mod health;
pub mod product;

use axum::routing::get;
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /designs                         list, create
/// /designs/{id}                    get
/// /designs/{id}/power-summary      power summary
///
/// /products                        list
/// /products/search                 search by type and spec attributes
/// /products/{id}                   get with alternatives
///
/// /component-types                 palette defaults
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Saved designs.
        .nest("/designs", design::router())
        // Static product catalog.
        .nest("/products", product::router())
        // Placeable component palette.
        .route("/component-types", get(handlers::product::component_types))
}

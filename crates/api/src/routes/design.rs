//! Route definitions for saved designs.

use axum::routing::get;
use axum::Router;

use crate::handlers::design;
use crate::state::AppState;

/// Routes mounted at `/designs`.
///
/// ```text
/// GET    /                      -> list
/// POST   /                      -> create
/// GET    /{id}                  -> get_by_id
/// GET    /{id}/power-summary    -> power_summary
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(design::list).post(design::create))
        .route("/{id}", get(design::get_by_id))
        .route("/{id}/power-summary", get(design::power_summary))
}

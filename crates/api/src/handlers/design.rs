//! Handlers for the `/designs` resource.
//!
//! Designs are created once and then only read; there is no update or delete.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use microgrid_core::design::validate_new_design;
use microgrid_core::error::CoreError;
use microgrid_core::power::system_power;
use microgrid_core::types::DbId;
use microgrid_db::models::design::{CreateDesign, Design};
use microgrid_db::repositories::DesignRepo;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Load a design or fail with `NotFound`.
async fn ensure_design_exists(pool: &sqlx::PgPool, id: DbId) -> AppResult<Design> {
    DesignRepo::find_by_id(pool, id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("Design", id)))
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/designs
///
/// Persist a new design. The store assigns `id` and, unless supplied,
/// `created_at`.
pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<CreateDesign>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let Json(input) = payload?;
    validate_new_design(&input.name, &input.components)?;

    let design = DesignRepo::create(&state.pool, &input).await?;

    tracing::info!(
        design_id = design.id,
        design_name = %design.name,
        component_count = design.components.len(),
        "Design created",
    );

    Ok((StatusCode::CREATED, Json(design)))
}

/// GET /api/designs
///
/// List all designs, newest first.
pub async fn list(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let designs = DesignRepo::list(&state.pool).await?;
    Ok(Json(designs))
}

/// GET /api/designs/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let design = ensure_design_exists(&state.pool, id).await?;
    Ok(Json(design))
}

/// GET /api/designs/{id}/power-summary
///
/// Aggregate generation, consumption and storage across the design's
/// components.
pub async fn power_summary(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let design = ensure_design_exists(&state.pool, id).await?;
    Ok(Json(system_power(&design.components)))
}

//! Design entity model and DTOs.
//!
//! A design's components live in a single JSONB column; they are never
//! queried individually.

use microgrid_core::design::Component;
use microgrid_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;

/// A row from the `designs` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Design {
    pub id: DbId,
    pub name: String,
    pub components: Json<Vec<Component>>,
    pub created_at: Timestamp,
}

/// DTO for creating a new design.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateDesign {
    pub name: String,
    pub components: Vec<Component>,
    /// Defaults to the insert time if omitted.
    #[serde(default)]
    pub created_at: Option<Timestamp>,
}

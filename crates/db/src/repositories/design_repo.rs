//! Repository for the `designs` table.

use microgrid_core::types::DbId;
use sqlx::types::Json;
use sqlx::PgPool;

use crate::models::design::{CreateDesign, Design};

/// Column list for the `designs` table.
const COLUMNS: &str = "id, name, components, created_at";

/// Provides create and read access to saved designs. Designs are never
/// updated or deleted through this repository.
pub struct DesignRepo;

impl DesignRepo {
    /// Insert a new design, returning the stored row with its assigned `id`
    /// and `created_at`.
    ///
    /// The insert is a single statement, so the row is visible to readers
    /// only once it is complete.
    pub async fn create(pool: &PgPool, input: &CreateDesign) -> Result<Design, sqlx::Error> {
        let query = format!(
            "INSERT INTO designs (name, components, created_at) \
             VALUES ($1, $2, COALESCE($3, now())) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Design>(&query)
            .bind(&input.name)
            .bind(Json(&input.components))
            .bind(input.created_at)
            .fetch_one(pool)
            .await
    }

    /// Find a design by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Design>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM designs WHERE id = $1");
        sqlx::query_as::<_, Design>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List every design, most recently created first.
    ///
    /// Designs sharing a `created_at` keep their insertion order.
    pub async fn list(pool: &PgPool) -> Result<Vec<Design>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM designs ORDER BY created_at DESC, id ASC");
        sqlx::query_as::<_, Design>(&query).fetch_all(pool).await
    }
}

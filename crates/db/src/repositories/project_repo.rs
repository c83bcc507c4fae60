//! Repository for the `projects` table.

use sqlx::PgPool;

use crate::models::project::Project;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, slug, description, short_description, client_name, \
    location, year, completion_date, tags, featured, featured_image, images, \
    published, created_at, updated_at";

/// Filter clause shared by the list and count queries.
const PUBLISHED_FILTER: &str = "published = TRUE AND ($1::boolean IS NULL OR featured = $1)";

/// Read operations for published projects.
pub struct ProjectRepo;

impl ProjectRepo {
    /// List published projects, newest first, windowed to `[offset, offset + limit)`.
    ///
    /// Callers clamp `limit` and `offset` via `elegant_core::pagination`.
    pub async fn list_published(
        pool: &PgPool,
        featured: Option<bool>,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Project>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM projects
             WHERE {PUBLISHED_FILTER}
             ORDER BY created_at DESC
             LIMIT $2 OFFSET $3"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(featured)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Count published projects under the same filters as [`Self::list_published`].
    pub async fn count_published(
        pool: &PgPool,
        featured: Option<bool>,
    ) -> Result<i64, sqlx::Error> {
        let query = format!("SELECT COUNT(*) FROM projects WHERE {PUBLISHED_FILTER}");
        sqlx::query_scalar::<_, i64>(&query)
            .bind(featured)
            .fetch_one(pool)
            .await
    }

    /// Find a published project by its slug.
    pub async fn find_published_by_slug(
        pool: &PgPool,
        slug: &str,
    ) -> Result<Option<Project>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projects WHERE slug = $1 AND published = TRUE");
        sqlx::query_as::<_, Project>(&query)
            .bind(slug)
            .fetch_optional(pool)
            .await
    }
}

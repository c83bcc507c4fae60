//! Repository for the `blog_posts` table.

use sqlx::PgPool;

use crate::models::blog_post::BlogPost;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, slug, excerpt, content, tags, category, published, \
    published_at, read_time, featured_image, seo_title, seo_description, \
    created_at, updated_at";

/// Read operations for published blog posts.
pub struct BlogPostRepo;

impl BlogPostRepo {
    /// List published posts, newest publication first, windowed to
    /// `[offset, offset + limit)`.
    ///
    /// Callers clamp `limit` and `offset` via `elegant_core::pagination`.
    pub async fn list_published(
        pool: &PgPool,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<BlogPost>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM blog_posts
             WHERE published = TRUE
             ORDER BY published_at DESC NULLS LAST, created_at DESC
             LIMIT $1 OFFSET $2"
        );
        sqlx::query_as::<_, BlogPost>(&query)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Count published posts.
    pub async fn count_published(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM blog_posts WHERE published = TRUE")
            .fetch_one(pool)
            .await
    }

    /// Find a published post by its slug.
    pub async fn find_published_by_slug(
        pool: &PgPool,
        slug: &str,
    ) -> Result<Option<BlogPost>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM blog_posts WHERE slug = $1 AND published = TRUE");
        sqlx::query_as::<_, BlogPost>(&query)
            .bind(slug)
            .fetch_optional(pool)
            .await
    }
}

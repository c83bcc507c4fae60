//! Repository for the `products` table.

use sqlx::PgPool;

use crate::models::product::Product;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, title, slug, description, category, subcategory, price, \
    currency, tags, featured, in_stock, specifications, featured_image, images, \
    seo_title, seo_description, published, created_at, updated_at";

/// Filter clause shared by `list_published` and `count_published` so the
/// windowed page and `meta.total` always agree.
const PUBLISHED_FILTER: &str = "published = TRUE
    AND ($1::text IS NULL OR category = $1)
    AND ($2::boolean IS NULL OR featured = $2)
    AND ($3::boolean IS NULL OR in_stock = $3)";

/// Read operations for published products.
pub struct ProductRepo;

impl ProductRepo {
    /// List published products, newest first, windowed to `[offset, offset + limit)`.
    ///
    /// Filters are exact field equality; `None` leaves a filter off. Callers
    /// clamp `limit` and `offset` via `elegant_core::pagination`.
    pub async fn list_published(
        pool: &PgPool,
        category: Option<&str>,
        featured: Option<bool>,
        in_stock: Option<bool>,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Product>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM products
             WHERE {PUBLISHED_FILTER}
             ORDER BY created_at DESC
             LIMIT $4 OFFSET $5"
        );
        sqlx::query_as::<_, Product>(&query)
            .bind(category)
            .bind(featured)
            .bind(in_stock)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Count published products under the same filters as [`Self::list_published`].
    pub async fn count_published(
        pool: &PgPool,
        category: Option<&str>,
        featured: Option<bool>,
        in_stock: Option<bool>,
    ) -> Result<i64, sqlx::Error> {
        let query = format!("SELECT COUNT(*) FROM products WHERE {PUBLISHED_FILTER}");
        sqlx::query_scalar::<_, i64>(&query)
            .bind(category)
            .bind(featured)
            .bind(in_stock)
            .fetch_one(pool)
            .await
    }

    /// Find a published product by its slug.
    pub async fn find_published_by_slug(
        pool: &PgPool,
        slug: &str,
    ) -> Result<Option<Product>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM products WHERE slug = $1 AND published = TRUE");
        sqlx::query_as::<_, Product>(&query)
            .bind(slug)
            .fetch_optional(pool)
            .await
    }
}

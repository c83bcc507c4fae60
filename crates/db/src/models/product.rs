//! Product entity model and public-shape DTO.

use serde::Serialize;
use sqlx::FromRow;
use ts_rs::TS;
use uuid::Uuid;

use elegant_core::media::MediaUrlResolver;
use elegant_core::types::Timestamp;

/// A product row from the `products` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Product {
    pub id: Uuid,
    pub name: String,
    pub title: Option<String>,
    pub slug: Option<String>,
    pub description: Option<String>,
    pub category: String,
    pub subcategory: Option<String>,
    pub price: Option<f64>,
    pub currency: Option<String>,
    pub tags: Option<Vec<String>>,
    pub featured: bool,
    pub in_stock: Option<bool>,
    pub specifications: Option<serde_json::Value>,
    pub featured_image: Option<String>,
    pub images: Option<Vec<String>>,
    pub seo_title: Option<String>,
    pub seo_description: Option<String>,
    pub published: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// The storefront shape of a product.
///
/// Field defaulting rules (older CMS rows leave most columns unset):
/// - `title` falls back to `name`, `slug` falls back to the row id
/// - `currency` defaults to `"KES"`, `in_stock` to `true`
/// - media keys are resolved to absolute URLs; `featured_image` falls back
///   to the first gallery image, and an imageless product serializes as
///   `featured_image: null`, `images: []`
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export)]
pub struct PublicProduct {
    pub id: Uuid,
    pub title: String,
    pub slug: String,
    pub description: Option<String>,
    pub category: String,
    pub subcategory: Option<String>,
    pub price: Option<f64>,
    pub currency: String,
    pub featured_image: Option<String>,
    pub images: Vec<String>,
    pub tags: Vec<String>,
    pub featured: bool,
    pub in_stock: bool,
    pub specifications: Option<serde_json::Value>,
    pub seo_title: Option<String>,
    pub seo_description: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl PublicProduct {
    /// Map a database row into the public shape.
    pub fn from_row(row: Product, media: &MediaUrlResolver) -> Self {
        let images = media.resolve_all(row.images.as_deref().unwrap_or_default());
        let featured_image = row
            .featured_image
            .as_deref()
            .and_then(|key| media.resolve(key))
            .or_else(|| images.first().cloned());

        Self {
            id: row.id,
            title: row.title.unwrap_or(row.name),
            slug: row.slug.unwrap_or_else(|| row.id.to_string()),
            description: row.description,
            category: row.category,
            subcategory: row.subcategory,
            price: row.price,
            currency: row.currency.unwrap_or_else(|| "KES".to_string()),
            featured_image,
            images,
            tags: row.tags.unwrap_or_default(),
            featured: row.featured,
            in_stock: row.in_stock.unwrap_or(true),
            specifications: row.specifications,
            seo_title: row.seo_title,
            seo_description: row.seo_description,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

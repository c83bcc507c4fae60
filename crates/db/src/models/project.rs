//! Project (portfolio) entity model and public-shape DTO.

use serde::Serialize;
use sqlx::FromRow;
use ts_rs::TS;
use uuid::Uuid;

use elegant_core::media::MediaUrlResolver;
use elegant_core::types::Timestamp;

/// A project row from the `projects` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Project {
    pub id: Uuid,
    pub title: String,
    pub slug: String,
    pub description: Option<String>,
    pub short_description: Option<String>,
    pub client_name: Option<String>,
    pub location: Option<String>,
    pub year: Option<i32>,
    pub completion_date: Option<chrono::NaiveDate>,
    pub tags: Option<Vec<String>>,
    pub featured: bool,
    pub featured_image: Option<String>,
    pub images: Option<Vec<String>>,
    pub published: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// The storefront shape of a project.
///
/// Carries both the resolved `featured_image` URL and the raw
/// `featured_image_key` so the storefront can request alternate renditions.
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export)]
pub struct PublicProject {
    pub id: Uuid,
    pub title: String,
    pub slug: String,
    pub description: Option<String>,
    pub short_description: Option<String>,
    pub client_name: Option<String>,
    pub location: Option<String>,
    pub year: Option<i32>,
    pub completion_date: Option<chrono::NaiveDate>,
    pub featured_image: Option<String>,
    pub featured_image_key: Option<String>,
    pub images: Vec<String>,
    pub tags: Vec<String>,
    pub featured: bool,
    pub seo_title: Option<String>,
    pub seo_description: Option<String>,
}

impl PublicProject {
    /// Map a database row into the public shape.
    pub fn from_row(row: Project, media: &MediaUrlResolver) -> Self {
        let images = media.resolve_all(row.images.as_deref().unwrap_or_default());
        let featured_image = row
            .featured_image
            .as_deref()
            .and_then(|key| media.resolve(key))
            .or_else(|| images.first().cloned());

        Self {
            id: row.id,
            title: row.title,
            slug: row.slug,
            description: row.description,
            short_description: row.short_description,
            client_name: row.client_name,
            location: row.location,
            year: row.year,
            completion_date: row.completion_date,
            featured_image,
            featured_image_key: row.featured_image,
            images,
            tags: row.tags.unwrap_or_default(),
            featured: row.featured,
            // The projects table has no SEO columns; the storefront still
            // expects the fields to be present.
            seo_title: None,
            seo_description: None,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

//! Blog post (journal) entity model and public-shape DTO.

use serde::Serialize;
use sqlx::FromRow;
use ts_rs::TS;
use uuid::Uuid;

use elegant_core::media::MediaUrlResolver;
use elegant_core::types::Timestamp;

/// A blog post row from the `blog_posts` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct BlogPost {
    pub id: Uuid,
    pub title: String,
    pub slug: String,
    pub excerpt: Option<String>,
    pub content: String,
    pub tags: Option<Vec<String>>,
    pub category: Option<String>,
    pub published: bool,
    pub published_at: Option<Timestamp>,
    pub read_time: Option<i32>,
    pub featured_image: Option<String>,
    pub seo_title: Option<String>,
    pub seo_description: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// The storefront shape of a blog post.
///
/// Posts have a single featured image; `images` is always empty and exists
/// so the storefront can treat every public entity uniformly.
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export)]
pub struct PublicBlogPost {
    pub id: Uuid,
    pub title: String,
    pub slug: String,
    pub excerpt: Option<String>,
    pub content: String,
    pub featured_image: Option<String>,
    pub featured_image_key: Option<String>,
    pub images: Vec<String>,
    pub tags: Vec<String>,
    pub category: Option<String>,
    pub published: bool,
    pub published_at: Option<Timestamp>,
    pub read_time: Option<i32>,
    pub seo_title: Option<String>,
    pub seo_description: Option<String>,
}

impl PublicBlogPost {
    /// Map a database row into the public shape.
    pub fn from_row(row: BlogPost, media: &MediaUrlResolver) -> Self {
        let featured_image = row.featured_image.as_deref().and_then(|key| media.resolve(key));

        Self {
            id: row.id,
            title: row.title,
            slug: row.slug,
            excerpt: row.excerpt,
            content: row.content,
            featured_image,
            featured_image_key: row.featured_image,
            images: Vec::new(),
            tags: row.tags.unwrap_or_default(),
            category: row.category,
            published: row.published,
            published_at: row.published_at,
            read_time: row.read_time,
            seo_title: row.seo_title,
            seo_description: row.seo_description,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn media() -> MediaUrlResolver {
        MediaUrlResolver::new("https://media.example.com")
    }

    fn bare_row() -> BlogPost {
        let now = chrono::Utc::now();
        BlogPost {
            id: Uuid::new_v4(),
            title: "Choosing the Right Tile".to_string(),
            slug: "choosing-the-right-tile".to_string(),
            excerpt: None,
            content: "Porcelain or ceramic?".to_string(),
            tags: None,
            category: None,
            published: true,
            published_at: Some(now),
            read_time: None,
            featured_image: None,
            seo_title: None,
            seo_description: None,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn images_are_always_empty() {
        let mut row = bare_row();
        row.featured_image = Some("journal/cover.jpg".to_string());
        let public = PublicBlogPost::from_row(row, &media());
        assert!(public.images.is_empty());
    }

    #[test]
    fn featured_image_resolves_to_absolute_url() {
        let mut row = bare_row();
        row.featured_image = Some("journal/cover.jpg".to_string());
        let public = PublicBlogPost::from_row(row, &media());
        assert_eq!(
            public.featured_image,
            Some("https://media.example.com/journal/cover.jpg".to_string())
        );
        assert_eq!(public.featured_image_key, Some("journal/cover.jpg".to_string()));
    }

    #[test]
    fn coverless_post_yields_null() {
        let public = PublicBlogPost::from_row(bare_row(), &media());
        assert_eq!(public.featured_image, None);
        assert_eq!(public.featured_image_key, None);
    }
}

//! The services catalog.
//!
//! Services are not backed by a database table yet -- the catalog below is
//! the source of truth until a `services` table lands, at which point this
//! module becomes a repository like the others. The list is rebuilt per
//! request, never cached.

use serde::Serialize;
use ts_rs::TS;

use crate::types::Timestamp;

/// A service offered by the studio, shaped exactly like the other public
/// entities so the storefront can render all catalogs uniformly.
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export)]
pub struct Service {
    pub id: String,
    pub title: String,
    pub slug: String,
    pub description: String,
    pub category: String,
    pub icon: Option<String>,
    pub featured_image: Option<String>,
    pub images: Vec<String>,
    pub featured: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

fn entry(id: &str, title: &str, description: &str, category: &str, featured: bool) -> Service {
    let now = chrono::Utc::now();
    Service {
        id: id.to_string(),
        title: title.to_string(),
        slug: id.to_string(),
        description: description.to_string(),
        category: category.to_string(),
        icon: None,
        featured_image: None,
        images: Vec::new(),
        featured,
        created_at: now,
        updated_at: now,
    }
}

/// Build the full services catalog.
pub fn catalog() -> Vec<Service> {
    vec![
        entry(
            "interior-design",
            "Interior Design",
            "Bespoke interior design solutions that reflect your personality and lifestyle.",
            "design",
            true,
        ),
        entry(
            "luxury-tiles",
            "Luxury Tiles",
            "Premium tiles sourced from the finest manufacturers around the world.",
            "products",
            true,
        ),
        entry(
            "project-management",
            "Project Management",
            "End-to-end project execution with meticulous attention to detail.",
            "services",
            false,
        ),
        entry(
            "custom-fabrication",
            "Custom Fabrication",
            "Tailored solutions for unique design requirements.",
            "services",
            false,
        ),
        entry(
            "design-consultation",
            "Design Consultation",
            "Expert advice to help you make informed design decisions.",
            "consultation",
            true,
        ),
        entry(
            "installation-warranty",
            "Installation & Warranty",
            "Professional installation with comprehensive warranty coverage.",
            "services",
            false,
        ),
    ]
}

/// Filter the catalog by exact, case-sensitive field equality.
pub fn filter(
    services: Vec<Service>,
    category: Option<&str>,
    featured: Option<bool>,
) -> Vec<Service> {
    services
        .into_iter()
        .filter(|service| category.is_none_or(|c| service.category == c))
        .filter(|service| featured.is_none_or(|f| service.featured == f))
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_has_six_services() {
        assert_eq!(catalog().len(), 6);
    }

    #[test]
    fn no_filters_returns_everything() {
        assert_eq!(filter(catalog(), None, None).len(), 6);
    }

    #[test]
    fn category_filter_is_exact() {
        let services = filter(catalog(), Some("services"), None);
        assert_eq!(services.len(), 3);
        assert!(services.iter().all(|s| s.category == "services"));
    }

    #[test]
    fn category_filter_is_case_sensitive() {
        assert!(filter(catalog(), Some("Services"), None).is_empty());
    }

    #[test]
    fn unknown_category_matches_nothing() {
        assert!(filter(catalog(), Some("landscaping"), None).is_empty());
    }

    #[test]
    fn featured_filter_selects_featured_only() {
        let services = filter(catalog(), None, Some(true));
        assert_eq!(services.len(), 3);
        assert!(services.iter().all(|s| s.featured));
    }

    #[test]
    fn filters_combine() {
        let services = filter(catalog(), Some("design"), Some(true));
        assert_eq!(services.len(), 1);
        assert_eq!(services[0].slug, "interior-design");
    }

    #[test]
    fn services_carry_no_media() {
        for service in catalog() {
            assert!(service.featured_image.is_none());
            assert!(service.images.is_empty());
        }
    }
}

//! Media key to public URL resolution.
//!
//! Records store bare object-storage keys (e.g. `products/marble-tile.jpg`).
//! Public responses always carry absolute URLs, so every key is resolved
//! against the bucket's public base URL at response time. The bucket itself
//! is opaque to this service.

/// Resolves stored media keys into publicly reachable URLs.
#[derive(Debug, Clone)]
pub struct MediaUrlResolver {
    base_url: String,
}

impl MediaUrlResolver {
    /// Create a resolver for the given public base URL.
    ///
    /// A trailing slash on the base URL is ignored.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { base_url }
    }

    /// Resolve a stored key into an absolute URL.
    ///
    /// Keys that are already absolute URLs pass through untouched (some rows
    /// imported from the legacy CMS store full URLs). Blank keys resolve to
    /// `None` so public shapes surface `null` instead of a broken link.
    pub fn resolve(&self, key: &str) -> Option<String> {
        let key = key.trim();
        if key.is_empty() {
            return None;
        }
        if key.starts_with("http://") || key.starts_with("https://") {
            return Some(key.to_string());
        }
        Some(format!("{}/{}", self.base_url, key.trim_start_matches('/')))
    }

    /// Resolve a list of stored keys, dropping any that are blank.
    pub fn resolve_all(&self, keys: &[String]) -> Vec<String> {
        keys.iter().filter_map(|key| self.resolve(key)).collect()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

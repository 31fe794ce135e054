use crate::config::CatalogConfig;

/// Size token for the unscaled image
pub const IMAGE_FULL_SIZE: &str = "original";

/// Builds absolute image URLs from the relative paths the API returns
#[derive(Debug, Clone)]
pub struct ImageUrlBuilder {
    base_url: String,
}

impl ImageUrlBuilder {
    /// Create a builder for the given base (e.g. `https://image.tmdb.org/t/p/`)
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    #[must_use]
    pub fn from_config(config: &CatalogConfig) -> Self {
        Self::new(config.image_base_url.clone())
    }

    /// Full-size URL for a relative path
    #[must_use]
    pub fn url(&self, path: &str) -> Option<String> {
        self.sized_url(path, IMAGE_FULL_SIZE)
    }

    /// URL for a relative path at the given size token (e.g. `w500`).
    ///
    /// Returns `None` for a blank path. SVG images are only served at full
    /// size, so the size token is ignored for them.
    #[must_use]
    pub fn sized_url(&self, path: &str, size: &str) -> Option<String> {
        if path.trim().is_empty() {
            return None;
        }

        let size = if path.ends_with(".svg") {
            IMAGE_FULL_SIZE
        } else {
            size
        };

        Some(format!("{}{size}{path}", self.base_url))
    }
}

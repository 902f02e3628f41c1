use crate::modules::listing::domain::entities::DEFAULT_PLACEHOLDER_IMAGE;

/// Configuration for the catalog pipeline and the page views derived from it
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    /// Image used when a listing has neither gallery images nor a main image
    pub placeholder_image: String,

    // Home page sections
    /// Size of the "recently added" section
    pub recent_section_size: usize,

    /// Size of the electric, premium and SUV sections
    pub highlight_section_size: usize,

    /// Listings priced strictly above this are premium
    pub premium_price_threshold: f64,

    /// Body type fragment (case-insensitive) that marks an SUV
    pub suv_body_marker: String,

    /// Maximum similar listings shown on a detail page
    pub similar_limit: usize,
}

impl CatalogConfig {
    pub fn new() -> Self {
        Self {
            placeholder_image: DEFAULT_PLACEHOLDER_IMAGE.to_string(),
            recent_section_size: 8,
            highlight_section_size: 4,
            premium_price_threshold: 50_000.0,
            suv_body_marker: "suv".to_string(),
            similar_limit: 4,
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.placeholder_image.trim().is_empty() {
            return Err("placeholder_image must not be empty".to_string());
        }

        if self.recent_section_size == 0 || self.highlight_section_size == 0 {
            return Err("Section sizes must be > 0".to_string());
        }

        if !self.premium_price_threshold.is_finite() || self.premium_price_threshold < 0.0 {
            return Err(format!(
                "premium_price_threshold must be a non-negative number, got {}",
                self.premium_price_threshold
            ));
        }

        if self.suv_body_marker.trim().is_empty() {
            return Err("suv_body_marker must not be empty".to_string());
        }

        Ok(())
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Default)]
pub struct CatalogConfigBuilder {
    config: CatalogConfig,
}

impl CatalogConfigBuilder {
    pub fn new() -> Self {
        Self {
            config: CatalogConfig::new(),
        }
    }

    pub fn placeholder_image(mut self, url: impl Into<String>) -> Self {
        self.config.placeholder_image = url.into();
        self
    }

    pub fn recent_section_size(mut self, size: usize) -> Self {
        self.config.recent_section_size = size;
        self
    }

    pub fn highlight_section_size(mut self, size: usize) -> Self {
        self.config.highlight_section_size = size;
        self
    }

    pub fn premium_price_threshold(mut self, threshold: f64) -> Self {
        self.config.premium_price_threshold = threshold;
        self
    }

    pub fn similar_limit(mut self, limit: usize) -> Self {
        self.config.similar_limit = limit;
        self
    }

    pub fn build(self) -> Result<CatalogConfig, String> {
        self.config.validate()?;
        Ok(self.config)
    }
}

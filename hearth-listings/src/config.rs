/// Configuration for listing writes.
#[derive(Debug, Clone)]
pub struct MarketConfig {
    /// Maximum number of image references per listing.
    pub max_images_per_listing: usize,
}

impl Default for MarketConfig {
    fn default() -> Self {
        Self {
            max_images_per_listing: 10,
        }
    }
}

impl MarketConfig {
    pub fn with_max_images_per_listing(mut self, n: usize) -> Self {
        self.max_images_per_listing = n;
        self
    }
}

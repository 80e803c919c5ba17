//! Harvest options DTO

use crate::domain::entities::ImageType;

/// Options for a harvest run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HarvestOptions {
    /// Image types whose signatures qualify a cache entry
    pub allowed_types: Vec<ImageType>,
    /// Classify and report destinations without creating or copying anything
    pub dry_run: bool,
}

impl Default for HarvestOptions {
    fn default() -> Self {
        Self {
            allowed_types: ImageType::DEFAULT_BACKGROUND_TYPES.to_vec(),
            dry_run: false,
        }
    }
}

impl HarvestOptions {
    /// Restricts harvesting to the given types
    pub fn with_types(mut self, types: Vec<ImageType>) -> Self {
        self.allowed_types = types;
        self
    }

    pub fn dry_run(mut self, enabled: bool) -> Self {
        self.dry_run = enabled;
        self
    }
}

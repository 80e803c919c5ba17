//! Domain services
//!
//! Filtering and classification logic applied to each cache entry.

pub mod classifier;
pub mod filter;

pub use classifier::{classify, image_dimensions, is_horizontal};
pub use filter::{
    detect_background_type, is_background_image, passes_weight_filter, screen, Rejection,
    Screening, MIN_WEIGHT_KB,
};

//! Domain entities
//!
//! Core objects flowing through the harvest pipeline.

mod candidate;
mod image_type;

pub use candidate::{CandidateFile, ClassifiedImage, Orientation};
pub use image_type::{ImageType, SIGNATURE_PROBE_LEN};

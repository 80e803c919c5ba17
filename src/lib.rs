pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

pub use application::dto::{HarvestOptions, HarvestReport};
pub use application::HarvestUseCase;
pub use domain::entities::{CandidateFile, ClassifiedImage, ImageType, Orientation};
pub use error::{HarvestError, Result};

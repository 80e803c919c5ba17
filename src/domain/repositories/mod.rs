//! Repository traits (interfaces)
//!
//! These traits define the contracts for the filesystem edges of the
//! pipeline, so the domain can be driven against any directory pair.

mod image_writer;
mod path_provider;

pub use image_writer::{ClassifiedImageWriter, WriteOutcome};
pub use path_provider::PathProvider;

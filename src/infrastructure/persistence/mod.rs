//! Filesystem persistence adapters

mod local_image_copier;

pub use local_image_copier::LocalImageCopier;

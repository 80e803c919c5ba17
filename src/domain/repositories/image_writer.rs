//! Classified image writer trait
//!
//! Defines the interface for materializing classified images into their
//! orientation folders.

use crate::domain::entities::{ClassifiedImage, Orientation};
use crate::error::Result;
use std::path::{Path, PathBuf};

/// Result of writing a single image
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriteOutcome {
    /// The image was copied to `path`
    Copied { path: PathBuf, bytes: u64 },
    /// Something already exists at `path`; it was left untouched
    AlreadyPresent { path: PathBuf },
}

impl WriteOutcome {
    pub fn path(&self) -> &Path {
        match self {
            WriteOutcome::Copied { path, .. } | WriteOutcome::AlreadyPresent { path } => path,
        }
    }
}

/// Trait for writing classified images to storage
///
/// # Example
///
/// ```ignore
/// let writer = LocalImageCopier::new(&desktop);
/// writer.prepare()?;
/// match writer.write(&image)? {
///     WriteOutcome::Copied { path, .. } => println!("Saved to: {}", path.display()),
///     WriteOutcome::AlreadyPresent { .. } => {}
/// }
/// ```
pub trait ClassifiedImageWriter {
    /// Creates the destination folders if they are missing.
    ///
    /// Calling this more than once is harmless.
    fn prepare(&self) -> Result<()>;

    /// Destination path the image would be written to
    fn destination(&self, image: &ClassifiedImage) -> PathBuf;

    /// Copies the image unless its destination already exists
    fn write(&self, image: &ClassifiedImage) -> Result<WriteOutcome>;

    /// Folder that receives images of the given orientation
    fn folder(&self, orientation: Orientation) -> PathBuf;
}

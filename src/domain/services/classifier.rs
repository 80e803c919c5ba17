//! Orientation classifier

use crate::domain::entities::{CandidateFile, ClassifiedImage};
use crate::error::{HarvestError, Result};
use image::ImageReader;
use std::path::Path;

fn decode_error(path: &Path, err: impl ToString) -> HarvestError {
    HarvestError::Decode {
        path: path.to_path_buf(),
        message: err.to_string(),
    }
}

/// Opens the file as an image and returns `(width, height)`.
///
/// The container format is sniffed from content, not from the file name.
pub fn image_dimensions(path: &Path) -> Result<(u32, u32)> {
    let reader = ImageReader::open(path)?
        .with_guessed_format()
        .map_err(|e| decode_error(path, e))?;

    reader.into_dimensions().map_err(|e| decode_error(path, e))
}

/// True when width >= height; square images count as horizontal
pub fn is_horizontal(path: &Path) -> Result<bool> {
    let (width, height) = image_dimensions(path)?;
    Ok(width >= height)
}

pub fn classify(candidate: CandidateFile) -> Result<ClassifiedImage> {
    let (width, height) = image_dimensions(candidate.path())?;
    Ok(ClassifiedImage::new(candidate, width, height))
}

//! Candidate filter service
//!
//! Two predicates decide whether a cache entry is worth classifying: its
//! leading bytes must match an allowed image signature and it must weigh
//! more than a fixed number of decimal kilobytes.

use crate::domain::entities::{CandidateFile, ImageType, SIGNATURE_PROBE_LEN};
use crate::error::Result;
use std::fs::{self, File};
use std::io::Read;
use std::path::Path;

/// Files at or below this many decimal kilobytes are thumbnails or icons
pub const MIN_WEIGHT_KB: u64 = 400;

/// Reads up to [`SIGNATURE_PROBE_LEN`] leading bytes of a file
fn read_probe(path: &Path) -> Result<Vec<u8>> {
    let mut probe = Vec::with_capacity(SIGNATURE_PROBE_LEN);
    File::open(path)?
        .take(SIGNATURE_PROBE_LEN as u64)
        .read_to_end(&mut probe)?;
    Ok(probe)
}

/// Returns the first allowed type whose signature matches the file header.
///
/// An empty `allowed` list means [`ImageType::DEFAULT_BACKGROUND_TYPES`].
pub fn detect_background_type(path: &Path, allowed: &[ImageType]) -> Result<Option<ImageType>> {
    let allowed = if allowed.is_empty() {
        &ImageType::DEFAULT_BACKGROUND_TYPES[..]
    } else {
        allowed
    };
    let probe = read_probe(path)?;
    Ok(ImageType::detect(&probe, allowed))
}

/// Returns true if the file header matches any allowed type.
///
/// Callers wanting the stock behaviour pass
/// [`ImageType::DEFAULT_BACKGROUND_TYPES`].
pub fn is_background_image(path: &Path, allowed: &[ImageType]) -> Result<bool> {
    Ok(detect_background_type(path, allowed)?.is_some())
}

/// Strict decimal-kilobyte threshold on a byte count
pub fn exceeds_weight_threshold(size_bytes: u64) -> bool {
    size_bytes > MIN_WEIGHT_KB * 1000
}

pub fn passes_weight_filter(path: &Path) -> Result<bool> {
    let size = fs::metadata(path)?.len();
    Ok(exceeds_weight_threshold(size))
}

/// Why a cache entry was not turned into a candidate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    NotAFile,
    UnrecognisedType,
    TooLight,
}

/// Outcome of running both predicates over one cache entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screening {
    Accepted(CandidateFile),
    Rejected(Rejection),
}

/// Applies both predicates and builds a candidate if they pass.
///
/// The type check runs first so the size is only looked at for image files.
pub fn screen(path: &Path, allowed: &[ImageType]) -> Result<Screening> {
    let metadata = fs::metadata(path)?;
    if !metadata.is_file() {
        return Ok(Screening::Rejected(Rejection::NotAFile));
    }

    let Some(image_type) = detect_background_type(path, allowed)? else {
        return Ok(Screening::Rejected(Rejection::UnrecognisedType));
    };

    if !exceeds_weight_threshold(metadata.len()) {
        return Ok(Screening::Rejected(Rejection::TooLight));
    }

    Ok(Screening::Accepted(CandidateFile::new(
        path.to_path_buf(),
        metadata.len(),
        image_type,
    )))
}

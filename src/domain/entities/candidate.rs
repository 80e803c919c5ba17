//! Candidate and classified image entities
//!
//! A candidate is a cache entry that passed both filters; a classified image
//! additionally knows its pixel dimensions and orientation.

use super::image_type::ImageType;
use std::fmt;
use std::path::{Path, PathBuf};

/// Orientation of an image's pixel grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// Width greater than or equal to height
    Horizontal,
    /// Height strictly greater than width
    Vertical,
}

impl Orientation {
    /// Square images count as horizontal.
    pub fn from_dimensions(width: u32, height: u32) -> Self {
        if width >= height {
            Orientation::Horizontal
        } else {
            Orientation::Vertical
        }
    }

    /// Name of the destination folder for this orientation
    pub fn folder_name(&self) -> &'static str {
        match self {
            Orientation::Horizontal => "Horizontal-Background-Images",
            Orientation::Vertical => "Vertical-Background-Images",
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Orientation::Horizontal => f.write_str("horizontal"),
            Orientation::Vertical => f.write_str("vertical"),
        }
    }
}

/// A cache entry that passed the signature and weight filters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateFile {
    path: PathBuf,
    size: u64,
    image_type: ImageType,
}

impl CandidateFile {
    pub fn new(path: PathBuf, size: u64, image_type: ImageType) -> Self {
        Self {
            path,
            size,
            image_type,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn size(&self) -> u64 {
        self.size
    }

    pub fn image_type(&self) -> ImageType {
        self.image_type
    }

    /// `<basename>.<extension>`; cache entries usually carry no extension of
    /// their own, so this is typically `<opaque-id>.jpeg`.
    pub fn output_filename(&self) -> String {
        let base = self
            .path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        format!("{}.{}", base, self.image_type.extension())
    }
}

/// A candidate whose dimensions have been read
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifiedImage {
    candidate: CandidateFile,
    width: u32,
    height: u32,
    orientation: Orientation,
}

impl ClassifiedImage {
    pub fn new(candidate: CandidateFile, width: u32, height: u32) -> Self {
        Self {
            candidate,
            width,
            height,
            orientation: Orientation::from_dimensions(width, height),
        }
    }

    pub fn candidate(&self) -> &CandidateFile {
        &self.candidate
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn is_horizontal(&self) -> bool {
        self.orientation == Orientation::Horizontal
    }
}

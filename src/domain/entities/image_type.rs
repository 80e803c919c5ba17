//! Image type entity
//!
//! The closed set of image formats the harvester can recognise, each paired
//! with the leading-byte rule that identifies it.

use crate::error::{HarvestError, Result};
use std::fmt;
use std::str::FromStr;

/// Number of leading bytes handed to a signature tester
pub const SIGNATURE_PROBE_LEN: usize = 32;

const PNG_MAGIC: &[u8] = &[0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];
const JPEG_RAW_MAGIC: &[u8] = &[0xFF, 0xD8, 0xFF, 0xDB];

/// Image formats with a known signature tester
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImageType {
    /// JPEG in JFIF or Exif framing, or a bare quantization-table start
    Jpeg,
    /// PNG image format
    Png,
    /// GIF87a / GIF89a
    Gif,
    /// TIFF, either byte order
    Tiff,
    /// Windows bitmap
    Bmp,
    /// WebP inside a RIFF container
    WebP,
}

impl ImageType {
    /// Every recognised type, in detection order
    pub const ALL: [ImageType; 6] = [
        ImageType::Jpeg,
        ImageType::Png,
        ImageType::Gif,
        ImageType::Tiff,
        ImageType::Bmp,
        ImageType::WebP,
    ];

    /// Formats Spotlight is known to cache
    pub const DEFAULT_BACKGROUND_TYPES: [ImageType; 2] = [ImageType::Tiff, ImageType::Jpeg];

    /// Returns the lowercase tag, which doubles as the output extension
    pub fn tag(&self) -> &'static str {
        match self {
            ImageType::Jpeg => "jpeg",
            ImageType::Png => "png",
            ImageType::Gif => "gif",
            ImageType::Tiff => "tiff",
            ImageType::Bmp => "bmp",
            ImageType::WebP => "webp",
        }
    }

    /// Returns the extension used for harvested copies
    pub fn extension(&self) -> &'static str {
        self.tag()
    }

    /// Checks whether `header` starts like a file of this type.
    ///
    /// `header` is normally the first [`SIGNATURE_PROBE_LEN`] bytes of the
    /// file but may be shorter for tiny files.
    pub fn matches_signature(&self, header: &[u8]) -> bool {
        match self {
            ImageType::Jpeg => {
                let marker = header.get(6..10);
                marker == Some(b"JFIF".as_slice())
                    || marker == Some(b"Exif".as_slice())
                    || header.starts_with(JPEG_RAW_MAGIC)
            }
            ImageType::Png => header.starts_with(PNG_MAGIC),
            ImageType::Gif => header.starts_with(b"GIF87a") || header.starts_with(b"GIF89a"),
            ImageType::Tiff => header.starts_with(b"MM") || header.starts_with(b"II"),
            ImageType::Bmp => header.starts_with(b"BM"),
            ImageType::WebP => {
                header.starts_with(b"RIFF") && header.get(8..12) == Some(b"WEBP".as_slice())
            }
        }
    }

    /// Resolves a list of tags, failing on the first one without a tester
    pub fn parse_list<S: AsRef<str>>(tags: &[S]) -> Result<Vec<ImageType>> {
        tags.iter().map(|t| t.as_ref().parse()).collect()
    }

    /// Returns the first allowed type, in [`ImageType::ALL`] order, whose
    /// signature matches `header`
    pub fn detect(header: &[u8], allowed: &[ImageType]) -> Option<ImageType> {
        ImageType::ALL
            .into_iter()
            .filter(|t| allowed.contains(t))
            .find(|t| t.matches_signature(header))
    }
}

impl FromStr for ImageType {
    type Err = HarvestError;

    fn from_str(s: &str) -> Result<Self> {
        let tag = s.trim().to_ascii_lowercase();
        ImageType::ALL
            .into_iter()
            .find(|t| t.tag() == tag)
            .ok_or_else(|| HarvestError::UnknownImageType(s.to_string()))
    }
}

impl fmt::Display for ImageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

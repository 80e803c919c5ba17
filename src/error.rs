use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while locating, filtering, classifying or copying images
#[derive(Error, Debug)]
pub enum HarvestError {
    #[error("Spotlight cache unavailable at {path}: {source}")]
    CacheUnavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Could not determine the user's home directory")]
    HomeDirUnavailable,

    #[error("No signature tester for image type: {0}")]
    UnknownImageType(String),

    #[error("Failed to decode {path}: {message}")]
    Decode { path: PathBuf, message: String },

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, HarvestError>;

//! Path provider trait
//!
//! Supplies the cache root the images are read from and the output root the
//! orientation folders are created under. Injecting this keeps the pipeline
//! free of OS path conventions.

use crate::error::Result;
use std::path::PathBuf;

/// Source of the two directories the harvest works between
///
/// # Example
///
/// ```ignore
/// let locator = SpotlightLocator::from_env();
/// let assets = locator.cache_root()?;
/// let desktop = locator.output_root()?;
/// ```
pub trait PathProvider {
    /// Directory holding the cached Spotlight assets.
    ///
    /// Implementations do not check that it exists; listing a missing
    /// directory is reported by the caller.
    fn cache_root(&self) -> Result<PathBuf>;

    /// Directory under which the orientation folders live
    fn output_root(&self) -> Result<PathBuf>;
}

//! Infrastructure layer
//!
//! Concrete adapters for the domain's repository traits.

pub mod locator;
pub mod persistence;

pub use locator::{FixedLocator, SpotlightLocator};
pub use persistence::LocalImageCopier;

//! Locators for the Spotlight cache and the output root

mod env_expand;
mod spotlight;

pub use env_expand::expand_windows_vars;
pub use spotlight::{FixedLocator, SpotlightLocator, SPOTLIGHT_ASSETS_TEMPLATE};

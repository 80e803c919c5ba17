//! Spotlight cache locator

use super::env_expand::expand_windows_vars;
use crate::domain::repositories::PathProvider;
use crate::error::{HarvestError, Result};
use std::collections::HashMap;
use std::path::{PathBuf, MAIN_SEPARATOR_STR};

/// Where Windows' content delivery manager keeps lock-screen assets
pub const SPOTLIGHT_ASSETS_TEMPLATE: &str = r"%userprofile%\AppData\Local\Packages\Microsoft.Windows.ContentDeliveryManager_cw5n1h2txyewy\LocalState\Assets";

const DESKTOP_DIR: &str = "Desktop";

/// Resolves the real Spotlight cache and the user's desktop
#[derive(Debug, Clone)]
pub struct SpotlightLocator {
    // keyed by upper-cased name; Windows variable names are case-insensitive
    env: HashMap<String, String>,
    home: Option<PathBuf>,
    cache_override: Option<PathBuf>,
    output_override: Option<PathBuf>,
}

impl SpotlightLocator {
    /// Snapshot of the process environment and home directory
    pub fn from_env() -> Self {
        let vars = std::env::vars_os().map(|(k, v)| {
            (
                k.to_string_lossy().into_owned(),
                v.to_string_lossy().into_owned(),
            )
        });
        Self::with_env(vars, dirs::home_dir())
    }

    pub fn with_env<I, K, V>(vars: I, home: Option<PathBuf>) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let env = vars
            .into_iter()
            .map(|(k, v)| (k.as_ref().to_ascii_uppercase(), v.into()))
            .collect();
        Self {
            env,
            home,
            cache_override: None,
            output_override: None,
        }
    }

    /// Reads from `path` instead of the expanded template
    pub fn with_cache_root(mut self, path: Option<PathBuf>) -> Self {
        self.cache_override = path;
        self
    }

    /// Writes under `path` instead of the desktop
    pub fn with_output_root(mut self, path: Option<PathBuf>) -> Self {
        self.output_override = path;
        self
    }

    fn lookup(&self, name: &str) -> Option<String> {
        self.env.get(&name.to_ascii_uppercase()).cloned()
    }
}

impl PathProvider for SpotlightLocator {
    fn cache_root(&self) -> Result<PathBuf> {
        if let Some(path) = &self.cache_override {
            return Ok(path.clone());
        }
        let expanded = expand_windows_vars(SPOTLIGHT_ASSETS_TEMPLATE, |name| self.lookup(name));
        Ok(PathBuf::from(expanded.replace('\\', MAIN_SEPARATOR_STR)))
    }

    fn output_root(&self) -> Result<PathBuf> {
        if let Some(path) = &self.output_override {
            return Ok(path.clone());
        }
        self.home
            .as_ref()
            .map(|home| home.join(DESKTOP_DIR))
            .ok_or(HarvestError::HomeDirUnavailable)
    }
}

/// Explicit cache and output roots
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedLocator {
    cache_root: PathBuf,
    output_root: PathBuf,
}

impl FixedLocator {
    pub fn new(cache_root: impl Into<PathBuf>, output_root: impl Into<PathBuf>) -> Self {
        Self {
            cache_root: cache_root.into(),
            output_root: output_root.into(),
        }
    }
}

impl PathProvider for FixedLocator {
    fn cache_root(&self) -> Result<PathBuf> {
        Ok(self.cache_root.clone())
    }

    fn output_root(&self) -> Result<PathBuf> {
        Ok(self.output_root.clone())
    }
}

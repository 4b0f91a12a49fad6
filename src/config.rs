//! TOML configuration for header decoration.
//!
//! ```toml
//! sections_selector = ".nav-sections"
//! base_url = "https://www.example.com/"
//! icon_class = "icon"
//!
//! [icons]
//! root = "./icons"
//! timeout_ms = 5000
//! ```

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::content::{DEFAULT_ICON_CLASS, ExtractOptions};
use crate::error::{Error, Result};

/// Default time budget for icon enrichment.
pub const DEFAULT_ICON_TIMEOUT_MS: u64 = 5000;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavConfig {
    /// Selector for the navigation container. When unset, the second
    /// top-level section of the fragment is used.
    pub sections_selector: Option<String>,
    /// Base URL for resolving relative hrefs and icon sources.
    pub base_url: Option<String>,
    /// Class marking icon elements inside headings.
    pub icon_class: String,
    pub icons: IconConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IconConfig {
    /// Directory icon sources are loaded from. Enrichment is off when unset.
    pub root: Option<PathBuf>,
    pub timeout_ms: u64,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            sections_selector: None,
            base_url: None,
            icon_class: DEFAULT_ICON_CLASS.to_string(),
            icons: IconConfig::default(),
        }
    }
}

impl Default for IconConfig {
    fn default() -> Self {
        Self {
            root: None,
            timeout_ms: DEFAULT_ICON_TIMEOUT_MS,
        }
    }
}

impl IconConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

impl NavConfig {
    /// Load a config file. A missing file is `Ok(None)`.
    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(config_path).map_err(|source| Error::ConfigRead {
            path: config_path.to_path_buf(),
            source,
        })?;

        let config = toml::from_str(&content).map_err(|source| Error::ConfigParse {
            path: config_path.to_path_buf(),
            source,
        })?;

        Ok(Some(config))
    }

    /// Extraction options derived from this config; validates `base_url`.
    pub fn extract_options(&self) -> Result<ExtractOptions> {
        let base_url = self.base_url.as_deref().map(Url::parse).transpose()?;
        Ok(ExtractOptions {
            base_url,
            icon_class: self.icon_class.clone(),
        })
    }
}

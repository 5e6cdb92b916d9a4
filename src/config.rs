//! Pager configuration
//!
//! Construction-time settings for a [`Pager`](crate::Pager), loadable from
//! YAML or JSON.
//!
//! ```yaml
//! out_of_bounds: return_last
//! default_page_size: 50
//! ```

use crate::error::{Error, Result};
use crate::pager::OutOfBoundsStrategy;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Configuration for a pager
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PagerConfig {
    /// Behavior when a requested page starts past the end
    #[serde(default)]
    pub out_of_bounds: OutOfBoundsStrategy,

    /// Page size for requests that don't specify one
    #[serde(default)]
    pub default_page_size: Option<usize>,
}

impl PagerConfig {
    /// Create a config with defaults (fail on out-of-bounds, no default page size)
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the out-of-bounds strategy
    #[must_use]
    pub fn with_out_of_bounds(mut self, strategy: OutOfBoundsStrategy) -> Self {
        self.out_of_bounds = strategy;
        self
    }

    /// Set the default page size
    #[must_use]
    pub fn with_default_page_size(mut self, page_size: usize) -> Self {
        self.default_page_size = Some(page_size);
        self
    }

    /// Parse and validate a YAML config
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)
            .map_err(|e| Error::config(format!("Failed to parse pager YAML: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Parse and validate a JSON config
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| Error::config(format!("Failed to parse pager JSON: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Load a config file, picking the format from its extension
    ///
    /// `.json` files are parsed as JSON, anything else as YAML.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            Error::config(format!(
                "Failed to read pager config '{}': {e}",
                path.display()
            ))
        })?;

        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        if is_json {
            Self::from_json_str(&content)
        } else {
            Self::from_yaml_str(&content)
        }
    }

    /// Validate the config
    pub fn validate(&self) -> Result<()> {
        if self.default_page_size == Some(0) {
            return Err(Error::config("default_page_size must be at least 1"));
        }
        Ok(())
    }
}

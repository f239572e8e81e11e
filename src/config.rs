//! Optional YAML configuration.
//!
//! Every key is optional; anything left out keeps its built-in default.
//!
//! ```yaml
//! single_title: "The Onion Summary"
//! multi_title: "The Onion Summaries"
//! input_extension: txt
//! stylesheet: |
//!   body { font-family: serif; }
//! ```

use crate::error::{Error, Result};
use crate::outputs::html::DEFAULT_STYLESHEET;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::{info, instrument};

/// Page presentation and input naming settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Page title when a single article is converted.
    pub single_title: String,
    /// Page title when several articles are merged.
    pub multi_title: String,
    /// CSS embedded in `head/style`.
    pub stylesheet: String,
    /// Extension of the article files, without the dot.
    pub input_extension: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            single_title: "The Onion Summary".to_string(),
            multi_title: "The Onion Summaries".to_string(),
            stylesheet: DEFAULT_STYLESHEET.to_string(),
            input_extension: "txt".to_string(),
        }
    }
}

impl Config {
    /// The page title for `count` articles.
    pub fn title_for(&self, count: u32) -> &str {
        if count <= 1 {
            &self.single_title
        } else {
            &self.multi_title
        }
    }
}

/// Load a config file.
///
/// # Errors
///
/// [`Error::ReadConfig`] if the file cannot be read, [`Error::ParseConfig`] if
/// it is not valid YAML or contains unknown keys.
#[instrument(level = "info", skip_all, fields(path = %path.display()))]
pub fn load_config(path: &Path) -> Result<Config> {
    let raw = fs::read_to_string(path).map_err(|source| Error::ReadConfig {
        path: path.to_path_buf(),
        source,
    })?;
    let config: Config = serde_yaml::from_str(&raw).map_err(|source| Error::ParseConfig {
        path: path.to_path_buf(),
        source,
    })?;
    info!("Loaded configuration");
    Ok(config)
}

/// Load `path` if given, otherwise fall back to [`Config::default`].
pub fn load_or_default(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => load_config(path),
        None => Ok(Config::default()),
    }
}

//! User settings loaded from a TOML file.
//!
//! ```toml
//! [query]
//! search_debounce_ms = 250
//!
//! [display]
//! language = "bangla"
//! load_policy = "lenient"
//! ```
//!
//! Missing sections and keys fall back to their defaults. Command-line flags
//! override whatever the file says.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use roster_ingest::LoadPolicy;
use roster_model::Language;
use roster_query::QueryConfig;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub query: QueryConfig,
    pub display: DisplaySettings,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplaySettings {
    /// Language used for names, labels and addresses.
    pub language: Language,
    /// How invalid records in the roster are handled.
    pub load_policy: LoadPolicy,
}

impl Settings {
    /// Load settings from `path`, or defaults when no path is given.
    ///
    /// A missing file also yields defaults. A file that exists but cannot be
    /// read or parsed is an error, so a typo does not silently change
    /// behaviour.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load_from(path),
            None => Ok(Self::default()),
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "Settings file not found, using defaults");
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("read settings {}", path.display()))?;
        toml::from_str(&content).with_context(|| format!("parse settings {}", path.display()))
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("create directory {}", parent.display()))?;
        }
        let content = toml::to_string_pretty(self).context("serialize settings")?;
        std::fs::write(path, content).with_context(|| format!("write settings {}", path.display()))
    }
}

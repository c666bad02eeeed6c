//! Configuration for the Folio CLI.
//!
//! Provides the [`FolioConfig`] struct that loads from TOML files,
//! environment variables, and defaults using the `confyg` crate.
//!
//! # Loading Priority
//!
//! 1. Explicit `--config <path>` flag
//! 2. `FOLIO_CONFIG` environment variable
//! 3. XDG default: `~/.config/folio/config.toml`
//! 4. Built-in defaults
//!
//! `FOLIO_CONTENT_LOCATION`, `FOLIO_PAGE_INPUT` and `FOLIO_PAGE_OUTPUT`
//! override values from the file.

use std::path::PathBuf;

use confyg::{Confygery, env};
use folio_core::{Error, Result};
use serde::{Deserialize, Serialize};

const PROJECT_NAME: &str = "folio";
const CONFIG_ENV_VAR: &str = "FOLIO_CONFIG";

/// Dotted keys understood by `folio config get`.
pub const KEYS: [&str; 3] = ["content.location", "page.input", "page.output"];

// ============================================================================
// Configuration structs
// ============================================================================

/// Main configuration for the Folio CLI.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FolioConfig {
    /// Where content documents come from.
    pub content: ContentConfig,

    /// Which page to rewrite and where to put the result.
    pub page: PageConfig,
}

/// Content source configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContentConfig {
    /// Content directory, or an `http(s)://` base URL.
    pub location: String,
}

/// Page configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    /// Rendered HTML page to patch.
    pub input: String,

    /// Output file; stdout when unset.
    pub output: Option<String>,
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            location: "content".to_string(),
        }
    }
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            input: "index.html".to_string(),
            output: None,
        }
    }
}

// ============================================================================
// Config loading
// ============================================================================

impl FolioConfig {
    /// Load configuration from file, environment, and defaults.
    ///
    /// A config file that does not exist is not an error; defaults and
    /// environment variables still apply.
    pub fn load(config_path: Option<&str>) -> Result<Self> {
        let mut builder =
            Confygery::new().map_err(|e| Error::config(format!("config init: {e}")))?;

        if let Some(path) = Self::resolve_config_path(config_path) {
            if path.exists() {
                builder
                    .add_file(&path.to_string_lossy())
                    .map_err(|e| Error::config(format!("config file: {e}")))?;
            }
        }

        let mut env_opts = env::Options::with_top_level("FOLIO");
        env_opts.add_section("content");
        env_opts.add_section("page");
        builder
            .add_env(env_opts)
            .map_err(|e| Error::config(format!("config env: {e}")))?;

        let config: Self = builder
            .build()
            .map_err(|e| Error::config(format!("config build: {e}")))?;

        Ok(config)
    }

    /// Resolve the config file path from explicit flag, env var, or XDG default.
    pub fn resolve_config_path(explicit: Option<&str>) -> Option<PathBuf> {
        if let Some(path) = explicit {
            return Some(PathBuf::from(path));
        }

        if let Ok(path) = std::env::var(CONFIG_ENV_VAR) {
            return Some(PathBuf::from(path));
        }

        Self::default_config_path()
    }

    /// Return the XDG default config path.
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join(PROJECT_NAME).join("config.toml"))
    }

    /// Serialize this config to a pretty-printed TOML string.
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| Error::config(e.to_string()))
    }

    /// Look up a setting by dotted key.
    ///
    /// Returns `Ok(None)` for a known key with no value (`page.output`).
    pub fn value_of(&self, key: &str) -> Result<Option<&str>> {
        match key {
            "content.location" => Ok(Some(&self.content.location)),
            "page.input" => Ok(Some(&self.page.input)),
            "page.output" => Ok(self.page.output.as_deref()),
            _ => Err(Error::config(format!(
                "Unknown key '{key}' (expected one of: {})",
                KEYS.join(", ")
            ))),
        }
    }

    /// Render this config as a commented TOML file for `folio config init`.
    ///
    /// An unset `page.output` is written as a commented-out example.
    pub fn to_commented_toml(&self) -> String {
        let quote = |s: &str| toml::Value::String(s.to_string()).to_string();
        let output = match &self.page.output {
            Some(path) => format!("output = {}\n", quote(path)),
            None => "# output = \"dist/index.html\"\n".to_string(),
        };

        format!(
            "# Folio configuration.\n\
             # FOLIO_CONTENT_LOCATION, FOLIO_PAGE_INPUT and FOLIO_PAGE_OUTPUT override these values.\n\
             \n\
             [content]\n\
             # Directory holding personal.md, hero.md, about.md and settings.md,\n\
             # or an http(s):// base URL serving them.\n\
             location = {location}\n\
             \n\
             [page]\n\
             # Rendered page to patch.\n\
             input = {input}\n\
             # Where to write the patched page; stdout when unset.\n\
             {output}",
            location = quote(&self.content.location),
            input = quote(&self.page.input),
        )
    }
}

// ============================================================================
// Tests
// ============================================================================

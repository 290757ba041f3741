//! Layout configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{
    error::{LayoutError, Result},
    styles::{BookStyles, DEFAULT_SCOPE},
    toc::TocEntry,
};

/// Default header title.
pub const DEFAULT_TITLE: &str = "Physical AI & Humanoid Robotics";

/// Default name shown after the year in the footer.
pub const DEFAULT_COPYRIGHT_HOLDER: &str = "My AI Textbook";

/// Prefix for environment overrides, e.g. `BOOK__TITLE`.
pub const ENV_PREFIX: &str = "BOOK";

/// Configuration for the book layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutConfig {
    /// Header title.
    #[serde(default = "default_title")]
    pub title: String,

    /// Copyright holder shown in the footer.
    #[serde(default = "default_copyright_holder")]
    pub copyright_holder: String,

    /// Styling settings.
    #[serde(default)]
    pub style: StyleConfig,

    /// Entries for the default table of contents.
    #[serde(default)]
    pub toc: Vec<TocEntry>,
}

/// Styling configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StyleConfig {
    /// Suffix appended to style-module class names.
    #[serde(default = "default_scope")]
    pub scope: String,
}

fn default_title() -> String {
    DEFAULT_TITLE.to_string()
}

fn default_copyright_holder() -> String {
    DEFAULT_COPYRIGHT_HOLDER.to_string()
}

fn default_scope() -> String {
    DEFAULT_SCOPE.to_string()
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            copyright_holder: default_copyright_holder(),
            style: StyleConfig::default(),
            toc: Vec::new(),
        }
    }
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            scope: default_scope(),
        }
    }
}

impl LayoutConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(LayoutError::config(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }

        let content = std::fs::read_to_string(path)?;
        let config: LayoutConfig = toml::from_str(&content).map_err(|e| {
            LayoutError::config_with_source(
                format!("Failed to parse config file: {}", path.display()),
                e,
            )
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a file with `BOOK__*` environment overrides.
    pub fn load_with_env(path: &Path) -> Result<Self> {
        Self::load_layered(Some(path), ENV_PREFIX)
    }

    /// Defaults with `BOOK__*` environment overrides, for when no file is given.
    pub fn from_env() -> Result<Self> {
        Self::load_layered(None, ENV_PREFIX)
    }

    fn load_layered(path: Option<&Path>, prefix: &str) -> Result<Self> {
        let mut builder = config::Config::builder();
        if let Some(path) = path {
            if !path.exists() {
                return Err(LayoutError::config(format!(
                    "Configuration file not found: {}",
                    path.display()
                )));
            }
            builder = builder.add_source(config::File::from(path));
        }

        let settings = builder
            .add_source(config::Environment::with_prefix(prefix).separator("__"))
            .build()?;

        let config: LayoutConfig = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.title.trim().is_empty() {
            return Err(LayoutError::config("title cannot be empty"));
        }

        let scope = &self.style.scope;
        if scope.is_empty()
            || !scope
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        {
            return Err(LayoutError::config(format!(
                "style.scope must be non-empty ASCII alphanumerics, '-' or '_': {scope:?}"
            )));
        }

        for entry in &self.toc {
            if entry.id.is_empty() {
                return Err(LayoutError::config(format!(
                    "toc entry {:?} has an empty id",
                    entry.text
                )));
            }
            if !(1..=6).contains(&entry.level) {
                return Err(LayoutError::config(format!(
                    "toc entry {:?} has level {}, expected 1-6",
                    entry.id, entry.level
                )));
            }
        }

        if self.copyright_holder.trim().is_empty() {
            log::warn!("copyright_holder is empty; footer will only show the year");
        }

        Ok(())
    }

    /// Class-name resolver for the configured scope.
    pub fn styles(&self) -> BookStyles {
        BookStyles::new(self.style.scope.clone())
    }
}

use crate::cli::output::OutputFormat;
use crate::{ParseStyleError, Style};
use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

pub const LOCAL_CONFIG_FILE: &str = ".wordcase.toml";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Config {
    pub format: OutputFormat,
    pub color: bool,
    pub skip_blank_lines: bool,

    /// Extra names for styles, e.g. `const = "screaming-snake"`.
    pub aliases: BTreeMap<String, Style>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            color: true,
            skip_blank_lines: true,
            aliases: BTreeMap::new(),
        }
    }
}

/// One configuration file. Only the keys it actually sets take effect.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ConfigFile {
    pub format: Option<OutputFormat>,
    pub color: Option<bool>,
    pub skip_blank_lines: Option<bool>,

    #[serde(default)]
    pub aliases: BTreeMap<String, Style>,
}

impl Config {
    /// Load configuration with priority: local config > global config > defaults.
    ///
    /// An explicit path replaces both lookups. CLI flags are applied by the
    /// caller on top of the result.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            tracing::debug!(path = %path.display(), "loading explicit config");
            return Ok(Self::default().merge(Self::from_file(path)?));
        }

        let mut config = Self::default();

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                tracing::debug!(path = %global_path.display(), "loading global config");
                config = config.merge(Self::from_file(&global_path)?);
            }
        }

        let local_path = PathBuf::from(LOCAL_CONFIG_FILE);
        if local_path.exists() {
            tracing::debug!(path = %local_path.display(), "loading local config");
            config = config.merge(Self::from_file(&local_path)?);
        }

        Ok(config)
    }

    fn from_file(path: &Path) -> Result<ConfigFile> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    fn merge(mut self, layer: ConfigFile) -> Self {
        // Keys present in the layer win, even when they restore a default.
        if let Some(format) = layer.format {
            self.format = format;
        }
        if let Some(color) = layer.color {
            self.color = color;
        }
        if let Some(skip_blank_lines) = layer.skip_blank_lines {
            self.skip_blank_lines = skip_blank_lines;
        }
        self.aliases.extend(layer.aliases);
        self
    }

    /// Resolve a style name, checking aliases before canonical names.
    pub fn resolve_style(&self, name: &str) -> Result<Style, ParseStyleError> {
        match self.aliases.get(name) {
            Some(style) => Ok(*style),
            None => name.parse(),
        }
    }

    pub fn global_config_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "wordcase").map(|dirs| dirs.config_dir().join("config.toml"))
    }
}

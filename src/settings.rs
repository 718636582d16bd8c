// std imports
use std::include_str;
use std::path::{Path, PathBuf};

// third-party imports
use config::{Config, File, FileFormat};
use serde::Deserialize;

// local imports
use crate::{error::Result, options::Options};

// ---

pub const APP_NAME: &str = "globcraft";

static DEFAULT_SETTINGS: &str = include_str!("../etc/defaults/config.yaml");

// ---

/// Settings loaded from the embedded defaults and configuration files.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Settings {
    pub dot: bool,
    pub nocase: bool,
    pub brace: bool,
    pub strict_brackets: bool,
    pub windows: bool,
    pub max_length: usize,
    pub max_expansions: usize,
}

impl Settings {
    /// Loads settings, layering the user configuration file and then `explicit` over the defaults.
    ///
    /// The user configuration file is optional, an explicitly given one is not.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let mut builder = Config::builder().add_source(File::from_str(DEFAULT_SETTINGS, FileFormat::Yaml));
        if let Some(path) = default_path() {
            builder = builder.add_source(File::from(path).required(false));
        }
        if let Some(path) = explicit {
            log::debug!("loading settings from {}", path.display());
            builder = builder.add_source(File::from(path).required(true));
        }
        Ok(builder.build()?.try_deserialize()?)
    }

    /// Embedded defaults only.
    pub fn defaults() -> Result<Self> {
        Ok(Config::builder()
            .add_source(File::from_str(DEFAULT_SETTINGS, FileFormat::Yaml))
            .build()?
            .try_deserialize()?)
    }
}

impl From<&Settings> for Options {
    fn from(settings: &Settings) -> Self {
        Options::default()
            .with_dot(settings.dot)
            .with_nocase(settings.nocase)
            .with_nobrace(!settings.brace)
            .with_strict_brackets(settings.strict_brackets)
            .with_windows(settings.windows)
            .with_max_length(settings.max_length)
            .with_max_expansions(settings.max_expansions)
    }
}

/// Location of the user configuration file.
pub fn default_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_NAME).join("config.yaml"))
}

#[cfg(test)]
mod tests;

use std::path::{Path, PathBuf};

use anyhow::Result;
use common::{exit, export::Format, UnknownPolicy};
use serde::{Deserialize, Serialize};
use tracing::info;
use vagrant::Defaults;

pub const DEFAULT_CONFIG: &str = "vars.toml";

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub loader: LoaderConfig,
    pub export: ExportConfig,
    pub defaults: Defaults,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoaderConfig {
    pub unknown_options: UnknownPolicy,
    /// Loaded before the files named on the command line
    pub base: Vec<PathBuf>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct ExportConfig {
    pub format: Format,
}

/// Reads the runner config. Without `--file`, a missing `vars.toml` means
/// built-in defaults.
pub fn parse_config(file: Option<&str>) -> Result<Config> {
    let path = Path::new(file.unwrap_or(DEFAULT_CONFIG));
    if file.is_none() && !path.exists() {
        info!("no {DEFAULT_CONFIG}, using built-in defaults");
        return Ok(Config::default());
    }

    let config = match std::fs::read_to_string(path) {
        Ok(s) => s,
        Err(err) => exit!(err, "Could not read config file {}", path.display()),
    };

    let config: Result<Config, toml::de::Error> = toml::from_str(config.as_str());
    let mut config = match config {
        Ok(c) => c,
        Err(err) => exit!(err, "Could not parse config file {}", path.display()),
    };

    // base files are relative to the config file
    if let Some(dir) = path.parent() {
        for base in config.loader.base.iter_mut() {
            if base.is_relative() {
                *base = dir.join(&*base);
            }
        }
    }

    info!("config file parsed");
    Ok(config)
}

use std::path::PathBuf;

use anyhow::Result;
use common::{exit, Loader, VagrantVars};
use tracing::info;

use crate::{config::Config, status::RED_CROSS};

pub mod check;
pub mod export;
pub mod options;
pub mod render;

/// Loads the configured base files followed by `files`.
pub fn load_vars(config: &Config, files: &[PathBuf]) -> Result<VagrantVars> {
    let loader = Loader::new(config.loader.unknown_options);
    let layers: Vec<PathBuf> = config
        .loader
        .base
        .iter()
        .chain(files.iter())
        .cloned()
        .collect();
    info!("loading {} layer(s)", layers.len());

    match loader.load_layers(&layers) {
        Ok(vars) => Ok(vars),
        Err(err) => exit!(err, "{} Could not load variables", RED_CROSS.to_string()),
    }
}

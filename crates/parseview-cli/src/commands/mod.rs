//! Subcommands.

pub mod batch;
pub mod config;
pub mod view;

use std::path::{Path, PathBuf};

use parseview_core::ViewConfig;

/// Default configuration file location.
pub fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("parseview")
        .join("config.json")
}

/// Load the configuration named by `--config`, else the default file if it exists.
pub fn load_config(config_path: Option<&str>) -> anyhow::Result<ViewConfig> {
    if let Some(path) = config_path {
        return Ok(ViewConfig::from_file(Path::new(path))?);
    }

    let default_path = default_config_path();
    if default_path.exists() {
        Ok(ViewConfig::from_file(&default_path)?)
    } else {
        Ok(ViewConfig::default())
    }
}

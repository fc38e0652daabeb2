//! CLI subcommands.

pub mod batch;
pub mod config;
pub mod process;

use std::path::{Path, PathBuf};

use energa_core::EnergaConfig;

/// Default location of the configuration file.
pub fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("energa")
        .join("config.json")
}

/// Load the config given by `--config`, else the default file if present,
/// else built-in defaults.
pub fn load_config(config_path: Option<&str>) -> anyhow::Result<EnergaConfig> {
    if let Some(path) = config_path {
        return Ok(EnergaConfig::from_file(Path::new(path))?);
    }

    let default_path = default_config_path();
    if default_path.exists() {
        Ok(EnergaConfig::from_file(&default_path)?)
    } else {
        Ok(EnergaConfig::default())
    }
}

/// File name of a path as UTF-8, the basis of the invoice id.
pub fn file_name(path: &Path) -> anyhow::Result<&str> {
    path.file_name()
        .and_then(|s| s.to_str())
        .ok_or_else(|| anyhow::anyhow!("Invalid file name: {}", path.display()))
}

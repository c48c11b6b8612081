use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::options::OptionSet;
use crate::session::DEFAULT_EXTENSION;
use crate::url_merge::MergeStrategy;

fn default_extension() -> String {
    DEFAULT_EXTENSION.to_string()
}

/// Global configuration loaded from `~/.config/ikt/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IktConfig {
    /// How the `tr` parameter is merged into base URLs: "reserialize" (default) or "splice".
    #[serde(default)]
    pub merge_strategy: MergeStrategy,
    /// Download extension when no format option is set.
    #[serde(default = "default_extension")]
    pub default_extension: String,
    /// Named option sets, e.g. `[presets.thumb]`.
    #[serde(default)]
    pub presets: BTreeMap<String, OptionSet>,
}

impl Default for IktConfig {
    fn default() -> Self {
        Self {
            merge_strategy: MergeStrategy::default(),
            default_extension: default_extension(),
            presets: BTreeMap::new(),
        }
    }
}

impl IktConfig {
    pub fn preset(&self, name: &str) -> Option<&OptionSet> {
        self.presets.get(name)
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("ikt")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<IktConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = IktConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    load_from(&path)
}

/// Load configuration from an explicit path.
pub fn load_from(path: &Path) -> Result<IktConfig> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("read config: {}", path.display()))?;
    let cfg: IktConfig =
        toml::from_str(&data).with_context(|| format!("parse config: {}", path.display()))?;
    Ok(cfg)
}

//! Optional `thirdparty.toml` in the library root.

use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use thirdparty_profile::Features;

/// File name looked up in `LIB_PATH`.
pub const CONFIG_FILE: &str = "thirdparty.toml";

/// Settings layered over the platform defaults.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ThirdpartyConfig {
    /// Optional features to force on.
    pub features: Features,
}

impl ThirdpartyConfig {
    /// Load `<lib_path>/thirdparty.toml`, or defaults if it does not exist.
    pub fn load(lib_path: &Path) -> Result<Self> {
        let path = lib_path.join(CONFIG_FILE);
        if !path.is_file() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("reading {}", path.display()))?;
        let config: ThirdpartyConfig =
            toml::from_str(&content).with_context(|| format!("parsing {}", path.display()))?;
        log::info!("loaded {}", path.display());
        Ok(config)
    }
}

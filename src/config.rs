use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::{stlog_debug, Error, Result};

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    pub template_dir: Option<String>,
    pub depth: Option<i32>,
    #[serde(default)]
    pub verbose: bool,
}

impl Config {
    pub fn stencil_dir() -> Result<PathBuf> {
        Ok(dirs::home_dir().ok_or(Error::NoHomeDir)?.join(".stencil"))
    }

    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::stencil_dir()?.join("stencil.toml"))
    }

    /// Resolve the template root: explicit override first, then the config
    /// file value, then `~/templates`.
    pub fn template_root(&self, cli_override: Option<&str>) -> Result<PathBuf> {
        if let Some(dir) = cli_override {
            return Ok(expand_tilde(dir));
        }
        match &self.template_dir {
            Some(dir) => Ok(expand_tilde(dir)),
            None => Ok(dirs::home_dir().ok_or(Error::NoHomeDir)?.join("templates")),
        }
    }

    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        stlog_debug!("Config::load path={}", path.display());
        if !path.exists() {
            stlog_debug!("Config file not found, using defaults");
            return Ok(Self::default());
        }
        let config: Self = toml::from_str(&fs::read_to_string(&path)?)?;
        stlog_debug!(
            "Config loaded: template_dir={:?}, depth={:?}, verbose={}",
            config.template_dir,
            config.depth,
            config.verbose
        );
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        let stencil_dir = Self::stencil_dir()?;
        if !stencil_dir.exists() {
            fs::create_dir_all(&stencil_dir)?;
        }
        let path = Self::config_path()?;
        fs::write(&path, toml::to_string_pretty(self)?)?;
        stlog_debug!("Config saved to {}", path.display());
        Ok(())
    }
}

fn expand_tilde(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest);
        }
    }
    PathBuf::from(path)
}

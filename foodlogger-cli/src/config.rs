//! TOML config under `~/.foodlogger/config.toml`.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::store::ensure_home;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// IANA timezone name used to materialize "now".
    #[serde(default = "default_timezone")]
    pub timezone: String,

    #[serde(default)]
    pub reminders: RemindersSection,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemindersSection {
    pub enabled: bool,
    pub hour: u32,
    pub minute: u32,
}

fn default_timezone() -> String {
    "America/Chicago".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Config {
            timezone: default_timezone(),
            reminders: RemindersSection::default(),
        }
    }
}

impl Default for RemindersSection {
    fn default() -> Self {
        RemindersSection {
            enabled: true,
            hour: 20,
            minute: 0,
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    Ok(ensure_home()?.join("config.toml"))
}

pub fn load_config(path: &Path) -> Result<Config> {
    if !path.exists() {
        return Ok(Config::default());
    }
    let s = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    Ok(toml::from_str(&s).context("parse config.toml")?)
}

pub fn save_config(path: &Path, cfg: &Config) -> Result<()> {
    let s = toml::to_string_pretty(cfg).context("serialize config")?;
    fs::write(path, s).with_context(|| format!("write {}", path.display()))?;
    Ok(())
}

/// Write the default config unless one already exists.
pub fn init_config() -> Result<()> {
    let p = config_path()?;
    if p.exists() {
        println!("Config already exists: {}", p.display());
        return Ok(());
    }
    let cfg = Config::default();
    save_config(&p, &cfg)?;
    println!("Wrote {}", p.display());
    Ok(())
}

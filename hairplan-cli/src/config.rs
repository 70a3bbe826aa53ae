use anyhow::{Context, Result};
use hairplan_core::DEFAULT_EXPORT_FILE;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::i18n::Language;
use crate::state::StateDir;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub report: ReportSection,
    #[serde(default)]
    pub export: ExportSection,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportSection {
    pub language: Language,
    /// Print catalog URLs next to mapped products.
    pub show_catalog_links: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportSection {
    /// Used when `hairplan export` gets no `--out`.
    pub file_name: String,
    pub include_timestamp: bool,
}

impl Default for ReportSection {
    fn default() -> Self {
        Self {
            language: Language::En,
            show_catalog_links: true,
        }
    }
}

impl Default for ExportSection {
    fn default() -> Self {
        Self {
            file_name: DEFAULT_EXPORT_FILE.to_string(),
            include_timestamp: true,
        }
    }
}

impl Config {
    pub fn export_path(&self) -> PathBuf {
        PathBuf::from(&self.export.file_name)
    }
}

pub fn load_config(dir: &StateDir) -> Result<Config> {
    let p = dir.config_path();
    if !p.exists() {
        return Ok(Config::default());
    }
    let s = fs::read_to_string(&p).with_context(|| format!("read {}", p.display()))?;
    toml::from_str(&s).context("parse config.toml")
}

pub fn save_config(dir: &StateDir, cfg: &Config) -> Result<()> {
    dir.ensure()?;
    let p = dir.config_path();
    let s = toml::to_string_pretty(cfg).context("serialize config")?;
    fs::write(&p, s).with_context(|| format!("write {}", p.display()))?;
    Ok(())
}

pub fn init_config(dir: &StateDir) -> Result<()> {
    let p = dir.config_path();
    if p.exists() {
        println!("Config already exists: {}", p.display());
        return Ok(());
    }
    save_config(dir, &Config::default())?;
    println!("Wrote {}", p.display());
    Ok(())
}

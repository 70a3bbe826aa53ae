use anyhow::{Context, Result};
use hairplan_catalog::CatalogOverrides;
use hairplan_core::Profile;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Where hairplan keeps its files (`~/.hairplan` unless `HAIRPLAN_HOME` is set).
#[derive(Debug, Clone)]
pub struct StateDir {
    root: PathBuf,
}

impl StateDir {
    pub fn from_env() -> Result<Self> {
        if let Ok(dir) = std::env::var("HAIRPLAN_HOME") {
            if !dir.trim().is_empty() {
                return Ok(Self::at(dir));
            }
        }
        let home = std::env::var("HOME").context("HOME is not set")?;
        Ok(Self::at(PathBuf::from(home).join(".hairplan")))
    }

    pub fn at(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn ensure(&self) -> Result<&Path> {
        fs::create_dir_all(&self.root).with_context(|| format!("create {}", self.root.display()))?;
        Ok(&self.root)
    }

    pub fn profile_path(&self) -> PathBuf {
        self.root.join("profile.json")
    }

    pub fn mapping_path(&self) -> PathBuf {
        self.root.join("mapping.json")
    }

    pub fn config_path(&self) -> PathBuf {
        self.root.join("config.toml")
    }
}

/// Questionnaire answers as written by `hairplan setup`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SavedProfile {
    pub created_at_utc: Option<String>,
    pub answers: Profile,
}

pub fn write_profile(dir: &StateDir, saved: &SavedProfile) -> Result<()> {
    dir.ensure()?;
    let p = dir.profile_path();
    let json = serde_json::to_string_pretty(saved)?;
    fs::write(&p, json).with_context(|| format!("write {}", p.display()))?;
    Ok(())
}

/// Stored answers, or the questionnaire defaults when setup hasn't run.
pub fn read_profile(dir: &StateDir) -> Result<Profile> {
    let p = dir.profile_path();
    if !p.exists() {
        debug!(path = %p.display(), "no saved profile, using defaults");
        return Ok(Profile::default());
    }
    let s = fs::read_to_string(&p).with_context(|| format!("read {}", p.display()))?;
    let saved: SavedProfile =
        serde_json::from_str(&s).with_context(|| format!("parse {}", p.display()))?;
    Ok(saved.answers)
}

pub fn read_overrides(dir: &StateDir) -> Result<CatalogOverrides> {
    let p = dir.mapping_path();
    if !p.exists() {
        return Ok(CatalogOverrides::default());
    }
    let s = fs::read_to_string(&p).with_context(|| format!("read {}", p.display()))?;
    serde_json::from_str(&s).with_context(|| format!("parse {}", p.display()))
}

pub fn write_overrides(dir: &StateDir, overrides: &CatalogOverrides) -> Result<()> {
    dir.ensure()?;
    let p = dir.mapping_path();
    let json = serde_json::to_string_pretty(overrides)?;
    fs::write(&p, json).with_context(|| format!("write {}", p.display()))?;
    Ok(())
}

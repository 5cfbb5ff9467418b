use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use log::{debug, warn};

use crate::config::model::SinkConfig;

/// Read-only view of `$XDG_CONFIG_HOME/sound-sink/config.json`.
#[derive(Debug, Clone)]
pub struct ConfigStore {
    path: PathBuf,
}

impl ConfigStore {
    pub fn new() -> anyhow::Result<Self> {
        let mut path = dirs::config_dir().context("could not resolve XDG config dir")?;
        path.push("sound-sink");
        path.push("config.json");
        Ok(Self::at(path))
    }

    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn load(&self) -> anyhow::Result<SinkConfig> {
        if !self.path.exists() {
            debug!("no config at {}, using defaults", self.path.display());
            return Ok(SinkConfig::default());
        }

        let content = fs::read_to_string(&self.path)
            .with_context(|| format!("failed to read {}", self.path.display()))?;
        let parsed = serde_json::from_str(&content)
            .with_context(|| format!("failed to parse {}", self.path.display()))?;
        debug!("loaded config from {}", self.path.display());
        Ok(parsed)
    }

    pub fn load_or_default(&self) -> SinkConfig {
        self.load().unwrap_or_else(|err| {
            warn!("ignoring {}: {err:#}", self.path.display());
            SinkConfig::default()
        })
    }
}

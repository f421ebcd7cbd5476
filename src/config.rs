use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub static_files: StaticFilesConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub listen_addr: String,
    /// Sent in the `Server` header and substituted for `<cs371server>`.
    pub identity: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StaticFilesConfig {
    /// Document root that request paths are looked up under.
    pub root: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_addr: "127.0.0.1:8080".to_string(),
            identity: "webworker".to_string(),
        }
    }
}

impl Default for StaticFilesConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
        }
    }
}

impl Config {
    /// Loads the config file named by `CONFIG` (if any), then applies
    /// `LISTEN` / `DOC_ROOT` overrides from the environment.
    pub fn load() -> anyhow::Result<Self> {
        let path = std::env::var_os("CONFIG").map(PathBuf::from);
        let mut cfg = Self::load_from(path.as_deref())?;
        cfg.apply_env_overrides(|key| std::env::var(key).ok());
        Ok(cfg)
    }

    pub fn load_from(path: Option<&Path>) -> anyhow::Result<Self> {
        match path {
            Some(path) => {
                let raw = std::fs::read_to_string(path)
                    .with_context(|| format!("reading config file {}", path.display()))?;
                Self::from_yaml_str(&raw)
                    .with_context(|| format!("parsing config file {}", path.display()))
            }
            None => Ok(Self::default()),
        }
    }

    pub fn from_yaml_str(raw: &str) -> anyhow::Result<Self> {
        // An empty document deserializes to unit, not to a mapping.
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(raw)?)
    }

    pub fn apply_env_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(addr) = lookup("LISTEN") {
            self.server.listen_addr = addr;
        }
        if let Some(root) = lookup("DOC_ROOT") {
            self.static_files.root = PathBuf::from(root);
        }
    }
}

use anyhow::{Context, Result};
use log::debug;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Construction settings, read from `ringlog.toml`.
///
/// ```toml
/// [buffer]
/// capacity = 64
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub buffer: BufferConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BufferConfig {
    /// Number of slots in the backing store. Must be at least 1.
    pub capacity: usize,
}

// ── Defaults ─────────────────────────────────────────────────────────

impl Default for Config {
    fn default() -> Self {
        Self { buffer: BufferConfig::default() }
    }
}

impl Default for BufferConfig {
    fn default() -> Self {
        Self { capacity: 64 }
    }
}

// ── Load ─────────────────────────────────────────────────────────────

impl Config {
    /// Loads the config from [`Config::config_path`], falling back to defaults
    /// if the file is missing or unreadable.
    pub fn load() -> Self {
        match try_load() {
            Ok(c)  => c,
            Err(e) => {
                debug!("using default config: {:#}", e);
                Config::default()
            }
        }
    }

    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("ringlog").join("ringlog.toml"))
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        Self::from_toml_str(&text)
            .with_context(|| format!("in config {}", path.display()))
    }

    pub fn from_toml_str(text: &str) -> Result<Self> {
        toml::from_str(text).context("invalid ringlog config")
    }

    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).context("serializing ringlog config")
    }
}

fn try_load() -> Result<Config> {
    let path = Config::config_path().ok_or_else(|| anyhow::anyhow!("no config dir"))?;
    Config::load_from(&path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RingBuffer;

    #[test]
    fn empty_document_uses_defaults() {
        let cfg = Config::from_toml_str("").unwrap();
        assert_eq!(cfg, Config::default());
        assert_eq!(cfg.buffer.capacity, 64);
    }

    #[test]
    fn reads_buffer_capacity() {
        let cfg = Config::from_toml_str("[buffer]\ncapacity = 5\n").unwrap();
        assert_eq!(cfg.buffer.capacity, 5);
        let b = RingBuffer::from_config(&cfg.buffer).unwrap();
        assert_eq!(b.capacity(), 5);
    }

    #[test]
    fn negative_capacity_fails_to_parse() {
        let err = Config::from_toml_str("[buffer]\ncapacity = -3\n").unwrap_err();
        assert!(format!("{:#}", err).contains("invalid ringlog config"));
    }

    #[test]
    fn zero_capacity_parses_but_cannot_build() {
        let cfg = Config::from_toml_str("[buffer]\ncapacity = 0\n").unwrap();
        assert!(RingBuffer::from_config(&cfg.buffer).is_err());
    }

    #[test]
    fn serialized_defaults_parse_back() {
        let text = Config::default().to_toml_string().unwrap();
        assert!(text.contains("capacity = 64"));
        assert_eq!(Config::from_toml_str(&text).unwrap(), Config::default());
    }

    #[test]
    fn load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ringlog.toml");
        fs::write(&path, "[buffer]\ncapacity = 9\n").unwrap();
        assert_eq!(Config::load_from(&path).unwrap().buffer.capacity, 9);
    }

    #[test]
    fn load_from_missing_file_names_the_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");
        let err = Config::load_from(&path).unwrap_err();
        assert!(err.to_string().contains("absent.toml"));
    }
}

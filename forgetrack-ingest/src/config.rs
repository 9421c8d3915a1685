use std::path::Path;
use serde::Deserialize;
use anyhow::{Context, Result};
use shared::protocol::{MAX_NOISE_OS_LEN, OS_NOISE_MARKERS, PLACEHOLDER_OS};

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub parser: ParserConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ParserConfig {
    /// OS entries that mark a record as never having received real OS data
    #[serde(default = "default_placeholder_os")]
    pub placeholder_os: Vec<String>,
    /// OS candidates shorter than this are dropped
    #[serde(default = "default_min_os_entry_len")]
    pub min_os_entry_len: usize,
    /// Case-insensitive substrings that drop an OS candidate
    #[serde(default = "default_os_noise_markers")]
    pub os_noise_markers: Vec<String>,
}

fn default_placeholder_os() -> Vec<String> {
    PLACEHOLDER_OS.iter().map(|s| s.to_string()).collect()
}

fn default_min_os_entry_len() -> usize {
    MAX_NOISE_OS_LEN + 1
}

fn default_os_noise_markers() -> Vec<String> {
    OS_NOISE_MARKERS.iter().map(|s| s.to_string()).collect()
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            placeholder_os: default_placeholder_os(),
            min_os_entry_len: default_min_os_entry_len(),
            os_noise_markers: default_os_noise_markers(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }
}

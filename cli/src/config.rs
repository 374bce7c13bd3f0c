//! CLI configuration with TOML file support.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Configuration for the urna CLI.
///
/// Can be loaded from a TOML file via [`CliConfig::from_toml_file`]; CLI
/// flags and environment variables override file values.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CliConfig {
    /// Directory holding the LMDB vote store.
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    /// LMDB map size in bytes.
    #[serde(default = "default_map_size")]
    pub map_size: usize,

    /// Log level filter: "trace", "debug", "info", "warn", "error".
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Log format: "human" or "json".
    #[serde(default = "default_log_format")]
    pub log_format: String,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            map_size: default_map_size(),
            log_level: default_log_level(),
            log_format: default_log_format(),
        }
    }
}

impl CliConfig {
    pub fn from_toml_file(path: &Path) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&text)?)
    }
}

// ── Serde default helpers ──────────────────────────────────────────────

fn default_data_dir() -> PathBuf {
    PathBuf::from("./urna_data")
}

fn default_map_size() -> usize {
    urna_store_lmdb::environment::DEFAULT_MAP_SIZE
}

fn default_log_level() -> String {
    "info".to_owned()
}

fn default_log_format() -> String {
    "human".to_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_to_empty_toml() {
        let config: CliConfig = toml::from_str("").unwrap();
        assert_eq!(config.data_dir, PathBuf::from("./urna_data"));
        assert_eq!(config.log_level, "info");
        assert_eq!(config.log_format, "human");
    }

    #[test]
    fn file_values_override_defaults() {
        let config: CliConfig =
            toml::from_str("data_dir = \"/var/lib/urna\"\nlog_level = \"debug\"\n").unwrap();
        assert_eq!(config.data_dir, PathBuf::from("/var/lib/urna"));
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.log_format, "human");
    }
}

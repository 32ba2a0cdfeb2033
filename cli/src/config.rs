//! CLI configuration with TOML file support.

use serde::{Deserialize, Serialize};
use std::path::Path;

use launch_types::{LaunchError, RoundParams};
use launch_utils::LogFormat;

/// Configuration for a lottery run.
///
/// Can be loaded from a TOML file via [`CliConfig::from_toml_file`] or built
/// programmatically. Command-line flags override file values.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CliConfig {
    /// Registrants scanned per `select_winners` call.
    #[serde(default = "default_batch_size")]
    pub batch_size: usize,

    /// Log format: "human" or "json".
    #[serde(default)]
    pub log_format: LogFormat,

    /// Log level filter: "trace", "debug", "info", "warn", "error".
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Round parameters (`[round]` table).
    #[serde(default)]
    pub round: RoundParams,
}

// ── Serde default helpers ──────────────────────────────────────────────

fn default_batch_size() -> usize {
    100
}

fn default_log_level() -> String {
    "info".to_string()
}

// ── Impl ───────────────────────────────────────────────────────────────

impl CliConfig {
    /// Load configuration from a TOML file.
    pub fn from_toml_file(path: &Path) -> Result<Self, LaunchError> {
        let content =
            std::fs::read_to_string(path).map_err(|e| LaunchError::Config(e.to_string()))?;
        Self::from_toml_str(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, LaunchError> {
        toml::from_str(s).map_err(|e| LaunchError::Config(e.to_string()))
    }

    /// Serialize the configuration to a TOML string.
    pub fn to_toml_string(&self) -> Result<String, LaunchError> {
        toml::to_string_pretty(self).map_err(|e| LaunchError::Config(e.to_string()))
    }
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            batch_size: default_batch_size(),
            log_format: LogFormat::default(),
            log_level: default_log_level(),
            round: RoundParams::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn default_config_round_trips_through_toml() {
        let config = CliConfig::default();
        let toml_str = config.to_toml_string().unwrap();
        let parsed = CliConfig::from_toml_str(&toml_str).expect("should parse");
        assert_eq!(parsed.batch_size, config.batch_size);
        assert_eq!(parsed.round, config.round);
        assert_eq!(parsed.log_format, LogFormat::Human);
    }

    #[test]
    fn minimal_toml_uses_defaults() {
        let config = CliConfig::from_toml_str("").expect("empty toml should use defaults");
        assert_eq!(config.batch_size, 100);
        assert_eq!(config.log_level, "info");
        assert_eq!(config.round.target_total_winners, 250);
    }

    #[test]
    fn partial_toml_overrides() {
        let toml = r#"
            batch_size = 150
            log_format = "json"

            [round]
            seed = 984375843
            target_total_winners = 10
        "#;
        let config = CliConfig::from_toml_str(toml).expect("should parse");
        assert_eq!(config.batch_size, 150);
        assert_eq!(config.log_format, LogFormat::Json);
        assert_eq!(config.round.seed, 984_375_843);
        assert_eq!(config.round.target_total_winners, 10);
        assert_eq!(config.round.base_allocation_unit, 1); // default
    }

    #[test]
    fn loads_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "batch_size = 7").unwrap();
        let config = CliConfig::from_toml_file(file.path()).unwrap();
        assert_eq!(config.batch_size, 7);
    }

    #[test]
    fn missing_file_is_a_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = CliConfig::from_toml_file(&dir.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, LaunchError::Config(_)));
    }

    #[test]
    fn malformed_toml_is_a_config_error() {
        assert!(matches!(
            CliConfig::from_toml_str("batch_size = \"many\""),
            Err(LaunchError::Config(_))
        ));
    }
}

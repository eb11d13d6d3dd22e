use crate::error::{Result, VerdictError};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_LOG_LEVEL: &str = "warn";
const LOG_LEVELS: &[&str] = &["off", "error", "warn", "info", "debug", "trace"];

/// Environment variable overriding the config directory.
pub const HOME_ENV: &str = "VERDICT_HOME";

/// Config keys accepted by [`VerdictConfig::get`] and [`VerdictConfig::set`].
pub const CONFIG_KEYS: &[&str] = &["output", "log-level"];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!("Invalid output format '{}' (expected text or json)", other)),
        }
    }
}

/// Configuration for verdict, stored in `<config dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct VerdictConfig {
    /// How command results are printed
    #[serde(default)]
    pub output: OutputFormat,

    /// Default log filter when neither VERDICT_LOG nor --verbose is given
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_log_level() -> String {
    DEFAULT_LOG_LEVEL.to_string()
}

impl Default for VerdictConfig {
    fn default() -> Self {
        Self {
            output: OutputFormat::default(),
            log_level: default_log_level(),
        }
    }
}

/// `$VERDICT_HOME` if set, else the platform config directory.
pub fn default_config_dir() -> Result<PathBuf> {
    if let Some(home) = std::env::var_os(HOME_ENV).filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(home));
    }
    ProjectDirs::from("com", "verdict", "verdict")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| VerdictError::Config("Could not determine config directory".to_string()))
}

impl VerdictConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        let config: VerdictConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();
        fs::create_dir_all(config_dir)?;

        let content = serde_json::to_string_pretty(self)?;
        fs::write(config_dir.join(CONFIG_FILENAME), content)?;
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "output" => Some(self.output.to_string()),
            "log-level" => Some(self.log_level.clone()),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> std::result::Result<(), String> {
        match key {
            "output" => {
                self.output = value.parse()?;
                Ok(())
            }
            "log-level" => {
                let level = value.to_ascii_lowercase();
                if !LOG_LEVELS.contains(&level.as_str()) {
                    return Err(format!(
                        "Invalid log level '{}' (expected one of: {})",
                        value,
                        LOG_LEVELS.join(", ")
                    ));
                }
                self.log_level = level;
                Ok(())
            }
            _ => Err(format!("Unknown config key: {}", key)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = VerdictConfig::default();
        assert_eq!(config.output, OutputFormat::Text);
        assert_eq!(config.log_level, "warn");
    }

    #[test]
    fn test_load_missing_config() {
        let dir = tempfile::tempdir().unwrap();
        let config = VerdictConfig::load(dir.path()).unwrap();
        assert_eq!(config, VerdictConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("nested");

        let mut config = VerdictConfig::default();
        config.set("output", "JSON").unwrap();
        config.set("log-level", "debug").unwrap();
        config.save(&nested).unwrap();

        let loaded = VerdictConfig::load(&nested).unwrap();
        assert_eq!(loaded.output, OutputFormat::Json);
        assert_eq!(loaded.log_level, "debug");
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), r#"{"output": "json"}"#).unwrap();

        let loaded = VerdictConfig::load(dir.path()).unwrap();
        assert_eq!(loaded.output, OutputFormat::Json);
        assert_eq!(loaded.log_level, "warn");
    }

    #[test]
    fn test_corrupt_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), "{not json").unwrap();

        let err = VerdictConfig::load(dir.path()).unwrap_err();
        assert!(matches!(err, VerdictError::Serialization(_)));
    }

    #[test]
    fn test_set_rejects_bad_values() {
        let mut config = VerdictConfig::default();
        assert!(config.set("output", "yaml").is_err());
        assert!(config.set("log-level", "loud").is_err());
        assert!(config.set("colour", "on").unwrap_err().contains("Unknown config key"));
        assert_eq!(config, VerdictConfig::default());
    }

    #[test]
    fn test_get_known_keys() {
        let config = VerdictConfig::default();
        assert_eq!(config.get("output").as_deref(), Some("text"));
        assert_eq!(config.get("log-level").as_deref(), Some("warn"));
        assert_eq!(config.get("nope"), None);
    }
}

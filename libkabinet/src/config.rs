//! Configuration management for Kabinet

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::{ConfigError, Result};
use crate::timer::TimerSettings;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub timer: TimerConfig,
    pub share: ShareConfig,
}

/// Timer defaults seeded into a fresh [`crate::TimerState`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimerConfig {
    pub deep_study: bool,
    pub auto_start: bool,
    pub auto_break: bool,
    pub long_break_minutes: u32,
    pub short_break_minutes: u32,
    pub study_minutes: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShareConfig {
    /// Origin used when building shareable post links.
    pub origin: String,
}

impl From<TimerConfig> for TimerSettings {
    fn from(config: TimerConfig) -> Self {
        Self {
            deep_study: config.deep_study,
            auto_start: config.auto_start,
            auto_break: config.auto_break,
            long_break_minutes: config.long_break_minutes,
            short_break_minutes: config.short_break_minutes,
            study_minutes: config.study_minutes,
        }
    }
}

impl Config {
    /// Load configuration from the default location
    pub fn load() -> Result<Self> {
        let config_path = resolve_config_path()?;
        Self::load_from_path(&config_path)
    }

    /// Load configuration from a specific path
    pub fn load_from_path(path: &PathBuf) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::Read)?;
        let config: Config = toml::from_str(&content).map_err(ConfigError::Parse)?;
        Ok(config)
    }

    /// Create a default configuration
    pub fn default_config() -> Self {
        let defaults = TimerSettings::default();
        Self {
            timer: TimerConfig {
                deep_study: defaults.deep_study,
                auto_start: defaults.auto_start,
                auto_break: defaults.auto_break,
                long_break_minutes: defaults.long_break_minutes,
                short_break_minutes: defaults.short_break_minutes,
                study_minutes: defaults.study_minutes,
            },
            share: ShareConfig {
                origin: "https://kabinet.app".to_string(),
            },
        }
    }
}

/// Resolve the configuration file path following XDG Base Directory spec
pub fn resolve_config_path() -> Result<PathBuf> {
    if let Ok(path) = std::env::var("KABINET_CONFIG") {
        return Ok(PathBuf::from(shellexpand::tilde(&path).to_string()));
    }

    let config_dir = dirs::config_dir()
        .ok_or_else(|| ConfigError::MissingField("config directory".to_string()))?;

    Ok(config_dir.join("kabinet").join("config.toml"))
}

/// Resolve the data directory path following XDG Base Directory spec
pub fn resolve_data_path() -> Result<PathBuf> {
    let data_dir = dirs::data_dir()
        .ok_or_else(|| ConfigError::MissingField("data directory".to_string()))?;

    Ok(data_dir.join("kabinet"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::io::Write;

    #[test]
    fn test_default_config_matches_timer_defaults() {
        let config = Config::default_config();
        let settings: TimerSettings = config.timer.into();
        assert_eq!(settings, TimerSettings::default());
    }

    #[test]
    fn test_load_from_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
[timer]
deep_study = true
auto_start = false
auto_break = true
long_break_minutes = 20
short_break_minutes = 4
study_minutes = 45

[share]
origin = "https://example.com"
"#
        )
        .unwrap();

        let config = Config::load_from_path(&file.path().to_path_buf()).unwrap();
        assert!(config.timer.deep_study);
        assert!(config.timer.auto_break);
        assert_eq!(config.timer.study_minutes, 45);
        assert_eq!(config.share.origin, "https://example.com");
    }

    #[test]
    fn test_load_from_missing_path() {
        let result = Config::load_from_path(&PathBuf::from("/nonexistent/kabinet.toml"));
        assert!(result.is_err());
    }

    #[test]
    fn test_load_from_invalid_toml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "not toml at all [[[").unwrap();

        let result = Config::load_from_path(&file.path().to_path_buf());
        assert!(matches!(
            result,
            Err(crate::error::KabinetError::Config(ConfigError::Parse(_)))
        ));
    }

    #[test]
    #[serial]
    fn test_resolve_config_path_env_override() {
        std::env::set_var("KABINET_CONFIG", "/tmp/kabinet-test.toml");
        let path = resolve_config_path().unwrap();
        assert_eq!(path, PathBuf::from("/tmp/kabinet-test.toml"));
        std::env::remove_var("KABINET_CONFIG");
    }

    #[test]
    #[serial]
    fn test_resolve_config_path_default() {
        std::env::remove_var("KABINET_CONFIG");
        let path = resolve_config_path().unwrap();
        assert!(path.ends_with("kabinet/config.toml"));
    }
}

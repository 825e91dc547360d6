// src/config.rs

use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::platforms::Platform;

/// Per-platform feed URL overrides. Unset entries fall back to the public
/// bounty-targets-data mirrors.
#[derive(Debug, Deserialize, Default, Clone)]
pub struct FeedsConfig {
    #[serde(default)]
    pub hackerone_url: Option<String>,
    #[serde(default)]
    pub bugcrowd_url: Option<String>,
    #[serde(default)]
    pub yeswehack_url: Option<String>,
    #[serde(default)]
    pub intigriti_url: Option<String>,
}

impl FeedsConfig {
    pub fn url_override(&self, platform: Platform) -> Option<String> {
        match platform {
            Platform::Hackerone => self.hackerone_url.clone(),
            Platform::Bugcrowd => self.bugcrowd_url.clone(),
            Platform::Yeswehack => self.yeswehack_url.clone(),
            Platform::Intigriti => self.intigriti_url.clone(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub feeds: FeedsConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load the config file, falling back to defaults when it does not
    /// exist. A present but malformed file is still an error.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let contents = fs::read_to_string(path)?;
        let cfg: Config = toml::from_str(&contents)?;
        Ok(cfg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_config_from_valid_toml() {
        let toml_content = r#"
[feeds]
hackerone_url = "http://localhost:8080/h1.json"

[logging]
level = "debug"
        "#;

        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(toml_content.as_bytes()).unwrap();
        temp_file.flush().unwrap();

        let config = Config::load(temp_file.path()).unwrap();

        assert_eq!(
            config.feeds.url_override(Platform::Hackerone),
            Some("http://localhost:8080/h1.json".to_string())
        );
        assert_eq!(config.feeds.url_override(Platform::Bugcrowd), None);
        assert_eq!(config.logging.level, "debug");
    }

    #[test]
    fn test_config_empty_toml_uses_defaults() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(b"").unwrap();
        temp_file.flush().unwrap();

        let config = Config::load(temp_file.path()).unwrap();
        assert_eq!(config.logging.level, "info");
        assert!(config.feeds.url_override(Platform::Intigriti).is_none());
    }

    #[test]
    fn test_config_missing_file_uses_defaults() {
        let config = Config::load(Path::new("/nonexistent/scope-hound.toml")).unwrap();
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_config_invalid_toml_is_error() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(b"invalid toml {{{").unwrap();
        temp_file.flush().unwrap();

        assert!(Config::load(temp_file.path()).is_err());
    }
}

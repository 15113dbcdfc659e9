use super::Result;
use crate::api::config::{ClientConfig, DEFAULT_TIMEOUT_SECS};
use crate::error::StorageError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct Config {
    pub default_profile: Option<String>,
    #[serde(default)]
    pub profiles: HashMap<String, Profile>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Profile {
    pub base_url: String,
    pub timeout_seconds: Option<u64>,
    pub email: Option<String>,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_seconds: None,
            email: None,
        }
    }
}

impl Profile {
    /// Library settings derived from this profile
    pub fn client_config(&self) -> ClientConfig {
        ClientConfig::default().with_timeout(Duration::from_secs(
            self.timeout_seconds.unwrap_or(DEFAULT_TIMEOUT_SECS),
        ))
    }
}

impl Config {
    pub fn load(path: Option<PathBuf>) -> Result<Self> {
        let config_path = match path {
            Some(p) => p,
            None => Self::config_file_path()?,
        };

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(|source| StorageError::FileIo {
            path: config_path.to_string_lossy().to_string(),
            source,
        })?;

        toml::from_str(&content).map_err(|e| StorageError::ConfigParseError {
            message: e.to_string(),
        })
    }

    pub fn save(&self, path: Option<PathBuf>) -> Result<()> {
        let config_path = match path {
            Some(p) => p,
            None => Self::config_file_path()?,
        };

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).map_err(|source| StorageError::FileIo {
                path: parent.to_string_lossy().to_string(),
                source,
            })?;
        }

        let toml_content =
            toml::to_string(self).map_err(|e| StorageError::ConfigSerializeError {
                message: e.to_string(),
            })?;

        fs::write(&config_path, toml_content).map_err(|source| StorageError::FileIo {
            path: config_path.to_string_lossy().to_string(),
            source,
        })?;

        Ok(())
    }

    fn config_file_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir().ok_or(StorageError::ConfigDirNotFound)?;
        Ok(config_dir.join("nebula").join("config.toml"))
    }

    pub fn get_profile(&self, name: &str) -> Option<&Profile> {
        self.profiles.get(name)
    }

    pub fn set_profile(&mut self, name: String, profile: Profile) {
        self.profiles.insert(name, profile);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.default_profile, None);
        assert_eq!(config.profiles.len(), 0);
    }

    #[test]
    fn test_profile_management() {
        let mut config = Config::default();
        let profile = Profile {
            base_url: "http://example.test".to_string(),
            timeout_seconds: Some(30),
            email: Some("user@example.com".to_string()),
        };
        config.set_profile("test".to_string(), profile.clone());

        let retrieved = config.get_profile("test");
        assert_eq!(retrieved, Some(&profile));
        assert!(config.get_profile("nonexistent").is_none());
    }

    #[test]
    fn test_profile_client_config() {
        let profile = Profile {
            timeout_seconds: Some(3),
            ..Profile::default()
        };
        assert_eq!(profile.client_config().timeout, Duration::from_secs(3));

        let profile = Profile::default();
        assert_eq!(
            profile.client_config().timeout,
            Duration::from_secs(DEFAULT_TIMEOUT_SECS)
        );
    }

    #[test]
    fn test_config_load_save() {
        let temp_dir = tempdir().expect("Failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.default_profile = Some("test".to_string());
        config.set_profile(
            "test".to_string(),
            Profile {
                base_url: "http://example.test".to_string(),
                timeout_seconds: Some(30),
                email: None,
            },
        );

        config
            .save(Some(config_path.clone()))
            .expect("Failed to save config");

        let loaded_config = Config::load(Some(config_path)).expect("Failed to load config");
        assert_eq!(loaded_config.default_profile, config.default_profile);
        assert_eq!(loaded_config.profiles.len(), 1);
        assert_eq!(
            loaded_config.get_profile("test").map(|p| p.base_url.as_str()),
            Some("http://example.test")
        );
    }

    #[test]
    fn test_load_nonexistent_file() {
        let temp_dir = tempdir().expect("Failed to create temp dir");
        let config = Config::load(Some(temp_dir.path().join("missing.toml")))
            .expect("Missing file should yield default config");
        assert_eq!(config.default_profile, None);
        assert!(config.profiles.is_empty());
    }

    #[test]
    fn test_load_malformed_file() {
        let temp_dir = tempdir().expect("Failed to create temp dir");
        let config_path = temp_dir.path().join("config.toml");
        fs::write(&config_path, "default_profile = [").expect("Failed to write config");

        let result = Config::load(Some(config_path));
        assert!(matches!(result, Err(StorageError::ConfigParseError { .. })));
    }
}

use crate::AppError;
use crate::error::CliError;
use crate::storage::config::{Config, Profile};
use crate::utils::validation::parse_base_url;
use std::path::PathBuf;

/// Configuration service for managing CLI profiles
pub struct ConfigService {
    config: Config,
}

impl ConfigService {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub fn get_profile(&self, name: &str) -> Option<&Profile> {
        self.config.get_profile(name)
    }

    pub fn get_default_profile(&self) -> Option<&String> {
        self.config.default_profile.as_ref()
    }

    /// Set a user-facing profile field (`url`, `email`, `timeout`)
    pub fn set_profile_field(
        &mut self,
        profile: &str,
        field: &str,
        value: &str,
    ) -> Result<(), AppError> {
        let profile_entry = self.config.profiles.entry(profile.to_string()).or_default();

        match field {
            "url" => {
                parse_base_url(value)?;
                profile_entry.base_url = value.to_string();
            }
            "email" => profile_entry.email = Some(value.to_string()),
            "timeout" => {
                let seconds = value.parse::<u64>().ok().filter(|s| *s > 0).ok_or_else(|| {
                    CliError::InvalidArguments(format!(
                        "Invalid timeout '{}': expected a positive number of seconds",
                        value
                    ))
                })?;
                profile_entry.timeout_seconds = Some(seconds);
            }
            _ => {
                return Err(AppError::Cli(CliError::InvalidArguments(format!(
                    "Unknown field: {}. Use 'url', 'email' or 'timeout'",
                    field
                ))));
            }
        }

        if self.config.default_profile.is_none() {
            self.config.default_profile = Some(profile.to_string());
        }

        Ok(())
    }

    pub fn save_config(&self, path: Option<PathBuf>) -> Result<(), AppError> {
        self.config.save(path).map_err(AppError::from)
    }

    /// Profiles sorted by name
    pub fn list_profiles(&self) -> Vec<(&String, &Profile)> {
        let mut profiles: Vec<_> = self.config.profiles.iter().collect();
        profiles.sort_by(|a, b| a.0.cmp(b.0));
        profiles
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_set_profile_field_creates_profile() {
        let mut service = ConfigService::new(Config::default());
        service
            .set_profile_field("staging", "url", "https://staging.example.com")
            .expect("url should be accepted");
        service
            .set_profile_field("staging", "timeout", "30")
            .expect("timeout should be accepted");
        service
            .set_profile_field("staging", "email", "dev@example.com")
            .expect("email should be accepted");

        let profile = service.get_profile("staging").expect("profile should exist");
        assert_eq!(profile.base_url, "https://staging.example.com");
        assert_eq!(profile.timeout_seconds, Some(30));
        assert_eq!(profile.email.as_deref(), Some("dev@example.com"));
        assert_eq!(service.get_default_profile().map(String::as_str), Some("staging"));
    }

    #[test]
    fn test_set_profile_field_rejects_bad_values() {
        let mut service = ConfigService::new(Config::default());
        assert!(service.set_profile_field("p", "url", "ftp://nope").is_err());
        assert!(service.set_profile_field("p", "timeout", "0").is_err());
        assert!(service.set_profile_field("p", "timeout", "soon").is_err());
        assert!(matches!(
            service.set_profile_field("p", "color", "blue"),
            Err(AppError::Cli(CliError::InvalidArguments(_)))
        ));
    }

    #[test]
    fn test_list_profiles_sorted() {
        let mut service = ConfigService::new(Config::default());
        service.set_profile_field("b", "email", "b@example.com").unwrap();
        service.set_profile_field("a", "email", "a@example.com").unwrap();
        let names: Vec<&str> = service
            .list_profiles()
            .into_iter()
            .map(|(name, _)| name.as_str())
            .collect();
        assert_eq!(names, vec!["a", "b"]);
    }

    #[test]
    fn test_save_config() {
        let temp_dir = tempdir().expect("Failed to create temp dir");
        let path = temp_dir.path().join("config.toml");
        let mut service = ConfigService::new(Config::default());
        service.set_profile_field("default", "url", "http://localhost:8080").unwrap();
        service.save_config(Some(path.clone())).expect("save should succeed");

        let loaded = Config::load(Some(path)).expect("load should succeed");
        assert!(loaded.get_profile("default").is_some());
    }
}

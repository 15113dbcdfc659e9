use crate::api::client::NebulaClient;
use crate::cli::command_handlers::{
    AuthHandler, ConfigHandler, DatabaseHandler, RecordHandler, TableHandler,
};
use crate::cli::main_types::Commands;
use crate::core::services::config_service::ConfigService;
use crate::error::AppError;
use crate::storage::config::{Config, Profile};
use crate::utils::logging::print_verbose;
use std::path::PathBuf;

pub struct Dispatcher {
    config: Config,
    config_path: Option<PathBuf>,
    profile_name: String,
    url_override: Option<String>,
    token: Option<String>,
    verbose: bool,
}

impl Dispatcher {
    pub fn new(
        config: Config,
        config_path: Option<PathBuf>,
        profile_name: String,
        verbose: bool,
    ) -> Self {
        Self {
            config,
            config_path,
            profile_name,
            url_override: None,
            token: None,
            verbose,
        }
    }

    /// Base URL taking precedence over the profile's
    pub fn with_url_override(mut self, url: Option<String>) -> Self {
        self.url_override = url.filter(|u| !u.trim().is_empty());
        self
    }

    /// Token attached to protected requests
    pub fn with_token(mut self, token: Option<String>) -> Self {
        self.token = token.filter(|t| !t.is_empty());
        self
    }

    fn log_verbose(&self, msg: &str) {
        print_verbose(self.verbose, msg);
    }

    /// Active profile, falling back to defaults when it is not configured
    fn profile(&self) -> Profile {
        match self.config.get_profile(&self.profile_name) {
            Some(profile) => profile.clone(),
            None => {
                self.log_verbose(&format!(
                    "Profile '{}' not configured, using defaults",
                    self.profile_name
                ));
                Profile::default()
            }
        }
    }

    fn create_client(&self, profile: &Profile) -> Result<NebulaClient, AppError> {
        let base_url = self.url_override.as_deref().unwrap_or(&profile.base_url);
        self.log_verbose(&format!("Using API at {}", base_url));

        let mut client = NebulaClient::with_config(base_url, profile.client_config())?;
        if let Some(token) = &self.token {
            self.log_verbose("Using token provided via --token or NEBULA_TOKEN");
            client.set_auth_token(token.clone());
        }
        Ok(client)
    }

    pub async fn dispatch(self, command: Commands) -> Result<(), AppError> {
        match command {
            Commands::Config { command } => {
                let mut config_service = ConfigService::new(self.config);
                ConfigHandler::new().handle(
                    command,
                    &mut config_service,
                    &self.profile_name,
                    self.config_path,
                    self.verbose,
                )
            }
            Commands::Auth { command } => {
                let profile = self.profile();
                let mut client = self.create_client(&profile)?;
                AuthHandler::new()
                    .handle(command, &mut client, &profile, self.verbose)
                    .await
            }
            Commands::Db { command } => {
                let client = self.create_client(&self.profile())?;
                DatabaseHandler::new()
                    .handle(command, &client, self.verbose)
                    .await
            }
            Commands::Table { command } => {
                let client = self.create_client(&self.profile())?;
                TableHandler::new()
                    .handle(command, &client, self.verbose)
                    .await
            }
            Commands::Record { command } => {
                let client = self.create_client(&self.profile())?;
                RecordHandler::new()
                    .handle(command, &client, self.verbose)
                    .await
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::main_types::{DbCommands, RecordCommands};
    use crate::error::ErrorKind;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn dispatcher(url: &str) -> Dispatcher {
        Dispatcher::new(Config::default(), None, "default".to_string(), false)
            .with_url_override(Some(url.to_string()))
    }

    #[test]
    fn test_profile_falls_back_to_defaults() {
        let dispatcher = Dispatcher::new(Config::default(), None, "missing".to_string(), false);
        assert_eq!(dispatcher.profile(), Profile::default());
    }

    #[test]
    fn test_url_override_wins() {
        let mut config = Config::default();
        config.set_profile(
            "default".to_string(),
            Profile {
                base_url: "http://profile.example.com".to_string(),
                timeout_seconds: Some(5),
                email: None,
            },
        );
        let dispatcher = Dispatcher::new(config, None, "default".to_string(), false)
            .with_url_override(Some("http://override.example.com".to_string()));

        let client = dispatcher
            .create_client(&dispatcher.profile())
            .expect("client should build");
        assert_eq!(client.base_url().as_str(), "http://override.example.com/");
        assert_eq!(client.timeout().as_secs(), 5);
    }

    #[test]
    fn test_empty_token_is_ignored() {
        let dispatcher = dispatcher("http://localhost:8080").with_token(Some(String::new()));
        let client = dispatcher
            .create_client(&dispatcher.profile())
            .expect("client should build");
        assert!(!client.is_authenticated());
    }

    #[tokio::test]
    async fn test_protected_command_without_token() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v1/databases"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let err = dispatcher(&server.uri())
            .dispatch(Commands::Db {
                command: DbCommands::List,
            })
            .await
            .expect_err("missing token should fail");
        assert!(err.is(ErrorKind::AuthTokenMissing));
    }

    #[tokio::test]
    async fn test_record_delete_sends_token() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path("/api/v1/databases/inventory/tables/widgets/records/7"))
            .and(header("Authorization", "Bearer secret"))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&server)
            .await;

        dispatcher(&server.uri())
            .with_token(Some("secret".to_string()))
            .dispatch(Commands::Record {
                command: RecordCommands::Delete {
                    db: "inventory".to_string(),
                    table: "widgets".to_string(),
                    id: 7,
                },
            })
            .await
            .expect("delete should succeed");
    }
}

use clap::Parser;
use nebula_sdk::cli::dispatcher::Dispatcher;
use nebula_sdk::cli::main_types::Cli;
use nebula_sdk::storage::config::Config;
use nebula_sdk::utils::logging::VerboseLogger;
use std::path::PathBuf;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let logger = VerboseLogger::new(cli.verbose);
    logger.install();

    let config_path = cli
        .config_dir
        .as_ref()
        .map(|dir| PathBuf::from(dir).join("config.toml"));

    let config = match Config::load(config_path.clone()) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Error loading config: {}", err);
            std::process::exit(1);
        }
    };

    let profile_name = cli
        .profile
        .or(config.default_profile.clone())
        .unwrap_or_else(|| "default".to_string());

    logger.log(&format!("Using profile: {}", profile_name));
    if let Some(config_dir) = &cli.config_dir {
        logger.log(&format!("Using config directory: {}", config_dir));
    }

    let dispatcher = Dispatcher::new(config, config_path, profile_name, cli.verbose)
        .with_url_override(cli.url)
        .with_token(cli.token);

    if let Err(e) = dispatcher.dispatch(cli.command).await {
        eprintln!("{} Error: {}", e.severity().emoji(), e);
        if let Some(hint) = e.troubleshooting_hint() {
            eprintln!("Hint: {}", hint);
        }
        std::process::exit(1);
    }
}

use crate::api::client::NebulaClient;
use crate::api::models::SchemaPayload;
use crate::cli::main_types::{
    AuthCommands, ConfigCommands, DbCommands, RecordCommands, TableCommands,
};
use crate::core::auth::LoginInput;
use crate::core::services::config_service::ConfigService;
use crate::core::services::types::ListRecordsOptions;
use crate::display::TableDisplay;
use crate::error::{AppError, CliError};
use crate::storage::config::Profile;
use crate::utils::input::{parse_column, parse_filter, parse_record};
use crate::utils::logging::print_verbose;
use std::path::PathBuf;

fn print_json<T: serde::Serialize>(value: &T) -> Result<(), AppError> {
    let output = serde_json::to_string_pretty(value).map_err(|e| {
        AppError::Cli(CliError::InvalidArguments(format!(
            "Failed to serialize result to JSON: {}",
            e
        )))
    })?;
    println!("{}", output);
    Ok(())
}

#[derive(Default)]
pub struct AuthHandler;

impl AuthHandler {
    pub fn new() -> Self {
        Self
    }

    pub async fn handle(
        &self,
        command: AuthCommands,
        client: &mut NebulaClient,
        profile: &Profile,
        verbose: bool,
    ) -> Result<(), AppError> {
        match command {
            AuthCommands::Signup { email, password } => {
                print_verbose(verbose, "Attempting auth signup command");

                let input =
                    LoginInput::from_args_or_env(email, password, profile.email.as_deref())?;
                client.auth().signup(&input.email, &input.password).await?;

                println!("✅ Account created for {}", input.email);
                println!("Run 'nebula auth login' to obtain a token.");
                Ok(())
            }
            AuthCommands::Login { email, password } => {
                print_verbose(verbose, "Attempting auth login command");

                let input =
                    LoginInput::from_args_or_env(email, password, profile.email.as_deref())?;

                let result = client.auth().login(&input.email, &input.password).await;
                match result {
                    Ok(token) => {
                        eprintln!("✅ Successfully logged in as {}", input.email);
                        eprintln!("Connected to: {}", client.base_url());
                        eprintln!("Export the token below as NEBULA_TOKEN for later commands.");
                        println!("{}", token);
                        Ok(())
                    }
                    Err(e) => {
                        eprintln!("❌ Login failed: {}", e);
                        Err(e)
                    }
                }
            }
        }
    }
}

#[derive(Default)]
pub struct ConfigHandler;

impl ConfigHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle(
        &self,
        command: ConfigCommands,
        config_service: &mut ConfigService,
        profile_name: &str,
        config_path: Option<PathBuf>,
        verbose: bool,
    ) -> Result<(), AppError> {
        match command {
            ConfigCommands::Show => {
                print_verbose(verbose, "Attempting config show command");

                println!("Current Configuration:");
                println!("=====================");
                println!(
                    "Default Profile: {}",
                    config_service
                        .get_default_profile()
                        .map(String::as_str)
                        .unwrap_or("(none)")
                );

                let profiles = config_service.list_profiles();
                println!("\nProfiles:");
                if profiles.is_empty() {
                    println!("  No profiles configured");
                } else {
                    for (name, profile) in profiles {
                        println!("  [{}]", name);
                        println!("    URL: {}", profile.base_url);
                        if let Some(timeout) = profile.timeout_seconds {
                            println!("    Timeout: {}s", timeout);
                        }
                        if let Some(email) = &profile.email {
                            println!("    Email: {}", email);
                        }
                    }
                }
                Ok(())
            }
            ConfigCommands::Set { key, value } => {
                print_verbose(
                    verbose,
                    &format!(
                        "Attempting config set - profile: {}, key: {}, value: {}",
                        profile_name, key, value
                    ),
                );

                config_service.set_profile_field(profile_name, &key, &value)?;
                config_service.save_config(config_path)?;

                println!("✅ Set profile '{}' {} to: {}", profile_name, key, value);
                Ok(())
            }
        }
    }
}

#[derive(Default)]
pub struct DatabaseHandler;

impl DatabaseHandler {
    pub fn new() -> Self {
        Self
    }

    pub async fn handle(
        &self,
        command: DbCommands,
        client: &NebulaClient,
        verbose: bool,
    ) -> Result<(), AppError> {
        let databases = client.databases();
        match command {
            DbCommands::Create { name } => {
                print_verbose(verbose, &format!("Registering database '{}'", name));
                databases.create(&name).await?;
                println!("✅ Database '{}' registered", name);
            }
            DbCommands::List => {
                print_verbose(verbose, "Listing databases");
                let names = databases.list().await?;
                println!("{}", TableDisplay::new().render_names("Databases", &names));
            }
            DbCommands::Delete { name } => {
                print_verbose(verbose, &format!("Deleting database '{}'", name));
                databases.delete(&name).await?;
                println!("✅ Database '{}' deleted", name);
            }
            DbCommands::Schema { db, table, columns } => {
                let columns = columns
                    .iter()
                    .map(|raw| parse_column(raw))
                    .collect::<Result<Vec<_>, _>>()?;
                print_verbose(
                    verbose,
                    &format!(
                        "Defining schema for '{}.{}' with {} column(s)",
                        db,
                        table,
                        columns.len()
                    ),
                );

                let schema = SchemaPayload {
                    table_name: table.clone(),
                    columns,
                };
                databases.define_schema(&db, &schema).await?;
                println!("✅ Schema for table '{}' defined in '{}'", table, db);
            }
        }
        Ok(())
    }
}

#[derive(Default)]
pub struct TableHandler;

impl TableHandler {
    pub fn new() -> Self {
        Self
    }

    pub async fn handle(
        &self,
        command: TableCommands,
        client: &NebulaClient,
        verbose: bool,
    ) -> Result<(), AppError> {
        let tables = client.tables();
        match command {
            TableCommands::List { db } => {
                print_verbose(verbose, &format!("Listing tables in '{}'", db));
                let names = tables.list(&db).await?;
                println!("{}", TableDisplay::new().render_names("Tables", &names));
            }
            TableCommands::Delete { db, table } => {
                print_verbose(verbose, &format!("Dropping table '{}.{}'", db, table));
                tables.delete(&db, &table).await?;
                println!("✅ Table '{}' deleted from '{}'", table, db);
            }
        }
        Ok(())
    }
}

#[derive(Default)]
pub struct RecordHandler;

impl RecordHandler {
    pub fn new() -> Self {
        Self
    }

    pub async fn handle(
        &self,
        command: RecordCommands,
        client: &NebulaClient,
        verbose: bool,
    ) -> Result<(), AppError> {
        let records = client.records();
        match command {
            RecordCommands::Create { db, table, data } => {
                let record = parse_record(&data)?;
                print_verbose(verbose, &format!("Inserting record into '{}.{}'", db, table));
                let record_id = records.create(&db, &table, &record).await?;
                println!("✅ Record created with id {}", record_id);
            }
            RecordCommands::Get { db, table, id } => {
                print_verbose(verbose, &format!("Fetching record {} from '{}.{}'", id, db, table));
                let record = records.get(&db, &table, id).await?;
                print_json(&record)?;
            }
            RecordCommands::Update {
                db,
                table,
                id,
                data,
            } => {
                let record = parse_record(&data)?;
                print_verbose(verbose, &format!("Updating record {} in '{}.{}'", id, db, table));
                let response = records.update(&db, &table, id, &record).await?;
                println!(
                    "✅ Record {} updated ({} row(s) affected)",
                    id, response.rows_affected
                );
            }
            RecordCommands::Delete { db, table, id } => {
                print_verbose(verbose, &format!("Deleting record {} from '{}.{}'", id, db, table));
                records.delete(&db, &table, id).await?;
                println!("✅ Record {} deleted", id);
            }
            RecordCommands::List {
                db,
                table,
                filters,
                limit,
                offset,
                sort,
                direction,
                json,
            } => {
                if direction.is_some() && sort.is_none() {
                    return Err(AppError::Cli(CliError::InvalidArguments(
                        "--direction requires --sort".to_string(),
                    )));
                }

                let mut options = ListRecordsOptions::new();
                for raw in &filters {
                    let (key, value) = parse_filter(raw)?;
                    options = options.filter(key, value);
                }
                if let Some(limit) = limit {
                    options = options.limit(limit);
                }
                if let Some(offset) = offset {
                    options = options.offset(offset);
                }
                if let Some(column) = sort {
                    options = options.sort_by(column);
                }
                if let Some(direction) = direction {
                    options = options.sort_direction(direction);
                }

                print_verbose(
                    verbose,
                    &format!("Listing records in '{}.{}' with {:?}", db, table, options),
                );
                let rows = records.list(&db, &table, &options).await?;

                if json {
                    print_json(&rows)?;
                } else {
                    println!("{}", TableDisplay::new().render_records(&rows));
                }
            }
        }
        Ok(())
    }
}

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "nebula")]
#[command(about = "Command line interface for the Nebula BaaS API")]
#[command(version)]
pub struct Cli {
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[arg(short, long, global = true)]
    pub profile: Option<String>,

    #[arg(long, global = true)]
    pub config_dir: Option<String>,

    /// Base URL overriding the profile's
    #[arg(long, global = true, env = "NEBULA_BASE_URL")]
    pub url: Option<String>,

    /// Bearer token printed by `auth login`
    #[arg(long, global = true, env = "NEBULA_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Account signup and login
    Auth {
        #[command(subcommand)]
        command: AuthCommands,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
    /// Database registration and schemas
    Db {
        #[command(subcommand)]
        command: DbCommands,
    },
    /// Tables within a database
    Table {
        #[command(subcommand)]
        command: TableCommands,
    },
    /// Records within a table
    Record {
        #[command(subcommand)]
        command: RecordCommands,
    },
}

#[derive(Subcommand, Debug)]
pub enum AuthCommands {
    /// Register a new account
    Signup {
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        password: Option<String>,
    },
    /// Log in and print a bearer token
    Login {
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        password: Option<String>,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show the current configuration
    Show,
    /// Set a profile field (url, email, timeout)
    Set {
        /// Configuration key
        key: String,
        /// Configuration value
        value: String,
    },
}

#[derive(Subcommand, Debug)]
pub enum DbCommands {
    /// Register a database
    Create { name: String },
    /// List registered databases
    List,
    /// Delete a database registration
    Delete { name: String },
    /// Define a table schema
    Schema {
        db: String,
        table: String,
        /// Column as name:TYPE, repeatable
        #[arg(long = "column", required = true, action = clap::ArgAction::Append)]
        columns: Vec<String>,
    },
}

#[derive(Subcommand, Debug)]
pub enum TableCommands {
    /// List tables in a database
    List { db: String },
    /// Drop a table
    Delete { db: String, table: String },
}

#[derive(Subcommand, Debug)]
pub enum RecordCommands {
    /// Insert a record given as a JSON object
    Create {
        db: String,
        table: String,
        data: String,
    },
    /// Fetch a record by id
    Get { db: String, table: String, id: i64 },
    /// Update fields of a record, given as a JSON object
    Update {
        db: String,
        table: String,
        id: i64,
        data: String,
    },
    /// Delete a record by id
    Delete { db: String, table: String, id: i64 },
    /// List records
    List {
        db: String,
        table: String,
        /// Equality filter as key=value, repeatable
        #[arg(long = "filter", action = clap::ArgAction::Append)]
        filters: Vec<String>,
        #[arg(long)]
        limit: Option<u32>,
        #[arg(long)]
        offset: Option<u32>,
        /// Column to sort by
        #[arg(long)]
        sort: Option<String>,
        /// asc or desc
        #[arg(long)]
        direction: Option<String>,
        /// Print raw JSON instead of a table
        #[arg(long)]
        json: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_record_list() {
        let cli = Cli::try_parse_from([
            "nebula",
            "record",
            "list",
            "inventory",
            "widgets",
            "--filter",
            "color=Blue",
            "--sort",
            "quantity",
            "--direction",
            "desc",
        ])
        .expect("arguments should parse");

        match cli.command {
            Commands::Record {
                command:
                    RecordCommands::List {
                        db,
                        filters,
                        sort,
                        direction,
                        ..
                    },
            } => {
                assert_eq!(db, "inventory");
                assert_eq!(filters, vec!["color=Blue".to_string()]);
                assert_eq!(sort.as_deref(), Some("quantity"));
                assert_eq!(direction.as_deref(), Some("desc"));
            }
            other => panic!("Unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_schema_requires_columns() {
        let result = Cli::try_parse_from(["nebula", "db", "schema", "inventory", "widgets"]);
        assert!(result.is_err());
    }
}

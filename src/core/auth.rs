use crate::error::{AppError, CliError};
use rpassword::read_password;
use std::io::{self, Write};

pub const PASSWORD_ENV: &str = "NEBULA_PASSWORD";

/// Email and password collected for signup or login
#[derive(Debug, Clone)]
pub struct LoginInput {
    pub email: String,
    pub password: String,
}

impl LoginInput {
    /// Resolve credentials from arguments, then the environment, then an
    /// interactive prompt for whatever is still missing.
    pub fn from_args_or_env(
        email: Option<String>,
        password: Option<String>,
        default_email: Option<&str>,
    ) -> Result<Self, AppError> {
        let email = match email.or_else(|| default_email.map(str::to_string)) {
            Some(email) => email,
            None => prompt_line("Email: ")?,
        };

        let password = match password.or_else(|| std::env::var(PASSWORD_ENV).ok()) {
            Some(password) => password,
            None => prompt_password()?,
        };

        let input = Self {
            email: email.trim().to_string(),
            password,
        };
        input.validate()?;
        Ok(input)
    }

    /// Validate that credentials are not empty
    pub fn validate(&self) -> Result<(), AppError> {
        if self.email.is_empty() {
            return Err(AppError::Cli(CliError::InvalidArguments(
                "Email cannot be empty".to_string(),
            )));
        }
        if self.password.is_empty() {
            return Err(AppError::Cli(CliError::InvalidArguments(
                "Password cannot be empty".to_string(),
            )));
        }
        Ok(())
    }
}

fn prompt_line(label: &str) -> Result<String, AppError> {
    eprint!("{}", label);
    io::stderr()
        .flush()
        .map_err(|e| CliError::Input(format!("Failed to flush stderr: {}", e)))?;

    let mut line = String::new();
    io::stdin()
        .read_line(&mut line)
        .map_err(|e| CliError::Input(format!("Failed to read {}: {}", label.trim(), e)))?;
    Ok(line.trim().to_string())
}

fn prompt_password() -> Result<String, AppError> {
    eprint!("Password: ");
    io::stderr()
        .flush()
        .map_err(|e| CliError::Input(format!("Failed to flush stderr: {}", e)))?;

    let password =
        read_password().map_err(|e| CliError::Input(format!("Failed to read password: {}", e)))?;
    Ok(password.trim().to_string())
}

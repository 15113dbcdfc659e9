use thiserror::Error;

/// Sentinel failure categories.
///
/// Every error that reached the Nebula API (plus the two SDK-local
/// conditions) can be classified into exactly one of these, so callers can
/// branch on `err.kind()` instead of matching on message text.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    #[error("bad request (400)")]
    BadRequest,
    #[error("unauthorized (401 - check credentials/token)")]
    Unauthorized,
    #[error("forbidden (403)")]
    Forbidden,
    #[error("resource not found (404)")]
    NotFound,
    #[error("conflict (409 - e.g., resource already exists)")]
    Conflict,
    #[error("rate limit exceeded (429)")]
    RateLimited,
    #[error("internal server error (500)")]
    InternalServer,
    #[error("unexpected client error")]
    UnexpectedClientError,
    #[error("unexpected server error")]
    UnexpectedServerError,
    #[error("invalid response from server")]
    InvalidResponse,
    #[error("authentication token not set in client")]
    AuthTokenMissing,
}

impl ErrorKind {
    /// Classify an HTTP status code (>= 400) into its sentinel.
    pub fn from_status(status: u16) -> Self {
        match status {
            400 => ErrorKind::BadRequest,
            401 => ErrorKind::Unauthorized,
            403 => ErrorKind::Forbidden,
            404 => ErrorKind::NotFound,
            409 => ErrorKind::Conflict,
            429 => ErrorKind::RateLimited,
            500 => ErrorKind::InternalServer,
            s if (400..500).contains(&s) => ErrorKind::UnexpectedClientError,
            _ => ErrorKind::UnexpectedServerError,
        }
    }
}

/// Underlying failure wrapped by [`ApiError`] and [`AppError::InvalidResponse`].
#[derive(Error, Debug)]
pub enum Cause {
    #[error(transparent)]
    Transport(#[from] reqwest::Error),
    #[error(transparent)]
    Decode(#[from] serde_json::Error),
}

/// Error returned by the Nebula API for a status code >= 400.
#[derive(Error, Debug)]
#[error("API error (status {status}): {message}")]
pub struct ApiError {
    pub status: u16,
    pub kind: ErrorKind,
    pub message: String,
    #[source]
    pub source: Option<Cause>,
}

impl ApiError {
    /// Build an API error, classifying `status` and falling back to a
    /// synthesized message when `message` is empty.
    pub fn from_status(status: u16, message: impl Into<String>, source: Option<Cause>) -> Self {
        let mut message = message.into();
        if message.is_empty() {
            message = format!("API returned status {}", status);
        }
        Self {
            status,
            kind: ErrorKind::from_status(status),
            message,
            source,
        }
    }
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("ApiError: {0}")]
    Api(#[from] ApiError),
    #[error("Invalid response from server (status {status}): {message}")]
    InvalidResponse {
        status: u16,
        message: String,
        #[source]
        source: Option<Cause>,
    },
    #[error("Authentication token not set in client")]
    AuthTokenMissing,
    #[error("HTTP request failed for {endpoint}: {source}")]
    RequestFailed {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("Failed to encode request body: {0}")]
    Encode(#[source] serde_json::Error),
    #[error("Invalid URL '{url}': {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
    #[error("Validation error: {field}: {message}")]
    Validation { field: String, message: String },
    #[error("ConfigError: {0}")]
    Config(#[from] ConfigError),
    #[error("CliError: {0}")]
    Cli(#[from] CliError),
    #[error("StorageError: {0}")]
    Storage(#[from] StorageError),
}

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),
    #[error("Failed to read input: {0}")]
    Input(String),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration field '{field}' is missing")]
    MissingField { field: String },
    #[error("Invalid configuration value for '{field}': {value}")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("File I/O error at {path}: {source}")]
    FileIo {
        path: String,
        source: std::io::Error,
    },
    #[error("Configuration parse error: {message}")]
    ConfigParseError { message: String },
    #[error("Configuration serialize error: {message}")]
    ConfigSerializeError { message: String },
    #[error("Configuration directory not found")]
    ConfigDirNotFound,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ErrorSeverity {
    Critical,
    High,
    Medium,
    Low,
}

impl ErrorSeverity {
    pub fn emoji(&self) -> &'static str {
        match self {
            ErrorSeverity::Critical => "🚨",
            ErrorSeverity::High => "❌",
            ErrorSeverity::Medium => "⚠️",
            ErrorSeverity::Low => "ℹ️",
        }
    }
}

impl AppError {
    pub(crate) fn validation(field: &str, message: impl Into<String>) -> Self {
        AppError::Validation {
            field: field.to_string(),
            message: message.into(),
        }
    }

    /// Sentinel category of this error, if it has one.
    ///
    /// Local failures that never produced an HTTP exchange (validation,
    /// encoding, transport, configuration) return `None`, except for the
    /// missing-token check which is itself a sentinel.
    pub fn kind(&self) -> Option<ErrorKind> {
        match self {
            AppError::Api(api_error) => Some(api_error.kind),
            AppError::InvalidResponse { .. } => Some(ErrorKind::InvalidResponse),
            AppError::AuthTokenMissing => Some(ErrorKind::AuthTokenMissing),
            _ => None,
        }
    }

    pub fn is(&self, kind: ErrorKind) -> bool {
        self.kind() == Some(kind)
    }

    /// HTTP status code of the exchange that produced this error.
    pub fn status(&self) -> Option<u16> {
        match self {
            AppError::Api(api_error) => Some(api_error.status),
            AppError::InvalidResponse { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            AppError::Api(api_error) => match api_error.kind {
                ErrorKind::Unauthorized | ErrorKind::Forbidden => ErrorSeverity::High,
                ErrorKind::InternalServer | ErrorKind::UnexpectedServerError => {
                    ErrorSeverity::High
                }
                _ => ErrorSeverity::Medium,
            },
            AppError::InvalidResponse { .. } => ErrorSeverity::High,
            AppError::AuthTokenMissing => ErrorSeverity::High,
            AppError::RequestFailed { .. } => ErrorSeverity::High,
            AppError::Encode(_) => ErrorSeverity::Critical,
            AppError::InvalidUrl { .. } => ErrorSeverity::Medium,
            AppError::Validation { .. } => ErrorSeverity::Low,
            AppError::Config(_) => ErrorSeverity::High,
            AppError::Cli(_) => ErrorSeverity::Medium,
            AppError::Storage(_) => ErrorSeverity::Medium,
        }
    }

    pub fn troubleshooting_hint(&self) -> Option<String> {
        match self {
            AppError::AuthTokenMissing => Some(
                "run 'nebula auth login' and export the printed token as NEBULA_TOKEN".to_string(),
            ),
            AppError::Api(ApiError {
                kind: ErrorKind::Unauthorized,
                ..
            }) => Some("your token may have expired, run 'nebula auth login' again".to_string()),
            AppError::Api(ApiError {
                kind: ErrorKind::RateLimited,
                ..
            }) => Some("wait a moment before sending more requests".to_string()),
            AppError::RequestFailed { .. } => {
                Some("Check your internet or Nebula connection and try again".to_string())
            }
            AppError::Config(ConfigError::MissingField { .. }) => {
                Some("'nebula config set <field> <value>' to set a configuration value".to_string())
            }
            _ => None,
        }
    }
}

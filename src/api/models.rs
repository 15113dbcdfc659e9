use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A record as returned by the API: column name to JSON value.
pub type Record = Map<String, Value>;

// Authentication models
#[derive(Debug, Serialize)]
pub struct SignupPayload {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct LoginPayload {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub token: String,
}

// Database, schema and table models
#[derive(Debug, Serialize)]
pub struct CreateDatabasePayload {
    pub db_name: String,
}

#[derive(Debug, Deserialize, Default)]
pub struct ListDatabasesResponse {
    #[serde(default)]
    pub databases: Option<Vec<String>>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ColumnDefinition {
    pub name: String,
    /// SQL type understood by the server, e.g. `TEXT`, `INTEGER`, `REAL`, `BLOB`, `BOOLEAN`.
    #[serde(rename = "type")]
    pub column_type: String,
}

impl ColumnDefinition {
    pub fn new(name: impl Into<String>, column_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            column_type: column_type.into(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct SchemaPayload {
    pub table_name: String,
    pub columns: Vec<ColumnDefinition>,
}

#[derive(Debug, Deserialize, Default)]
pub struct ListTablesResponse {
    #[serde(default)]
    pub tables: Option<Vec<String>>,
}

// Record models
#[derive(Debug, Deserialize)]
pub struct CreateRecordResponse {
    #[serde(default)]
    pub message: String,
    pub record_id: i64,
}

#[derive(Debug, Deserialize, Default, Clone, PartialEq)]
pub struct UpdateRecordResponse {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub record_id: i64,
    #[serde(default)]
    pub rows_affected: i64,
}

/// Standard error body: `{"error": "message"}`.
#[derive(Debug, Deserialize)]
pub struct ErrorResponse {
    #[serde(default)]
    pub error: Option<String>,
}

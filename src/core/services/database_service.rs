use crate::AppError;
use crate::api::client::NebulaClient;
use crate::api::models::{CreateDatabasePayload, ListDatabasesResponse, SchemaPayload};
use crate::api::request::{ApiRequest, Endpoint};
use crate::utils::validation::require_path_segment;
use reqwest::Method;

/// Database registration and schema definition (`databases[/{db}[/schema]]`).
pub struct DatabaseService<'a> {
    client: &'a NebulaClient,
}

impl<'a> DatabaseService<'a> {
    pub fn new(client: &'a NebulaClient) -> Self {
        Self { client }
    }

    /// Register a new logical database for the authenticated user
    pub async fn create(&self, db_name: &str) -> Result<(), AppError> {
        require_path_segment("db_name", db_name)?;

        let payload = CreateDatabasePayload {
            db_name: db_name.to_string(),
        };
        let request =
            ApiRequest::new(Endpoint::protected(Method::POST, "databases")).json(&payload)?;

        self.client.execute_unit(request).await
    }

    /// Names of all databases registered by the authenticated user
    pub async fn list(&self) -> Result<Vec<String>, AppError> {
        let request = ApiRequest::new(Endpoint::protected(Method::GET, "databases"));

        let response: Option<ListDatabasesResponse> = self.client.execute(request).await?;
        Ok(response.and_then(|r| r.databases).unwrap_or_default())
    }

    pub async fn delete(&self, db_name: &str) -> Result<(), AppError> {
        require_path_segment("db_name", db_name)?;

        let request = ApiRequest::new(Endpoint::protected(
            Method::DELETE,
            &format!("databases/{}", db_name),
        ));

        self.client.execute_unit(request).await
    }

    /// Create (or re-declare) a table inside `db_name`
    pub async fn define_schema(&self, db_name: &str, schema: &SchemaPayload) -> Result<(), AppError> {
        require_path_segment("db_name", db_name)?;
        require_path_segment("table_name", &schema.table_name)?;
        if schema.columns.is_empty() {
            return Err(AppError::validation(
                "columns",
                "schema must contain at least one column",
            ));
        }

        let request = ApiRequest::new(Endpoint::protected(
            Method::POST,
            &format!("databases/{}/schema", db_name),
        ))
        .json(schema)?;

        self.client.execute_unit(request).await
    }
}

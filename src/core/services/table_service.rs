use crate::AppError;
use crate::api::client::NebulaClient;
use crate::api::models::ListTablesResponse;
use crate::api::request::{ApiRequest, Endpoint};
use crate::utils::validation::require_path_segment;
use reqwest::Method;

/// Table listing and removal within a database.
pub struct TableService<'a> {
    client: &'a NebulaClient,
}

impl<'a> TableService<'a> {
    pub fn new(client: &'a NebulaClient) -> Self {
        Self { client }
    }

    pub async fn list(&self, db_name: &str) -> Result<Vec<String>, AppError> {
        require_path_segment("db_name", db_name)?;

        let request = ApiRequest::new(Endpoint::protected(
            Method::GET,
            &format!("databases/{}/tables", db_name),
        ));

        let response: Option<ListTablesResponse> = self.client.execute(request).await?;
        Ok(response.and_then(|r| r.tables).unwrap_or_default())
    }

    /// Drop `table_name` from `db_name`
    pub async fn delete(&self, db_name: &str, table_name: &str) -> Result<(), AppError> {
        require_path_segment("db_name", db_name)?;
        require_path_segment("table_name", table_name)?;

        let request = ApiRequest::new(Endpoint::protected(
            Method::DELETE,
            &format!("databases/{}/tables/{}", db_name, table_name),
        ));

        self.client.execute_unit(request).await
    }
}

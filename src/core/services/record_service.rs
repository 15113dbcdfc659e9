use super::types::ListRecordsOptions;
use crate::AppError;
use crate::api::client::NebulaClient;
use crate::api::models::{CreateRecordResponse, Record, UpdateRecordResponse};
use crate::api::request::{ApiRequest, Endpoint};
use crate::utils::validation::{require_path_segment, require_positive_id};
use reqwest::Method;

/// CRUD access to records in `databases/{db}/tables/{table}/records`.
pub struct RecordService<'a> {
    client: &'a NebulaClient,
}

impl<'a> RecordService<'a> {
    pub fn new(client: &'a NebulaClient) -> Self {
        Self { client }
    }

    fn records_path(db_name: &str, table_name: &str) -> Result<String, AppError> {
        require_path_segment("db_name", db_name)?;
        require_path_segment("table_name", table_name)?;
        Ok(format!("databases/{}/tables/{}/records", db_name, table_name))
    }

    fn record_path(db_name: &str, table_name: &str, record_id: i64) -> Result<String, AppError> {
        let base = Self::records_path(db_name, table_name)?;
        require_positive_id("record_id", record_id)?;
        Ok(format!("{}/{}", base, record_id))
    }

    /// Insert a record and return its server-assigned id
    pub async fn create(
        &self,
        db_name: &str,
        table_name: &str,
        data: &Record,
    ) -> Result<i64, AppError> {
        if data.is_empty() {
            return Err(AppError::validation("data", "record data cannot be empty"));
        }
        let path = Self::records_path(db_name, table_name)?;
        let request = ApiRequest::new(Endpoint::protected(Method::POST, &path)).json(data)?;

        match self.client.execute_with_status::<CreateRecordResponse>(request).await? {
            (_, Some(response)) => Ok(response.record_id),
            (status, None) => Err(AppError::InvalidResponse {
                status,
                message: "create record returned no body".to_string(),
                source: None,
            }),
        }
    }

    pub async fn get(
        &self,
        db_name: &str,
        table_name: &str,
        record_id: i64,
    ) -> Result<Record, AppError> {
        let path = Self::record_path(db_name, table_name, record_id)?;
        let request = ApiRequest::new(Endpoint::protected(Method::GET, &path));

        let record: Option<Record> = self.client.execute(request).await?;
        Ok(record.unwrap_or_default())
    }

    /// Change only the columns present in `data`
    pub async fn update(
        &self,
        db_name: &str,
        table_name: &str,
        record_id: i64,
        data: &Record,
    ) -> Result<UpdateRecordResponse, AppError> {
        if data.is_empty() {
            return Err(AppError::validation("data", "update data cannot be empty"));
        }
        let path = Self::record_path(db_name, table_name, record_id)?;
        let request = ApiRequest::new(Endpoint::protected(Method::PUT, &path)).json(data)?;

        let response: Option<UpdateRecordResponse> = self.client.execute(request).await?;
        Ok(response.unwrap_or_default())
    }

    pub async fn delete(
        &self,
        db_name: &str,
        table_name: &str,
        record_id: i64,
    ) -> Result<(), AppError> {
        let path = Self::record_path(db_name, table_name, record_id)?;
        let request = ApiRequest::new(Endpoint::protected(Method::DELETE, &path));

        self.client.execute_unit(request).await
    }

    pub async fn list(
        &self,
        db_name: &str,
        table_name: &str,
        options: &ListRecordsOptions,
    ) -> Result<Vec<Record>, AppError> {
        let path = Self::records_path(db_name, table_name)?;
        let request = ApiRequest::new(Endpoint::protected(Method::GET, &path))
            .query_pairs(options.to_query_pairs());

        let records: Option<Option<Vec<Record>>> = self.client.execute(request).await?;
        Ok(records.flatten().unwrap_or_default())
    }
}

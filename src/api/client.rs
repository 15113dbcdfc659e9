use crate::api::config::ClientConfig;
use crate::api::models::ErrorResponse;
use crate::api::request::ApiRequest;
use crate::core::services::auth_service::AuthService;
use crate::core::services::database_service::DatabaseService;
use crate::core::services::record_service::RecordService;
use crate::core::services::table_service::TableService;
use crate::error::{ApiError, AppError, Cause};
use crate::utils::validation::parse_base_url;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use std::time::Duration;
use url::Url;

/// Hard cap on how much of any response body is read.
pub const MAX_RESPONSE_BODY: usize = 1024 * 1024;
/// Raw error bodies shorter than this are quoted in synthesized messages.
const ERROR_EXCERPT_LIMIT: usize = 200;
const JSON_MEDIA_TYPE: &str = "application/json";
const USER_AGENT: &str = concat!("nebula-sdk/", env!("CARGO_PKG_VERSION"));

/// Client for the Nebula BaaS API.
///
/// Holds the normalized base URL, the HTTP transport and the bearer token
/// cached by [`AuthService::login`]. The token can only change through
/// `&mut self`; sharing one client between tasks that log in and out while
/// other calls are in flight needs external synchronization.
#[derive(Debug, Clone)]
pub struct NebulaClient {
    client: Client,
    base_url: Url,
    timeout: Duration,
    auth_token: Option<String>,
}

impl NebulaClient {
    // Create client with default settings
    pub fn new(base_url: &str) -> Result<Self, AppError> {
        Self::with_config(base_url, ClientConfig::default())
    }

    pub fn with_config(base_url: &str, config: ClientConfig) -> Result<Self, AppError> {
        config.validate()?;
        let base_url = parse_base_url(base_url)?;

        let client = match config.http_client {
            Some(client) => client,
            None => Client::builder()
                .timeout(config.timeout)
                .user_agent(USER_AGENT)
                .build()
                .map_err(|source| AppError::RequestFailed {
                    endpoint: "client_init".to_string(),
                    source,
                })?,
        };

        Ok(NebulaClient {
            client,
            base_url,
            timeout: config.timeout,
            auth_token: None,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn auth_token(&self) -> Option<&str> {
        self.auth_token.as_deref()
    }

    pub fn set_auth_token(&mut self, token: impl Into<String>) {
        self.auth_token = Some(token.into());
    }

    pub fn clear_auth_token(&mut self) {
        self.auth_token = None;
    }

    pub fn is_authenticated(&self) -> bool {
        self.auth_token.is_some()
    }

    pub fn auth(&mut self) -> AuthService<'_> {
        AuthService::new(self)
    }

    pub fn databases(&self) -> DatabaseService<'_> {
        DatabaseService::new(self)
    }

    pub fn tables(&self) -> TableService<'_> {
        TableService::new(self)
    }

    pub fn records(&self) -> RecordService<'_> {
        RecordService::new(self)
    }

    /// Resolve a relative API path (and query) against the base URL.
    ///
    /// Path segments are appended verbatim and are not escaped. Dot segments
    /// are collapsed by URL parsing, so services reject `.` and `..` names
    /// before building a path.
    pub fn build_url(&self, path: &str, query: &[(String, String)]) -> Result<Url, AppError> {
        let raw = format!("{}{}", self.base_url, path.trim_start_matches('/'));
        let mut url = Url::parse(&raw).map_err(|source| AppError::InvalidUrl { url: raw, source })?;
        if !query.is_empty() {
            url.query_pairs_mut().extend_pairs(query);
        }
        Ok(url)
    }

    /// Turn a request descriptor into a ready-to-send request.
    ///
    /// Fails with [`AppError::AuthTokenMissing`] for protected endpoints when
    /// no token is cached.
    pub fn build_request(&self, request: ApiRequest) -> Result<RequestBuilder, AppError> {
        let (endpoint, query, body) = request.into_parts();
        let url = self.build_url(endpoint.path(), &query)?;

        let mut builder = self
            .client
            .request(endpoint.method().clone(), url)
            .timeout(self.timeout)
            .header(ACCEPT, JSON_MEDIA_TYPE);

        if let Some(body) = body {
            builder = builder.header(CONTENT_TYPE, JSON_MEDIA_TYPE).body(body);
        }

        if endpoint.requires_auth() {
            let token = self.auth_token.as_deref().ok_or_else(|| {
                log::error!(
                    "protected call to {} attempted without auth token",
                    endpoint.path()
                );
                AppError::AuthTokenMissing
            })?;
            builder = builder.bearer_auth(token);
        }

        Ok(builder)
    }

    /// Execute `request` and decode the response body into `T`.
    ///
    /// Returns `Ok(None)` for `204 No Content`; no decoding is attempted.
    pub async fn execute<T>(&self, request: ApiRequest) -> Result<Option<T>, AppError>
    where
        T: DeserializeOwned,
    {
        self.execute_with_status(request)
            .await
            .map(|(_, body)| body)
    }

    /// Like [`execute`](Self::execute), also returning the success status code.
    pub async fn execute_with_status<T>(
        &self,
        request: ApiRequest,
    ) -> Result<(u16, Option<T>), AppError>
    where
        T: DeserializeOwned,
    {
        let endpoint = request.endpoint().path().to_string();
        let mut response = self.dispatch(request).await?;
        let status = response.status();

        if status == StatusCode::NO_CONTENT {
            return Ok((status.as_u16(), None));
        }

        let bytes = read_capped(&mut response)
            .await
            .map_err(|e| AppError::InvalidResponse {
                status: status.as_u16(),
                message: format!("failed to read response body from {}", endpoint),
                source: Some(Cause::from(e)),
            })?;

        let body = serde_json::from_slice(&bytes).map_err(|e| {
            log::error!(
                "failed to decode response from {} (status {}, {} bytes): {}",
                endpoint,
                status.as_u16(),
                bytes.len(),
                e
            );
            AppError::InvalidResponse {
                status: status.as_u16(),
                message: format!("failed to decode response from {}", endpoint),
                source: Some(Cause::from(e)),
            }
        })?;
        Ok((status.as_u16(), Some(body)))
    }

    /// Execute `request`, discarding any success body.
    pub async fn execute_unit(&self, request: ApiRequest) -> Result<(), AppError> {
        self.dispatch(request).await.map(|_| ())
    }

    /// Send the request and map statuses >= 400 to an [`ApiError`].
    async fn dispatch(&self, request: ApiRequest) -> Result<Response, AppError> {
        let method = request.endpoint().method().clone();
        let endpoint = request.endpoint().path().to_string();
        let builder = self.build_request(request)?;

        log::debug!("{} {}", method, endpoint);
        let mut response = builder
            .send()
            .await
            .map_err(|source| AppError::RequestFailed {
                endpoint: endpoint.clone(),
                source,
            })?;

        let status = response.status();
        log::debug!("{} {} -> {}", method, endpoint, status.as_u16());

        if status.as_u16() >= 400 {
            return Err(Self::error_from_response(status, &mut response).await.into());
        }

        Ok(response)
    }

    async fn error_from_response(status: StatusCode, response: &mut Response) -> ApiError {
        let bytes = match read_capped(response).await {
            Ok(bytes) => bytes,
            Err(e) => {
                log::error!("failed to read error response body: {}", e);
                return ApiError::from_status(
                    status.as_u16(),
                    "failed to read error body",
                    Some(Cause::from(e)),
                );
            }
        };

        let message = match serde_json::from_slice::<ErrorResponse>(&bytes) {
            Ok(ErrorResponse {
                error: Some(message),
            }) if !message.is_empty() => message,
            parsed => {
                let mut message = format!("API returned status {}", status.as_u16());
                if !bytes.is_empty() && bytes.len() < ERROR_EXCERPT_LIMIT {
                    message.push_str(&format!(" ({})", String::from_utf8_lossy(&bytes)));
                }
                log::warn!(
                    "could not parse API error response body (status {}): {}",
                    status.as_u16(),
                    parsed
                        .err()
                        .map(|e| e.to_string())
                        .unwrap_or_else(|| "empty error field".to_string())
                );
                message
            }
        };

        ApiError::from_status(status.as_u16(), message, None)
    }
}

/// Read at most [`MAX_RESPONSE_BODY`] bytes; anything beyond is dropped.
async fn read_capped(response: &mut Response) -> Result<Vec<u8>, reqwest::Error> {
    let mut buffer = Vec::new();
    while let Some(chunk) = response.chunk().await? {
        let remaining = MAX_RESPONSE_BODY - buffer.len();
        if chunk.len() >= remaining {
            buffer.extend_from_slice(&chunk[..remaining]);
            break;
        }
        buffer.extend_from_slice(&chunk);
    }
    Ok(buffer)
}

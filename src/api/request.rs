//! Request descriptors consumed by [`NebulaClient::execute`](super::client::NebulaClient::execute).

use crate::error::AppError;
use reqwest::Method;
use serde::Serialize;

/// Path prefix shared by every protected endpoint.
pub const API_VERSION_PREFIX: &str = "api/v1";

/// Whether an endpoint needs the cached bearer token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthRequirement {
    Public,
    Bearer,
}

/// A method, a path relative to the base URL, and its auth requirement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    method: Method,
    path: String,
    auth: AuthRequirement,
}

impl Endpoint {
    /// Endpoint outside the versioned prefix that never carries a token
    /// (`auth/signup`, `auth/login`).
    pub fn public(method: Method, path: &str) -> Self {
        Self {
            method,
            path: path.trim_start_matches('/').to_string(),
            auth: AuthRequirement::Public,
        }
    }

    /// Endpoint under [`API_VERSION_PREFIX`] that requires a bearer token.
    pub fn protected(method: Method, sub_path: &str) -> Self {
        Self {
            method,
            path: format!(
                "{}/{}",
                API_VERSION_PREFIX,
                sub_path.trim_start_matches('/')
            ),
            auth: AuthRequirement::Bearer,
        }
    }

    pub fn method(&self) -> &Method {
        &self.method
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn requires_auth(&self) -> bool {
        self.auth == AuthRequirement::Bearer
    }
}

/// A single call: endpoint, query parameters and an already-encoded JSON body.
#[derive(Debug, Clone)]
pub struct ApiRequest {
    endpoint: Endpoint,
    query: Vec<(String, String)>,
    body: Option<Vec<u8>>,
}

impl ApiRequest {
    pub fn new(endpoint: Endpoint) -> Self {
        Self {
            endpoint,
            query: Vec::new(),
            body: None,
        }
    }

    /// Serialize `payload` as the JSON request body.
    ///
    /// Encoding happens here so a payload that cannot be serialized fails
    /// before any connection is opened.
    pub fn json<B>(mut self, payload: &B) -> Result<Self, AppError>
    where
        B: Serialize + ?Sized,
    {
        let bytes = serde_json::to_vec(payload).map_err(AppError::Encode)?;
        self.body = Some(bytes);
        Ok(self)
    }

    pub fn query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    pub fn query_pairs<I>(mut self, pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        self.query.extend(pairs);
        self
    }

    pub fn endpoint(&self) -> &Endpoint {
        &self.endpoint
    }

    pub fn query_params(&self) -> &[(String, String)] {
        &self.query
    }

    pub fn body(&self) -> Option<&[u8]> {
        self.body.as_deref()
    }

    pub(crate) fn into_parts(self) -> (Endpoint, Vec<(String, String)>, Option<Vec<u8>>) {
        (self.endpoint, self.query, self.body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::ser::{Error as _, Serializer};
    use std::collections::HashMap;

    struct Unserializable;

    impl Serialize for Unserializable {
        fn serialize<S: Serializer>(&self, _serializer: S) -> Result<S::Ok, S::Error> {
            Err(S::Error::custom("refusing to serialize"))
        }
    }

    #[test]
    fn test_protected_endpoint_gets_version_prefix() {
        let endpoint = Endpoint::protected(Method::GET, "/databases");
        assert_eq!(endpoint.path(), "api/v1/databases");
        assert!(endpoint.requires_auth());
    }

    #[test]
    fn test_public_endpoint_strips_leading_slash() {
        let endpoint = Endpoint::public(Method::POST, "/auth/login");
        assert_eq!(endpoint.path(), "auth/login");
        assert_eq!(endpoint.method(), &Method::POST);
        assert!(!endpoint.requires_auth());
    }

    #[test]
    fn test_json_body_is_encoded_eagerly() {
        let mut payload = HashMap::new();
        payload.insert("db_name", "inventory");
        let request = ApiRequest::new(Endpoint::protected(Method::POST, "databases"))
            .json(&payload)
            .expect("payload should encode");
        assert_eq!(request.body(), Some(br#"{"db_name":"inventory"}"#.as_slice()));
    }

    #[test]
    fn test_json_encoding_failure_is_local_error() {
        let result =
            ApiRequest::new(Endpoint::protected(Method::POST, "databases")).json(&Unserializable);
        assert!(matches!(result, Err(AppError::Encode(_))));
    }

    #[test]
    fn test_query_params_are_kept_in_order() {
        let request = ApiRequest::new(Endpoint::protected(Method::GET, "databases/a/tables/b/records"))
            .query("limit", "10")
            .query_pairs(vec![("sort".to_string(), "name:asc".to_string())]);
        assert_eq!(
            request.query_params(),
            &[
                ("limit".to_string(), "10".to_string()),
                ("sort".to_string(), "name:asc".to_string())
            ]
        );
        assert!(request.body().is_none());
    }
}

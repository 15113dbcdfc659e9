use crate::AppError;
use crate::api::client::NebulaClient;
use crate::api::models::{LoginPayload, LoginResponse, SignupPayload};
use crate::api::request::{ApiRequest, Endpoint};
use crate::utils::validation::require_non_blank;
use reqwest::Method;

const SIGNUP_PATH: &str = "auth/signup";
const LOGIN_PATH: &str = "auth/login";

/// Authentication service for `auth/*` endpoints.
///
/// Borrows the client mutably because login and logout rewrite its cached
/// bearer token.
pub struct AuthService<'a> {
    client: &'a mut NebulaClient,
}

impl<'a> AuthService<'a> {
    pub fn new(client: &'a mut NebulaClient) -> Self {
        Self { client }
    }

    /// Register a new user account
    pub async fn signup(&self, email: &str, password: &str) -> Result<(), AppError> {
        validate_credentials(email, password)?;

        let payload = SignupPayload {
            email: email.to_string(),
            password: password.to_string(),
        };
        let request = ApiRequest::new(Endpoint::public(Method::POST, SIGNUP_PATH)).json(&payload)?;

        self.client.execute_unit(request).await
    }

    /// Authenticate and cache the returned token on the client.
    ///
    /// Any failure, local or remote, clears the previously cached token.
    pub async fn login(&mut self, email: &str, password: &str) -> Result<String, AppError> {
        match self.try_login(email, password).await {
            Ok(token) => {
                self.client.set_auth_token(token.clone());
                log::debug!("login succeeded, token cached");
                Ok(token)
            }
            Err(e) => {
                self.client.clear_auth_token();
                Err(e)
            }
        }
    }

    async fn try_login(&self, email: &str, password: &str) -> Result<String, AppError> {
        validate_credentials(email, password)?;

        let payload = LoginPayload {
            email: email.to_string(),
            password: password.to_string(),
        };
        let request = ApiRequest::new(Endpoint::public(Method::POST, LOGIN_PATH)).json(&payload)?;

        match self.client.execute_with_status::<LoginResponse>(request).await? {
            (_, Some(response)) if !response.token.is_empty() => Ok(response.token),
            (status, _) => Err(AppError::InvalidResponse {
                status,
                message: "login response did not contain a token".to_string(),
                source: None,
            }),
        }
    }

    /// Forget the cached token. No request is sent.
    pub fn logout(&mut self) {
        self.client.clear_auth_token();
    }

    pub fn is_authenticated(&self) -> bool {
        self.client.is_authenticated()
    }
}

fn validate_credentials(email: &str, password: &str) -> Result<(), AppError> {
    require_non_blank("email", email)?;
    if password.is_empty() {
        return Err(AppError::validation("password", "cannot be empty"));
    }
    Ok(())
}

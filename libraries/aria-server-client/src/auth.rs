//! Authentication methods for the Aria profile service.

use crate::error::{Result, ServerClientError};
use crate::types::{LoginRequest, LoginResponse};
use reqwest::Client;
use tracing::{debug, info, warn};

/// Authentication client for the profile service.
pub struct AuthClient<'a> {
    http: &'a Client,
    base_url: &'a str,
}

impl<'a> AuthClient<'a> {
    pub(crate) fn new(http: &'a Client, base_url: &'a str) -> Self {
        Self { http, base_url }
    }

    /// Login with email and password.
    ///
    /// Returns the session on success.
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginResponse> {
        let url = format!("{}/api/auth/login", self.base_url);
        debug!(url = %url, email = %email, "Attempting login");

        let request = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };

        let response = self
            .http
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                if e.is_connect() {
                    ServerClientError::ServerUnreachable(e.to_string())
                } else {
                    ServerClientError::Request(e)
                }
            })?;

        let status = response.status();

        if status.is_success() {
            let login_response: LoginResponse = response.json().await.map_err(|e| {
                ServerClientError::ParseError(format!("Failed to parse login response: {}", e))
            })?;

            info!(user_id = %login_response.user_id, "Login successful");
            Ok(login_response)
        } else if status.as_u16() == 401 {
            let error_text = response.text().await.unwrap_or_default();
            warn!(status = %status, error = %error_text, "Login failed: invalid credentials");
            Err(ServerClientError::AuthFailed(
                "Invalid email or password".to_string(),
            ))
        } else {
            let error_text = response.text().await.unwrap_or_default();
            Err(ServerClientError::ServerError {
                status: status.as_u16(),
                message: error_text,
            })
        }
    }

    /// Check whether an access token is still valid.
    pub async fn validate_token(&self, access_token: &str) -> Result<bool> {
        let url = format!("{}/api/auth/validate", self.base_url);
        debug!(url = %url, "Validating access token");

        let response = self
            .http
            .get(&url)
            .bearer_auth(access_token)
            .send()
            .await?;

        Ok(response.status().is_success())
    }
}

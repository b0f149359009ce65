//! Profile operations for the Aria profile service.

use crate::error::{Result, ServerClientError};
use crate::types::AddMinutesRequest;
use aria_core::types::Profile;
use reqwest::Client;
use tracing::debug;

/// Profile client bound to one authenticated user.
pub struct ProfileClient {
    http: Client,
    base_url: String,
    access_token: String,
    user_id: String,
}

impl ProfileClient {
    pub(crate) fn new(
        http: Client,
        base_url: String,
        access_token: String,
        user_id: String,
    ) -> Self {
        Self {
            http,
            base_url,
            access_token,
            user_id,
        }
    }

    /// Fetch the user's profile record.
    pub async fn get(&self) -> Result<Profile> {
        let url = format!("{}/api/profiles/{}", self.base_url, self.user_id);
        debug!(url = %url, "Fetching profile");

        let response = self
            .http
            .get(&url)
            .bearer_auth(&self.access_token)
            .send()
            .await?;

        let status = response.status();

        if status.is_success() {
            let profile: Profile = response.json().await.map_err(|e| {
                ServerClientError::ParseError(format!("Failed to parse profile: {}", e))
            })?;
            Ok(profile)
        } else if status.as_u16() == 401 {
            Err(ServerClientError::AuthRequired)
        } else {
            let error_text = response.text().await.unwrap_or_default();
            Err(ServerClientError::ServerError {
                status: status.as_u16(),
                message: error_text,
            })
        }
    }

    /// Add whole minutes to the user's listening total.
    pub async fn add_minutes(&self, minutes: u64) -> Result<()> {
        let url = format!("{}/api/profiles/{}/minutes", self.base_url, self.user_id);
        debug!(url = %url, minutes, "Adding listening minutes");

        let response = self
            .http
            .post(&url)
            .bearer_auth(&self.access_token)
            .json(&AddMinutesRequest { minutes })
            .send()
            .await?;

        let status = response.status();

        if status.is_success() {
            Ok(())
        } else if status.as_u16() == 401 {
            Err(ServerClientError::AuthRequired)
        } else {
            let error_text = response.text().await.unwrap_or_default();
            Err(ServerClientError::ServerError {
                status: status.as_u16(),
                message: error_text,
            })
        }
    }
}

//! Main Aria profile-service client.

use crate::auth::AuthClient;
use crate::error::{Result, ServerClientError};
use crate::favorites::FavoritesClient;
use crate::playlists::PlaylistsClient;
use crate::profile::ProfileClient;
use crate::types::{LoginResponse, ServerConfig};
use aria_core::types::UserId;
use reqwest::Client;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;
use tracing::info;

/// Client for the Aria profile service.
///
/// Holds the session (access token + user id) and hands out focused
/// clients for profile, favorites, and playlist operations.
///
/// # Example
///
/// ```ignore
/// use aria_server_client::{AriaServerClient, ServerConfig};
///
/// let config = ServerConfig::new("https://profiles.example.com");
/// let client = AriaServerClient::new(config)?;
///
/// let login = client.login("listener@example.com", "password").await?;
/// println!("Logged in as {}", login.user_id);
///
/// let liked = client.favorites().await?.list().await?;
/// println!("{} liked tracks", liked.len());
/// ```
pub struct AriaServerClient {
    http: Client,
    config: Arc<RwLock<ServerConfig>>,
}

impl AriaServerClient {
    /// Create a new client with the given configuration.
    pub fn new(config: ServerConfig) -> Result<Self> {
        if config.url.is_empty() {
            return Err(ServerClientError::InvalidUrl("URL cannot be empty".into()));
        }

        let url = config.url.trim_end_matches('/').to_string();
        if !url.starts_with("http://") && !url.starts_with("https://") {
            return Err(ServerClientError::InvalidUrl(
                "URL must start with http:// or https://".into(),
            ));
        }

        let normalized = ServerConfig {
            url,
            access_token: config.access_token,
            user_id: config.user_id,
        };

        let http = Client::builder()
            .timeout(Duration::from_secs(10))
            .connect_timeout(Duration::from_secs(5))
            .user_agent(format!("AriaPlayer/{}", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(ServerClientError::Request)?;

        Ok(Self {
            http,
            config: Arc::new(RwLock::new(normalized)),
        })
    }

    /// Get the service URL.
    pub async fn url(&self) -> String {
        self.config.read().await.url.clone()
    }

    /// Check whether the client holds a session.
    pub async fn is_authenticated(&self) -> bool {
        self.config.read().await.access_token.is_some()
    }

    /// The authenticated identity, if any.
    pub async fn identity(&self) -> Option<UserId> {
        self.config.read().await.user_id.clone().map(UserId::new)
    }

    /// Login with email and password.
    ///
    /// On success, the session is stored for subsequent requests.
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginResponse> {
        let url = self.url().await;

        let auth_client = AuthClient::new(&self.http, &url);
        let response = auth_client.login(email, password).await?;

        let mut config = self.config.write().await;
        config.access_token = Some(response.access_token.clone());
        config.user_id = Some(response.user_id.clone());

        Ok(response)
    }

    /// Validate the current access token.
    pub async fn validate_token(&self) -> Result<bool> {
        let config = self.config.read().await;
        let access_token = match &config.access_token {
            Some(t) => t.clone(),
            None => return Ok(false),
        };
        let url = config.url.clone();
        drop(config);

        let auth_client = AuthClient::new(&self.http, &url);
        auth_client.validate_token(&access_token).await
    }

    /// Clear the stored session (logout).
    pub async fn logout(&self) {
        let mut config = self.config.write().await;
        config.access_token = None;
        config.user_id = None;
        info!("Logged out");
    }

    /// Get a profile client for the authenticated user.
    ///
    /// Returns an error if not authenticated.
    pub async fn profile(&self) -> Result<ProfileClient> {
        let (url, token, user_id) = self.session().await?;
        Ok(ProfileClient::new(self.http.clone(), url, token, user_id))
    }

    /// Get a favorites client for the authenticated user.
    ///
    /// Returns an error if not authenticated.
    pub async fn favorites(&self) -> Result<FavoritesClient> {
        let (url, token, user_id) = self.session().await?;
        Ok(FavoritesClient::new(self.http.clone(), url, token, user_id))
    }

    /// Get a playlists client for the authenticated user.
    ///
    /// Returns an error if not authenticated.
    pub async fn playlists(&self) -> Result<PlaylistsClient> {
        let (url, token, user_id) = self.session().await?;
        Ok(PlaylistsClient::new(self.http.clone(), url, token, user_id))
    }

    async fn session(&self) -> Result<(String, String, String)> {
        let config = self.config.read().await;
        let token = config
            .access_token
            .clone()
            .ok_or(ServerClientError::AuthRequired)?;
        let user_id = config
            .user_id
            .clone()
            .ok_or(ServerClientError::AuthRequired)?;
        Ok((config.url.clone(), token, user_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_validation() {
        assert!(AriaServerClient::new(ServerConfig::new("https://example.com")).is_ok());
        assert!(AriaServerClient::new(ServerConfig::new("http://localhost:8080")).is_ok());

        assert!(AriaServerClient::new(ServerConfig::new("")).is_err());
        assert!(AriaServerClient::new(ServerConfig::new("not-a-url")).is_err());
        assert!(AriaServerClient::new(ServerConfig::new("ftp://example.com")).is_err());
    }

    #[test]
    fn test_url_normalization() {
        let client =
            AriaServerClient::new(ServerConfig::new("https://example.com/")).expect("valid url");

        let url = tokio::runtime::Runtime::new()
            .unwrap()
            .block_on(client.url());
        assert_eq!(url, "https://example.com");
    }

    #[test]
    fn test_clients_require_session() {
        let client = AriaServerClient::new(ServerConfig::new("https://example.com")).unwrap();
        let runtime = tokio::runtime::Runtime::new().unwrap();

        assert!(!runtime.block_on(client.is_authenticated()));
        assert!(matches!(
            runtime.block_on(client.favorites()),
            Err(ServerClientError::AuthRequired)
        ));
    }
}

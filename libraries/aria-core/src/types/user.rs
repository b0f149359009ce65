/// User identity and profile types
use serde::{Deserialize, Serialize};

/// Authenticated user identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserId(pub String);

impl UserId {
    /// Create a user id from any string-like value
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The raw identifier string
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Remote profile record
///
/// `minutes_listened` is the running total the listening-time accumulator
/// flushes into.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Profile {
    /// Handle, when the user picked one
    pub username: Option<String>,

    /// Display name
    pub full_name: Option<String>,

    /// Avatar image URL
    pub avatar_url: Option<String>,

    /// Accumulated listening time in whole minutes
    #[serde(default)]
    pub minutes_listened: u64,
}

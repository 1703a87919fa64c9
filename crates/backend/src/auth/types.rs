//! Auth-related types and configuration.

use serde::{Deserialize, Serialize};

/// Session token claims. `exp` is the only thing that matters for validity;
/// `iat` is kept for observability.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Issued at timestamp
    pub iat: i64,
    /// Expiration timestamp
    pub exp: i64,
}

/// Auth configuration loaded from environment
#[derive(Clone)]
pub struct AuthConfig {
    pub session_secret: String,
    pub admin_password: String,
    pub token_duration_days: i64,
    pub cookie_name: String,
}

impl AuthConfig {
    /// Load auth configuration from environment variables.
    ///
    /// Required env vars:
    /// - `SESSION_SECRET`: Secret key for signing session tokens
    /// - `ADMIN_PASSWORD`: The single admin credential
    ///
    /// Both must stay stable for the lifetime of outstanding tokens;
    /// rotating the secret invalidates every active session at once.
    pub fn from_env() -> Result<Self, String> {
        let session_secret = std::env::var("SESSION_SECRET")
            .map_err(|_| "SESSION_SECRET must be set".to_string())?;
        if session_secret.is_empty() {
            return Err("SESSION_SECRET cannot be empty".to_string());
        }

        let admin_password = std::env::var("ADMIN_PASSWORD")
            .map_err(|_| "ADMIN_PASSWORD must be set".to_string())?;
        if admin_password.is_empty() {
            return Err("ADMIN_PASSWORD cannot be empty".to_string());
        }

        Ok(Self {
            session_secret,
            admin_password,
            token_duration_days: 7,
            cookie_name: "session".to_string(),
        })
    }
}

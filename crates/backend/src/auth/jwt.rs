//! Session token creation and validation.
//!
//! Tokens are compact JWS strings (HS256) carrying only `iat` and `exp`.
//! Expiry is checked against an explicitly supplied instant with zero leeway,
//! so the `*_at` variants let tests pin the clock.

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};

use super::types::{AuthConfig, Claims};

/// Create a new session token expiring `token_duration_days` from now.
pub fn create_token(config: &AuthConfig) -> Result<String, jsonwebtoken::errors::Error> {
    create_token_at(config, Utc::now())
}

/// Create a session token as if issued at `now`.
pub fn create_token_at(
    config: &AuthConfig,
    now: DateTime<Utc>,
) -> Result<String, jsonwebtoken::errors::Error> {
    let exp = now + Duration::days(config.token_duration_days);

    let claims = Claims {
        iat: now.timestamp(),
        exp: exp.timestamp(),
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(config.session_secret.as_bytes()),
    )
}

/// Validate a session token against the wall clock and return its claims.
pub fn validate_token(
    config: &AuthConfig,
    token: &str,
) -> Result<Claims, jsonwebtoken::errors::Error> {
    validate_token_at(config, token, Utc::now())
}

/// Validate a session token as of the instant `now`.
///
/// Signature and structure are checked by the decoder; expiry is checked here
/// against `now` so validity is a pure function of (token, secret, clock).
/// A token is invalid from the moment `now >= exp`.
pub fn validate_token_at(
    config: &AuthConfig,
    token: &str,
    now: DateTime<Utc>,
) -> Result<Claims, jsonwebtoken::errors::Error> {
    let mut validation = Validation::default();
    validation.validate_exp = false;

    let token_data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(config.session_secret.as_bytes()),
        &validation,
    )?;

    if now.timestamp() >= token_data.claims.exp {
        return Err(jsonwebtoken::errors::ErrorKind::ExpiredSignature.into());
    }

    Ok(token_data.claims)
}

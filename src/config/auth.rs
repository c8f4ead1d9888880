//! Authentication configuration (JWT validation)

use secrecy::{ExposeSecret, Secret};
use serde::Deserialize;

use super::error::ValidationError;

/// JWT validation configuration.
///
/// The identity provider issues HS256 tokens signed with a shared project
/// secret; this backend only verifies them, it never issues tokens.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthConfig {
    /// Shared HS256 signing secret from the identity provider
    pub jwt_secret: Secret<String>,

    /// Expected `aud` claim, if the provider sets one
    pub audience: Option<String>,
}

impl AuthConfig {
    /// Exposes the signing secret for validator construction
    pub fn jwt_secret(&self) -> &str {
        self.jwt_secret.expose_secret()
    }

    /// Validate auth configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.jwt_secret.expose_secret().len() < 32 {
            return Err(ValidationError::JwtSecretTooShort);
        }
        Ok(())
    }
}

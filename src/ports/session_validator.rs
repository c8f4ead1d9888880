//! Session validator port for bearer token validation.

use async_trait::async_trait;

use crate::domain::foundation::{AuthError, AuthenticatedUser};

/// Validates bearer tokens from incoming requests.
///
/// # Contract
///
/// Implementations must:
/// - Return the authenticated user for a valid, unexpired token
/// - Return `AuthError::InvalidToken` or `AuthError::TokenExpired` otherwise
/// - Return `AuthError::ServiceUnavailable` for transient errors
#[async_trait]
pub trait SessionValidator: Send + Sync {
    /// Validate a raw bearer token and extract the user it identifies.
    async fn validate(&self, token: &str) -> Result<AuthenticatedUser, AuthError>;
}

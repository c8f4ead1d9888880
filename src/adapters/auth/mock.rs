//! Mock SessionValidator for tests.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;

use crate::domain::foundation::{AuthError, AuthenticatedUser};
use crate::ports::SessionValidator;

/// Validator with a fixed token-to-user mapping.
///
/// Unknown tokens fail with `InvalidToken`.
#[derive(Default)]
pub struct MockSessionValidator {
    users: RwLock<HashMap<String, AuthenticatedUser>>,
}

impl MockSessionValidator {
    /// Creates an empty validator that rejects every token.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a token as valid for the given user.
    pub fn with_user(self, token: impl Into<String>, user: AuthenticatedUser) -> Self {
        self.users.write().unwrap().insert(token.into(), user);
        self
    }
}

#[async_trait]
impl SessionValidator for MockSessionValidator {
    async fn validate(&self, token: &str) -> Result<AuthenticatedUser, AuthError> {
        self.users
            .read()
            .unwrap()
            .get(token)
            .cloned()
            .ok_or(AuthError::InvalidToken)
    }
}

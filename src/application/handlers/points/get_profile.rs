//! GetProfile query handler.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, UserId};
use crate::domain::points::Profile;
use crate::ports::ProfileRepository;

/// Handler for fetching a user's profile.
///
/// Profiles are provisioned lazily: the first read for an unknown user
/// creates a zero-total row.
pub struct GetProfileHandler {
    profiles: Arc<dyn ProfileRepository>,
}

impl GetProfileHandler {
    pub fn new(profiles: Arc<dyn ProfileRepository>) -> Self {
        Self { profiles }
    }

    pub async fn handle(&self, user_id: &UserId) -> Result<Profile, DomainError> {
        if let Some(profile) = self.profiles.find_by_user(user_id).await? {
            return Ok(profile);
        }

        let profile = Profile::new(user_id.clone());
        self.profiles.save(&profile).await?;
        Ok(profile)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryProfileRepository;

    fn test_user_id() -> UserId {
        UserId::new("user-123").unwrap()
    }

    #[tokio::test]
    async fn first_read_provisions_a_zero_total_profile() {
        let repo = Arc::new(InMemoryProfileRepository::new());
        let handler = GetProfileHandler::new(repo.clone());

        let profile = handler.handle(&test_user_id()).await.unwrap();
        assert_eq!(profile.total_points(), 0);

        // The row was persisted, not just returned.
        assert!(repo.find_by_user(&test_user_id()).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn existing_profile_is_returned_unchanged() {
        let repo = Arc::new(InMemoryProfileRepository::new());
        let mut existing = Profile::new(test_user_id());
        existing.credit(42);
        repo.save(&existing).await.unwrap();

        let handler = GetProfileHandler::new(repo);
        let profile = handler.handle(&test_user_id()).await.unwrap();
        assert_eq!(profile.total_points(), 42);
    }
}

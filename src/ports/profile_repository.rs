//! Profile repository port.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, UserId};
use crate::domain::points::Profile;

/// Persistence port for user profiles.
#[async_trait]
pub trait ProfileRepository: Send + Sync {
    /// Finds a profile by user id.
    async fn find_by_user(&self, user_id: &UserId) -> Result<Option<Profile>, DomainError>;

    /// Inserts a profile row.
    async fn save(&self, profile: &Profile) -> Result<(), DomainError>;

    /// Writes back a profile's cached total.
    ///
    /// This is a plain write of the value read earlier, not an atomic
    /// increment; concurrent exchanges can overwrite each other.
    async fn update_total(&self, profile: &Profile) -> Result<(), DomainError>;
}

//! User profile with the cached point total.

use crate::domain::foundation::{Timestamp, UserId};

/// Per-user aggregate record, primarily the cached point total.
///
/// The total is maintained additively after every exchange. It is a cache of
/// the transaction ledger, not the source of truth; see the ledger tests for
/// how the two can drift under partial failure.
#[derive(Debug, Clone)]
pub struct Profile {
    user_id: UserId,
    total_points: i64,
    updated_at: Timestamp,
}

impl Profile {
    /// Creates an empty profile for a user.
    pub fn new(user_id: UserId) -> Self {
        Self {
            user_id,
            total_points: 0,
            updated_at: Timestamp::now(),
        }
    }

    /// Reconstitutes a profile from persisted state.
    pub fn reconstitute(user_id: UserId, total_points: i64, updated_at: Timestamp) -> Self {
        Self {
            user_id,
            total_points,
            updated_at,
        }
    }

    /// Adds earned points to the cached total.
    pub fn credit(&mut self, points: i32) {
        self.total_points += points as i64;
        self.updated_at = Timestamp::now();
    }

    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    pub fn total_points(&self) -> i64 {
        self.total_points
    }

    pub fn updated_at(&self) -> &Timestamp {
        &self.updated_at
    }
}

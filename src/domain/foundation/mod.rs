//! Foundation types shared across the domain.

mod auth;
mod errors;
mod ids;
mod timestamp;

pub use auth::{AuthError, AuthenticatedUser};
pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::{MessageId, SessionId, TransactionId, UserId};
pub use timestamp::Timestamp;

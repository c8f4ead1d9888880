//! Points domain: awards, ledger transactions, and profiles.

mod award;
mod profile;
mod transaction;

pub use award::{points_for_exchange, NEW_SESSION_POINTS, USER_MESSAGE_POINTS};
pub use profile::Profile;
pub use transaction::{PointTransaction, TransactionKind};

//! Points query handlers.

mod get_profile;
mod list_transactions;

pub use get_profile::GetProfileHandler;
pub use list_transactions::{ListTransactionsHandler, DEFAULT_TRANSACTION_LIMIT};
